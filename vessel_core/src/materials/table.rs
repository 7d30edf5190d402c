//! Material table loaded from CSV.
//!
//! The table is an ordinary value owned by the caller: load it once, keep
//! it for as long as you need it, pass `&MaterialTable` to whatever needs a
//! lookup. There is no global cache.
//!
//! ## CSV format
//!
//! One header row (skipped), then one material per line with the columns of
//! [`MATERIAL_COLUMNS`](super::MATERIAL_COLUMNS). Fields are plain
//! comma-separated values; quoting is not supported. Blank lines are
//! ignored.

use std::collections::HashMap;
use std::path::Path;

use super::Material;
use crate::errors::{CalcError, CalcResult};

/// Selector value that matches every material type.
pub const ALL_TYPES: &str = "All";

/// Materials in load order, indexed by label.
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    /// Materials in the order they were loaded
    materials: Vec<Material>,
    /// Label -> position in `materials`
    by_label: HashMap<String, usize>,
}

impl MaterialTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from already-typed records.
    pub fn from_materials(materials: impl IntoIterator<Item = Material>) -> Self {
        let mut table = Self::new();
        for matl in materials {
            table.insert(matl);
        }
        table
    }

    /// Parse CSV text. The first line is the header and is skipped.
    pub fn from_csv_str(text: &str) -> CalcResult<Self> {
        let mut table = Self::new();

        // header is line 1
        for (idx, line) in text.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            table.insert(Material::from_row(&fields, idx + 1)?);
        }

        Ok(table)
    }

    /// Load a CSV file from disk.
    pub fn load_from_csv(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read", path.display().to_string(), format!("Failed to read CSV: {}", e))
        })?;
        Self::from_csv_str(&text)
    }

    /// Insert a material. A later row with the same label replaces the
    /// earlier one but keeps its position.
    pub fn insert(&mut self, matl: Material) {
        match self.by_label.get(&matl.label) {
            Some(&idx) => self.materials[idx] = matl,
            None => {
                self.by_label.insert(matl.label.clone(), self.materials.len());
                self.materials.push(matl);
            }
        }
    }

    /// Look up a material by its label (exact match).
    pub fn lookup(&self, label: &str) -> CalcResult<&Material> {
        self.by_label
            .get(label)
            .map(|&idx| &self.materials[idx])
            .ok_or_else(|| CalcError::material_not_found(label))
    }

    /// Labels of all materials of the given type, in load order.
    ///
    /// `"all"` or `"All"` selects every material.
    pub fn labels_of_type(&self, material_type: &str) -> Vec<&str> {
        let select_all = material_type == ALL_TYPES || material_type == "all";
        self.materials
            .iter()
            .filter(|m| select_all || m.material_type == material_type)
            .map(|m| m.label.as_str())
            .collect()
    }

    /// `"All"` followed by each distinct material type, in first-seen order.
    pub fn type_index(&self) -> Vec<&str> {
        let mut index = vec![ALL_TYPES];
        for matl in &self.materials {
            if !index.contains(&matl.material_type.as_str()) {
                index.push(&matl.material_type);
            }
        }
        index
    }

    /// Each distinct category, in first-seen order.
    pub fn category_index(&self) -> Vec<&str> {
        let mut index: Vec<&str> = Vec::new();
        for matl in &self.materials {
            if !index.contains(&matl.category.as_str()) {
                index.push(&matl.category);
            }
        }
        index
    }

    /// Iterate over materials in load order
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    /// Number of materials in the table
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

// ============================================================================
// Built-in Materials (for use without a CSV file)
// ============================================================================

const BUILTIN_ROWS: [[&str; 14]; 5] = [
    ["6061-T6", "Aluminum", "metal", "UNS", "A96061", "3.3211", "0.098", "35000", "42000", "10000000", "3800000", "0.33", "12", "0"],
    ["7075-T6", "Aluminum", "metal", "UNS", "A97075", "3.4365", "0.101", "73000", "83000", "10400000", "3900000", "0.33", "11", "0"],
    ["4140 Q&T", "Steel", "metal", "UNS", "G41400", "1.7225", "0.284", "95000", "148000", "29700000", "11600000", "0.29", "17", "48"],
    ["316L", "Stainless Steel", "metal", "UNS", "S31603", "1.4404", "0.289", "25000", "70000", "28000000", "11200000", "0.30", "40", "50"],
    ["Ti-6Al-4V", "Titanium", "metal", "UNS", "R56400", "3.7165", "0.160", "128000", "138000", "16500000", "6400000", "0.342", "14", "30"],
];

/// A small table of common vessel alloys.
///
/// Provides typical handbook values for demos and tests without requiring
/// a CSV file.
pub fn builtin_materials() -> MaterialTable {
    let mut table = MaterialTable::new();
    for (idx, row) in BUILTIN_ROWS.iter().enumerate() {
        if let Ok(matl) = Material::from_row(row, idx + 2) {
            table.insert(matl);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "label,type,category,spec,spec_number,DIN_num,density,fy,fu,E,G,v,elongation,area_reduc";

    fn sample_table() -> MaterialTable {
        let row = |label: &str, material_type: &str, category: &str| Material {
            label: label.to_string(),
            material_type: material_type.to_string(),
            category: category.to_string(),
            ..Default::default()
        };
        MaterialTable::from_materials(vec![
            row("test_6061", "test_Aluminum", "test_metal_1"),
            row("test_7075", "test_Aluminum", "test_metal_1"),
            row("test_4140", "test_Steel", "test_metal_2"),
            row("test_316", "test_Stainless Steel", "test_metal_3"),
            row("test_316", "test_Stainless Steel", "test_metal_4"),
        ])
    }

    #[test]
    fn test_from_csv_str_skips_header() {
        let csv = format!(
            "{}\n6061-t6,Aluminum,metal,UNS,A96061,1,0.098,35000,42000,10000000,3800000,0.33,2,3\n\n\
             316L,Stainless Steel,metal,UNS,S31603,1.4404,0.289,25000,70000,28000000,11200000,0.30,40,50\n",
            HEADER
        );
        let table = MaterialTable::from_csv_str(&csv).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("316L").unwrap().e_psi, 28_000_000.0);
    }

    #[test]
    fn test_from_csv_str_reports_line() {
        let csv = format!(
            "{}\n6061-t6,Aluminum,metal,UNS,A96061,1,0.098,35000,42000,10000000,3800000,0.33,2,3\n\
             bad,Steel,metal,UNS,X,1,0.28,abc,1,1,1,0.3,1,1\n",
            HEADER
        );
        match MaterialTable::from_csv_str(&csv).unwrap_err() {
            CalcError::ParseError { line, column, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, "fy");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_header_only_is_empty() {
        let table = MaterialTable::from_csv_str(HEADER).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = MaterialTable::load_from_csv("/nonexistent/material_table.csv").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_labels_of_type() {
        let table = sample_table();
        let everything = vec!["test_6061", "test_7075", "test_4140", "test_316"];
        assert_eq!(table.labels_of_type("all"), everything);
        assert_eq!(table.labels_of_type("All"), everything);
        assert_eq!(table.labels_of_type("test_Aluminum"), vec!["test_6061", "test_7075"]);
        assert_eq!(table.labels_of_type("test_Steel"), vec!["test_4140"]);
        assert!(table.labels_of_type("Unobtainium").is_empty());
    }

    #[test]
    fn test_type_index() {
        let table = sample_table();
        assert_eq!(
            table.type_index(),
            vec!["All", "test_Aluminum", "test_Steel", "test_Stainless Steel"]
        );
    }

    #[test]
    fn test_category_index() {
        let table = sample_table();
        // duplicate label replaced in place, so test_metal_3 is gone
        assert_eq!(
            table.category_index(),
            vec!["test_metal_1", "test_metal_2", "test_metal_4"]
        );
    }

    #[test]
    fn test_lookup_not_found() {
        let table = sample_table();
        assert!(matches!(
            table.lookup("test_2024"),
            Err(CalcError::MaterialNotFound { .. })
        ));
    }

    #[test]
    fn test_every_builtin_row_parses() {
        for (idx, row) in BUILTIN_ROWS.iter().enumerate() {
            let matl = Material::from_row(row, idx + 2)
                .unwrap_or_else(|e| panic!("built-in row {} ({}) rejected: {}", idx, row[0], e));
            assert_eq!(matl.label, row[0]);
        }
    }

    #[test]
    fn test_builtin_materials() {
        let table = builtin_materials();
        assert_eq!(table.len(), BUILTIN_ROWS.len());

        let ti = table.lookup("Ti-6Al-4V").unwrap();
        assert_eq!(ti.fy_psi, 128_000.0);
        assert!(ti.poisson_ratio > 0.0 && ti.poisson_ratio < 0.5);

        assert!(table.iter().all(|m| m.e_psi > 0.0 && m.fy_psi > 0.0));
    }
}
