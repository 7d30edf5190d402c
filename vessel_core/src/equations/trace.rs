//! # Derivation Traces
//!
//! A [`Derivation`] is the worked form of one formula evaluation: the
//! inputs it read, the named intermediate quantities it computed, the
//! expression with numbers substituted, and the result. Every formula in
//! this crate builds its derivation while computing, so the plain
//! `f64`-returning functions and their `*_derivation` twins always agree.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::equations::thin_wall::thin_hoop_stress_derivation;
//! use vessel_core::materials::Material;
//! use vessel_core::vessel::Vessel;
//!
//! let matl = Material::elastic("test", 10.0e6, 0.3);
//! let vessel = Vessel::new("v", &matl, 10.0, 5.0, 0.1).unwrap();
//!
//! let hoop = thin_hoop_stress_derivation(&vessel, 100.0);
//! assert_eq!(hoop.quantity("r"), Some(2.5));
//! println!("{}", hoop.to_plain());
//! ```

use serde::{Deserialize, Serialize};

use super::registry::Equation;

/// A named value with units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Plain-text symbol (e.g., "r", "sigma_h")
    pub symbol: String,
    /// LaTeX symbol (e.g., "r", "\sigma_h")
    pub latex: String,
    /// Numeric value
    pub value: f64,
    /// Units (e.g., "in", "psi", "" for dimensionless)
    pub units: String,
}

impl Quantity {
    /// Quantity whose LaTeX symbol is the same as its plain symbol
    pub fn new(symbol: impl Into<String>, value: f64, units: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Quantity {
            latex: symbol.clone(),
            symbol,
            value,
            units: units.into(),
        }
    }

    /// Override the LaTeX symbol
    pub fn with_latex(mut self, latex: impl Into<String>) -> Self {
        self.latex = latex.into();
        self
    }

    fn plain_line(&self) -> String {
        if self.units.is_empty() {
            format!("{} = {}", self.symbol, format_value(self.value))
        } else {
            format!("{} = {} {}", self.symbol, format_value(self.value), self.units)
        }
    }

    fn latex_term(&self) -> String {
        if self.units.is_empty() {
            format!("{} = {}", self.latex, format_value(self.value))
        } else {
            format!(r"{} = {}\ \mathrm{{{}}}", self.latex, format_value(self.value), self.units)
        }
    }
}

/// Worked steps of one formula evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Derivation {
    /// Registry key of the formula that was evaluated
    pub equation: Equation,
    /// Values read from the vessel, material and call arguments
    pub inputs: Vec<Quantity>,
    /// Named intermediate quantities, in evaluation order
    pub intermediates: Vec<Quantity>,
    /// The formula with numbers substituted
    pub substitution: String,
    /// Final value
    pub result: Quantity,
}

impl Derivation {
    /// Start a derivation for `equation`
    pub(crate) fn begin(equation: Equation) -> Self {
        Derivation {
            equation,
            inputs: Vec::new(),
            intermediates: Vec::new(),
            substitution: String::new(),
            result: Quantity::new("", f64::NAN, ""),
        }
    }

    /// Record an input value
    pub(crate) fn input(mut self, quantity: Quantity) -> Self {
        self.inputs.push(quantity);
        self
    }

    /// Record an intermediate value
    pub(crate) fn step(mut self, quantity: Quantity) -> Self {
        self.intermediates.push(quantity);
        self
    }

    /// Close the derivation with its substituted expression and result
    pub(crate) fn finish(mut self, substitution: String, result: Quantity) -> Self {
        self.substitution = substitution;
        self.result = result;
        self
    }

    /// The computed value
    pub fn value(&self) -> f64 {
        self.result.value
    }

    /// Look up an input, intermediate or the result by plain symbol.
    pub fn quantity(&self, symbol: &str) -> Option<f64> {
        self.inputs
            .iter()
            .chain(self.intermediates.iter())
            .chain(std::iter::once(&self.result))
            .find(|q| q.symbol == symbol)
            .map(|q| q.value)
    }

    /// Plain-text worked calculation, one step per line.
    pub fn to_plain(&self) -> String {
        let meta = self.equation.metadata();
        let mut out = String::new();

        out.push_str(&format!("{} ({})\n", meta.name, meta.reference.citation()));
        out.push_str(&format!("  {}\n", meta.formula_plain));
        for q in &self.inputs {
            out.push_str(&format!("  {}\n", q.plain_line()));
        }
        for q in &self.intermediates {
            out.push_str(&format!("  {}\n", q.plain_line()));
        }
        if !self.substitution.is_empty() {
            out.push_str(&format!("  {}\n", self.substitution));
        }
        out.push_str(&format!("  {}\n", self.result.plain_line()));
        out
    }

    /// LaTeX source for the worked calculation (an `aligned`-free block of
    /// `\\`-separated lines suitable for a display-math environment).
    pub fn to_latex(&self) -> String {
        let meta = self.equation.metadata();
        let mut lines = vec![meta.formula_latex.to_string()];

        let given: Vec<String> = self.inputs.iter().map(Quantity::latex_term).collect();
        if !given.is_empty() {
            lines.push(given.join(r",\quad "));
        }
        lines.extend(self.intermediates.iter().map(Quantity::latex_term));
        lines.push(self.result.latex_term());

        lines.join(" \\\\\n")
    }
}

/// Format a value for display: fixed point for ordinary magnitudes,
/// scientific otherwise.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-3..1e7).contains(&magnitude) {
        let fixed = format!("{:.6}", value);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        trimmed.to_string()
    } else {
        format!("{:.6e}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Derivation {
        Derivation::begin(Equation::ThinHoopStress)
            .input(Quantity::new("p", 100.0, "psi"))
            .input(Quantity::new("t", 0.1, "in"))
            .step(Quantity::new("r", 2.5, "in"))
            .finish(
                "sigma_h = 100 * 2.5 / 0.1".to_string(),
                Quantity::new("sigma_h", 2500.0, "psi").with_latex(r"\sigma_h"),
            )
    }

    #[test]
    fn test_quantity_lookup() {
        let d = sample();
        assert_eq!(d.quantity("p"), Some(100.0));
        assert_eq!(d.quantity("r"), Some(2.5));
        assert_eq!(d.quantity("sigma_h"), Some(2500.0));
        assert_eq!(d.quantity("E"), None);
        assert_eq!(d.value(), 2500.0);
    }

    #[test]
    fn test_to_plain() {
        let text = sample().to_plain();
        assert!(text.contains("Roark's"));
        assert!(text.contains("r = 2.5 in"));
        assert!(text.contains("sigma_h = 100 * 2.5 / 0.1"));
        assert!(text.trim_end().ends_with("sigma_h = 2500 psi"));
    }

    #[test]
    fn test_to_latex() {
        let tex = sample().to_latex();
        assert!(tex.contains(r"\sigma_h = 2500\ \mathrm{psi}"));
        assert!(tex.contains(r"p = 100\ \mathrm{psi},\quad t = 0.1\ \mathrm{in}"));
        assert_eq!(tex.matches("\\\\\n").count(), 3);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(2500.0), "2500");
        assert_eq!(format_value(-1275.510204081), "-1275.510204");
        assert_eq!(format_value(0.00125), "0.00125");
        assert_eq!(format_value(0.0005), "5.000000e-4");
    }

    #[test]
    fn test_serialization() {
        let d = sample();
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"equation\":\"ThinHoopStress\""));
        let roundtrip: Derivation = serde_json::from_str(&json).unwrap();
        assert_eq!(d, roundtrip);
    }
}
