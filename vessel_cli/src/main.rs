//! # Depthrate CLI Application
//!
//! Prompts for a material and vessel geometry, rates the vessel to a design
//! depth and prints the worked calculation.
//!
//! ```bash
//! vessel_cli [material_table.csv]
//! ```
//!
//! Without a CSV path the built-in alloy table is used.

use std::io::{self, BufRead, Write};

use vessel_core::calculations::analysis::{calculate, AnalysisInput, AnalysisResult};
use vessel_core::calculations::sweep::StressSeries;
use vessel_core::materials::{builtin_materials, MaterialTable};
use vessel_core::units::{MPa, Psi};
use vessel_core::{CalcError, CalcResult};

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    loop {
        match read_line(prompt) {
            None => return default,
            Some(s) => match s.parse() {
                Ok(n) => return n,
                Err(_) => println!("'{}' is not a whole number.", s),
            },
        }
    }
}

fn prompt_string(prompt: &str, default: &str) -> String {
    read_line(prompt).unwrap_or_else(|| default.to_string())
}

fn load_table() -> CalcResult<MaterialTable> {
    match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading materials from {}...", path);
            MaterialTable::load_from_csv(&path)
        }
        None => {
            println!("Using built-in material table.");
            Ok(builtin_materials())
        }
    }
}

fn choose_material(table: &MaterialTable) -> String {
    let types = table.type_index();
    println!();
    println!("Material types: {}", types.join(", "));
    let material_type = prompt_string("Material type [All]: ", "All");

    let labels = table.labels_of_type(&material_type);
    if labels.is_empty() {
        println!("No materials of type '{}'.", material_type);
    } else {
        println!("Materials: {}", labels.join(", "));
    }
    let default = labels.first().copied().unwrap_or_default();
    prompt_string(&format!("Material [{}]: ", default), default)
}

fn main() {
    println!("Depthrate CLI - External Pressure Vessel Calculator");
    println!("===================================================");
    println!();

    if let Err(e) = run() {
        report_error(&e);
        std::process::exit(1);
    }
}

fn run() -> CalcResult<()> {
    let table = load_table()?;
    println!("{} materials loaded.", table.len());

    let material = choose_material(&table);

    let mut input = AnalysisInput::new(
        "CLI-Vessel",
        material,
        prompt_f64("Enter length (in) [10.0]: ", 10.0),
        prompt_f64("Enter outside diameter (in) [5.0]: ", 5.0),
        prompt_f64("Enter wall thickness (in) [0.1]: ", 0.1),
        prompt_f64("Enter design depth (ft) [300.0]: ", 300.0),
    );
    input.wall_percent = prompt_f64("Thick-wall position, 0=inner 100=outer (%) [0.0]: ", 0.0);
    input.buckling_mode = prompt_u32("Buckling mode n [1]: ", 1);

    println!();
    println!("Calculating...");
    println!();

    let result = calculate(&input, &table)?;
    print_report(&input, &result);

    println!();
    println!("JSON Output (for API use):");
    let json = serde_json::to_string_pretty(&result).map_err(CalcError::from)?;
    println!("{}", json);

    Ok(())
}

fn print_report(input: &AnalysisInput, result: &AnalysisResult) {
    println!("═══════════════════════════════════════");
    println!("  VESSEL RATING RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Material: {} (Fy = {:.0} psi, E = {:.0} psi, v = {})",
        result.material.label,
        result.material.fy_psi,
        result.material.e_psi,
        result.material.poisson_ratio
    );
    println!("  Geometry: L = {}\", D = {}\", t = {}\"",
        input.length_in,
        input.diameter_in,
        input.wall_thickness_in
    );
    println!("  R/t = {:.2} ({}), L/R = {:.2}",
        result.thickness_ratio,
        result.wall_class,
        result.length_ratio
    );
    println!("  Design depth: {:.0} ft ({:.2} psi)",
        result.rated_depth_ft,
        result.rated_pressure.value()
    );
    println!();

    println!("Worked Calculations:");
    for trace in result.derivations() {
        println!();
        for line in trace.to_plain().lines() {
            println!("  {}", line);
        }
    }
    println!();

    println!("Depth Sweep:");
    print_series(&result.hoop_series);
    print_series(&result.longitudinal_series);
    println!();

    println!("Checks:");
    println!("  Hoop yield:         {:.2} ({:.0}/{:.0} psi at {:.0} ft) {}",
        result.hoop_unity,
        result.hoop_unity * result.material.fy_psi,
        result.material.fy_psi,
        result.rated_depth_ft,
        status_icon(!result.hoop_exceeds_yield())
    );
    println!("  Longitudinal yield: {:.2} ({:.0}/{:.0} psi at {:.0} ft) {}",
        result.longitudinal_unity,
        result.longitudinal_unity * result.material.fy_psi,
        result.material.fy_psi,
        result.rated_depth_ft,
        status_icon(!result.longitudinal_exceeds_yield())
    );
    if let Some(buckling) = &result.buckling {
        println!("  Buckling (n={}):     {:.2} ({:.1}/{:.1} psi) {}",
            input.buckling_mode,
            result.buckling_unity,
            result.rated_pressure.value(),
            buckling.value(),
            status_icon(!result.buckles())
        );
    } else {
        println!("  Buckling:           n/a ({})", result.wall_class);
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {} (governs: {})",
        if result.passes() { "PASS" } else { "FAIL" },
        result.governing_condition()
    );
    println!("═══════════════════════════════════════");
    println!();
    print!("{}", result.equations.generate_appendix_markdown());
}

fn print_series(series: &StressSeries) {
    let first = series.depths_ft.first().copied().unwrap_or_default();
    let last = series.depths_ft.last().copied().unwrap_or_default();
    println!("  {:<12} {} samples, {:.0}-{:.0} ft",
        series.kind.display_name(),
        series.len(),
        first,
        last
    );
    if let Some(peak) = series.peak_magnitude() {
        let stress = Psi(peak.value_psi);
        println!("  {:<12} peak {:.1} psi ({:.2} MPa) at {:.0} ft ({:.2} psi)",
            "",
            stress.value(),
            MPa::from(stress).value(),
            peak.depth_ft,
            peak.pressure_psi
        );
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
