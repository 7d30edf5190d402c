//! Generate EQUATIONS.md from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations [output_path]
//! ```
//!
//! Without an argument the file is written to
//! `vessel_core/src/equations/EQUATIONS.md` (relative to the workspace root).

use std::fs;
use std::path::PathBuf;

use vessel_core::equations::{generate_equations_markdown, registry::ALL_EQUATIONS};
use vessel_core::CalcError;

const DEFAULT_OUTPUT: &str = "vessel_core/src/equations/EQUATIONS.md";

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    println!("Generating {} ({} equations)...", output_path.display(), ALL_EQUATIONS.len());

    let markdown = generate_equations_markdown();

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            let error = CalcError::file_error("write", output_path.display().to_string(), e.to_string());
            eprintln!("Error: {}", error);
            if let Ok(json) = serde_json::to_string_pretty(&error) {
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
