use std::path::Path;

use propsplit::{SplitResult, results_to_zip};

use crate::cli::OutputFormat;
use crate::shared::{open_proposal, print_json, print_warning};

pub fn run(
    file: &Path,
    out_dir: &Path,
    zip: Option<&Path>,
    format: &OutputFormat,
    password: Option<&str>,
    strict: bool,
) -> Result<(), i32> {
    if !out_dir.is_dir() {
        eprintln!("Error: output directory not found: {}", out_dir.display());
        return Err(1);
    }

    let splitter = open_proposal(file, password, strict)?;
    let mut warn = print_warning;
    let results = splitter.split(&mut warn).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    for result in &results {
        let path = out_dir.join(&result.name);
        std::fs::write(&path, &result.data).map_err(|e| {
            eprintln!("Error: failed to write {}: {e}", path.display());
            1
        })?;
    }

    if let Some(zip_path) = zip {
        write_archive(zip_path, &results)?;
    }

    match format {
        OutputFormat::Text => {
            write_text(&results);
            Ok(())
        }
        OutputFormat::Json => write_json(&results, out_dir),
    }
}

/// Bundle the results into `zip_path`, using the archive's file stem as the
/// directory inside it.
fn write_archive(zip_path: &Path, results: &[SplitResult]) -> Result<(), i32> {
    let outer_dir = zip_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bytes = results_to_zip(&outer_dir, results).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    std::fs::write(zip_path, bytes).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", zip_path.display());
        1
    })
}

fn write_text(results: &[SplitResult]) {
    for result in results {
        println!("{}: {}", result.name, result.page_span());
    }
}

fn write_json(results: &[SplitResult], out_dir: &Path) -> Result<(), i32> {
    let json_values: Vec<serde_json::Value> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "name": r.name,
                "start_page": r.start_page,
                "end_page": r.end_page,
                "path": out_dir.join(&r.name).to_string_lossy(),
            })
        })
        .collect();
    print_json(&serde_json::Value::Array(json_values))
}
