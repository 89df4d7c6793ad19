use std::path::Path;

use propsplit::{SplitOptions, SplitWarning, Splitter};

/// Open a proposal with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or cannot be parsed as a valid PDF.
pub fn open_proposal(
    file: &Path,
    password: Option<&str>,
    strict: bool,
) -> Result<Splitter, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let options = SplitOptions {
        password: password.map(|p| p.as_bytes().to_vec()),
        strict_mode: strict,
        ..SplitOptions::default()
    };

    Splitter::open_file(file, options).map_err(|e| {
        eprintln!("Error: failed to open PDF: {e}");
        1
    })
}

/// Print a non-fatal warning to stderr.
pub fn print_warning(warning: SplitWarning) {
    eprintln!("Warning: {warning}");
}

/// Serialize `value` and print it on one line.
pub fn print_json(value: &serde_json::Value) -> Result<(), i32> {
    let json_str = serde_json::to_string(value).map_err(|e| {
        eprintln!("Error: failed to serialize output: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}
