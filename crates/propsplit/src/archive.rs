//! Zip packaging of split results.

use std::io::{Cursor, Seek, Write};

use propsplit_core::{SplitError, SplitResult};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Write every result into a zip archive as `<outer_dir>/<name>`.
///
/// An empty `outer_dir` puts the entries at the archive root. Returns the
/// writer once the central directory has been written.
pub fn write_zip<W: Write + Seek>(
    outer_dir: &str,
    results: &[SplitResult],
    writer: W,
) -> Result<W, SplitError> {
    let mut zip = ZipWriter::new(writer);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let outer_dir = outer_dir.trim_matches('/');
    for result in results {
        let entry = if outer_dir.is_empty() {
            result.name.clone()
        } else {
            format!("{outer_dir}/{}", result.name)
        };
        zip.start_file(entry, deflated).map_err(zip_error)?;
        zip.write_all(&result.data)?;
    }

    zip.finish().map_err(zip_error)
}

/// Package results into an in-memory zip archive.
pub fn results_to_zip(outer_dir: &str, results: &[SplitResult]) -> Result<Vec<u8>, SplitError> {
    let cursor = write_zip(outer_dir, results, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

fn zip_error(err: zip::result::ZipError) -> SplitError {
    SplitError::IoError(format!("zip: {err}"))
}
