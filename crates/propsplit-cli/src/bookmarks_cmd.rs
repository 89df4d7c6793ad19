use std::path::Path;

use propsplit::{Bookmark, walk};

use crate::cli::OutputFormat;
use crate::shared::open_proposal;

pub fn run(file: &Path, format: &OutputFormat, password: Option<&str>) -> Result<(), i32> {
    let splitter = open_proposal(file, password, false)?;
    let bookmarks = splitter.bookmarks();

    match format {
        OutputFormat::Text => {
            write_text(bookmarks);
            Ok(())
        }
        OutputFormat::Json => write_json(bookmarks),
    }
}

fn write_text(bookmarks: &[Bookmark]) {
    if bookmarks.is_empty() {
        println!("No bookmarks found.");
        return;
    }

    println!("level\tpages\ttitle");

    for (level, bm) in walk(bookmarks) {
        let indent = "  ".repeat(level);
        println!(
            "{}\t{}-{}\t{}{}",
            level, bm.page_from, bm.page_thru, indent, bm.title
        );
    }
}

fn write_json(bookmarks: &[Bookmark]) -> Result<(), i32> {
    let json_str = serde_json::to_string(bookmarks).map_err(|e| {
        eprintln!("Error: failed to serialize bookmarks: {e}");
        1
    })?;
    println!("{json_str}");

    Ok(())
}
