use std::path::Path;

use propsplit::SectionPlan;

use crate::cli::OutputFormat;
use crate::shared::{open_proposal, print_json};

pub fn run(file: &Path, format: &OutputFormat, password: Option<&str>) -> Result<(), i32> {
    let splitter = open_proposal(file, password, false)?;
    let plan = splitter.plan();
    let page_count = splitter.page_count();

    match format {
        OutputFormat::Text => {
            write_text(&plan, page_count);
            Ok(())
        }
        OutputFormat::Json => write_json(&plan, page_count),
    }
}

fn source(entry: &SectionPlan) -> &'static str {
    if entry.from_bookmark {
        "bookmark"
    } else {
        "default"
    }
}

/// Whether the resolved range lies inside a document of `page_count` pages.
fn fits(entry: &SectionPlan, page_count: usize) -> bool {
    match (entry.range, entry.end_page) {
        (Some(range), Some(end)) => range.start >= 1 && range.start <= end && end <= page_count,
        _ => false,
    }
}

fn write_text(plan: &[SectionPlan], page_count: usize) {
    println!("section\tpages\tsource\tstatus");

    for entry in plan {
        let pages = match (entry.range, entry.end_page) {
            (Some(range), Some(end)) => format!("{}-{end}", range.start),
            _ => "-".to_string(),
        };
        let status = if !entry.included {
            "skipped"
        } else if fits(entry, page_count) {
            "extract"
        } else {
            "out of range"
        };
        println!(
            "{}\t{}\t{}\t{}",
            entry.kind.name(),
            pages,
            source(entry),
            status
        );
    }
}

fn write_json(plan: &[SectionPlan], page_count: usize) -> Result<(), i32> {
    let json_values: Vec<serde_json::Value> = plan
        .iter()
        .map(|entry| {
            let mut obj = serde_json::json!({
                "section": entry.kind.name(),
                "file": entry.kind.file_name(),
                "source": source(entry),
                "included": entry.included,
                "fits": fits(entry, page_count),
            });
            if let (Some(range), Some(end)) = (entry.range, entry.end_page) {
                obj["start_page"] = serde_json::json!(range.start);
                obj["end_page"] = serde_json::json!(end);
            }
            obj
        })
        .collect();
    print_json(&serde_json::Value::Array(json_values))
}
