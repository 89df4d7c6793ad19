//! propsplit-core: Backend-independent data types and algorithms.
//!
//! This crate provides the outline model ([`Bookmark`]), page ranges, the
//! fixed proposal section table with its locator, and the outline filtering
//! and renumbering used to give each extracted section its own bookmarks.
//! It never touches PDF bytes; that is the job of propsplit-parse.

pub mod bookmark;
pub mod error;
pub mod page_range;
pub mod result;
pub mod section;

pub use bookmark::{
    Bookmark, BookmarkColor, Walk, filter_to_range, section_outline, shift_pages, walk,
};
pub use error::{
    DiscardWarnings, SplitError, SplitOptions, SplitWarning, SplitWarningCode, WarningSink,
};
pub use page_range::PageRange;
pub use result::SplitResult;
pub use section::{
    Recognizer, SectionKind, SectionPlan, has_section, plan_sections, resolve_range,
};
