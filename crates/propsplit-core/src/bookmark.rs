//! PDF bookmark / outline types and outline partitioning.
//!
//! Provides [`Bookmark`] for representing a node of the document outline tree,
//! together with [`filter_to_range`] (prune and clip a tree to a page window)
//! and [`shift_pages`] (renumber a pruned tree relative to a new first page).

/// An RGB outline entry color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookmarkColor {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

/// A single entry in the PDF document outline.
///
/// Page numbers are 1-based and inclusive. A bookmark covers
/// `page_from..=page_thru`; its children are not required to stay inside
/// that span. There is no parent back-reference: ancestry is recovered by
/// walking the tree from the root (see [`walk`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bookmark {
    /// The bookmark title text.
    pub title: String,
    /// First page covered by this bookmark (1-based).
    pub page_from: usize,
    /// Last page covered by this bookmark (1-based, inclusive).
    pub page_thru: usize,
    /// Nested outline entries, in document order.
    pub children: Vec<Bookmark>,
    /// Title is rendered bold.
    pub bold: bool,
    /// Title is rendered italic.
    pub italic: bool,
    /// Title color, if set.
    pub color: Option<BookmarkColor>,
}

impl Bookmark {
    /// Create an unstyled leaf bookmark.
    pub fn new(title: impl Into<String>, page_from: usize, page_thru: usize) -> Self {
        Self {
            title: title.into(),
            page_from,
            page_thru,
            children: Vec::new(),
            bold: false,
            italic: false,
            color: None,
        }
    }

    /// Set the children, returning the modified bookmark.
    pub fn with_children(mut self, children: Vec<Bookmark>) -> Self {
        self.children = children;
        self
    }

    /// Whether this bookmark's span intersects `start..=end`.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.page_thru >= start && self.page_from <= end
    }
}

/// Prune and clip `bookmarks` to the page window `start..=end`.
///
/// Returns a new, independently owned tree. A bookmark survives iff its own
/// span overlaps the window; survivors are clipped to the window and their
/// children are filtered against the same window (not the parent's clipped
/// span). Non-overlapping bookmarks are dropped together with their subtree.
/// Input order is preserved.
///
/// `end` must be a concrete page number; open-ended ranges are resolved by
/// the caller.
pub fn filter_to_range(bookmarks: &[Bookmark], start: usize, end: usize) -> Vec<Bookmark> {
    bookmarks
        .iter()
        .filter(|bm| bm.overlaps(start, end))
        .map(|bm| Bookmark {
            title: bm.title.clone(),
            page_from: bm.page_from.max(start),
            page_thru: bm.page_thru.min(end),
            children: filter_to_range(&bm.children, start, end),
            bold: bm.bold,
            italic: bm.italic,
            color: bm.color,
        })
        .collect()
}

/// Subtract `offset` from every page number in the tree, in place.
///
/// Used with `offset = start - 1` so page `start` of the source becomes page
/// 1 of the extracted document. Only apply this to a tree obtained from
/// [`filter_to_range`]; page numbers below `offset` saturate at zero.
pub fn shift_pages(bookmarks: &mut [Bookmark], offset: usize) {
    for bm in bookmarks {
        bm.page_from = bm.page_from.saturating_sub(offset);
        bm.page_thru = bm.page_thru.saturating_sub(offset);
        shift_pages(&mut bm.children, offset);
    }
}

/// Build the outline of an extracted section: filter to `start..=end`, then
/// renumber so `start` becomes page 1.
pub fn section_outline(bookmarks: &[Bookmark], start: usize, end: usize) -> Vec<Bookmark> {
    let mut outline = filter_to_range(bookmarks, start, end);
    shift_pages(&mut outline, start.saturating_sub(1));
    outline
}

/// Depth-first, pre-order walk over a bookmark tree.
///
/// Yields `(depth, bookmark)` pairs; top-level entries have depth 0.
pub fn walk(bookmarks: &[Bookmark]) -> Walk<'_> {
    Walk {
        stack: bookmarks.iter().rev().map(|bm| (0, bm)).collect(),
    }
}

/// Iterator returned by [`walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Bookmark)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Bookmark);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, bm) = self.stack.pop()?;
        self.stack
            .extend(bm.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, bm))
    }
}
