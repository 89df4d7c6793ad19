//! lopdf-based PDF backend.
//!
//! Implements [`PdfBackend`] using the [lopdf](https://crates.io/crates/lopdf)
//! crate: the `/Outlines` tree is read into [`Bookmark`]s with page spans,
//! page ranges are cut out of a cloned document, and section outlines are
//! written back as a fresh `/Outlines` tree.

use std::collections::{HashMap, HashSet};

use lopdf::{Dictionary, Object, ObjectId, StringFormat, dictionary};
use propsplit_core::{Bookmark, BookmarkColor, SplitError};

use crate::backend::PdfBackend;
use crate::error::BackendError;

/// Nesting limit when walking the outline; guards against reference cycles.
const MAX_OUTLINE_DEPTH: usize = 64;
/// Safety limit on siblings at one outline level.
const MAX_SIBLINGS: usize = 10_000;
/// Limit on chained named-destination lookups.
const MAX_DEST_INDIRECTION: usize = 8;

/// A parsed PDF document backed by lopdf.
pub struct LopdfDocument {
    /// The underlying lopdf document.
    inner: lopdf::Document,
    /// Cached ordered list of page ObjectIds (indexed by 0-based page number).
    page_ids: Vec<ObjectId>,
}

impl LopdfDocument {
    fn new(inner: lopdf::Document) -> Self {
        // get_pages returns BTreeMap<u32, ObjectId> with 1-based keys
        let page_ids = inner.get_pages().into_values().collect();
        Self { inner, page_ids }
    }

    /// Access the underlying lopdf document.
    pub fn inner(&self) -> &lopdf::Document {
        &self.inner
    }
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.page_ids.len())
            .finish_non_exhaustive()
    }
}

/// The lopdf-based PDF backend.
///
/// # Example
///
/// ```ignore
/// use propsplit_parse::{LopdfBackend, PdfBackend};
///
/// let doc = LopdfBackend::open(pdf_bytes)?;
/// let outline = LopdfBackend::outline(&doc)?;
/// let summary = LopdfBackend::extract_pages(&doc, 1, 1)?;
/// ```
pub struct LopdfBackend;

impl PdfBackend for LopdfBackend {
    type Document = LopdfDocument;
    type Error = BackendError;

    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error> {
        let inner = lopdf::Document::load_mem(bytes)
            .map_err(|e| BackendError::Parse(format!("failed to parse PDF: {e}")))?;

        // Reject encrypted PDFs when no password is provided
        if inner.is_encrypted() {
            return Err(BackendError::Core(SplitError::PasswordRequired));
        }

        Ok(LopdfDocument::new(inner))
    }

    fn open_with_password(bytes: &[u8], password: &[u8]) -> Result<Self::Document, Self::Error> {
        let password = std::str::from_utf8(password)
            .map_err(|_| BackendError::Core(SplitError::InvalidPassword))?;

        // Decryption has to happen while loading: a document loaded without
        // the password keeps only the encryption dictionary.
        let inner = lopdf::Document::load_mem_with_password(bytes, password).map_err(|e| match e {
            lopdf::Error::InvalidPassword
            | lopdf::Error::Decryption(lopdf::encryption::DecryptionError::IncorrectPassword) => {
                BackendError::Core(SplitError::InvalidPassword)
            }
            e => BackendError::Parse(format!("failed to parse PDF: {e}")),
        })?;

        if inner.is_encrypted() {
            return Err(BackendError::Core(SplitError::InvalidPassword));
        }

        Ok(LopdfDocument::new(inner))
    }

    fn page_count(doc: &Self::Document) -> usize {
        doc.page_ids.len()
    }

    fn outline(doc: &Self::Document) -> Result<Vec<Bookmark>, Self::Error> {
        Ok(read_outline(doc))
    }

    fn extract_pages(
        doc: &Self::Document,
        start: usize,
        end: usize,
    ) -> Result<Vec<u8>, Self::Error> {
        let page_count = doc.page_ids.len();
        if start == 0 || start > end || end > page_count {
            return Err(BackendError::PageRange {
                start,
                end,
                page_count,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(start, end, page_count, "extracting page range");

        let mut out = doc.inner.clone();
        let doomed: Vec<u32> = (1..=page_count)
            .filter(|page| !(start..=end).contains(page))
            .map(|page| page as u32)
            .collect();
        if !doomed.is_empty() {
            out.delete_pages(&doomed);
        }

        // The source outline points at pages that may no longer exist.
        let catalog = catalog_dict_mut(&mut out)?;
        catalog.remove(b"Outlines");
        let outline_mode = matches!(
            catalog.get(b"PageMode"),
            Ok(Object::Name(mode)) if mode.as_slice() == b"UseOutlines"
        );
        if outline_mode {
            catalog.remove(b"PageMode");
        }

        out.prune_objects();
        out.renumber_objects();
        save(&mut out)
    }

    fn embed_outline(bytes: &[u8], outline: &[Bookmark]) -> Result<Vec<u8>, Self::Error> {
        let mut doc = lopdf::Document::load_mem(bytes)
            .map_err(|e| BackendError::Parse(format!("failed to parse PDF: {e}")))?;
        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            entries = outline.len(),
            pages = page_ids.len(),
            "embedding outline"
        );

        let outlines_id = doc.new_object_id();
        let level = write_outline_level(&mut doc, &page_ids, outline, outlines_id)?;

        match level {
            Some(level) => {
                doc.objects.insert(
                    outlines_id,
                    Object::Dictionary(dictionary! {
                        "Type" => "Outlines",
                        "First" => level.first,
                        "Last" => level.last,
                        "Count" => level.count as i64,
                    }),
                );
                let catalog = catalog_dict_mut(&mut doc)?;
                catalog.set("Outlines", outlines_id);
                catalog.set("PageMode", "UseOutlines");
            }
            None => {
                catalog_dict_mut(&mut doc)?.remove(b"Outlines");
            }
        }

        // Drops any outline objects that were replaced.
        doc.prune_objects();
        save(&mut doc)
    }
}

fn save(doc: &mut lopdf::Document) -> Result<Vec<u8>, BackendError> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf)
        .map_err(|e| BackendError::Write(format!("failed to serialize PDF: {e}")))?;
    Ok(buf)
}

/// Resolve a potentially indirect object reference.
fn resolve_object<'a>(doc: &'a lopdf::Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

fn catalog_dict(doc: &lopdf::Document) -> Option<&Dictionary> {
    let root = doc.trailer.get(b"Root").ok()?;
    resolve_object(doc, root).as_dict().ok()
}

fn catalog_dict_mut(doc: &mut lopdf::Document) -> Result<&mut Dictionary, BackendError> {
    let catalog_id = doc
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|e| BackendError::Parse(format!("missing document catalog: {e}")))?;
    doc.get_object_mut(catalog_id)
        .and_then(Object::as_dict_mut)
        .map_err(|e| BackendError::Parse(format!("invalid document catalog: {e}")))
}

/// Decode a PDF text string, handling UTF-16 BE BOM, UTF-8 and Latin-1.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let chars: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        String::from_utf16_lossy(&chars)
    } else {
        match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

/// Encode a title as a PDF text string: a literal for ASCII, UTF-16 BE
/// with BOM otherwise.
fn encode_pdf_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
    Object::String(bytes, StringFormat::Hexadecimal)
}

fn extract_string_from_dict(
    doc: &lopdf::Document,
    dict: &Dictionary,
    key: &[u8],
) -> Option<String> {
    match resolve_object(doc, dict.get(key).ok()?) {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(f) => Some(*f),
        _ => None,
    }
}

/// An outline item as read from the PDF, before page spans are assigned.
struct OutlineItem {
    title: String,
    page: Option<usize>,
    bold: bool,
    italic: bool,
    color: Option<BookmarkColor>,
    children: Vec<OutlineItem>,
}

/// Read the document outline and assign page spans.
///
/// A missing or malformed `/Outlines` dictionary yields an empty outline.
fn read_outline(doc: &LopdfDocument) -> Vec<Bookmark> {
    let inner = &doc.inner;
    let Some(catalog) = catalog_dict(inner) else {
        return Vec::new();
    };
    let Some(outlines) = catalog
        .get(b"Outlines")
        .ok()
        .and_then(|obj| resolve_object(inner, obj).as_dict().ok())
    else {
        return Vec::new();
    };
    let first = match outlines.get(b"First") {
        Ok(Object::Reference(id)) => *id,
        _ => return Vec::new(),
    };

    let page_numbers: HashMap<ObjectId, usize> = doc
        .page_ids
        .iter()
        .enumerate()
        .map(|(index, id)| (*id, index + 1))
        .collect();

    let items = walk_outline_tree(inner, first, 0, &page_numbers);
    assign_page_spans(items, 1, doc.page_ids.len())
}

/// Walk one sibling chain of the outline (via `/Next`), recursing into
/// `/First` children.
fn walk_outline_tree(
    doc: &lopdf::Document,
    item_id: ObjectId,
    depth: usize,
    page_numbers: &HashMap<ObjectId, usize>,
) -> Vec<OutlineItem> {
    let mut items = Vec::new();
    if depth >= MAX_OUTLINE_DEPTH {
        return items;
    }

    let mut current_id = Some(item_id);
    let mut visited = HashSet::new();

    while let Some(node_id) = current_id {
        // Circular reference protection
        if !visited.insert(node_id) || items.len() >= MAX_SIBLINGS {
            break;
        }
        let Ok(node) = doc.get_object(node_id).and_then(Object::as_dict) else {
            break;
        };

        let flags = match node.get(b"F") {
            Ok(Object::Integer(flags)) => *flags,
            _ => 0,
        };
        let children = match node.get(b"First") {
            Ok(Object::Reference(child_id)) => {
                walk_outline_tree(doc, *child_id, depth + 1, page_numbers)
            }
            _ => Vec::new(),
        };

        items.push(OutlineItem {
            title: extract_string_from_dict(doc, node, b"Title").unwrap_or_default(),
            page: resolve_bookmark_dest(doc, node, page_numbers),
            italic: flags & 1 != 0,
            bold: flags & 2 != 0,
            color: read_color(doc, node),
            children,
        });

        current_id = match node.get(b"Next") {
            Ok(Object::Reference(next_id)) => Some(*next_id),
            _ => None,
        };
    }

    items
}

/// Turn raw outline items into bookmarks with `page_from..=page_thru` spans.
///
/// An item runs until the page before its next sibling starts; the last
/// sibling runs to the end of its parent's span (the last page at top level).
/// Items whose destination cannot be resolved start where the previous
/// sibling (or the parent) starts.
fn assign_page_spans(
    items: Vec<OutlineItem>,
    parent_from: usize,
    parent_thru: usize,
) -> Vec<Bookmark> {
    let mut froms = Vec::with_capacity(items.len());
    let mut previous = parent_from;
    for item in &items {
        let from = item.page.unwrap_or(previous);
        froms.push(from);
        previous = from;
    }

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let page_from = froms[i];
            let limit = match froms.get(i + 1) {
                Some(&next) => next.saturating_sub(1),
                None => parent_thru,
            };
            let page_thru = limit.max(page_from);
            Bookmark {
                title: item.title,
                page_from,
                page_thru,
                children: assign_page_spans(item.children, page_from, page_thru),
                bold: item.bold,
                italic: item.italic,
                color: item.color,
            }
        })
        .collect()
}

fn read_color(doc: &lopdf::Document, node: &Dictionary) -> Option<BookmarkColor> {
    let components = resolve_object(doc, node.get(b"C").ok()?).as_array().ok()?;
    match components.as_slice() {
        [r, g, b] => Some(BookmarkColor {
            r: number(r)?,
            g: number(g)?,
            b: number(b)?,
        }),
        _ => None,
    }
}

/// Resolve a bookmark's destination to a 1-based page number.
///
/// Checks /Dest first, then /A (GoTo action).
fn resolve_bookmark_dest(
    doc: &lopdf::Document,
    node: &Dictionary,
    page_numbers: &HashMap<ObjectId, usize>,
) -> Option<usize> {
    if let Ok(dest) = node.get(b"Dest") {
        if let Some(page) = resolve_dest_to_page(doc, dest, page_numbers, 0) {
            return Some(page);
        }
    }

    let action = resolve_object(doc, node.get(b"A").ok()?).as_dict().ok()?;
    match action.get(b"S") {
        Ok(Object::Name(kind)) if kind.as_slice() == b"GoTo" => {}
        _ => return None,
    }
    resolve_dest_to_page(doc, action.get(b"D").ok()?, page_numbers, 0)
}

/// Resolve a destination object to a 1-based page number.
///
/// Handles explicit destination arrays `[page, /type, ...]`, destination
/// dictionaries with `/D`, and named destinations.
fn resolve_dest_to_page(
    doc: &lopdf::Document,
    dest: &Object,
    page_numbers: &HashMap<ObjectId, usize>,
    indirection: usize,
) -> Option<usize> {
    if indirection > MAX_DEST_INDIRECTION {
        return None;
    }
    match resolve_object(doc, dest) {
        Object::Array(arr) => match arr.first()? {
            Object::Reference(page_ref) => page_numbers.get(page_ref).copied(),
            // Some producers write a 0-based page index instead of a reference
            Object::Integer(index) => usize::try_from(*index).ok().map(|index| index + 1),
            _ => None,
        },
        Object::Dictionary(dict) => {
            resolve_dest_to_page(doc, dict.get(b"D").ok()?, page_numbers, indirection + 1)
        }
        Object::String(bytes, _) => {
            let target = lookup_named_dest(doc, &decode_pdf_string(bytes))?;
            resolve_dest_to_page(doc, target, page_numbers, indirection + 1)
        }
        Object::Name(name) => {
            let target = lookup_named_dest(doc, &String::from_utf8_lossy(name))?;
            resolve_dest_to_page(doc, target, page_numbers, indirection + 1)
        }
        _ => None,
    }
}

/// Look up a named destination in the catalog's /Names → /Dests name tree,
/// then in the older /Dests dictionary.
fn lookup_named_dest<'a>(doc: &'a lopdf::Document, name: &str) -> Option<&'a Object> {
    let catalog = catalog_dict(doc)?;

    let from_tree = catalog
        .get(b"Names")
        .ok()
        .and_then(|names| resolve_object(doc, names).as_dict().ok())
        .and_then(|names| names.get(b"Dests").ok())
        .and_then(|dests| resolve_object(doc, dests).as_dict().ok())
        .and_then(|tree| lookup_name_tree(doc, tree, name, 0));
    if from_tree.is_some() {
        return from_tree;
    }

    let dests = resolve_object(doc, catalog.get(b"Dests").ok()?)
        .as_dict()
        .ok()?;
    dests.get(name.as_bytes()).ok()
}

/// Look up a key in a PDF name tree (`/Names` leaf arrays, `/Kids` nodes).
fn lookup_name_tree<'a>(
    doc: &'a lopdf::Document,
    tree: &'a Dictionary,
    name: &str,
    depth: usize,
) -> Option<&'a Object> {
    if depth >= MAX_OUTLINE_DEPTH {
        return None;
    }

    if let Some(pairs) = tree
        .get(b"Names")
        .ok()
        .and_then(|names| resolve_object(doc, names).as_array().ok())
    {
        // Names array is [key1, value1, key2, value2, ...]
        for pair in pairs.chunks_exact(2) {
            if let Object::String(key, _) = resolve_object(doc, &pair[0]) {
                if decode_pdf_string(key) == name {
                    return Some(&pair[1]);
                }
            }
        }
    }

    let kids = resolve_object(doc, tree.get(b"Kids").ok()?).as_array().ok()?;
    kids.iter()
        .filter_map(|kid| resolve_object(doc, kid).as_dict().ok())
        .find_map(|kid| lookup_name_tree(doc, kid, name, depth + 1))
}

/// First/last object and open descendant count of a written outline level.
struct OutlineLevel {
    first: ObjectId,
    last: ObjectId,
    count: usize,
}

/// Write one sibling list of outline items under `parent`.
fn write_outline_level(
    doc: &mut lopdf::Document,
    page_ids: &[ObjectId],
    items: &[Bookmark],
    parent: ObjectId,
) -> Result<Option<OutlineLevel>, BackendError> {
    if items.is_empty() {
        return Ok(None);
    }

    let ids: Vec<ObjectId> = items.iter().map(|_| doc.new_object_id()).collect();
    let mut count = 0;

    for (i, item) in items.iter().enumerate() {
        let page_id = item
            .page_from
            .checked_sub(1)
            .and_then(|index| page_ids.get(index))
            .copied()
            .ok_or_else(|| {
                BackendError::Write(format!(
                    "bookmark '{}' points to page {} but the document has {} pages",
                    item.title,
                    item.page_from,
                    page_ids.len()
                ))
            })?;

        let mut dict = dictionary! {
            "Title" => encode_pdf_string(&item.title),
            "Parent" => parent,
            "Dest" => vec![Object::Reference(page_id), Object::Name(b"Fit".to_vec())],
        };
        if i > 0 {
            dict.set("Prev", ids[i - 1]);
        }
        if let Some(&next) = ids.get(i + 1) {
            dict.set("Next", next);
        }
        let flags = i64::from(item.italic) | (i64::from(item.bold) << 1);
        if flags != 0 {
            dict.set("F", flags);
        }
        if let Some(color) = item.color {
            dict.set(
                "C",
                vec![
                    Object::Real(color.r),
                    Object::Real(color.g),
                    Object::Real(color.b),
                ],
            );
        }
        if let Some(children) = write_outline_level(doc, page_ids, &item.children, ids[i])? {
            dict.set("First", children.first);
            dict.set("Last", children.last);
            dict.set("Count", children.count as i64);
            count += children.count;
        }
        count += 1;

        doc.objects.insert(ids[i], Object::Dictionary(dict));
    }

    Ok(Some(OutlineLevel {
        first: ids[0],
        last: ids[ids.len() - 1],
        count,
    }))
}

/// Create a minimal valid PDF document with the given number of pages.
///
/// Each page is US Letter size (612 x 792 points) with no content.
#[cfg(test)]
fn create_test_pdf(page_count: usize) -> Vec<u8> {
    let (mut doc, _) = create_test_document(page_count);
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

/// Build an in-memory document and return it with its page ids.
#[cfg(test)]
fn create_test_document(page_count: usize) -> (lopdf::Document, Vec<ObjectId>) {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let mut page_ids = Vec::new();
    for _ in 0..page_count {
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        page_ids.push(page_id);
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    (doc, page_ids)
}

/// Create a `page_count`-page PDF encrypted (RC4, 128-bit) with the given
/// user password.
#[cfg(test)]
fn create_encrypted_test_pdf(page_count: usize, user_password: &str) -> Vec<u8> {
    use lopdf::{EncryptionState, EncryptionVersion, Permissions};

    let (mut doc, _) = create_test_document(page_count);
    doc.trailer.set(
        "ID",
        vec![
            Object::String(b"propsplit-test-1".to_vec(), StringFormat::Literal),
            Object::String(b"propsplit-test-2".to_vec(), StringFormat::Literal),
        ],
    );
    let state = EncryptionState::try_from(EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    })
    .expect("encryption state");
    doc.encrypt(&state).expect("encrypt test PDF");

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

/// Create a 6-page PDF whose outline exercises every destination form:
///
/// ```text
/// Project Summary        Dest [p1 /Fit], bold, red
/// Project Description    A << /S /GoTo /D [p2 /Fit] >>
///   Aims                 Dest (aims)    -> /Names /Dests tree -> p2
///   Methods              Dest /methods  -> /Dests dictionary  -> p4
/// References Cited       Dest [p5 /XYZ 0 792 0], italic
/// Appendix               no destination
/// ```
#[cfg(test)]
fn create_test_pdf_with_outline() -> Vec<u8> {
    let (mut doc, pages) = create_test_document(6);
    let outlines_id = doc.new_object_id();
    let desc_id = doc.new_object_id();

    let fit = |page: ObjectId| vec![Object::Reference(page), Object::Name(b"Fit".to_vec())];

    let summary_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Project Summary"),
        "Parent" => outlines_id,
        "Dest" => fit(pages[0]),
        "F" => 2,
        "C" => vec![1.into(), 0.into(), 0.into()],
    });
    let aims_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Aims"),
        "Parent" => desc_id,
        "Dest" => Object::string_literal("aims"),
    });
    let methods_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Methods"),
        "Parent" => desc_id,
        "Prev" => aims_id,
        "Dest" => Object::Name(b"methods".to_vec()),
    });
    let refs_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("References Cited"),
        "Parent" => outlines_id,
        "Prev" => desc_id,
        "F" => 1,
        "Dest" => vec![
            Object::Reference(pages[4]),
            Object::Name(b"XYZ".to_vec()),
            0.into(),
            792.into(),
            0.into(),
        ],
    });
    let appendix_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Appendix"),
        "Parent" => outlines_id,
        "Prev" => refs_id,
    });
    doc.objects.insert(
        desc_id,
        Object::Dictionary(dictionary! {
            "Title" => Object::string_literal("Project Description"),
            "Parent" => outlines_id,
            "Prev" => summary_id,
            "Next" => refs_id,
            "First" => aims_id,
            "Last" => methods_id,
            "Count" => 2,
            "A" => dictionary! {
                "S" => "GoTo",
                "D" => fit(pages[1]),
            },
        }),
    );

    for (id, next) in [
        (summary_id, desc_id),
        (aims_id, methods_id),
        (refs_id, appendix_id),
    ] {
        if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(id) {
            dict.set("Next", next);
        }
    }

    doc.objects.insert(
        outlines_id,
        Object::Dictionary(dictionary! {
            "Type" => "Outlines",
            "First" => summary_id,
            "Last" => appendix_id,
            "Count" => 6,
        }),
    );

    let names_id = doc.add_object(dictionary! {
        "Dests" => dictionary! {
            "Names" => vec![Object::string_literal("aims"), Object::Array(fit(pages[1]))],
        },
    });
    let dests_id = doc.add_object(dictionary! {
        "methods" => dictionary! { "D" => fit(pages[3]) },
    });

    let catalog_id = doc
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .expect("test catalog");
    if let Ok(Object::Dictionary(catalog)) = doc.get_object_mut(catalog_id) {
        catalog.set("Outlines", outlines_id);
        catalog.set("Names", names_id);
        catalog.set("Dests", dests_id);
    }

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}
