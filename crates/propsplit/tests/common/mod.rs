//! Shared helpers for building proposal PDFs and inspecting split output.
//!
//! Every page carries a one-line content stream `(Page N) Tj`, so tests can
//! tell which source pages ended up in an extracted section.

#![allow(dead_code)]

use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use propsplit::{Bookmark, LopdfBackend, PdfBackend, walk};

/// One outline entry pointing at a 1-based page.
pub struct Entry {
    pub title: String,
    pub page: usize,
    pub children: Vec<Entry>,
}

pub fn entry(title: &str, page: usize) -> Entry {
    Entry {
        title: title.to_string(),
        page,
        children: Vec::new(),
    }
}

impl Entry {
    pub fn with_children(mut self, children: Vec<Entry>) -> Self {
        self.children = children;
        self
    }
}

/// Build a `page_count`-page PDF with the given outline.
pub fn proposal_pdf(page_count: usize, outline: &[Entry]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut page_ids = Vec::new();
    for n in 1..=page_count {
        let content = format!("BT /F1 12 Tf 72 720 Td (Page {n}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
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
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        }),
    );

    let mut catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    if !outline.is_empty() {
        let outlines_id = doc.new_object_id();
        if let Some((first, last, count)) = add_entries(&mut doc, &page_ids, outline, outlines_id)
        {
            doc.objects.insert(
                outlines_id,
                Object::Dictionary(dictionary! {
                    "Type" => "Outlines",
                    "First" => first,
                    "Last" => last,
                    "Count" => count,
                }),
            );
        }
        catalog.set("Outlines", outlines_id);
        catalog.set("PageMode", "UseOutlines");
    }
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

fn add_entries(
    doc: &mut Document,
    pages: &[ObjectId],
    entries: &[Entry],
    parent: ObjectId,
) -> Option<(ObjectId, ObjectId, i64)> {
    if entries.is_empty() {
        return None;
    }
    let ids: Vec<ObjectId> = entries.iter().map(|_| doc.new_object_id()).collect();
    let mut count = entries.len() as i64;
    for (i, e) in entries.iter().enumerate() {
        let mut dict = dictionary! {
            "Title" => Object::string_literal(e.title.as_str()),
            "Parent" => parent,
            "Dest" => vec![Object::Reference(pages[e.page - 1]), Object::Name(b"Fit".to_vec())],
        };
        if i > 0 {
            dict.set("Prev", ids[i - 1]);
        }
        if let Some(next) = ids.get(i + 1) {
            dict.set("Next", *next);
        }
        if let Some((first, last, n)) = add_entries(doc, pages, &e.children, ids[i]) {
            dict.set("First", first);
            dict.set("Last", last);
            dict.set("Count", n);
            count += n;
        }
        doc.objects.insert(ids[i], Object::Dictionary(dict));
    }
    Some((ids[0], ids[ids.len() - 1], count))
}

/// The `Page N` label of every page, in page order.
pub fn page_labels(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).expect("output should be a valid PDF");
    doc.get_pages()
        .values()
        .map(|&id| {
            let content = doc.get_page_content(id).expect("page content");
            let text = String::from_utf8_lossy(&content);
            let start = text.find('(').expect("label start") + 1;
            let end = text.find(')').expect("label end");
            text[start..end].to_string()
        })
        .collect()
}

/// The outline of `bytes` as read back by the backend.
pub fn outline_of(bytes: &[u8]) -> Vec<Bookmark> {
    let doc = LopdfBackend::open(bytes).expect("output should open");
    LopdfBackend::outline(&doc).expect("outline should read")
}

/// Flatten an outline to `(depth, title, page_from, page_thru)`.
pub fn flatten(bookmarks: &[Bookmark]) -> Vec<(usize, String, usize, usize)> {
    walk(bookmarks)
        .map(|(depth, bm)| (depth, bm.title.clone(), bm.page_from, bm.page_thru))
        .collect()
}

/// Re-save `bytes` encrypted (RC4, 128-bit) with the given user password.
pub fn encrypt_pdf(bytes: &[u8], user_password: &str) -> Vec<u8> {
    use lopdf::{EncryptionState, EncryptionVersion, Permissions, StringFormat};

    let mut doc = Document::load_mem(bytes).expect("fixture should load");
    doc.trailer.set(
        "ID",
        vec![
            Object::String(b"proposal-id-0001".to_vec(), StringFormat::Literal),
            Object::String(b"proposal-id-0002".to_vec(), StringFormat::Literal),
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
    doc.encrypt(&state).expect("encrypt fixture");

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("save encrypted fixture");
    buf
}
