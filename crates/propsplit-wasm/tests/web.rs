//! Browser-side tests for the JavaScript exports.
//!
//! Run with `wasm-pack test --headless --firefox crates/propsplit-wasm`.
//! The exported functions return `JsError`, which only exists on wasm32.

#![cfg(target_arch = "wasm32")]

use propsplit_wasm::{plan_sections, read_bookmarks, split_pdf};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn split_pdf_rejects_invalid_bytes() {
    assert!(split_pdf(b"not a valid pdf", "proposal").is_err());
}

#[wasm_bindgen_test]
fn plan_sections_rejects_invalid_bytes() {
    assert!(plan_sections(b"not a valid pdf").is_err());
}

#[wasm_bindgen_test]
fn read_bookmarks_rejects_empty_input() {
    assert!(read_bookmarks(&[]).is_err());
}
