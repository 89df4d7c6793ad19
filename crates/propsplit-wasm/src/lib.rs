//! WebAssembly/JavaScript bindings for propsplit.
//!
//! Exposes `splitPdf` to JavaScript via wasm-bindgen. Section files and the
//! zip archive are handed back as `Uint8Array`s; the section plan and the
//! outline are serialized to plain objects with serde_wasm_bindgen.

use wasm_bindgen::prelude::*;

use propsplit::{
    SplitError, SplitOptions, SplitResult, SplitWarning, Splitter, results_to_zip,
};

/// One extracted section (WASM binding).
#[wasm_bindgen]
#[derive(Clone)]
pub struct WasmSplitResult {
    inner: SplitResult,
}

#[wasm_bindgen]
impl WasmSplitResult {
    /// Output file name, e.g. `submit-summary.pdf`.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name.clone()
    }

    /// First source page (1-based).
    #[wasm_bindgen(getter, js_name = "startPage")]
    pub fn start_page(&self) -> usize {
        self.inner.start_page
    }

    /// Last source page (1-based, inclusive).
    #[wasm_bindgen(getter, js_name = "endPage")]
    pub fn end_page(&self) -> usize {
        self.inner.end_page
    }

    /// The section PDF bytes.
    #[wasm_bindgen(getter)]
    pub fn data(&self) -> Vec<u8> {
        self.inner.data.clone()
    }
}

/// Everything a split run produces (WASM binding).
///
/// # JavaScript Usage
///
/// ```js
/// const out = splitPdf(pdfBytes, "proposal");
/// for (const r of out.results) {
///   console.log(`${r.name}: ${r.startPage}-${r.endPage}`);
/// }
/// download(out.zipFile, "proposal.zip");
/// out.warnings.forEach((w) => console.warn(w));
/// ```
#[wasm_bindgen]
pub struct WasmSplitOutput {
    results: Vec<SplitResult>,
    zip_file: Vec<u8>,
    warnings: Vec<String>,
}

#[wasm_bindgen]
impl WasmSplitOutput {
    /// The extracted sections in extraction order.
    #[wasm_bindgen(getter)]
    pub fn results(&self) -> Vec<WasmSplitResult> {
        self.results
            .iter()
            .map(|r| WasmSplitResult { inner: r.clone() })
            .collect()
    }

    /// Zip archive holding every section under the requested directory.
    #[wasm_bindgen(getter, js_name = "zipFile")]
    pub fn zip_file(&self) -> Vec<u8> {
        self.zip_file.clone()
    }

    /// Non-fatal warnings, formatted for display.
    #[wasm_bindgen(getter)]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.clone()
    }
}

/// Split a proposal PDF (Uint8Array) and package the sections as a zip whose
/// entries live under `zipName/`.
#[wasm_bindgen(js_name = "splitPdf")]
pub fn split_pdf(data: &[u8], zip_name: &str) -> Result<WasmSplitOutput, JsError> {
    split_to_output(data, zip_name).map_err(|e| JsError::new(&e.to_string()))
}

/// Resolve every section without extracting, as an array of plan objects.
#[wasm_bindgen(js_name = "planSections")]
pub fn plan_sections(data: &[u8]) -> Result<JsValue, JsError> {
    let splitter =
        Splitter::open(data, SplitOptions::default()).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&splitter.plan()).map_err(|e| JsError::new(&e.to_string()))
}

/// Read the nested outline with page spans.
#[wasm_bindgen(js_name = "readBookmarks")]
pub fn read_bookmarks(data: &[u8]) -> Result<JsValue, JsError> {
    let splitter =
        Splitter::open(data, SplitOptions::default()).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(splitter.bookmarks()).map_err(|e| JsError::new(&e.to_string()))
}

fn split_to_output(data: &[u8], zip_name: &str) -> Result<WasmSplitOutput, SplitError> {
    let splitter = Splitter::open(data, SplitOptions::default())?;
    let mut warnings: Vec<SplitWarning> = Vec::new();
    let results = splitter.split(&mut warnings)?;
    let zip_file = results_to_zip(zip_name, &results)?;
    Ok(WasmSplitOutput {
        results,
        zip_file,
        warnings: warnings.iter().map(ToString::to_string).collect(),
    })
}
