//! Embedded PDF text extraction

use std::path::Path;

use anyhow::Result;

/// Extract the embedded text layer of a PDF.
///
/// Scanned PDFs typically come back empty or near-empty here; callers
/// should check the result with `core::text::is_degenerate` and fall back
/// to OCR.
pub fn extract_text(path: &Path) -> Result<String> {
	pdf_extract::extract_text(path)
		.map_err(|e| anyhow::anyhow!("PDF text extraction failed for {}: {}", path.display(), e))
}
