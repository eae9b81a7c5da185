//! OCR fallback for scanned PDFs
//!
//! Shells out to `pdftoppm` to rasterize pages and `tesseract` to recognize
//! them, mirroring the pipeline that produced the original text artifacts.
//! Page texts are joined with `--- Page N ---` markers; the normalizer
//! strips them again before embedding.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

/// Both external OCR tools are on PATH
pub fn is_available() -> bool {
	tool_runs("pdftoppm", "-v") && tool_runs("tesseract", "--version")
}

fn tool_runs(program: &str, arg: &str) -> bool {
	Command::new(program)
		.arg(arg)
		.output()
		.map(|o| o.status.success())
		.unwrap_or(false)
}

/// Rasterize every page of `path` at `dpi` and run tesseract over each one
pub fn ocr_pdf(path: &Path, dpi: u32) -> Result<String> {
	let pages_dir = tempfile::tempdir().context("Failed to create OCR scratch directory")?;
	let prefix = pages_dir.path().join("page");

	let status = Command::new("pdftoppm")
		.arg("-r")
		.arg(dpi.to_string())
		.arg("-png")
		.arg(path)
		.arg(&prefix)
		.status()
		.context("Failed to run pdftoppm")?;
	if !status.success() {
		anyhow::bail!("pdftoppm failed for {}", path.display());
	}

	let mut pages: Vec<_> = std::fs::read_dir(pages_dir.path())
		.context("Failed to list rasterized pages")?
		.filter_map(|e| e.ok())
		.map(|e| e.path())
		.filter(|p| p.extension().and_then(|s| s.to_str()) == Some("png"))
		.collect();
	pages.sort();

	if pages.is_empty() {
		anyhow::bail!("pdftoppm produced no pages for {}", path.display());
	}

	let mut text = String::new();
	for (page_no, page) in pages.iter().enumerate() {
		let output = Command::new("tesseract")
			.arg(page)
			.arg("stdout")
			.output()
			.context("Failed to run tesseract")?;
		if !output.status.success() {
			anyhow::bail!(
				"tesseract failed on page {} of {}",
				page_no + 1,
				path.display()
			);
		}

		text.push_str(&format!("\n--- Page {} ---\n", page_no + 1));
		let page_text = String::from_utf8_lossy(&output.stdout);
		if page_text.trim().is_empty() {
			text.push_str("(No text found on this page)\n");
		} else {
			text.push_str(&page_text);
		}
	}

	Ok(text)
}
