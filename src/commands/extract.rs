//! Extract command - produce one .txt artifact per source PDF

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::*;

use crate::core::text;
use crate::extract::{ocr, pdf};
use crate::processing::corpus::list_files;
use crate::ui;

pub fn run(pdf_dir: &Path, text_dir: &Path, force: bool, no_ocr: bool, dpi: u32) -> Result<()> {
	let pdfs = list_files(pdf_dir, "pdf")?;

	if pdfs.is_empty() {
		ui::warn(&format!("No PDF files found in {}", pdf_dir.display()));
		return Ok(());
	}

	fs::create_dir_all(text_dir)
		.with_context(|| format!("Failed to create {}", text_dir.display()))?;

	let ocr_ready = !no_ocr && ocr::is_available();
	if !no_ocr && !ocr_ready {
		ui::warn("pdftoppm/tesseract not found on PATH; OCR fallback disabled");
	}

	ui::info(&format!("Extracting {} PDFs", pdfs.len()));

	let total = pdfs.len();
	let mut extracted = 0;
	let mut skipped = 0;
	let mut failed = 0;

	for (index, path) in pdfs.iter().enumerate() {
		let queue = format!("[{}/{}]", index + 1, total).bright_blue().bold();
		let base = path
			.file_stem()
			.and_then(|s| s.to_str())
			.unwrap_or("unknown");
		let artifact = text_dir.join(format!("{}.txt", base));

		if artifact.exists() && !force {
			ui::debug(&format!("Already extracted: {}", base));
			skipped += 1;
			continue;
		}

		let start = Instant::now();
		match extract_one(path, ocr_ready, dpi) {
			Ok(content) => match fs::write(&artifact, content) {
				Ok(_) => {
					let timing = format!("{}ms", start.elapsed().as_millis()).dimmed();
					ui::success(&format!("{} {} {}", queue, ui::path_link(path, 60), timing));
					extracted += 1;
				}
				Err(e) => {
					ui::error(&format!("{} {}: {}", queue, base, e));
					failed += 1;
				}
			},
			Err(e) => {
				ui::error(&format!("{} {}: {}", queue, ui::path_link(path, 60), e));
				failed += 1;
			}
		}
	}

	ui::success(&format!(
		"Extracted {} ({} already done, {} failed)",
		extracted, skipped, failed
	));
	Ok(())
}

/// Embedded text first; OCR when the PDF has no usable text layer
fn extract_one(path: &Path, ocr_ready: bool, dpi: u32) -> Result<String> {
	match pdf::extract_text(path) {
		Ok(content) if !(ocr_ready && text::is_degenerate(&content)) => Ok(content),
		Ok(content) => {
			ui::debug(&format!(
				"Embedded text too sparse, running OCR: {}",
				path.display()
			));
			match ocr::ocr_pdf(path, dpi) {
				Ok(recognized) => Ok(recognized),
				Err(e) => {
					ui::warn(&format!("OCR failed ({}), keeping sparse text", e));
					Ok(content)
				}
			}
		}
		Err(e) if ocr_ready => {
			ui::debug(&format!("Direct extraction failed ({}), running OCR", e));
			ocr::ocr_pdf(path, dpi)
		}
		Err(e) => Err(e),
	}
}
