//! Corpus loading from extracted text artifacts and DOCX files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{text, Document, SourceKind};
use crate::extract;
use crate::ui;

/// Per-run load accounting, reported once by the orchestrator
#[derive(Debug, Default)]
pub struct CorpusReport {
	pub loaded: usize,
	pub skipped_degenerate: usize,
	pub failed: usize,
}

/// Load the corpus: one `.txt` artifact per source PDF, then DOCX files.
///
/// PDF artifacts with degenerate content (failed OCR) are dropped before
/// they pollute the embeddings; unreadable DOCX files are logged and
/// skipped. The resulting order (sorted text artifacts first, sorted DOCX
/// second) defines document indices for the whole run.
pub fn load_corpus(text_dir: &Path, docx_dir: &Path) -> Result<(Vec<Document>, CorpusReport)> {
	let mut documents = Vec::new();
	let mut report = CorpusReport::default();

	for path in list_files(text_dir, "txt")? {
		let raw = match fs::read(&path) {
			Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
			Err(e) => {
				ui::warn(&format!("Could not read {}: {}", path.display(), e));
				report.failed += 1;
				continue;
			}
		};

		let base = base_name(&path);

		if text::is_degenerate(&raw) {
			ui::debug(&format!("Skipping empty extraction: {}", base));
			report.skipped_degenerate += 1;
			continue;
		}

		documents.push(Document {
			base_name: base,
			kind: SourceKind::Pdf,
			text: text::normalize(&raw),
		});
		report.loaded += 1;
	}

	for path in list_files(docx_dir, "docx")? {
		let raw = match extract::docx::extract_text(&path) {
			Ok(raw) => raw,
			Err(e) => {
				ui::warn(&format!("Could not read DOCX {}: {}", path.display(), e));
				report.failed += 1;
				continue;
			}
		};

		documents.push(Document {
			base_name: base_name(&path),
			kind: SourceKind::Docx,
			text: text::normalize(&raw),
		});
		report.loaded += 1;
	}

	Ok((documents, report))
}

/// Files with the given extension, sorted by name for reproducible indices.
/// A missing directory is treated as empty.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<std::path::PathBuf>> {
	if !dir.exists() {
		ui::debug(&format!("Directory not found, treating as empty: {}", dir.display()));
		return Ok(Vec::new());
	}

	let mut files: Vec<_> = fs::read_dir(dir)
		.with_context(|| format!("Failed to read directory {}", dir.display()))?
		.filter_map(|e| e.ok())
		.map(|e| e.path())
		.filter(|p| {
			p.is_file()
				&& p.extension()
					.and_then(|s| s.to_str())
					.is_some_and(|e| e.eq_ignore_ascii_case(extension))
		})
		.collect();

	files.sort();
	Ok(files)
}

fn base_name(path: &Path) -> String {
	path.file_stem()
		.and_then(|s| s.to_str())
		.unwrap_or("unknown")
		.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn loads_and_filters_text_artifacts() {
		let dir = tempfile::tempdir().unwrap();
		let text_dir = dir.path().join("texts");
		fs::create_dir(&text_dir).unwrap();

		let usable = "harbor lease agreement terms ".repeat(10);
		fs::write(text_dir.join("b_lease.txt"), &usable).unwrap();
		fs::write(text_dir.join("a_scan.txt"), "a1 b2").unwrap();
		fs::write(text_dir.join("notes.md"), &usable).unwrap();

		let (docs, report) = load_corpus(&text_dir, &dir.path().join("missing")).unwrap();

		assert_eq!(docs.len(), 1);
		assert_eq!(docs[0].base_name, "b_lease");
		assert_eq!(docs[0].kind, SourceKind::Pdf);
		assert!(docs[0].text.starts_with("harbor lease agreement"));
		assert_eq!(report.loaded, 1);
		assert_eq!(report.skipped_degenerate, 1);
		assert_eq!(report.failed, 0);
	}

	#[test]
	fn listing_is_sorted_and_missing_dir_is_empty() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("z.txt"), "z").unwrap();
		fs::write(dir.path().join("a.txt"), "a").unwrap();

		let files = list_files(dir.path(), "txt").unwrap();
		let names: Vec<_> = files
			.iter()
			.map(|p| p.file_name().unwrap().to_str().unwrap())
			.collect();
		assert_eq!(names, vec!["a.txt", "z.txt"]);

		assert!(list_files(Path::new("does/not/exist"), "txt").unwrap().is_empty());
	}
}
