//! Corpus documents and their source kinds

use std::path::{Path, PathBuf};

/// Where a document's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
	Pdf,
	Docx,
}

impl SourceKind {
	/// Extension of the original file this document was extracted from
	pub fn extension(&self) -> &'static str {
		match self {
			SourceKind::Pdf => "pdf",
			SourceKind::Docx => "docx",
		}
	}
}

/// A single corpus entry, identified by its index in the load order.
///
/// Immutable once loaded; `text` is already normalized.
#[derive(Debug, Clone)]
pub struct Document {
	/// File stem used to locate the original (no directory, no extension)
	pub base_name: String,
	pub kind: SourceKind,
	pub text: String,
}

impl Document {
	/// Resolve the path of the original file inside its source directory
	pub fn original_path(&self, pdf_dir: &Path, docx_dir: &Path) -> PathBuf {
		let dir = match self.kind {
			SourceKind::Pdf => pdf_dir,
			SourceKind::Docx => docx_dir,
		};
		dir.join(format!("{}.{}", self.base_name, self.kind.extension()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn original_path_follows_kind() {
		let doc = Document {
			base_name: "lease_2019".to_string(),
			kind: SourceKind::Pdf,
			text: String::new(),
		};
		assert_eq!(
			doc.original_path(Path::new("pdfs"), Path::new("docs")),
			Path::new("pdfs/lease_2019.pdf")
		);
	}
}
