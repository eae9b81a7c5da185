//! # Text Extraction
//!
//! Thin wrappers around the external extraction tools: embedded PDF text
//! via `pdf-extract`, OCR via the `pdftoppm` + `tesseract` CLIs, and DOCX
//! paragraphs via `zip` + `quick-xml`.

pub mod docx;
pub mod ocr;
pub mod pdf;
