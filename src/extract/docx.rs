//! DOCX paragraph extraction
//!
//! A .docx file is a zip archive; the body text lives in
//! `word/document.xml` as runs of `<w:t>` elements grouped into `<w:p>`
//! paragraphs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Pull the paragraph text out of a DOCX file, one line per paragraph
pub fn extract_text(path: &Path) -> Result<String> {
	let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
	let mut archive =
		zip::ZipArchive::new(file).context("Not a valid DOCX archive")?;

	let mut xml = String::new();
	archive
		.by_name("word/document.xml")
		.context("DOCX archive has no word/document.xml")?
		.read_to_string(&mut xml)
		.context("Failed to read word/document.xml")?;

	paragraphs(&xml)
}

fn paragraphs(xml: &str) -> Result<String> {
	let mut reader = Reader::from_str(xml);
	let mut out = String::new();
	let mut in_text = false;

	loop {
		match reader.read_event() {
			Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text = true,
			Ok(Event::End(e)) => match e.local_name().as_ref() {
				b"t" => in_text = false,
				b"p" => out.push('\n'),
				_ => {}
			},
			Ok(Event::Text(t)) if in_text => {
				out.push_str(&t.unescape().context("Malformed text run")?)
			}
			Ok(Event::Empty(e)) if matches!(e.local_name().as_ref(), b"br" | b"tab") => {
				out.push(' ')
			}
			Ok(Event::Eof) => break,
			Err(e) => anyhow::bail!("Malformed document.xml: {}", e),
			_ => {}
		}
	}

	Ok(out)
}
