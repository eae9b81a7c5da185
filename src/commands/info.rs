//! Info command - print file metadata for a directory

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use colored::*;

use crate::ui;

pub fn run(directory: &Path) -> Result<()> {
	let mut files: Vec<_> = fs::read_dir(directory)
		.with_context(|| format!("Failed to read directory {}", directory.display()))?
		.filter_map(|e| e.ok())
		.map(|e| e.path())
		.filter(|p| p.is_file())
		.collect();
	files.sort();

	if files.is_empty() {
		ui::warn(&format!("No files in {}", directory.display()));
		return Ok(());
	}

	for path in &files {
		let meta = match fs::metadata(path) {
			Ok(meta) => meta,
			Err(e) => {
				ui::error(&format!("{}: {}", path.display(), e));
				continue;
			}
		};

		ui::header(&ui::path_link(path, 60));
		println!("  {} {} bytes", "Size:".dimmed(), meta.len());
		println!("  {} {}", "Modified:".dimmed(), timestamp(meta.modified()));
		println!("  {} {}", "Accessed:".dimmed(), timestamp(meta.accessed()));
		println!("  {} {}", "Created:".dimmed(), timestamp(meta.created()));
	}

	println!();
	ui::success(&format!("{} files", files.len()));
	Ok(())
}

fn timestamp(time: std::io::Result<SystemTime>) -> String {
	match time {
		Ok(t) => DateTime::<Local>::from(t)
			.format("%Y-%m-%d %H:%M:%S")
			.to_string(),
		Err(_) => "unavailable".to_string(),
	}
}
