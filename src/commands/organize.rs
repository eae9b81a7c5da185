//! Organize command - cluster documents and copy originals into topical folders

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

use crate::core::{ClusterParams, Document, Group, NamedGroup, SimilarityMatrix};
use crate::models::Encoder;
use crate::processing::{cluster_documents, load_corpus, name_group};
use crate::ui;

pub struct OrganizeOptions {
	pub text_dir: PathBuf,
	pub pdf_dir: PathBuf,
	pub docx_dir: PathBuf,
	pub output: PathBuf,
	pub params: ClusterParams,
	pub dry_run: bool,
	pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct PlanExport {
	total_documents: usize,
	groups: Vec<PlanGroup>,
}

#[derive(Debug, Serialize)]
struct PlanGroup {
	name: String,
	size: usize,
	files: Vec<String>,
}

pub fn run(opts: &OrganizeOptions) -> Result<()> {
	let start = Instant::now();

	ui::info(&format!(
		"Loading documents from {} and {}",
		ui::path_link(&opts.text_dir, 40),
		ui::path_link(&opts.docx_dir, 40)
	));

	let (documents, report) = load_corpus(&opts.text_dir, &opts.docx_dir)?;

	if report.skipped_degenerate > 0 {
		ui::info(&format!(
			"Skipped {} degenerate extractions (--verbose for details)",
			report.skipped_degenerate
		));
	}
	if report.failed > 0 {
		ui::warn(&format!("{} documents could not be read", report.failed));
	}

	if documents.is_empty() {
		ui::warn("No usable documents found; no folders created");
		return Ok(());
	}

	ui::success(&format!("Loaded {} usable documents", documents.len()));

	ui::info("Loading encoder model...");
	let load_start = Instant::now();
	let mut encoder = Encoder::load()?;
	ui::success(&format!(
		"Model ready in {:.2}s",
		load_start.elapsed().as_secs_f32()
	));

	ui::info("Encoding documents...");
	let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
	let embeddings = encoder.encode_batch(&texts)?;

	let sim = SimilarityMatrix::from_embeddings(&embeddings);
	let groups = cluster_documents(&sim, &opts.params);
	ui::success(&format!("Formed {} groups", groups.len()));

	let named = name_groups(&groups, &documents);

	if let Some(export_path) = &opts.export {
		export_plan(&named, &documents, opts, export_path)?;
	}

	if opts.dry_run {
		print_plan(&named, &documents);
		ui::info("Dry run: no files copied");
		return Ok(());
	}

	let stats = copy_groups(&named, &documents, opts)?;

	ui::success(&format!(
		"Done: {} folders, {} files copied in {:.1}s",
		named.len(),
		stats.copied,
		start.elapsed().as_secs_f32()
	));
	if stats.missing > 0 {
		ui::warn(&format!("{} original files were missing", stats.missing));
	}
	if stats.failed > 0 {
		ui::warn(&format!("{} files failed to copy", stats.failed));
	}

	Ok(())
}

/// Label each group from its members' aggregate text
fn name_groups(groups: &[Group], documents: &[Document]) -> Vec<NamedGroup> {
	groups
		.iter()
		.map(|group| {
			let texts: Vec<&str> = group
				.members
				.iter()
				.map(|&idx| documents[idx].text.as_str())
				.collect();
			NamedGroup {
				name: name_group(&texts),
				members: group.members.clone(),
			}
		})
		.collect()
}

#[derive(Debug, Default)]
struct CopyStats {
	copied: usize,
	missing: usize,
	failed: usize,
}

/// Copy every member's original file into its group folder.
///
/// Per-file failures are logged and counted, never fatal. Groups that share
/// a label share a destination folder, as the original pipeline did.
fn copy_groups(
	named: &[NamedGroup],
	documents: &[Document],
	opts: &OrganizeOptions,
) -> Result<CopyStats> {
	fs::create_dir_all(&opts.output)
		.with_context(|| format!("Failed to create output directory {}", opts.output.display()))?;

	let mut stats = CopyStats::default();

	for (g_id, group) in named.iter().enumerate() {
		let folder = opts.output.join(&group.name);
		fs::create_dir_all(&folder)
			.with_context(|| format!("Failed to create group folder {}", folder.display()))?;

		ui::header(&format!(
			"Group {}: '{}' ({} files)",
			g_id + 1,
			group.name,
			group.members.len()
		));

		for &idx in &group.members {
			let doc = &documents[idx];
			let source = doc.original_path(&opts.pdf_dir, &opts.docx_dir);

			if !source.exists() {
				ui::warn(&format!("Missing original: {}", source.display()));
				stats.missing += 1;
				continue;
			}

			let dest = folder.join(source.file_name().unwrap_or_default());
			match fs::copy(&source, &dest) {
				Ok(_) => {
					println!("  {} {}", "→".dimmed(), ui::path_link(&dest, 60));
					stats.copied += 1;
				}
				Err(e) => {
					ui::error(&format!("Failed to copy {}: {}", source.display(), e));
					stats.failed += 1;
				}
			}
		}
	}

	Ok(stats)
}

fn print_plan(named: &[NamedGroup], documents: &[Document]) {
	for (g_id, group) in named.iter().enumerate() {
		ui::header(&format!(
			"Group {}: '{}' ({} files)",
			g_id + 1,
			group.name,
			group.members.len()
		));
		for &idx in &group.members {
			let doc = &documents[idx];
			println!(
				"  {} {}.{}",
				"·".dimmed(),
				doc.base_name,
				doc.kind.extension()
			);
		}
	}
	println!();
}

fn export_plan(
	named: &[NamedGroup],
	documents: &[Document],
	opts: &OrganizeOptions,
	export_path: &Path,
) -> Result<()> {
	let groups: Vec<PlanGroup> = named
		.iter()
		.map(|group| PlanGroup {
			name: group.name.clone(),
			size: group.members.len(),
			files: group
				.members
				.iter()
				.map(|&idx| {
					documents[idx]
						.original_path(&opts.pdf_dir, &opts.docx_dir)
						.to_string_lossy()
						.to_string()
				})
				.collect(),
		})
		.collect();

	let export = PlanExport {
		total_documents: documents.len(),
		groups,
	};

	let json = serde_json::to_string_pretty(&export)?;

	if export_path.to_str() == Some("-") {
		println!("{}", json);
	} else {
		fs::write(export_path, json)
			.with_context(|| format!("Failed to write {}", export_path.display()))?;
		ui::success(&format!("Exported plan to {}", export_path.display()));
	}

	Ok(())
}
