use clap::{builder::Styles, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{
	ASSIGN_THRESHOLD, DEFAULT_DOCX_DIR, DEFAULT_OCR_DPI, DEFAULT_OUTPUT_DIR, DEFAULT_PDF_DIR,
	DEFAULT_TEXT_DIR, INITIAL_PAIR_THRESHOLD,
};

fn parse_threshold(s: &str) -> Result<f32, String> {
	let val: f32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if !(-1.0..=1.0).contains(&val) {
		Err(format!("threshold must be between -1.0 and 1.0, got {}", val))
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	use clap::builder::styling::{AnsiColor, Style};
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "docsort",
	author,
	version,
	about = "Semantic document organizer",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {extract}  {extract_args}     {extract_desc}
  {bin} {organize} {organize_args}   {organize_desc}
  {bin} {organize} {dry_args}  {dry_desc}
  {bin} {info}     {info_args}                   {info_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "docsort".bright_blue(),
		extract = "extract".yellow(),
		extract_args = "-p ./pdfs -t ./texts",
		extract_desc = "Extract text artifacts (OCR fallback)".dimmed(),
		organize = "organize".yellow(),
		organize_args = "-t ./texts -o ./sorted",
		organize_desc = "Cluster and copy into topical folders".dimmed(),
		dry_args = "--dry-run --export -",
		dry_desc = "Print the plan as JSON, copy nothing".dimmed(),
		info = "info".yellow(),
		info_args = "-d ./pdfs",
		info_desc = "Show file metadata".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Directory holding the encoder model and tokenizer
	#[arg(short = 'm', long = "models", global = true, value_name = "DIR")]
	pub models: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Cluster documents by topic and copy originals into named folders
	Organize {
		/// Directory of .txt artifacts, one per source PDF
		#[arg(short = 't', long = "text-dir", default_value = DEFAULT_TEXT_DIR)]
		text_dir: PathBuf,

		/// Directory of original PDF files
		#[arg(short = 'p', long = "pdf-dir", default_value = DEFAULT_PDF_DIR)]
		pdf_dir: PathBuf,

		/// Directory of original DOCX files
		#[arg(short = 'x', long = "docx-dir", default_value = DEFAULT_DOCX_DIR)]
		docx_dir: PathBuf,

		/// Destination for the organized folder tree
		#[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_DIR)]
		output: PathBuf,

		/// Similarity needed to lock an initial pair
		#[arg(long = "pair-threshold", default_value_t = INITIAL_PAIR_THRESHOLD, value_parser = parse_threshold)]
		pair_threshold: f32,

		/// Mean similarity needed to join an existing group
		#[arg(long = "assign-threshold", default_value_t = ASSIGN_THRESHOLD, value_parser = parse_threshold)]
		assign_threshold: f32,

		/// Use mutual-best pairing instead of the first-come forward scan
		#[arg(long = "symmetric-pairs")]
		symmetric_pairs: bool,

		/// Show the plan without copying any files
		#[arg(long = "dry-run")]
		dry_run: bool,

		/// Write the organization plan as JSON ("-" for stdout)
		#[arg(long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// Extract text artifacts from PDFs, with OCR fallback for scans
	Extract {
		/// Directory of PDF files to extract
		#[arg(short = 'p', long = "pdf-dir", default_value = DEFAULT_PDF_DIR)]
		pdf_dir: PathBuf,

		/// Destination directory for .txt artifacts
		#[arg(short = 't', long = "text-dir", default_value = DEFAULT_TEXT_DIR)]
		text_dir: PathBuf,

		/// Re-extract PDFs that already have artifacts
		#[arg(short = 'f', long = "force")]
		force: bool,

		/// Never fall back to OCR (pdftoppm + tesseract)
		#[arg(long = "no-ocr")]
		no_ocr: bool,

		/// Rasterization resolution for OCR
		#[arg(long = "dpi", default_value_t = DEFAULT_OCR_DPI)]
		dpi: u32,
	},

	/// Print metadata for every file in a directory
	Info {
		/// Directory to inspect
		#[arg(short = 'd', long = "dir", default_value = ".")]
		directory: PathBuf,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
