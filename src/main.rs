//! Docsort - semantic document organizer
//!
//! Extracts text from scanned/text PDFs and DOCX files, embeds it with a
//! MiniLM sentence encoder, greedily clusters the documents, and copies
//! the originals into folders named after each cluster's dominant theme.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use docsort::cli::{Cli, Command};
use docsort::commands;
use docsort::commands::organize::OrganizeOptions;
use docsort::config;
use docsort::core::ClusterParams;
use docsort::ui::Log;

fn main() -> Result<()> {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);
	if let Some(models) = cli.models {
		config::set_model_dir(models);
	}

	match cli.command {
		Command::Organize {
			text_dir,
			pdf_dir,
			docx_dir,
			output,
			pair_threshold,
			assign_threshold,
			symmetric_pairs,
			dry_run,
			export,
		} => {
			print_header();
			let opts = OrganizeOptions {
				text_dir,
				pdf_dir,
				docx_dir,
				output,
				params: ClusterParams {
					pair_threshold,
					assign_threshold,
					symmetric_pairs,
				},
				dry_run,
				export,
			};
			commands::organize::run(&opts)
		}

		Command::Extract {
			pdf_dir,
			text_dir,
			force,
			no_ocr,
			dpi,
		} => {
			print_header();
			commands::extract::run(&pdf_dir, &text_dir, force, no_ocr, dpi)
		}

		Command::Info { directory } => {
			print_header();
			commands::info::run(&directory)
		}

		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help().unwrap();
				} else {
					eprintln!("Unknown subcommand: {}", sub);
					cmd.print_help().unwrap();
				}
			} else {
				cmd.print_help().unwrap();
			}
			Ok(())
		}
	}
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── Docsort v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
