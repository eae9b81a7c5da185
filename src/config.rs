//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_MODEL_DIR: OnceLock<PathBuf> = OnceLock::new();

// === Model Files ===
pub const ENCODER_MODEL: &str = "model.onnx";
pub const TOKENIZER: &str = "tokenizer.json";

// === Model Parameters ===
pub const EMBEDDING_DIM: usize = 384;
pub const MAX_TOKENS: usize = 256;

// === Clustering Thresholds ===
/// Similarity needed to lock two documents into an initial pair.
pub const INITIAL_PAIR_THRESHOLD: f32 = 0.8;
/// Mean similarity needed to join an existing group.
pub const ASSIGN_THRESHOLD: f32 = 0.2;

// === Corpus Filtering ===
/// Extractions with fewer alphabetic words than this are discarded.
pub const MIN_CONTENT_WORDS: usize = 20;
/// Tokens must be longer than this to qualify as a group keyword.
pub const KEYWORD_MIN_LEN: usize = 5;

// === Default Directories ===
pub const DEFAULT_TEXT_DIR: &str = "ocr_text_output";
pub const DEFAULT_PDF_DIR: &str = "pdf_files";
pub const DEFAULT_DOCX_DIR: &str = "docx_files";
pub const DEFAULT_OUTPUT_DIR: &str = "organized_folders";

// === Extraction ===
pub const DEFAULT_OCR_DPI: u32 = 300;

pub fn set_model_dir(path: PathBuf) {
	let _ = CUSTOM_MODEL_DIR.set(path);
}

/// Get models directory (custom dir, DOCSORT_MODELS_DIR env var, or next to executable)
pub fn models_dir() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_MODEL_DIR.get() {
		crate::ui::debug(&format!("Using custom model dir: {}", custom.display()));
		return Some(custom.clone());
	}

	if let Ok(env_path) = std::env::var("DOCSORT_MODELS_DIR") {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using DOCSORT_MODELS_DIR: {}", env_path));
			return Some(path);
		}
	}

	if let Ok(exe) = std::env::current_exe() {
		if let Some(dir) = exe.parent() {
			let models = dir.join("models");
			if models.is_dir() {
				crate::ui::debug(&format!("Found models at: {}", models.display()));
				return Some(models);
			}
		}
	}

	None
}

pub fn encoder_model_path() -> Option<PathBuf> {
	models_dir().map(|d| d.join(ENCODER_MODEL))
}

pub fn tokenizer_path() -> Option<PathBuf> {
	models_dir().map(|d| d.join(TOKENIZER))
}
