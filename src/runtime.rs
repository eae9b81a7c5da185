//! ONNX Runtime session creation

use std::path::Path;

use anyhow::{Context, Result};
use ort::session::{builder::GraphOptimizationLevel, Session};

/// Build an inference session for a local ONNX model.
///
/// The MiniLM encoder is small enough that CPU inference is the sensible
/// default; no execution-provider negotiation happens here.
pub fn create_session(model_path: &Path) -> Result<Session> {
	Session::builder()
		.context("Failed to create session builder")?
		.with_optimization_level(GraphOptimizationLevel::Level3)
		.map_err(ort::Error::<()>::from)?
		.with_intra_threads(4)
		.map_err(ort::Error::<()>::from)?
		.commit_from_file(model_path)
		.with_context(|| format!("Failed to load model {}", model_path.display()))
}
