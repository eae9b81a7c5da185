//! MiniLM sentence encoder (ONNX)
//!
//! The document texts go through the sentence-transformers recipe: tokenize,
//! run the transformer, mean-pool the last hidden state, L2-normalize. The
//! rest of the pipeline only sees the resulting `Embedding` values.

use std::path::Path;

use anyhow::{Context, Result};
use ort::session::Session;
use tokenizers::{Tokenizer, TruncationParams};

use crate::config;
use crate::core::Embedding;
use crate::ui;

pub struct Encoder {
	session: Session,
	tokenizer: Tokenizer,
}

impl Encoder {
	/// Load the encoder from the configured models directory
	pub fn load() -> Result<Self> {
		let model_path = config::encoder_model_path().context(format!(
			"Encoder model not found. Ensure {} exists (set DOCSORT_MODELS_DIR or place a models/ directory next to the executable)",
			config::ENCODER_MODEL
		))?;
		let tokenizer_path = config::tokenizer_path().context(format!(
			"Tokenizer not found. Ensure {} exists",
			config::TOKENIZER
		))?;

		if !model_path.exists() {
			anyhow::bail!("Encoder model file does not exist: {}", model_path.display());
		}
		if !tokenizer_path.exists() {
			anyhow::bail!("Tokenizer file does not exist: {}", tokenizer_path.display());
		}

		Self::from_files(&model_path, &tokenizer_path)
	}

	pub fn from_files(model_path: &Path, tokenizer_path: &Path) -> Result<Self> {
		let session =
			crate::runtime::create_session(model_path).context("Failed to load encoder model")?;

		let mut tokenizer = Tokenizer::from_file(tokenizer_path)
			.map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;
		tokenizer
			.with_truncation(Some(TruncationParams {
				max_length: config::MAX_TOKENS,
				..Default::default()
			}))
			.map_err(|e| anyhow::anyhow!("Failed to configure truncation: {}", e))?;

		Ok(Self { session, tokenizer })
	}

	/// Encode one cleaned document text into a unit-length embedding
	pub fn encode(&mut self, text: &str) -> Result<Embedding> {
		let encoding = self
			.tokenizer
			.encode(text, true)
			.map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))?;

		let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&x| x as i64).collect();
		let attention: Vec<i64> = encoding
			.get_attention_mask()
			.iter()
			.map(|&x| x as i64)
			.collect();
		let type_ids: Vec<i64> = encoding.get_type_ids().iter().map(|&x| x as i64).collect();

		let shape = vec![1, input_ids.len()];
		let ids = ort::value::Value::from_array((shape.clone(), input_ids))?;
		let mask = ort::value::Value::from_array((shape.clone(), attention))?;
		let types = ort::value::Value::from_array((shape, type_ids))?;

		let outputs = self.session.run(ort::inputs![
			"input_ids" => ids,
			"attention_mask" => mask,
			"token_type_ids" => types
		])?;

		let pooled = mean_pooled(&outputs)?;
		Ok(Embedding::new(pooled))
	}

	/// Encode a batch of texts, one embedding per input in matching order
	pub fn encode_batch(&mut self, texts: &[&str]) -> Result<Vec<Embedding>> {
		let mut embeddings = Vec::with_capacity(texts.len());
		for (i, text) in texts.iter().enumerate() {
			ui::debug(&format!("Encoding document {}/{}", i + 1, texts.len()));
			embeddings.push(self.encode(text)?);
		}
		Ok(embeddings)
	}
}

/// Average the token vectors of the last hidden state
fn mean_pooled(outputs: &ort::session::SessionOutputs) -> Result<Vec<f32>> {
	let hidden = outputs
		.get("last_hidden_state")
		.context("No last_hidden_state output found")?;

	let (shape, data) = hidden.try_extract_tensor::<f32>()?;
	let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();

	let (seq, dim) = match dims.as_slice() {
		[1, seq, dim] => (*seq, *dim),
		_ => anyhow::bail!("Unexpected encoder output shape: {:?}", dims),
	};
	if seq == 0 {
		anyhow::bail!("Encoder produced an empty sequence");
	}

	let mut pooled = vec![0.0; dim];
	for t in 0..seq {
		for (d, value) in pooled.iter_mut().enumerate() {
			*value += data[t * dim + d];
		}
	}
	for value in &mut pooled {
		*value /= seq as f32;
	}

	Ok(pooled)
}
