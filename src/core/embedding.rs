//! Normalized embedding vectors for semantic similarity

#[derive(Debug, Clone)]
pub struct Embedding(pub(crate) Vec<f32>);

impl Embedding {
	/// Create normalized embedding from raw data
	pub fn new(data: Vec<f32>) -> Self {
		Self(normalize(&data))
	}

	/// Create from pre-normalized data
	pub fn raw(data: Vec<f32>) -> Self {
		Self(data)
	}

	/// Get raw vector
	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Cosine similarity (dot product of unit vectors)
	pub fn similarity(&self, other: &Self) -> f32 {
		self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
	}
}

fn normalize(v: &[f32]) -> Vec<f32> {
	let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
	if norm > 0.0 {
		v.iter().map(|x| x / norm).collect()
	} else {
		v.to_vec()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_normalizes_to_unit_length() {
		let e = Embedding::new(vec![3.0, 4.0]);
		assert!((e.similarity(&e) - 1.0).abs() < 1e-6);
	}

	#[test]
	fn orthogonal_vectors_score_zero() {
		let a = Embedding::new(vec![1.0, 0.0]);
		let b = Embedding::new(vec![0.0, 1.0]);
		assert!(a.similarity(&b).abs() < 1e-6);
	}

	#[test]
	fn zero_vector_survives_normalization() {
		let e = Embedding::new(vec![0.0, 0.0]);
		assert_eq!(e.as_slice(), &[0.0, 0.0]);
	}
}
