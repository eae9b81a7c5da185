//! Dense pairwise cosine-similarity matrix

use crate::core::Embedding;

/// Symmetric n×n matrix of cosine similarities between corpus documents.
///
/// Built once from embeddings and read-only afterwards. The diagonal is
/// filled with 1.0 but never consulted; self-pairs are excluded by the
/// clustering loops.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
	n: usize,
	values: Vec<f32>,
}

impl SimilarityMatrix {
	/// Compute all pairwise similarities for one embedding per document,
	/// in corpus order.
	pub fn from_embeddings(embeddings: &[Embedding]) -> Self {
		Self::from_fn(embeddings.len(), |i, j| {
			embeddings[i].similarity(&embeddings[j])
		})
	}

	/// Build from an explicit score function (exercised heavily by tests)
	pub fn from_fn(n: usize, score: impl Fn(usize, usize) -> f32) -> Self {
		let mut values = vec![0.0; n * n];
		for i in 0..n {
			values[i * n + i] = 1.0;
			for j in (i + 1)..n {
				let s = score(i, j);
				values[i * n + j] = s;
				values[j * n + i] = s;
			}
		}
		Self { n, values }
	}

	pub fn get(&self, i: usize, j: usize) -> f32 {
		self.values[i * self.n + j]
	}

	/// Number of documents covered
	pub fn len(&self) -> usize {
		self.n
	}

	pub fn is_empty(&self) -> bool {
		self.n == 0
	}

	/// Average similarity between `idx` and every member of a group
	pub fn mean_to_group(&self, idx: usize, members: &[usize]) -> f32 {
		let sum: f32 = members.iter().map(|&m| self.get(idx, m)).sum();
		sum / members.len() as f32
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_embeddings_is_symmetric() {
		let embs = vec![
			Embedding::new(vec![1.0, 0.0, 0.0]),
			Embedding::new(vec![0.7, 0.7, 0.0]),
			Embedding::new(vec![0.0, 0.0, 1.0]),
		];
		let sim = SimilarityMatrix::from_embeddings(&embs);
		assert_eq!(sim.len(), 3);
		for i in 0..3 {
			for j in 0..3 {
				assert_eq!(sim.get(i, j), sim.get(j, i));
			}
		}
		assert!((sim.get(0, 1) - 0.7071).abs() < 1e-3);
		assert!(sim.get(0, 2).abs() < 1e-6);
	}

	#[test]
	fn mean_to_group_averages_members() {
		let sim = SimilarityMatrix::from_fn(4, |i, j| match (i, j) {
			(0, 1) => 0.9,
			(0, 2) => 0.3,
			_ => 0.0,
		});
		assert!((sim.mean_to_group(0, &[1, 2]) - 0.6).abs() < 1e-6);
		assert!((sim.mean_to_group(0, &[3]) - 0.0).abs() < 1e-6);
	}
}
