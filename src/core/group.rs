//! Cluster groups and clustering parameters

use serde::Serialize;

/// A cluster of document indices.
///
/// Insertion order reflects formation order (pair first, assignments after)
/// and carries no meaning beyond reproducibility. After clustering finishes
/// the groups partition `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
	pub members: Vec<usize>,
}

impl Group {
	pub fn pair(a: usize, b: usize) -> Self {
		Self { members: vec![a, b] }
	}

	pub fn singleton(idx: usize) -> Self {
		Self { members: vec![idx] }
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}
}

/// A finished group with its derived folder label
#[derive(Debug, Clone, Serialize)]
pub struct NamedGroup {
	pub name: String,
	pub members: Vec<usize>,
}

/// Thresholds and variant switches for one clustering run.
///
/// Passed explicitly from the CLI down to the clustering functions;
/// there is no ambient configuration.
#[derive(Debug, Clone, Copy)]
pub struct ClusterParams {
	/// Minimum similarity for a phase-1 pair (default 0.8)
	pub pair_threshold: f32,
	/// Minimum mean similarity to join a group in phase 2 (default 0.2)
	pub assign_threshold: f32,
	/// Re-run pairing passes to fixpoint instead of the historical
	/// single forward scan (see `processing::cluster::pair_documents`)
	pub symmetric_pairs: bool,
}

impl Default for ClusterParams {
	fn default() -> Self {
		Self {
			pair_threshold: crate::config::INITIAL_PAIR_THRESHOLD,
			assign_threshold: crate::config::ASSIGN_THRESHOLD,
			symmetric_pairs: false,
		}
	}
}
