//! Two-phase greedy clustering over a pairwise similarity matrix
//!
//! Phase 1 locks strong pairs (similarity above the pair threshold),
//! phase 2 repeatedly assigns the single best remaining document to the
//! group it matches best, and whatever falls below the assign threshold
//! ends up in singleton groups. All comparisons are strict, so the
//! candidate encountered first in iteration order wins every tie and the
//! whole procedure is deterministic.

use std::collections::{HashMap, HashSet};

use crate::core::{ClusterParams, Group, SimilarityMatrix};
use crate::ui;

/// Run both clustering phases and return groups partitioning `0..sim.len()`
pub fn cluster_documents(sim: &SimilarityMatrix, params: &ClusterParams) -> Vec<Group> {
	let (mut groups, paired) = pair_documents(sim, params);

	let remaining: Vec<usize> = (0..sim.len()).filter(|i| !paired.contains(i)).collect();

	ui::debug(&format!(
		"Initial groups (pairs only): {}, docs to assign iteratively: {}",
		groups.len(),
		remaining.len()
	));

	assign_remaining(remaining, &mut groups, sim, params.assign_threshold);
	groups
}

/// Phase 1: form locked two-document groups above the pair threshold.
///
/// The historical scan visits each `i` once, in index order, and considers
/// only forward candidates `j > i`: an `i` that finds no partner is never
/// retried as the outer index, though it stays eligible as a later doc's
/// `best_j`. A doc can also be consumed by an earlier `i` that it is not
/// itself best-matched to (first-come priority). This is the documented
/// behavior of the procedure, not an accident; `symmetric_pairs` opts into
/// true mutual-best matching instead.
pub fn pair_documents(
	sim: &SimilarityMatrix,
	params: &ClusterParams,
) -> (Vec<Group>, HashSet<usize>) {
	let mut groups = Vec::new();
	let mut paired = HashSet::new();

	if params.symmetric_pairs {
		while mutual_pass(sim, params.pair_threshold, &mut groups, &mut paired) > 0 {}
	} else {
		forward_pass(sim, params.pair_threshold, &mut groups, &mut paired);
	}

	(groups, paired)
}

fn forward_pass(
	sim: &SimilarityMatrix,
	threshold: f32,
	groups: &mut Vec<Group>,
	paired: &mut HashSet<usize>,
) {
	let n = sim.len();

	for i in 0..n {
		if paired.contains(&i) {
			continue;
		}

		let mut best: Option<(usize, f32)> = None;
		for j in (i + 1)..n {
			if paired.contains(&j) {
				continue;
			}
			let score = sim.get(i, j);
			if best.map_or(true, |(_, b)| score > b) {
				best = Some((j, score));
			}
		}

		if let Some((j, score)) = best {
			if score >= threshold {
				ui::debug(&format!("Pair formed: {} & {} (sim={:.3})", i, j, score));
				groups.push(Group::pair(i, j));
				paired.insert(i);
				paired.insert(j);
			}
		}
	}
}

/// One pass of mutual-best matching over the unpaired docs.
///
/// Commits only pairs where each side is the other's best remaining
/// candidate; returns how many pairs were formed so the caller can
/// iterate to a fixpoint.
fn mutual_pass(
	sim: &SimilarityMatrix,
	threshold: f32,
	groups: &mut Vec<Group>,
	paired: &mut HashSet<usize>,
) -> usize {
	let unpaired: Vec<usize> = (0..sim.len()).filter(|i| !paired.contains(i)).collect();

	let mut best: HashMap<usize, (usize, f32)> = HashMap::new();
	for &i in &unpaired {
		let mut b: Option<(usize, f32)> = None;
		for &j in &unpaired {
			if j == i {
				continue;
			}
			let score = sim.get(i, j);
			if b.map_or(true, |(_, s)| score > s) {
				b = Some((j, score));
			}
		}
		if let Some(found) = b {
			best.insert(i, found);
		}
	}

	let mut formed = 0;
	for &i in &unpaired {
		if paired.contains(&i) {
			continue;
		}
		let Some(&(j, score)) = best.get(&i) else {
			continue;
		};
		if i > j || score < threshold || paired.contains(&j) {
			continue;
		}
		if best.get(&j).map(|&(k, _)| k) == Some(i) {
			ui::debug(&format!("Mutual pair: {} & {} (sim={:.3})", i, j, score));
			groups.push(Group::pair(i, j));
			paired.insert(i);
			paired.insert(j);
			formed += 1;
		}
	}
	formed
}

/// Phase 2: drain `remaining` into `groups`.
///
/// Each round scans the full remaining×groups cross-product (remaining in
/// the given order, groups in formation order) for the single best
/// `(doc, group)` mean-similarity match and commits it. Once the global
/// best drops below `threshold` every document still remaining becomes its
/// own singleton group. Quadratic-ish, like the similarity matrix itself.
pub fn assign_remaining(
	mut remaining: Vec<usize>,
	groups: &mut Vec<Group>,
	sim: &SimilarityMatrix,
	threshold: f32,
) {
	let mut round = 1;

	while !remaining.is_empty() {
		let mut best: Option<(usize, usize, f32)> = None;

		for (pos, &idx) in remaining.iter().enumerate() {
			for (g_id, group) in groups.iter().enumerate() {
				let score = sim.mean_to_group(idx, &group.members);
				if best.map_or(true, |(_, _, b)| score > b) {
					best = Some((pos, g_id, score));
				}
			}
		}

		match best {
			Some((pos, g_id, score)) if score >= threshold => {
				let idx = remaining.remove(pos);
				groups[g_id].members.push(idx);
				ui::debug(&format!(
					"Round {}: assigned doc {} to group {} (sim={:.3})",
					round, idx, g_id, score
				));
				round += 1;
			}
			other => {
				if let Some((_, _, score)) = other {
					ui::debug(&format!(
						"Stopping assignment: best sim={:.3} < {}",
						score, threshold
					));
				}
				for idx in remaining.drain(..) {
					groups.push(Group::singleton(idx));
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn matrix(n: usize, entries: &[(usize, usize, f32)]) -> SimilarityMatrix {
		SimilarityMatrix::from_fn(n, |i, j| {
			entries
				.iter()
				.find(|&&(a, b, _)| (a, b) == (i, j) || (a, b) == (j, i))
				.map(|&(_, _, s)| s)
				.unwrap_or(0.0)
		})
	}

	fn members(groups: &[Group]) -> Vec<Vec<usize>> {
		groups.iter().map(|g| g.members.clone()).collect()
	}

	#[test]
	fn two_strong_pairs_no_leftovers() {
		let sim = matrix(4, &[(0, 1, 0.9), (2, 3, 0.85)]);
		let groups = cluster_documents(&sim, &ClusterParams::default());
		assert_eq!(members(&groups), vec![vec![0, 1], vec![2, 3]]);
	}

	#[test]
	fn below_pair_threshold_means_all_singletons() {
		// 0.5 clears the assign threshold but not the pair threshold;
		// with no groups to join, phase 2 stops immediately.
		let sim = matrix(3, &[(0, 1, 0.5), (0, 2, 0.1), (1, 2, 0.1)]);
		let groups = cluster_documents(&sim, &ClusterParams::default());
		assert_eq!(members(&groups), vec![vec![0], vec![1], vec![2]]);
	}

	#[test]
	fn leftover_joins_best_group_above_assign_threshold() {
		let sim = matrix(3, &[(0, 1, 0.9), (0, 2, 0.4), (1, 2, 0.2)]);
		let groups = cluster_documents(&sim, &ClusterParams::default());
		// mean(sim[2][0], sim[2][1]) = 0.3 >= 0.2
		assert_eq!(members(&groups), vec![vec![0, 1, 2]]);
	}

	#[test]
	fn singleton_fallback_below_assign_threshold() {
		let sim = matrix(3, &[(0, 1, 0.9), (0, 2, 0.1), (1, 2, 0.1)]);
		let groups = cluster_documents(&sim, &ClusterParams::default());
		assert_eq!(members(&groups), vec![vec![0, 1], vec![2]]);
	}

	#[test]
	fn partition_invariant_holds() {
		// deterministic pseudo-random scores in [0, 1)
		let n = 23;
		let sim = SimilarityMatrix::from_fn(n, |i, j| {
			let x = (i * 31 + j * 17) % 97;
			x as f32 / 97.0
		});
		let groups = cluster_documents(&sim, &ClusterParams::default());

		let mut seen: Vec<usize> = groups.iter().flat_map(|g| g.members.clone()).collect();
		seen.sort_unstable();
		assert_eq!(seen, (0..n).collect::<Vec<_>>());
	}

	#[test]
	fn raising_pair_threshold_never_adds_pairs() {
		let sim = SimilarityMatrix::from_fn(12, |i, j| {
			let x = (i * 13 + j * 7) % 41;
			x as f32 / 41.0
		});

		let mut last = usize::MAX;
		for threshold in [0.2, 0.5, 0.8, 0.95] {
			let params = ClusterParams {
				pair_threshold: threshold,
				..ClusterParams::default()
			};
			let (pairs, _) = pair_documents(&sim, &params);
			assert!(pairs.len() <= last);
			last = pairs.len();
		}
	}

	#[test]
	fn exact_tie_goes_to_first_candidate() {
		let sim = matrix(3, &[(0, 1, 0.9), (0, 2, 0.9)]);
		let params = ClusterParams::default();
		let (pairs, paired) = pair_documents(&sim, &params);
		assert_eq!(members(&pairs), vec![vec![0, 1]]);
		assert!(!paired.contains(&2));

		// identical input, identical output
		let first = cluster_documents(&sim, &params);
		let second = cluster_documents(&sim, &params);
		assert_eq!(first, second);
	}

	#[test]
	fn first_come_priority_can_steal_a_better_match() {
		// doc 1's best partner is doc 2, but doc 0 claims it first
		let sim = matrix(3, &[(0, 1, 0.85), (1, 2, 0.95), (0, 2, 0.1)]);
		let (pairs, _) = pair_documents(&sim, &ClusterParams::default());
		assert_eq!(members(&pairs), vec![vec![0, 1]]);
	}

	#[test]
	fn symmetric_variant_forms_mutual_pairs() {
		let sim = matrix(3, &[(0, 1, 0.85), (1, 2, 0.95), (0, 2, 0.1)]);
		let params = ClusterParams {
			symmetric_pairs: true,
			..ClusterParams::default()
		};
		let (pairs, paired) = pair_documents(&sim, &params);
		assert_eq!(members(&pairs), vec![vec![1, 2]]);
		assert!(!paired.contains(&0));
	}

	#[test]
	fn assignment_order_follows_global_best() {
		// two groups, two leftovers; doc 3 matches group 1 strongest and
		// must be committed before doc 2 even though 2 comes first
		let sim = matrix(
			6,
			&[
				(0, 1, 0.9),
				(4, 5, 0.9),
				(2, 0, 0.3),
				(2, 1, 0.3),
				(3, 4, 0.7),
				(3, 5, 0.7),
			],
		);
		let mut groups = vec![Group::pair(0, 1), Group::pair(4, 5)];
		assign_remaining(vec![2, 3], &mut groups, &sim, 0.2);
		assert_eq!(members(&groups), vec![vec![0, 1, 2], vec![4, 5, 3]]);
	}

	#[test]
	fn empty_matrix_produces_no_groups() {
		let sim = SimilarityMatrix::from_fn(0, |_, _| 0.0);
		let groups = cluster_documents(&sim, &ClusterParams::default());
		assert!(groups.is_empty());
	}
}
