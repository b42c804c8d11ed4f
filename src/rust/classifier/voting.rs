use log::debug;

use super::entry::Entry;
use super::ranking::{rank, Neighbor};
use super::tags::TagSet;

/// Outcome of a top-K vote, kept for diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct Vote<'a> {
    /// The top-K neighbors in rank order
    pub neighbors: Vec<Neighbor<'a>>,
    /// Accumulated similarity per category, in order of first appearance
    pub weights: Vec<(&'a str, f32)>,
    /// Winning category, `None` when no confident match exists
    pub winner: Option<&'a str>,
}

/// Classifies `query` against `entries` by similarity-weighted top-K vote.
///
/// Returns `None` when there are no entries, or when the best of the top-K
/// neighbors scores strictly below `min_similarity`. Confidence is judged by
/// the single best neighbor, never by aggregate vote mass.
pub fn classify<'a>(
    query: &TagSet,
    entries: &'a [Entry],
    k: usize,
    min_similarity: f32,
) -> Option<&'a str> {
    vote(query, entries, k, min_similarity).winner
}

/// Same as [`classify`] but keeps the neighbors and weights that led to the result.
pub fn vote<'a>(query: &TagSet, entries: &'a [Entry], k: usize, min_similarity: f32) -> Vote<'a> {
    if entries.is_empty() {
        debug!("No entries to vote with");
        return Vote {
            neighbors: Vec::new(),
            weights: Vec::new(),
            winner: None,
        };
    }

    let mut neighbors = rank(query, entries);
    neighbors.truncate(k);
    debug!("K nearest neighbors: {:?}", neighbors);

    let best = neighbors.first().map_or(0.0, |n| n.similarity);
    if neighbors.is_empty() || best < min_similarity {
        debug!(
            "No similar entries found above threshold (best {:.3} < {:.3})",
            best, min_similarity
        );
        return Vote {
            neighbors,
            weights: Vec::new(),
            winner: None,
        };
    }

    let weights = accumulate(&neighbors);
    let winner = pick_winner(&weights);
    Vote {
        neighbors,
        weights,
        winner,
    }
}

/// Sums similarity per category, walking neighbors in rank order
fn accumulate<'a>(neighbors: &[Neighbor<'a>]) -> Vec<(&'a str, f32)> {
    let mut weights: Vec<(&'a str, f32)> = Vec::new();
    for neighbor in neighbors {
        match weights.iter_mut().find(|(category, _)| *category == neighbor.category) {
            Some((_, weight)) => *weight += neighbor.similarity,
            None => weights.push((neighbor.category, neighbor.similarity)),
        }
    }
    weights
}

/// Highest weight wins; on ties the category seen first in rank order wins.
/// A zero weight never wins.
fn pick_winner<'a>(weights: &[(&'a str, f32)]) -> Option<&'a str> {
    let mut best: Option<(&'a str, f32)> = None;
    for &(category, weight) in weights {
        let current = best.map_or(0.0, |(_, w)| w);
        if weight > current {
            best = Some((category, weight));
        }
    }
    best.map(|(category, _)| category)
}
