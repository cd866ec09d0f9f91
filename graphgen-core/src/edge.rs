//! Node identifiers, weights, and the pair-enumerating edge sampler.
//!
//! [`Edges`] walks every unordered pair `(i, j)` with `i < j` in ascending
//! order and consumes randomness in a fixed sequence per pair: one presence
//! draw, then (only for present edges) one magnitude draw and one sign draw.

use std::fmt;

use rand::Rng;
use serde::{Serialize, Serializer};

/// Column names written as the first row of every dataset.
pub const HEADER: [&str; 3] = ["source", "target", "weight"];

/// Zero-based graph vertex rendered as `Node<index>`.
///
/// # Examples
/// ```
/// use graphgen_core::NodeId;
///
/// assert_eq!(NodeId::new(42).to_string(), "Node42");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a zero-based node index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn new(index: usize) -> Self { Self(index) }

    /// Returns the zero-based node index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node{}", self.0)
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Nonzero edge weight with magnitude in `[1, 10]`.
///
/// # Examples
/// ```
/// use graphgen_core::Weight;
///
/// let weight = Weight::new(-7).expect("-7 is in range");
/// assert_eq!(weight.magnitude(), 7);
/// assert!(weight.is_negative());
/// assert!(Weight::new(0).is_none());
/// assert!(Weight::new(11).is_none());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Weight(i32);

impl Weight {
    /// Smallest magnitude a weight may take.
    pub const MIN_MAGNITUDE: i32 = 1;
    /// Largest magnitude a weight may take.
    pub const MAX_MAGNITUDE: i32 = 10;

    /// Validates `value` and wraps it, returning `None` when the magnitude is
    /// outside `[MIN_MAGNITUDE, MAX_MAGNITUDE]`.
    #[must_use]
    pub const fn new(value: i32) -> Option<Self> {
        let magnitude = value.unsigned_abs();
        if magnitude >= Self::MIN_MAGNITUDE.unsigned_abs()
            && magnitude <= Self::MAX_MAGNITUDE.unsigned_abs()
        {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the signed weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> i32 { self.0 }

    /// Returns the absolute value of the weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn magnitude(self) -> i32 { self.0.abs() }

    /// Returns `true` when the weight was negated.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_negative(self) -> bool { self.0 < 0 }

    // Callers guarantee `magnitude` was sampled from the valid range.
    const fn sampled(magnitude: i32, negate: bool) -> Self {
        if negate { Self(-magnitude) } else { Self(magnitude) }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One realised edge, serialised as `source,target,weight`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct EdgeRecord {
    /// Lower-indexed endpoint.
    pub source: NodeId,
    /// Higher-indexed endpoint.
    pub target: NodeId,
    /// Signed edge weight.
    pub weight: Weight,
}

/// Probabilities that drive [`Edges`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct EdgeSampling {
    pub(crate) edge_probability: f64,
    pub(crate) negative_weight_probability: f64,
}

/// Lazy iterator over the edges of a randomly sampled graph.
///
/// Created by [`crate::GraphGenerator::edges`].
#[derive(Debug)]
pub struct Edges<'rng, R> {
    rng: &'rng mut R,
    num_nodes: usize,
    sampling: EdgeSampling,
    next_pair: Option<(usize, usize)>,
    pairs_considered: usize,
}

impl<'rng, R: Rng> Edges<'rng, R> {
    pub(crate) fn new(rng: &'rng mut R, num_nodes: usize, sampling: EdgeSampling) -> Self {
        let next_pair = (num_nodes >= 2).then_some((0, 1));
        Self {
            rng,
            num_nodes,
            sampling,
            next_pair,
            pairs_considered: 0,
        }
    }

    /// Returns how many node pairs have been evaluated so far.
    #[must_use]
    pub const fn pairs_considered(&self) -> usize {
        self.pairs_considered
    }

    fn advance(&mut self) -> Option<(usize, usize)> {
        let (source, target) = self.next_pair?;
        let following_target = target.saturating_add(1);
        let following_source = source.saturating_add(1);
        self.next_pair = if following_target < self.num_nodes {
            Some((source, following_target))
        } else if following_source.saturating_add(1) < self.num_nodes {
            Some((following_source, following_source.saturating_add(1)))
        } else {
            None
        };
        Some((source, target))
    }

    fn sample_edge(&mut self) -> Option<Weight> {
        if self.rng.gen_range(0.0..1.0) >= self.sampling.edge_probability {
            return None;
        }
        let magnitude = self
            .rng
            .gen_range(Weight::MIN_MAGNITUDE..=Weight::MAX_MAGNITUDE);
        let negate = self.rng.gen_range(0.0..1.0) < self.sampling.negative_weight_probability;
        Some(Weight::sampled(magnitude, negate))
    }
}

impl<R: Rng> Iterator for Edges<'_, R> {
    type Item = EdgeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (source, target) = self.advance()?;
            self.pairs_considered = self.pairs_considered.saturating_add(1);
            if let Some(weight) = self.sample_edge() {
                return Some(EdgeRecord {
                    source: NodeId::new(source),
                    target: NodeId::new(target),
                    weight,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    fn sampling(edge_probability: f64, negative_weight_probability: f64) -> EdgeSampling {
        EdgeSampling {
            edge_probability,
            negative_weight_probability,
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(4, 6)]
    #[case(7, 21)]
    fn full_probability_visits_every_pair(#[case] num_nodes: usize, #[case] expected: usize) {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut edges = Edges::new(&mut rng, num_nodes, sampling(1.0, 0.0));
        let count = edges.by_ref().count();
        assert_eq!(count, expected);
        assert_eq!(edges.pairs_considered(), expected);
    }

    #[test]
    fn pairs_are_emitted_in_row_major_order() {
        let mut rng = SmallRng::seed_from_u64(11);
        let pairs: Vec<(usize, usize)> = Edges::new(&mut rng, 4, sampling(1.0, 0.0))
            .map(|edge| (edge.source.index(), edge.target.index()))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn zero_probability_still_considers_every_pair() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut edges = Edges::new(&mut rng, 5, sampling(0.0, 0.0));
        assert!(edges.next().is_none());
        assert_eq!(edges.pairs_considered(), 10);
    }

    #[rstest]
    #[case::all_positive(0.0, false)]
    #[case::all_negative(1.0, true)]
    fn sign_follows_negative_probability(#[case] negative: f64, #[case] expect_negative: bool) {
        let mut rng = SmallRng::seed_from_u64(17);
        for edge in Edges::new(&mut rng, 12, sampling(1.0, negative)) {
            assert_eq!(edge.weight.is_negative(), expect_negative);
            assert!((1..=10).contains(&edge.weight.magnitude()));
        }
    }

    #[rstest]
    #[case(1, Some(1))]
    #[case(10, Some(10))]
    #[case(-10, Some(-10))]
    #[case(0, None)]
    #[case(11, None)]
    #[case(-11, None)]
    fn weight_new_enforces_range(#[case] raw: i32, #[case] expected: Option<i32>) {
        assert_eq!(Weight::new(raw).map(Weight::get), expected);
    }

    #[test]
    fn node_id_renders_without_padding() {
        assert_eq!(NodeId::new(0).to_string(), "Node0");
        assert_eq!(NodeId::new(1000).to_string(), "Node1000");
    }
}
