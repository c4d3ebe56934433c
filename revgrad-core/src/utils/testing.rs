use std::fmt::Debug;

use num_traits::Float;

use crate::graph::Graph;
use crate::node::NodeId;

/// Checks that two scalars are approximately equal (within tolerance).
/// Panics with a descriptive message on mismatch.
pub fn check_scalar_near<T: Float + Debug>(actual: T, expected: T, tolerance: T) {
    let diff = (actual - expected).abs();
    if diff > tolerance {
        panic!(
            "Scalar mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Helper to create labeled leaves from `(label, value)` pairs.
pub fn labeled_leaves<T: Float + Debug>(
    graph: &mut Graph<T>,
    values: &[(&str, T)],
) -> Vec<NodeId> {
    values
        .iter()
        .map(|&(label, value)| graph.leaf_with_label(value, label))
        .collect()
}
