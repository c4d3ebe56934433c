// revgrad-core/src/ops/arithmetic/sub.rs

use std::fmt::Debug;

use num_traits::Float;

use crate::error::RevGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::{add_op, neg_op};

// --- Forward Operation ---

/// Builds `out = a - b`, composed as `a + (-b)`.
///
/// There is no dedicated subtraction tag: each call pushes a fresh `Neg`
/// node for `b` and an `Add` node on top. The negated helper belongs to
/// this application alone; two subtractions by the same node never share
/// it.
pub fn sub_op<T>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, RevGradError>
where
    T: Float + Debug,
{
    graph.check_id(a)?;
    graph.check_id(b)?;
    let neg_b = neg_op(graph, b)?;
    add_op(graph, a, neg_b)
}

/// Builds `out = a - k` for a raw scalar `k`, wrapping `k` into a fresh
/// constant leaf per call.
pub fn sub_scalar_op<T>(graph: &mut Graph<T>, a: NodeId, k: T) -> Result<NodeId, RevGradError>
where
    T: Float + Debug,
{
    graph.check_id(a)?;
    let c = graph.constant(k);
    sub_op(graph, a, c)
}

// No backward rule here: gradients flow through the Add and Neg tags.

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
