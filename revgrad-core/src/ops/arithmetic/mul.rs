// revgrad-core/src/ops/arithmetic/mul.rs

use std::fmt::Debug;
use std::ops::AddAssign;

use num_traits::Float;

use crate::error::RevGradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

// --- Forward Operation ---

/// Builds `out = a * b` as a fresh node.
///
/// `a` and `b` may be the same node; the backward rule then accumulates
/// both contributions onto it.
pub fn mul_op<T>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, RevGradError>
where
    T: Float + Debug,
{
    graph.check_id(a)?;
    graph.check_id(b)?;
    let value = graph.value_of(a) * graph.value_of(b);
    let label = graph.binary_label(a, b, "*");
    Ok(graph.push(Node::new(value, Op::Mul(a, b), label)))
}

/// Builds `out = a * k` for a raw scalar `k`, wrapping `k` into a fresh
/// constant leaf per call.
pub fn mul_scalar_op<T>(graph: &mut Graph<T>, a: NodeId, k: T) -> Result<NodeId, RevGradError>
where
    T: Float + Debug,
{
    graph.check_id(a)?;
    let c = graph.constant(k);
    mul_op(graph, a, c)
}

// --- Backward Rule ---

/// Local rule for `out = a * b`:
/// `a.grad += b.value * out.grad`, `b.grad += a.value * out.grad`.
pub(crate) fn backward<T>(graph: &mut Graph<T>, a: NodeId, b: NodeId, out_grad: T)
where
    T: Float + AddAssign,
{
    // Lire les deux valeurs avant d'accumuler: a et b peuvent être le même noeud.
    let a_value = graph.nodes[a.0].value;
    let b_value = graph.nodes[b.0].value;
    graph.nodes[a.0].grad += b_value * out_grad;
    graph.nodes[b.0].grad += a_value * out_grad;
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
