// revgrad-core/src/ops/arithmetic/add.rs

use std::fmt::Debug;
use std::ops::AddAssign;

use num_traits::Float;

use crate::error::RevGradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

// --- Forward Operation ---

/// Builds `out = a + b` as a fresh node.
///
/// Neither operand is mutated; the derived label (`a+b`) is attached only
/// when both operands are labeled.
pub fn add_op<T>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, RevGradError>
where
    T: Float + Debug,
{
    graph.check_id(a)?;
    graph.check_id(b)?;
    let value = graph.value_of(a) + graph.value_of(b);
    let label = graph.binary_label(a, b, "+");
    Ok(graph.push(Node::new(value, Op::Add(a, b), label)))
}

/// Builds `out = a + k` for a raw scalar `k`.
///
/// Each call wraps `k` into its own fresh constant leaf; scalar constants
/// are never shared between applications.
pub fn add_scalar_op<T>(graph: &mut Graph<T>, a: NodeId, k: T) -> Result<NodeId, RevGradError>
where
    T: Float + Debug,
{
    graph.check_id(a)?;
    let c = graph.constant(k);
    add_op(graph, a, c)
}

// --- Backward Rule ---

/// Local rule for `out = a + b`: routes `out.grad` unchanged into both
/// operands.
pub(crate) fn backward<T>(graph: &mut Graph<T>, a: NodeId, b: NodeId, out_grad: T)
where
    T: Float + AddAssign,
{
    graph.nodes[a.0].grad += out_grad;
    graph.nodes[b.0].grad += out_grad;
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
