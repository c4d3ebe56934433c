// revgrad-core/src/ops/math_elem/exp.rs

use std::fmt::Debug;
use std::ops::AddAssign;

use num_traits::Float;

use crate::error::RevGradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

// --- Forward Operation ---

/// Builds `out = e^a` as a fresh node.
///
/// Overflow is not trapped: large inputs produce an IEEE infinity.
pub fn exp_op<T>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, RevGradError>
where
    T: Float + Debug,
{
    graph.check_id(a)?;
    let value = graph.value_of(a).exp();
    let label = graph.unary_label(a, "exp(", ")");
    Ok(graph.push(Node::new(value, Op::Exp(a), label)))
}

// --- Backward Rule ---

/// Local rule for `out = e^a`: `a.grad += out.value * out.grad`
/// (the exponential is its own derivative).
pub(crate) fn backward<T>(graph: &mut Graph<T>, a: NodeId, out_value: T, out_grad: T)
where
    T: Float + AddAssign,
{
    graph.nodes[a.0].grad += out_value * out_grad;
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
