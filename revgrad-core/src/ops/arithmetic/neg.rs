// revgrad-core/src/ops/arithmetic/neg.rs

use std::fmt::Debug;
use std::ops::AddAssign;

use num_traits::Float;

use crate::error::RevGradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

// --- Forward Operation ---

/// Builds `out = -a` as a fresh node.
///
/// Negation never mutates its operand: `a` keeps its value, label and
/// gradient, and any other consumer of `a` is unaffected.
pub fn neg_op<T>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, RevGradError>
where
    T: Float + Debug,
{
    graph.check_id(a)?;
    let value = -graph.value_of(a);
    let label = graph.unary_label(a, "-", "");
    Ok(graph.push(Node::new(value, Op::Neg(a), label)))
}

// --- Backward Rule ---

/// Local rule for `out = -a`: `a.grad += -out.grad`.
pub(crate) fn backward<T>(graph: &mut Graph<T>, a: NodeId, out_grad: T)
where
    T: Float + AddAssign,
{
    graph.nodes[a.0].grad += -out_grad;
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
