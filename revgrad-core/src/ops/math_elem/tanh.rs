// revgrad-core/src/ops/math_elem/tanh.rs

use std::fmt::Debug;
use std::ops::AddAssign;

use num_traits::Float;

use crate::error::RevGradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

// --- Forward Operation ---

/// Builds `out = tanh(a)` as a fresh node, computed as
/// `(e^{2x} - 1) / (e^{2x} + 1)`.
///
/// The output always satisfies `|out| < 1` for finite input (saturating to
/// ±1 in the limit), and the local derivative `1 - out²` lies in `(0, 1]`.
pub fn tanh_op<T>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, RevGradError>
where
    T: Float + Debug,
{
    graph.check_id(a)?;
    let x = graph.value_of(a);
    let two = T::one() + T::one();
    let e2x = (two * x).exp();
    let value = (e2x - T::one()) / (e2x + T::one());
    let label = graph.unary_label(a, "tanh(", ")");
    Ok(graph.push(Node::new(value, Op::Tanh(a), label)))
}

// --- Backward Rule ---

/// Local rule for `t = tanh(a)`: `a.grad += (1 - t²) * out.grad`.
///
/// The forward output is reused as `t`; the input value is not needed.
pub(crate) fn backward<T>(graph: &mut Graph<T>, a: NodeId, out_value: T, out_grad: T)
where
    T: Float + AddAssign,
{
    graph.nodes[a.0].grad += (T::one() - out_value * out_value) * out_grad;
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
