// revgrad-core/src/ops/arithmetic/div.rs

use std::fmt::Debug;

use num_traits::Float;

use crate::error::RevGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::{mul_op, pow_op};

// --- Forward Operation ---

/// Builds `out = a / b`, composed as `a * b^-1`.
///
/// There is no dedicated division tag: each call pushes a fresh reciprocal
/// `Pow` node for `b` and a `Mul` node on top, so the gradient rules are
/// inherited from the composition:
/// `a.grad += (1/b) * out.grad`, `b.grad += (-a/b²) * out.grad`.
///
/// # Errors
///
/// Fails fast with [`RevGradError::DivisionByZero`] when `b`'s value is 0.
pub fn div_op<T>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, RevGradError>
where
    T: Float + Debug,
{
    graph.check_id(a)?;
    graph.check_id(b)?;
    if graph.value_of(b) == T::zero() {
        return Err(RevGradError::DivisionByZero);
    }
    let recip = pow_op(graph, b, -T::one())?;
    mul_op(graph, a, recip)
}

/// Builds `out = a / k` for a raw nonzero scalar `k`, wrapping `k` into a
/// fresh constant leaf per call.
pub fn div_scalar_op<T>(graph: &mut Graph<T>, a: NodeId, k: T) -> Result<NodeId, RevGradError>
where
    T: Float + Debug,
{
    graph.check_id(a)?;
    if k == T::zero() {
        return Err(RevGradError::DivisionByZero);
    }
    let c = graph.constant(k);
    div_op(graph, a, c)
}

// No backward rule here: gradients flow through the Mul and Pow tags.

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
