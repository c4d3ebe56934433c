// revgrad-core/src/ops/arithmetic/pow.rs

use std::fmt::Debug;
use std::ops::AddAssign;

use num_traits::Float;

use crate::error::RevGradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

// --- Forward Operation ---

/// Builds `out = a^exponent` for a fixed scalar exponent.
///
/// The exponent is a hyperparameter of the node, not a differentiable
/// quantity; only the base receives a gradient.
///
/// # Errors
///
/// Fails fast with [`RevGradError::InvalidPowOperand`] on the two domain
/// errors: base 0 with a negative exponent, and a negative base with a
/// non-integer exponent.
pub fn pow_op<T>(graph: &mut Graph<T>, a: NodeId, exponent: T) -> Result<NodeId, RevGradError>
where
    T: Float + Debug,
{
    graph.check_id(a)?;
    let base = graph.value_of(a);
    if (base == T::zero() && exponent < T::zero())
        || (base < T::zero() && exponent.fract() != T::zero())
    {
        return Err(RevGradError::InvalidPowOperand {
            base: base.to_f64().unwrap_or(f64::NAN),
            exponent: exponent.to_f64().unwrap_or(f64::NAN),
        });
    }
    let value = base.powf(exponent);
    let label = graph.unary_label(a, "", &format!("^{:?}", exponent));
    Ok(graph.push(Node::new(value, Op::Pow(a, exponent), label)))
}

// --- Backward Rule ---

/// Local rule for `out = a^k`: `a.grad += k * a.value^(k-1) * out.grad`.
pub(crate) fn backward<T>(graph: &mut Graph<T>, a: NodeId, exponent: T, out_grad: T)
where
    T: Float + AddAssign,
{
    let base = graph.nodes[a.0].value;
    graph.nodes[a.0].grad += exponent * base.powf(exponent - T::one()) * out_grad;
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
