// revgrad-core/src/autograd/backward.rs

use std::fmt::Debug;
use std::ops::AddAssign;

use num_traits::Float;

use crate::autograd::graph::topo_sort;
use crate::error::RevGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::arithmetic::{add, mul, neg, pow};
use crate::ops::math_elem::{exp, tanh};

/// Executes exactly one backward pass rooted at `root`.
///
/// Steps: obtain the reverse post-order from the scheduler, seed the root's
/// gradient to 1 (∂root/∂root), then invoke each node's backward rule in
/// that order. Each rule runs exactly once per call and only after every
/// consumer that could still add to its node's gradient has run, so every
/// rule observes a finalized `grad` on its own node.
///
/// Pre-existing gradients are left in place and accumulated onto; see
/// [`Graph::backward`] for the opt-in reset semantics.
pub(crate) fn run_backward<T: Float + Debug + AddAssign>(
    graph: &mut Graph<T>,
    root: NodeId,
) -> Result<(), RevGradError> {
    graph.check_id(root)?;
    let order = topo_sort(&graph.nodes, root)?;
    log::debug!(
        "backward: {} reachable nodes, root {}",
        order.len(),
        root
    );

    // Seed: derivative of the root with respect to itself.
    graph.nodes[root.0].grad = T::one();

    for &id in order.iter().rev() {
        let node = &graph.nodes[id.0];
        let op = node.op;
        let out_value = node.value;
        let out_grad = node.grad;
        match op {
            Op::Leaf => {}
            Op::Add(a, b) => add::backward(graph, a, b, out_grad),
            Op::Mul(a, b) => mul::backward(graph, a, b, out_grad),
            Op::Neg(a) => neg::backward(graph, a, out_grad),
            Op::Pow(a, exponent) => pow::backward(graph, a, exponent, out_grad),
            Op::Tanh(a) => tanh::backward(graph, a, out_value, out_grad),
            Op::Exp(a) => exp::backward(graph, a, out_value, out_grad),
        }
    }
    Ok(())
}
