use revgrad_core::graph::Graph;
use revgrad_core::node::NodeId;
use revgrad_core::ops::arithmetic::{add_op, mul_op};
use revgrad_core::ops::math_elem::tanh_op;
use revgrad_core::RevGradError;

/// Leaves of the two-input tanh neuron used across scenario tests.
#[allow(dead_code)]
pub struct NeuronLeaves {
    pub x1: NodeId,
    pub x2: NodeId,
    pub w1: NodeId,
    pub w2: NodeId,
    pub b: NodeId,
}

/// Builds `out = tanh(x1*w1 + x2*w2 + b)` and returns the leaves plus root.
// Added allow(dead_code) because usage across different test crates isn't
// detected easily.
#[allow(dead_code)]
pub fn build_neuron(
    graph: &mut Graph<f64>,
) -> Result<(NeuronLeaves, NodeId), RevGradError> {
    let x1 = graph.leaf_with_label(2.0, "x1");
    let x2 = graph.leaf_with_label(0.0, "x2");
    let w1 = graph.leaf_with_label(-3.0, "w1");
    let w2 = graph.leaf_with_label(1.0, "w2");
    let b = graph.leaf_with_label(6.8813735870195432, "b");

    let x1w1 = mul_op(graph, x1, w1)?;
    let x2w2 = mul_op(graph, x2, w2)?;
    let x1w1x2w2 = add_op(graph, x1w1, x2w2)?;
    let n = add_op(graph, x1w1x2w2, b)?;
    let out = tanh_op(graph, n)?;

    Ok((NeuronLeaves { x1, x2, w1, w2, b }, out))
}
