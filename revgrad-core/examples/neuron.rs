//! # Exemple: un neurone tanh à deux entrées
//!
//! Builds the forward graph of a single neuron,
//! `out = tanh(x1*w1 + x2*w2 + b)`, runs one backward pass, and dumps the
//! reachable subgraph in reverse topological order (root first).
//!
//! ## Fonctionnalités Démontrées:
//! 1. **Leaf creation** with cosmetic labels.
//! 2. **Graph construction** through the `_op` functions.
//! 3. **Backward pass** seeding ∂out/∂out = 1 and accumulating every
//!    leaf's gradient.
//! 4. **Debug dump** as the inspection surface.
//!
//! ## Exécution
//! `cargo run --example neuron`

use revgrad_core::graph::Graph;
use revgrad_core::ops::arithmetic::{add_op, mul_op};
use revgrad_core::ops::math_elem::tanh_op;
use revgrad_core::RevGradError;

fn main() -> Result<(), RevGradError> {
    let mut graph = Graph::new();

    let x1 = graph.leaf_with_label(2.0f64, "x1");
    let x2 = graph.leaf_with_label(0.0, "x2");
    let w1 = graph.leaf_with_label(-3.0, "w1");
    let w2 = graph.leaf_with_label(1.0, "w2");
    let b = graph.leaf_with_label(6.8813735870195432, "b");

    let x1w1 = mul_op(&mut graph, x1, w1)?;
    let x2w2 = mul_op(&mut graph, x2, w2)?;
    let x1w1x2w2 = add_op(&mut graph, x1w1, x2w2)?;
    let n = add_op(&mut graph, x1w1x2w2, b)?;
    graph.set_label(n, "n")?;
    let out = tanh_op(&mut graph, n)?;
    graph.set_label(out, "out")?;

    graph.backward(out)?;

    println!("{}", graph.dump(out)?);
    println!(
        "d(out)/d(x1) = {}, d(out)/d(w1) = {}",
        graph.grad(x1)?,
        graph.grad(w1)?
    );

    Ok(())
}
