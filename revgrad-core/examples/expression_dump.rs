//! # Exemple: inspection d'une expression simple
//!
//! Builds `c = a - b` (composed as `a + (-b)`), then dumps the expression
//! graph before and after the backward pass to show how gradients
//! accumulate onto every node.
//!
//! ## Exécution
//! `cargo run --example expression_dump`

use revgrad_core::graph::Graph;
use revgrad_core::ops::arithmetic::sub_op;
use revgrad_core::RevGradError;

fn main() -> Result<(), RevGradError> {
    let mut graph = Graph::new();

    let a = graph.leaf_with_label(2.0f64, "a");
    let b = graph.leaf_with_label(4.0, "b");
    let c = sub_op(&mut graph, a, b)?;
    graph.set_label(c, "c")?;

    println!("Before backward:");
    println!("{}", graph.dump(c)?);

    graph.backward(c)?;

    println!("After backward:");
    println!("{}", graph.dump(c)?);

    Ok(())
}
