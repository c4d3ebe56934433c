// revgrad-core/src/graph/debug.rs

use std::fmt;
use std::fmt::Debug;

use num_traits::Float;

use crate::autograd::graph::topo_sort;
use crate::error::RevGradError;
use crate::graph::Graph;
use crate::node::NodeId;

impl<T: Float + Debug> Graph<T> {
    /// Renders the subgraph reachable from `root` in reverse topological
    /// order (root first, leaves last), one node per line:
    /// id, label (`_` when absent), value, gradient, op symbol.
    ///
    /// This is the inspection seam: it reads current state only and never
    /// mutates gradients.
    pub fn dump(&self, root: NodeId) -> Result<String, RevGradError> {
        self.check_id(root)?;
        let order = topo_sort(&self.nodes, root)?;
        let mut out = String::new();
        for &id in order.iter().rev() {
            let node = &self.nodes[id.0];
            out.push_str(&format!(
                "{} {}(value={:?}, grad={:?}) [{}]\n",
                id,
                node.label.as_deref().unwrap_or("_"),
                node.value,
                node.grad,
                node.op.symbol(),
            ));
        }
        Ok(out)
    }
}

impl<T: Float + Debug> fmt::Display for Graph<T> {
    /// Renders every node of the session in arena order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            writeln!(
                f,
                "{} {}(value={:?}, grad={:?}) [{}]",
                NodeId(i),
                node.label.as_deref().unwrap_or("_"),
                node.value,
                node.grad,
                node.op.symbol(),
            )?;
        }
        Ok(())
    }
}
