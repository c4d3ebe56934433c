// revgrad-core/src/autograd/graph.rs

use num_traits::Float;

use crate::error::RevGradError;
use crate::node::{Node, NodeId};

/// Visitation state of one node during the depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Builds the topological order of the subgraph reachable from `root`:
/// depth-first post-order, operands visited left-to-right before the node
/// itself. A node shared by several consumers appears exactly once.
///
/// The gradient-propagation order used by the executor is the reverse of
/// the returned sequence (root first, leaves last).
///
/// A node revisited while still `InProgress` means the operand relation is
/// cyclic, which the construction API cannot produce; the traversal fails
/// fast with [`RevGradError::CycleDetected`] rather than recursing forever.
pub(crate) fn topo_sort<T: Float>(
    nodes: &[Node<T>],
    root: NodeId,
) -> Result<Vec<NodeId>, RevGradError> {
    let mut marks = vec![Mark::Unvisited; nodes.len()];
    let mut order = Vec::new();
    visit(nodes, root, &mut marks, &mut order)?;
    Ok(order)
}

fn visit<T: Float>(
    nodes: &[Node<T>],
    id: NodeId,
    marks: &mut [Mark],
    order: &mut Vec<NodeId>,
) -> Result<(), RevGradError> {
    match marks[id.0] {
        Mark::Done => return Ok(()),
        Mark::InProgress => return Err(RevGradError::CycleDetected),
        Mark::Unvisited => {}
    }
    marks[id.0] = Mark::InProgress;
    log::trace!("topo_sort: visiting {}", id);
    for operand in nodes[id.0].op.operands().into_iter().flatten() {
        visit(nodes, operand, marks, order)?;
    }
    marks[id.0] = Mark::Done;
    order.push(id);
    Ok(())
}
