// revgrad-core/src/graph/mod.rs

use std::fmt::Debug;
use std::ops::AddAssign;

use num_traits::Float;

use crate::autograd;
use crate::error::RevGradError;
use crate::node::{Node, NodeId, Op};

mod debug;

/// Owning session for one expression graph.
///
/// Every node lives in this arena and is referenced by a stable [`NodeId`]
/// index; nodes are destroyed only when the `Graph` itself is dropped.
/// A `Graph` is a single-threaded session: all construction and backward
/// passes go through `&mut self`, so concurrent mutation of one session is
/// unrepresentable in safe code.
pub struct Graph<T: Float> {
    pub(crate) nodes: Vec<Node<T>>,
}

impl<T: Float + Debug> Graph<T> {
    /// Creates an empty graph session.
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Creates an empty graph session with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes owned by this session.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates an unlabeled leaf (input/constant) node.
    pub fn leaf(&mut self, value: T) -> NodeId {
        self.push(Node::new(value, Op::Leaf, None))
    }

    /// Creates a labeled leaf node.
    pub fn leaf_with_label(&mut self, value: T, label: impl Into<String>) -> NodeId {
        self.push(Node::new(value, Op::Leaf, Some(label.into())))
    }

    /// Creates a fresh constant leaf labeled after its value.
    ///
    /// Every call creates a distinct node: constants are never interned or
    /// shared behind the caller's back. Callers that want sharing reuse the
    /// returned `NodeId` explicitly.
    pub fn constant(&mut self, value: T) -> NodeId {
        let label = format!("const {:?}", value);
        self.push(Node::new(value, Op::Leaf, Some(label)))
    }

    /// Borrows a node by id.
    pub fn node(&self, id: NodeId) -> Result<&Node<T>, RevGradError> {
        self.check_id(id)?;
        Ok(&self.nodes[id.0])
    }

    /// Forward value of `id`.
    pub fn value(&self, id: NodeId) -> Result<T, RevGradError> {
        Ok(self.node(id)?.value)
    }

    /// Gradient accumulated on `id` so far.
    pub fn grad(&self, id: NodeId) -> Result<T, RevGradError> {
        Ok(self.node(id)?.grad)
    }

    /// Replaces the cosmetic label of `id`.
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), RevGradError> {
        self.check_id(id)?;
        self.nodes[id.0].label = Some(label.into());
        Ok(())
    }

    /// Resets the gradient of every node in the session to zero.
    ///
    /// Gradients are never reset implicitly: [`Graph::backward`] accumulates
    /// into whatever is already there, so callers stepping through several
    /// passes must call `zero_grad` between them unless accumulation is the
    /// intent.
    pub fn zero_grad(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = T::zero();
        }
    }

    // --- Internal accessors (ids already validated by the caller) ---

    pub(crate) fn push(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn check_id(&self, id: NodeId) -> Result<(), RevGradError> {
        if id.0 >= self.nodes.len() {
            return Err(RevGradError::InvalidNodeId {
                id: id.0,
                len: self.nodes.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn value_of(&self, id: NodeId) -> T {
        self.nodes[id.0].value
    }

    pub(crate) fn label_of(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].label.as_deref()
    }

    /// Derived label for a binary op, e.g. `a+b`. None unless both operands
    /// are labeled.
    pub(crate) fn binary_label(&self, a: NodeId, b: NodeId, sym: &str) -> Option<String> {
        match (self.label_of(a), self.label_of(b)) {
            (Some(la), Some(lb)) => Some(format!("{}{}{}", la, sym, lb)),
            _ => None,
        }
    }

    /// Derived label for a unary op, e.g. `tanh(x)` or `-x`.
    pub(crate) fn unary_label(&self, a: NodeId, prefix: &str, suffix: &str) -> Option<String> {
        self.label_of(a).map(|l| format!("{}{}{}", prefix, l, suffix))
    }
}

impl<T: Float + Debug> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug + AddAssign> Graph<T> {
    /// Runs one backward pass rooted at `root`, leaving every reachable
    /// node's `grad` populated with ∂root/∂node.
    ///
    /// The pass seeds `root`'s gradient to 1 and replays each reachable
    /// node's backward rule in reverse topological order, so a node's rule
    /// only runs once every consumer that could still contribute to its
    /// gradient has run.
    ///
    /// Gradients are accumulated, not overwritten: a second `backward` call
    /// without [`Graph::zero_grad`] in between adds a second full
    /// contribution on top of the first (minibatch-style accumulation is
    /// opt-in by simply not resetting).
    pub fn backward(&mut self, root: NodeId) -> Result<(), RevGradError> {
        autograd::backward::run_backward(self, root)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
