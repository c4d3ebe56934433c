// Déclare les modules principaux de la crate
pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;
pub mod utils;

// Ré-exporte les types centraux pour qu'ils soient accessibles directement
// via `revgrad_core::Graph` etc.
pub use graph::Graph;
pub use node::{Node, NodeId, Op};
// Re-export traits required by public functions/structs
pub use num_traits;

pub use error::RevGradError;
