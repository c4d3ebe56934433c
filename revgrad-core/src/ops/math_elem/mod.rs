// Declare element-wise math function submodules
pub mod exp;
pub mod tanh;

// Re-export core operation functions for easier access
pub use exp::exp_op;
pub use tanh::tanh_op;
