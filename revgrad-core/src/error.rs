use thiserror::Error;

/// Custom error type for the RevGrad engine.
///
/// Domain errors (`DivisionByZero`, `InvalidPowOperand`) follow one uniform
/// policy: operations fail fast at construction time with a distinguishable
/// error instead of propagating NaN. Ordinary overflow is not trapped and
/// flows through as IEEE infinities.
///
/// Structural errors (`InvalidNodeId`, `CycleDetected`) indicate a violated
/// construction or ownership invariant and always fail fast.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum RevGradError {
    #[error("Invalid node id {id} for a graph of {len} nodes")]
    InvalidNodeId { id: usize, len: usize },

    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Invalid power operand: base {base}, exponent {exponent}")]
    InvalidPowOperand { base: f64, exponent: f64 },

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,
    // Add more specific errors as needed
}
