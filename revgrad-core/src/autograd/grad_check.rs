// revgrad-core/src/autograd/grad_check.rs

use std::fmt::Debug;
use std::ops::AddAssign;

use approx::relative_eq;
use num_traits::Float;
use thiserror::Error;

use crate::error::RevGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(RevGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(RevGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `build` constructs the expression under test inside a fresh [`Graph`]
/// whose leaves hold `inputs`, and returns the root node. The checker runs
/// one analytic backward pass, then estimates each partial derivative as
/// `(f(x+ε) - f(x-ε)) / 2ε` by rebuilding the graph with one input shifted,
/// and compares the two within `tolerance` (relative, with the same value
/// used as the absolute floor near zero).
///
/// Typical arguments for `f64` graphs: `epsilon = 1e-6`, `tolerance = 1e-3`.
pub fn check_grad<T, F>(
    build: F,
    inputs: &[T],
    epsilon: T,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    T: Float + Debug + AddAssign,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, RevGradError>,
{
    // --- 1. Analytic pass ---
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|&v| graph.leaf(v)).collect();
    let root = build(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph
        .backward(root)
        .map_err(GradCheckError::BackwardPassError)?;

    // Evaluates the scalar output on a fresh graph with shifted inputs.
    let eval = |shifted: &[T]| -> Result<f64, GradCheckError> {
        let mut g = Graph::new();
        let ids: Vec<NodeId> = shifted.iter().map(|&v| g.leaf(v)).collect();
        let r = build(&mut g, &ids).map_err(GradCheckError::ForwardPassError)?;
        let value = g.value(r).map_err(GradCheckError::ForwardPassError)?;
        Ok(value.to_f64().unwrap_or(f64::NAN))
    };

    let eps = epsilon.to_f64().unwrap_or(f64::NAN);

    // --- 2. Per-input central finite difference ---
    for (i, &leaf) in leaves.iter().enumerate() {
        let analytical = graph
            .grad(leaf)
            .map_err(GradCheckError::BackwardPassError)?
            .to_f64()
            .unwrap_or(f64::NAN);
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical,
            });
        }

        let mut plus = inputs.to_vec();
        plus[i] = plus[i] + epsilon;
        let mut minus = inputs.to_vec();
        minus[i] = minus[i] - epsilon;

        let loss_plus = eval(&plus)?;
        let loss_minus = eval(&minus)?;
        let numerical = (loss_plus - loss_minus) / (2.0 * eps);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        log::debug!(
            "check_grad: input {} analytical={} numerical={}",
            i,
            analytical,
            numerical
        );

        if !relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: analytical,
                numerical_grad: numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    Ok(())
}
