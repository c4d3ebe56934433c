use rand::Rng;

use revgrad_core::autograd::grad_check::{check_grad, GradCheckError};
use revgrad_core::error::RevGradError;
use revgrad_core::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use revgrad_core::ops::math_elem::{exp_op, tanh_op};

const EPSILON: f64 = 1e-6;
const TOLERANCE: f64 = 1e-3;

#[test]
fn test_check_grad_add() {
    check_grad(
        |g, ids| add_op(g, ids[0], ids[1]),
        &[2.0, -3.5],
        EPSILON,
        TOLERANCE,
    )
    .unwrap();
}

#[test]
fn test_check_grad_mul() {
    check_grad(
        |g, ids| mul_op(g, ids[0], ids[1]),
        &[1.7, -0.3],
        EPSILON,
        TOLERANCE,
    )
    .unwrap();
}

#[test]
fn test_check_grad_sub() {
    check_grad(
        |g, ids| sub_op(g, ids[0], ids[1]),
        &[5.0, 2.0],
        EPSILON,
        TOLERANCE,
    )
    .unwrap();
}

#[test]
fn test_check_grad_div() {
    check_grad(
        |g, ids| div_op(g, ids[0], ids[1]),
        &[7.0, 3.0],
        EPSILON,
        TOLERANCE,
    )
    .unwrap();
}

#[test]
fn test_check_grad_neg() {
    check_grad(|g, ids| neg_op(g, ids[0]), &[4.2], EPSILON, TOLERANCE).unwrap();
}

#[test]
fn test_check_grad_pow() {
    check_grad(
        |g, ids| pow_op(g, ids[0], 3.0),
        &[1.8],
        EPSILON,
        TOLERANCE,
    )
    .unwrap();
}

#[test]
fn test_check_grad_tanh() {
    check_grad(|g, ids| tanh_op(g, ids[0]), &[0.7], EPSILON, TOLERANCE).unwrap();
}

#[test]
fn test_check_grad_exp() {
    check_grad(|g, ids| exp_op(g, ids[0]), &[1.1], EPSILON, TOLERANCE).unwrap();
}

// f = tanh(a*b + c) * exp(d) / b — exercises every tag plus a shared operand.
fn composite(
    g: &mut revgrad_core::Graph<f64>,
    ids: &[revgrad_core::NodeId],
) -> Result<revgrad_core::NodeId, RevGradError> {
    let ab = mul_op(g, ids[0], ids[1])?;
    let n = add_op(g, ab, ids[2])?;
    let t = tanh_op(g, n)?;
    let e = exp_op(g, ids[3])?;
    let te = mul_op(g, t, e)?;
    div_op(g, te, ids[1])
}

#[test]
fn test_check_grad_composite_expression() {
    check_grad(composite, &[0.5, -1.2, 0.8, 0.3], EPSILON, TOLERANCE).unwrap();
}

#[test]
fn test_check_grad_composite_randomized() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        // Keep divisors away from zero.
        let a = rng.gen_range(-2.0..2.0);
        let b = rng.gen_range(0.5..2.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let c = rng.gen_range(-2.0..2.0);
        let d = rng.gen_range(-1.0..1.0);
        check_grad(composite, &[a, b, c, d], EPSILON, TOLERANCE).unwrap();
    }
}

#[test]
fn test_check_grad_diamond() {
    check_grad(
        |g, ids| {
            let s = add_op(g, ids[0], ids[1])?;
            mul_op(g, s, s)
        },
        &[3.0, 4.0],
        EPSILON,
        TOLERANCE,
    )
    .unwrap();
}

#[test]
fn test_check_grad_reports_forward_failure() {
    let result = check_grad(
        |g, ids| {
            let zero = g.leaf(0.0);
            div_op(g, ids[0], zero)
        },
        &[1.0],
        EPSILON,
        TOLERANCE,
    );
    assert_eq!(
        result,
        Err(GradCheckError::ForwardPassError(
            RevGradError::DivisionByZero
        ))
    );
}
