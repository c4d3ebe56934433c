#[cfg(test)]
mod tests {
    use crate::error::RevGradError;
    use crate::graph::Graph;
    use crate::node::Op;
    use crate::ops::arithmetic::neg_op;
    use crate::utils::testing::check_scalar_near;

    #[test]
    fn test_neg_forward() -> Result<(), RevGradError> {
        let mut g = Graph::new();
        let a = g.leaf_with_label(2.0f64, "a");
        let out = neg_op(&mut g, a)?;
        assert_eq!(g.value(out)?, -2.0);
        assert_eq!(g.node(out)?.label(), Some("-a"));
        assert_eq!(*g.node(out)?.op(), Op::Neg(a));
        Ok(())
    }

    #[test]
    fn test_neg_leaves_operand_untouched() -> Result<(), RevGradError> {
        // Negation is a new node; the operand keeps its value and label.
        let mut g = Graph::new();
        let a = g.leaf_with_label(2.0f64, "a");
        let out = neg_op(&mut g, a)?;
        assert_ne!(out, a);
        assert_eq!(g.value(a)?, 2.0);
        assert_eq!(g.node(a)?.label(), Some("a"));
        Ok(())
    }

    #[test]
    fn test_neg_twice_creates_distinct_nodes() -> Result<(), RevGradError> {
        let mut g = Graph::new();
        let a = g.leaf(2.0f64);
        let n1 = neg_op(&mut g, a)?;
        let n2 = neg_op(&mut g, a)?;
        assert_ne!(n1, n2);
        Ok(())
    }

    #[test]
    fn test_neg_backward() -> Result<(), RevGradError> {
        let mut g = Graph::new();
        let a = g.leaf(2.0f64);
        let out = neg_op(&mut g, a)?;
        g.backward(out)?;
        check_scalar_near(g.grad(a)?, -1.0, 1e-12);
        Ok(())
    }
}
