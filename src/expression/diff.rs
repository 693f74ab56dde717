use super::{Collector, Expression, Visitor};
use crate::{Error, Relation};

/// Evaluates to the rows of `left` that do not occur in `right` (`left - right`).
///
/// **Example**:
/// ```rust
/// use relbag::{evaluate, expression::Diff, Cell, RelationBuilder, Type};
///
/// let mut r = RelationBuilder::new().attribute("n", Type::Integer).build().unwrap();
/// let mut s = r.clone();
/// for n in &[0, 1, 2, 2] {
///     r.insert(vec![Cell::from(*n)]).unwrap();
/// }
/// s.insert(vec![Cell::from(2)]).unwrap();
/// s.insert(vec![Cell::from(4)]).unwrap();
///
/// let r_s = evaluate(&Diff::new(&r, &s)).unwrap();
/// let s_r = evaluate(&Diff::new(&s, &r)).unwrap();
///
/// assert_eq!(2, r_s.len());
/// assert_eq!(Some(4), s_r.row(0).unwrap()[0].as_integer());
/// ```
#[derive(Clone, Debug)]
pub struct Diff<L, R>
where
    L: Expression,
    R: Expression,
{
    left: L,
    right: R,
}

impl<L, R> Diff<L, R>
where
    L: Expression,
    R: Expression,
{
    /// Creates a new instance of `Diff` corresponding to `left` - `right`.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the expression on left.
    #[inline(always)]
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the expression on right.
    #[inline(always)]
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Expression for Diff<L, R>
where
    L: Expression,
    R: Expression,
{
    fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor,
    {
        visitor.visit_diff(self);
    }

    fn collect<C>(&self, collector: &C) -> Result<Relation, Error>
    where
        C: Collector,
    {
        collector.collect_diff(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate, Cell, RelationBuilder, Type};

    fn numbers(values: &[i64]) -> Relation {
        let mut result = RelationBuilder::new()
            .attribute("n", Type::Integer)
            .build()
            .unwrap();
        for &v in values {
            result.insert(vec![Cell::from(v)]).unwrap();
        }
        result
    }

    #[test]
    fn test_clone() {
        let r = numbers(&[1, 2, 3, 6, 2]);
        let s = numbers(&[1, 4, 3, 5]);
        let d = Diff::new(&r, &s).clone();
        assert_eq!(numbers(&[2, 6, 2]), evaluate(&d).unwrap());
    }

    #[test]
    fn test_diff_schema_mismatch() {
        let r = numbers(&[1]);
        let s = RelationBuilder::new()
            .attribute("n", Type::Real)
            .build()
            .unwrap();
        assert!(matches!(
            evaluate(&Diff::new(&r, &s)),
            Err(Error::SchemaMismatch { .. })
        ));
    }
}
