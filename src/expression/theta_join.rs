use super::{Collector, Expression, Visitor};
use crate::{Error, Predicate, Relation};

/// Evaluates to the pairs of rows of `left` and `right` whose combined row satisfies
/// `predicate`.
///
/// The combined schema lists the attributes of `left` followed by the attributes of
/// `right` that `left` does not have; `predicate` is bound to that schema.
#[derive(Clone, Debug)]
pub struct ThetaJoin<L, R>
where
    L: Expression,
    R: Expression,
{
    left: L,
    right: R,
    predicate: Predicate,
}

impl<L, R> ThetaJoin<L, R>
where
    L: Expression,
    R: Expression,
{
    pub fn new(left: L, right: R, predicate: Predicate) -> Self {
        Self {
            left,
            right,
            predicate,
        }
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

    #[inline(always)]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

impl<L, R> Expression for ThetaJoin<L, R>
where
    L: Expression,
    R: Expression,
{
    fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor,
    {
        visitor.visit_theta_join(self);
    }

    fn collect<C>(&self, collector: &C) -> Result<Relation, Error>
    where
        C: Collector,
    {
        collector.collect_theta_join(self)
    }
}
