use super::{Collector, Expression, Visitor};
use crate::{Error, Relation};

/// Evaluates to the Cartesian product of `left` and `right`, whose attribute names
/// must be disjoint.
#[derive(Clone, Debug)]
pub struct Product<L, R>
where
    L: Expression,
    R: Expression,
{
    left: L,
    right: R,
}

impl<L, R> Product<L, R>
where
    L: Expression,
    R: Expression,
{
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

impl<L, R> Expression for Product<L, R>
where
    L: Expression,
    R: Expression,
{
    fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor,
    {
        visitor.visit_product(self);
    }

    fn collect<C>(&self, collector: &C) -> Result<Relation, Error>
    where
        C: Collector,
    {
        collector.collect_product(self)
    }
}
