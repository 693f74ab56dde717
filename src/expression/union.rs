use super::{Collector, Expression, Visitor};
use crate::{Error, Relation};

/// Evaluates to the rows of `left` followed by the rows of `right`, keeping duplicates.
/// Both sides must evaluate to relations with the same schema.
#[derive(Clone, Debug)]
pub struct Union<L, R>
where
    L: Expression,
    R: Expression,
{
    left: L,
    right: R,
}

impl<L, R> Union<L, R>
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

impl<L, R> Expression for Union<L, R>
where
    L: Expression,
    R: Expression,
{
    fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor,
    {
        visitor.visit_union(self);
    }

    fn collect<C>(&self, collector: &C) -> Result<Relation, Error>
    where
        C: Collector,
    {
        collector.collect_union(self)
    }
}
