use super::{Collector, Expression, Visitor};
use crate::{Error, Relation};

/// Evaluates to the relation of `expression` with some of its attributes renamed.
/// The `from` and `to` names are paired by position.
#[derive(Clone, Debug)]
pub struct Rename<E>
where
    E: Expression,
{
    expression: E,
    from: Vec<String>,
    to: Vec<String>,
}

impl<E> Rename<E>
where
    E: Expression,
{
    pub fn new<I, J, S, T>(expression: E, from: I, to: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            expression,
            from: from.into_iter().map(|a| a.as_ref().to_string()).collect(),
            to: to.into_iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }

    #[inline(always)]
    pub fn expression(&self) -> &E {
        &self.expression
    }

    /// Returns the attribute names being replaced.
    #[inline(always)]
    pub fn originals(&self) -> &[String] {
        &self.from
    }

    /// Returns the replacement names.
    #[inline(always)]
    pub fn replacements(&self) -> &[String] {
        &self.to
    }
}

impl<E> Expression for Rename<E>
where
    E: Expression,
{
    fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor,
    {
        visitor.visit_rename(self);
    }

    fn collect<C>(&self, collector: &C) -> Result<Relation, Error>
    where
        C: Collector,
    {
        collector.collect_rename(self)
    }
}
