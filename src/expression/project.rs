use super::{Collector, Expression, Visitor};
use crate::{Error, Relation};

/// Evaluates to the rows of `expression` restricted to a list of attributes, in the
/// order of the list.
#[derive(Clone, Debug)]
pub struct Project<E>
where
    E: Expression,
{
    expression: E,
    attributes: Vec<String>,
}

impl<E> Project<E>
where
    E: Expression,
{
    pub fn new<I, S>(expression: E, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            expression,
            attributes: attributes
                .into_iter()
                .map(|a| a.as_ref().to_string())
                .collect(),
        }
    }

    /// Returns a reference to the underlying expression.
    #[inline(always)]
    pub fn expression(&self) -> &E {
        &self.expression
    }

    /// Returns the attributes to keep.
    #[inline(always)]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }
}

impl<E> Expression for Project<E>
where
    E: Expression,
{
    fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor,
    {
        visitor.visit_project(self);
    }

    fn collect<C>(&self, collector: &C) -> Result<Relation, Error>
    where
        C: Collector,
    {
        collector.collect_project(self)
    }
}
