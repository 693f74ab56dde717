use super::{Collector, Expression, Visitor};
use crate::{Error, Predicate, Relation};

/// Evaluates to the rows of `expression` for which `predicate` holds.
///
/// **Example**:
/// ```rust
/// use relbag::{evaluate, expression::Select, Cell, Predicate, RelationBuilder, Type};
///
/// let mut takes = RelationBuilder::new()
///     .attribute_names(&["ID", "course_id", "grade"])
///     .attribute_types(&[Type::Integer, Type::Integer, Type::Text])
///     .build()
///     .unwrap();
/// takes.insert(vec![Cell::from(1), Cell::from(748), Cell::from("A")]).unwrap();
/// takes.insert(vec![Cell::from(2), Cell::from(748), Cell::from("B")]).unwrap();
///
/// let a = Select::new(&takes, Predicate::new(&["grade"], |c| c[0].as_text() == Some("A")));
///
/// assert_eq!(1, evaluate(&a).unwrap().len());
/// ```
#[derive(Clone, Debug)]
pub struct Select<E>
where
    E: Expression,
{
    expression: E,
    predicate: Predicate,
}

impl<E> Select<E>
where
    E: Expression,
{
    pub fn new(expression: E, predicate: Predicate) -> Self {
        Self {
            expression,
            predicate,
        }
    }

    /// Returns a reference to the underlying expression.
    #[inline(always)]
    pub fn expression(&self) -> &E {
        &self.expression
    }

    #[inline(always)]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

impl<E> Expression for Select<E>
where
    E: Expression,
{
    fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor,
    {
        visitor.visit_select(self);
    }

    fn collect<C>(&self, collector: &C) -> Result<Relation, Error>
    where
        C: Collector,
    {
        collector.collect_select(self)
    }
}
