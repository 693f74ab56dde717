use super::*;
use crate::Predicate;

/// Is a builder for composing [`Expression`]s, where each method wraps the expression
/// built so far in a new operator.
///
/// **Example**:
/// ```rust
/// use relbag::{evaluate, Cell, Expression, Predicate, RelationBuilder, Type};
///
/// let mut instructor = RelationBuilder::new()
///     .name("instructor")
///     .attribute_names(&["instructor_id", "department", "salary"])
///     .attribute_types(&[Type::Integer, Type::Text, Type::Real])
///     .build()
///     .unwrap();
/// instructor.insert(vec![Cell::from(1), Cell::from("Statistics"), Cell::from(65000.0)]).unwrap();
/// instructor.insert(vec![Cell::from(2), Cell::from("Statistics"), Cell::from(90000.0)]).unwrap();
/// instructor.insert(vec![Cell::from(3), Cell::from("Physics"), Cell::from(60000.0)]).unwrap();
///
/// let statistics = Predicate::new(&["department"], |c| c[0].as_text() == Some("Statistics"));
/// let rich = Predicate::new(&["salary"], |c| c[0].as_real() > Some(70000.0));
///
/// let high = instructor.builder().select(rich).build();
/// let query = instructor
///     .builder()
///     .select(statistics)
///     .diff(high)
///     .project(&["instructor_id"])
///     .build();
///
/// let result = evaluate(&query).unwrap();
/// assert_eq!(1, result.len());
/// assert_eq!(Some(1), result.row(0).unwrap()[0].as_integer());
/// ```
///
/// [`Expression`]: ./trait.Expression.html
#[derive(Clone, Debug)]
pub struct Builder<E>
where
    E: Expression,
{
    /// Is the expression constructed by this builder.
    expression: E,
}

impl<E> Builder<E>
where
    E: Expression,
{
    pub fn new(expression: E) -> Self {
        Self { expression }
    }

    /// Builds a [`Select`] over the receiver's expression.
    ///
    /// [`Select`]: ./struct.Select.html
    pub fn select(self, predicate: Predicate) -> Builder<Select<E>> {
        Builder::new(Select::new(self.expression, predicate))
    }

    /// Builds a [`Project`] over the receiver's expression.
    ///
    /// [`Project`]: ./struct.Project.html
    pub fn project<I, S>(self, attributes: I) -> Builder<Project<E>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Builder::new(Project::new(self.expression, attributes))
    }

    /// Builds a [`Rename`] over the receiver's expression.
    ///
    /// [`Rename`]: ./struct.Rename.html
    pub fn rename<I, J, S, T>(self, from: I, to: J) -> Builder<Rename<E>>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Builder::new(Rename::new(self.expression, from, to))
    }

    /// Builds a [`Union`] with the receiver's expression on left and `other` on right.
    ///
    /// [`Union`]: ./struct.Union.html
    pub fn union<R>(self, other: R) -> Builder<Union<E, R>>
    where
        R: Expression,
    {
        Builder::new(Union::new(self.expression, other))
    }

    /// Builds a [`Diff`] with the receiver's expression on left and `other` on right.
    ///
    /// [`Diff`]: ./struct.Diff.html
    pub fn diff<R>(self, other: R) -> Builder<Diff<E, R>>
    where
        R: Expression,
    {
        Builder::new(Diff::new(self.expression, other))
    }

    /// Builds a natural [`Join`] with the receiver's expression on left and `other` on right.
    ///
    /// [`Join`]: ./struct.Join.html
    pub fn join<R>(self, other: R) -> Builder<Join<E, R>>
    where
        R: Expression,
    {
        Builder::new(Join::new(self.expression, other))
    }

    /// Builds a [`ThetaJoin`] with the receiver's expression on left and `other` on right.
    ///
    /// [`ThetaJoin`]: ./struct.ThetaJoin.html
    pub fn theta_join<R>(self, other: R, predicate: Predicate) -> Builder<ThetaJoin<E, R>>
    where
        R: Expression,
    {
        Builder::new(ThetaJoin::new(self.expression, other, predicate))
    }

    /// Builds a [`Product`] with the receiver's expression on left and `other` on right.
    ///
    /// [`Product`]: ./struct.Product.html
    pub fn product<R>(self, other: R) -> Builder<Product<E, R>>
    where
        R: Expression,
    {
        Builder::new(Product::new(self.expression, other))
    }

    /// Builds the expression constructed by the receiver.
    pub fn build(self) -> E {
        self.expression
    }
}
