//! Builds explicit operator trees over relations.
//!
//! An [`Expression`] is either a leaf [`Relation`] (owned or borrowed) or an operator
//! node over other expressions. Trees are evaluated bottom-up with [`evaluate`], which
//! runs every node through the functions of the [`algebra`] module, and rendered in
//! algebra notation with [`explain`].
//!
//! **Example**:
//! ```rust
//! use relbag::{evaluate, explain, Cell, Expression, Predicate, RelationBuilder, Type};
//!
//! let mut department = RelationBuilder::new()
//!     .name("department")
//!     .attribute_names(&["dept_name", "building", "budget"])
//!     .attribute_types(&[Type::Text, Type::Text, Type::Real])
//!     .build()
//!     .unwrap();
//! department.insert(vec![Cell::from("Physics"), Cell::from("Taylor"), Cell::from(80.0)]).unwrap();
//!
//! let mut classroom = RelationBuilder::new()
//!     .name("classroom")
//!     .attribute_names(&["building", "room_number", "capacity"])
//!     .attribute_types(&[Type::Text, Type::Integer, Type::Integer])
//!     .build()
//!     .unwrap();
//! classroom.insert(vec![Cell::from("Taylor"), Cell::from(3128), Cell::from(70)]).unwrap();
//! classroom.insert(vec![Cell::from("Watson"), Cell::from(100), Cell::from(30)]).unwrap();
//!
//! let query = department
//!     .builder()
//!     .join(&classroom)
//!     .select(Predicate::new(&["building"], |c| c[0].as_text() == Some("Taylor")))
//!     .project(&["building", "room_number"])
//!     .build();
//!
//! assert_eq!(
//!     "π[building, room_number] σ[building] (department ⋈ classroom)",
//!     explain(&query)
//! );
//! let result = evaluate(&query).unwrap();
//! assert_eq!(1, result.len());
//! ```
//!
//! [`algebra`]: ../algebra/index.html
mod builder;
mod diff;
mod evaluate;
mod explain;
mod join;
mod product;
mod project;
mod rename;
mod select;
mod theta_join;
mod union;

use crate::{Error, Relation};

pub use builder::Builder;
pub use diff::Diff;
pub use evaluate::{evaluate, Evaluator};
pub use explain::{explain, Explain};
pub use join::Join;
pub use product::Product;
pub use project::Project;
pub use rename::Rename;
pub use select::Select;
pub use theta_join::ThetaJoin;
pub use union::Union;

/// Is the trait of relational algebra expressions.
pub trait Expression: Clone {
    /// Visits the receiver with `visitor`.
    fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor;

    /// Computes the relation of the receiver with `collector`.
    fn collect<C>(&self, collector: &C) -> Result<Relation, Error>
    where
        C: Collector;

    /// Returns a [`Builder`] for composing operators over the receiver.
    ///
    /// [`Builder`]: ./struct.Builder.html
    fn builder(&self) -> Builder<Self> {
        Builder::new(self.clone())
    }
}

impl Expression for Relation {
    fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor,
    {
        visitor.visit_relation(self);
    }

    fn collect<C>(&self, collector: &C) -> Result<Relation, Error>
    where
        C: Collector,
    {
        collector.collect_relation(self)
    }
}

impl<'a> Expression for &'a Relation {
    fn visit<V>(&self, visitor: &mut V)
    where
        V: Visitor,
    {
        visitor.visit_relation(self);
    }

    fn collect<C>(&self, collector: &C) -> Result<Relation, Error>
    where
        C: Collector,
    {
        collector.collect_relation(self)
    }
}

/// Is the trait of objects that walk expression trees. Every method by default walks
/// the children of the node it visits.
pub trait Visitor: Sized {
    fn visit_relation(&mut self, relation: &Relation) {
        walk_relation(self, relation)
    }

    fn visit_select<E>(&mut self, select: &Select<E>)
    where
        E: Expression,
    {
        walk_select(self, select);
    }

    fn visit_project<E>(&mut self, project: &Project<E>)
    where
        E: Expression,
    {
        walk_project(self, project);
    }

    fn visit_rename<E>(&mut self, rename: &Rename<E>)
    where
        E: Expression,
    {
        walk_rename(self, rename);
    }

    fn visit_union<L, R>(&mut self, union: &Union<L, R>)
    where
        L: Expression,
        R: Expression,
    {
        walk_union(self, union);
    }

    fn visit_diff<L, R>(&mut self, diff: &Diff<L, R>)
    where
        L: Expression,
        R: Expression,
    {
        walk_diff(self, diff);
    }

    fn visit_join<L, R>(&mut self, join: &Join<L, R>)
    where
        L: Expression,
        R: Expression,
    {
        walk_join(self, join);
    }

    fn visit_theta_join<L, R>(&mut self, theta_join: &ThetaJoin<L, R>)
    where
        L: Expression,
        R: Expression,
    {
        walk_theta_join(self, theta_join);
    }

    fn visit_product<L, R>(&mut self, product: &Product<L, R>)
    where
        L: Expression,
        R: Expression,
    {
        walk_product(self, product);
    }
}

pub fn walk_relation<V>(_: &mut V, _: &Relation)
where
    V: Visitor,
{
    // nothing to do
}

pub fn walk_select<E, V>(visitor: &mut V, select: &Select<E>)
where
    E: Expression,
    V: Visitor,
{
    select.expression().visit(visitor);
}

pub fn walk_project<E, V>(visitor: &mut V, project: &Project<E>)
where
    E: Expression,
    V: Visitor,
{
    project.expression().visit(visitor);
}

pub fn walk_rename<E, V>(visitor: &mut V, rename: &Rename<E>)
where
    E: Expression,
    V: Visitor,
{
    rename.expression().visit(visitor);
}

pub fn walk_union<L, R, V>(visitor: &mut V, union: &Union<L, R>)
where
    L: Expression,
    R: Expression,
    V: Visitor,
{
    union.left().visit(visitor);
    union.right().visit(visitor);
}

pub fn walk_diff<L, R, V>(visitor: &mut V, diff: &Diff<L, R>)
where
    L: Expression,
    R: Expression,
    V: Visitor,
{
    diff.left().visit(visitor);
    diff.right().visit(visitor);
}

pub fn walk_join<L, R, V>(visitor: &mut V, join: &Join<L, R>)
where
    L: Expression,
    R: Expression,
    V: Visitor,
{
    join.left().visit(visitor);
    join.right().visit(visitor);
}

pub fn walk_theta_join<L, R, V>(visitor: &mut V, theta_join: &ThetaJoin<L, R>)
where
    L: Expression,
    R: Expression,
    V: Visitor,
{
    theta_join.left().visit(visitor);
    theta_join.right().visit(visitor);
}

pub fn walk_product<L, R, V>(visitor: &mut V, product: &Product<L, R>)
where
    L: Expression,
    R: Expression,
    V: Visitor,
{
    product.left().visit(visitor);
    product.right().visit(visitor);
}

/// Is the trait of objects that compute the relation of each kind of expression.
pub trait Collector {
    fn collect_relation(&self, relation: &Relation) -> Result<Relation, Error>;

    fn collect_select<E>(&self, select: &Select<E>) -> Result<Relation, Error>
    where
        E: Expression;

    fn collect_project<E>(&self, project: &Project<E>) -> Result<Relation, Error>
    where
        E: Expression;

    fn collect_rename<E>(&self, rename: &Rename<E>) -> Result<Relation, Error>
    where
        E: Expression;

    fn collect_union<L, R>(&self, union: &Union<L, R>) -> Result<Relation, Error>
    where
        L: Expression,
        R: Expression;

    fn collect_diff<L, R>(&self, diff: &Diff<L, R>) -> Result<Relation, Error>
    where
        L: Expression,
        R: Expression;

    fn collect_join<L, R>(&self, join: &Join<L, R>) -> Result<Relation, Error>
    where
        L: Expression,
        R: Expression;

    fn collect_theta_join<L, R>(&self, theta_join: &ThetaJoin<L, R>) -> Result<Relation, Error>
    where
        L: Expression,
        R: Expression;

    fn collect_product<L, R>(&self, product: &Product<L, R>) -> Result<Relation, Error>
    where
        L: Expression,
        R: Expression;
}
