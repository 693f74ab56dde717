//! `relbag` is a minimal in-memory evaluator for relational algebra over typed relations.
//!
//! Relations are ordered bags of rows under a named, typed schema. The operators in
//! [`algebra`] are pure functions from relations to a new relation; the [`expression`]
//! module builds explicit operator trees on top of them.
//!
//! **Example**:
//! ```rust
//! use relbag::{algebra, Cell, Predicate, RelationBuilder, Type};
//!
//! let mut department = RelationBuilder::new()
//!     .name("department")
//!     .attribute("dept_name", Type::Text)
//!     .attribute("building", Type::Text)
//!     .build()
//!     .unwrap();
//! department.insert(vec![Cell::from("CS"), Cell::from("Taylor")]).unwrap();
//! department.insert(vec![Cell::from("Math"), Cell::from("Watson")]).unwrap();
//!
//! let in_taylor = Predicate::new(&["building"], |cells| *cells[0] == Cell::from("Taylor"));
//! let result = algebra::select(&department, &in_taylor).unwrap();
//!
//! assert_eq!(1, result.len());
//! assert_eq!(&Cell::from("CS"), &result.row(0).unwrap()[0]);
//! ```
pub mod algebra;
pub mod expression;
mod predicate;
mod relation;
mod tools;

pub use expression::{evaluate, explain, Expression};
pub use predicate::{BoundPredicate, Predicate};
pub use relation::{Cell, LoadOptions, Relation, RelationBuilder, Row, Schema, Type};

use thiserror::Error;

/// Is the type of errors returned by `relbag`.
#[derive(Error, Debug)]
pub enum Error {
    /// Is returned when an attribute name appears more than once in a schema.
    #[error("duplicate attribute `{name}`")]
    DuplicateAttribute { name: String },

    /// Is returned when an attribute name is not found in the schema it is looked up in.
    #[error("unknown attribute `{name}`")]
    UnknownAttribute { name: String },

    /// Is returned when a relation is built with a different number of names and types.
    #[error("{names} attribute names but {types} attribute types")]
    AttributeTypeArity { names: usize, types: usize },

    /// Is returned when the two lists given to rename differ in length.
    #[error("cannot rename {from} attributes to {to} names")]
    RenameArity { from: usize, to: usize },

    /// Is returned when an operator expects two identical schemas or a predicate
    /// expects a schema other than the one it is bound to.
    #[error("schema mismatch: expected [{expected}], found [{found}]")]
    SchemaMismatch { expected: String, found: String },

    /// Is returned when the Cartesian product is applied to relations sharing attributes.
    #[error("relations share attributes: {}", .shared.join(", "))]
    SchemaConflict { shared: Vec<String> },

    /// Is returned when a row's length disagrees with the length of its schema.
    #[error("row has {found} cells but the schema has {expected} attributes")]
    RowArity { expected: usize, found: usize },

    /// Is returned when a cell's type disagrees with the declared type of its column.
    #[error("attribute `{attribute}` is of type {expected} but the cell is of type {found}")]
    CellType {
        attribute: String,
        expected: Type,
        found: Type,
    },

    /// Is returned when a textual field cannot be parsed as its column's type.
    #[error("line {line}, column {column}: cannot parse `{value}` as {expected}")]
    Parse {
        line: usize,
        column: usize,
        value: String,
        expected: Type,
    },

    /// Is returned when a line of relation data has the wrong number of fields.
    #[error("line {line}: {found} fields but the schema has {expected} attributes")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Is returned when a quoted field is not closed or is followed by other text.
    #[error("line {line}, column {column}: malformed quoted field")]
    Malformed { line: usize, column: usize },

    /// Is returned when reading relation data fails.
    #[error("failed to read relation data")]
    Io(#[from] std::io::Error),
}
