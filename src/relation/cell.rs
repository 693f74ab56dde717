use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// Is the scalar domain of an attribute.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum Type {
    Text,
    Integer,
    Real,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Text => write!(f, "TEXT"),
            Type::Integer => write!(f, "INTEGER"),
            Type::Real => write!(f, "REAL"),
        }
    }
}

/// Is a single typed value, the atomic unit stored in a [`Row`].
///
/// Cells are equal only when they hold the same type and the same value, so
/// `Cell::Integer(70)` is different from both `Cell::Text("70")` and `Cell::Real(70.0)`.
/// Cells of different types are ordered by their type; reals follow the IEEE total order.
///
/// [`Row`]: ./struct.Row.html
#[derive(Clone, Debug)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Real(f64),
}

impl Cell {
    /// Returns the type of the value in the receiver.
    pub fn cell_type(&self) -> Type {
        match self {
            Cell::Text(_) => Type::Text,
            Cell::Integer(_) => Type::Integer,
            Cell::Real(_) => Type::Real,
        }
    }

    /// Parses `text` as a value of type `ty`. Returns `None` if `text` is not a valid
    /// literal of `ty`.
    ///
    /// **Example**:
    /// ```rust
    /// use relbag::{Cell, Type};
    ///
    /// assert_eq!(Some(Cell::Integer(101)), Cell::parse(Type::Integer, "101"));
    /// assert_eq!(Some(Cell::Real(70.5)), Cell::parse(Type::Real, "70.5"));
    /// assert_eq!(None, Cell::parse(Type::Integer, "Taylor"));
    /// ```
    pub fn parse(ty: Type, text: &str) -> Option<Self> {
        match ty {
            Type::Text => Some(Cell::Text(text.to_string())),
            Type::Integer => text.parse().ok().map(Cell::Integer),
            Type::Real => text.parse().ok().map(Cell::Real),
        }
    }

    /// Returns the text value of the receiver if it is a `Text` cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer value of the receiver if it is an `Integer` cell.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric value of the receiver if it is an `Integer` or a `Real` cell.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Cell::Integer(i) => Some(*i as f64),
            Cell::Real(r) => Some(*r),
            _ => None,
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cell {}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cell::Text(l), Cell::Text(r)) => l.cmp(r),
            (Cell::Integer(l), Cell::Integer(r)) => l.cmp(r),
            (Cell::Real(l), Cell::Real(r)) => l.total_cmp(r),
            (l, r) => l.cell_type().cmp(&r.cell_type()),
        }
    }
}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cell_type().hash(state);
        match self {
            Cell::Text(s) => s.hash(state),
            Cell::Integer(i) => i.hash(state),
            Cell::Real(r) => r.to_bits().hash(state),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Integer(i) => write!(f, "{}", i),
            Cell::Real(r) => write!(f, "{}", r),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Integer(value.into())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Real(value)
    }
}
