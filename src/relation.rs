mod builder;
mod cell;
mod load;

use crate::Error;
use std::{fmt, ops::Deref};

pub use builder::RelationBuilder;
pub use cell::{Cell, Type};
pub use load::LoadOptions;

/// Is an ordered sequence of [`Cell`]s, positionally aligned with a [`Schema`].
///
/// [`Cell`]: ./enum.Cell.html
/// [`Schema`]: ./struct.Schema.html
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl std::iter::FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Deref for Row {
    type Target = [Cell];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

/// Is the ordered list of attribute names of a relation together with their types.
///
/// Names are unique within a schema. The order of the attributes is significant: it
/// defines the positions of the cells in every row of the relation.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Schema {
    attributes: Vec<String>,
    types: Vec<Type>,
}

impl Schema {
    /// Creates a new schema from parallel lists of names and types.
    pub fn new(attributes: Vec<String>, types: Vec<Type>) -> Result<Self, Error> {
        if attributes.len() != types.len() {
            return Err(Error::AttributeTypeArity {
                names: attributes.len(),
                types: types.len(),
            });
        }

        for (i, name) in attributes.iter().enumerate() {
            if attributes[..i].contains(name) {
                return Err(Error::DuplicateAttribute { name: name.clone() });
            }
        }

        Ok(Self { attributes, types })
    }

    /// Returns the attribute names in schema order.
    #[inline(always)]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Returns the attribute types in schema order.
    #[inline(always)]
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    /// Returns the number of attributes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns the position of `name` in the schema.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a == name)
    }

    /// Returns true if the schema contains an attribute named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns the type of the attribute named `name`.
    pub fn type_of(&self, name: &str) -> Option<Type> {
        self.index_of(name).map(|i| self.types[i])
    }

    /// Returns the position of `name`, or an `UnknownAttribute` error.
    pub(crate) fn position(&self, name: &str) -> Result<usize, Error> {
        self.index_of(name).ok_or_else(|| Error::UnknownAttribute {
            name: name.to_string(),
        })
    }

    /// Validates `row` against the receiver's length and types.
    pub(crate) fn check(&self, row: &[Cell]) -> Result<(), Error> {
        if row.len() != self.len() {
            return Err(Error::RowArity {
                expected: self.len(),
                found: row.len(),
            });
        }

        for ((cell, ty), attribute) in row.iter().zip(&self.types).zip(&self.attributes) {
            if cell.cell_type() != *ty {
                return Err(Error::CellType {
                    attribute: attribute.clone(),
                    expected: *ty,
                    found: cell.cell_type(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn describe(&self) -> String {
        self.attributes
            .iter()
            .zip(&self.types)
            .map(|(a, t)| format!("{}: {}", a, t))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Is an ordered bag of typed rows under a [`Schema`].
///
/// Rows may repeat and their insertion order is preserved: iteration, [`row`] and
/// the `Display` rendering all follow the order in which rows were inserted.
///
/// [`Schema`]: ./struct.Schema.html
/// [`row`]: #method.row
#[derive(Clone, Debug)]
pub struct Relation {
    name: Option<String>,
    schema: Schema,
    rows: Vec<Row>,
}

impl Relation {
    pub(crate) fn new(name: Option<String>, schema: Schema) -> Self {
        Self {
            name,
            schema,
            rows: Vec::new(),
        }
    }

    /// Creates an empty, anonymous relation with `schema`.
    pub fn empty(schema: Schema) -> Self {
        Self::new(None, schema)
    }

    /// Returns the display name of the receiver, if it has one.
    #[inline(always)]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Consumes the receiver and returns it with the display name `name`.
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    #[inline(always)]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the attribute names of the receiver in schema order.
    #[inline(always)]
    pub fn attributes(&self) -> &[String] {
        self.schema.attributes()
    }

    /// Returns the attribute types of the receiver in schema order.
    #[inline(always)]
    pub fn types(&self) -> &[Type] {
        self.schema.types()
    }

    /// Returns true if the receiver has an attribute named `name`.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.schema.contains(name)
    }

    /// Returns the position of the attribute named `name`.
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.schema.index_of(name)
    }

    /// Returns the number of rows in the receiver.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row at `index` in insertion order.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Returns the rows of the receiver in insertion order.
    #[inline(always)]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Appends `row` to the receiver after checking it against the schema.
    ///
    /// **Example**:
    /// ```rust
    /// use relbag::{Cell, RelationBuilder, Type};
    ///
    /// let mut classroom = RelationBuilder::new()
    ///     .attribute("building", Type::Text)
    ///     .attribute("capacity", Type::Integer)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(classroom.insert(vec![Cell::from("Packard"), Cell::from(500)]).is_ok());
    /// assert!(classroom.insert(vec![Cell::from("Packard"), Cell::from("500")]).is_err());
    /// assert!(classroom.insert(vec![Cell::from("Packard")]).is_err());
    /// assert_eq!(1, classroom.len());
    /// ```
    pub fn insert<R: Into<Row>>(&mut self, row: R) -> Result<(), Error> {
        let row = row.into();
        self.schema.check(&row)?;
        self.rows.push(row);
        Ok(())
    }

    /// Appends a row assembled by an operator; the operator guarantees the row's shape.
    pub(crate) fn push(&mut self, row: Row) {
        debug_assert!(self.schema.check(&row).is_ok());
        self.rows.push(row);
    }
}

impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema && self.rows == other.rows
    }
}

impl<'a> IntoIterator for &'a Relation {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect();

        let mut widths: Vec<usize> = self
            .attributes()
            .iter()
            .map(|a| a.chars().count())
            .collect();
        for row in &rendered {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let separator = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");
        let separator = format!("+{}+", separator);

        if let Some(name) = &self.name {
            writeln!(f, "{}", name)?;
        }
        writeln!(f, "{}", separator)?;
        write_line(f, self.attributes(), &widths)?;
        writeln!(f, "{}", separator)?;
        for row in &rendered {
            write_line(f, &row[..], &widths)?;
        }
        writeln!(f, "{}", separator)?;
        write!(f, "({} rows)", self.rows.len())
    }
}

fn write_line<S>(f: &mut fmt::Formatter<'_>, cells: &[S], widths: &[usize]) -> fmt::Result
where
    S: AsRef<str>,
{
    write!(f, "|")?;
    for (cell, width) in cells.iter().zip(widths) {
        write!(f, " {:<width$} |", cell.as_ref(), width = width)?;
    }
    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classroom() -> Relation {
        let mut relation = RelationBuilder::new()
            .name("classroom")
            .attribute("building", Type::Text)
            .attribute("room_number", Type::Integer)
            .attribute("capacity", Type::Integer)
            .build()
            .unwrap();
        relation
            .insert(vec![Cell::from("Packard"), Cell::from(101), Cell::from(500)])
            .unwrap();
        relation
            .insert(vec![Cell::from("Taylor"), Cell::from(3128), Cell::from(70)])
            .unwrap();
        relation
    }

    #[test]
    fn test_schema_new() {
        {
            let schema = Schema::new(vec!["a".into(), "b".into()], vec![Type::Text, Type::Real]);
            let schema = schema.unwrap();
            assert_eq!(2, schema.len());
            assert_eq!(Some(1), schema.index_of("b"));
            assert_eq!(Some(Type::Real), schema.type_of("b"));
            assert_eq!(None, schema.type_of("c"));
        }
        {
            let schema = Schema::new(vec!["a".into(), "a".into()], vec![Type::Text, Type::Real]);
            assert!(matches!(schema, Err(Error::DuplicateAttribute { name }) if name == "a"));
        }
        {
            let schema = Schema::new(vec!["a".into()], vec![Type::Text, Type::Real]);
            assert!(matches!(
                schema,
                Err(Error::AttributeTypeArity { names: 1, types: 2 })
            ));
        }
    }

    #[test]
    fn test_relation_insert() {
        {
            let mut relation = classroom();
            assert_eq!(2, relation.len());
            relation
                .insert(vec![Cell::from("Packard"), Cell::from(101), Cell::from(500)])
                .unwrap();
            assert_eq!(3, relation.len());
            assert_eq!(relation.row(0), relation.row(2));
        }
        {
            let mut relation = classroom();
            let result = relation.insert(vec![Cell::from("Packard"), Cell::from(101)]);
            assert!(matches!(result, Err(Error::RowArity { expected: 3, found: 2 })));
            assert_eq!(2, relation.len());
        }
        {
            let mut relation = classroom();
            let result =
                relation.insert(vec![Cell::from("Packard"), Cell::from(101), Cell::from(1.0)]);
            assert!(matches!(
                result,
                Err(Error::CellType { expected: Type::Integer, found: Type::Real, .. })
            ));
        }
    }

    #[test]
    fn test_relation_accessors() {
        let relation = classroom();
        assert_eq!(Some("classroom"), relation.name());
        assert!(relation.has_attribute("capacity"));
        assert!(!relation.has_attribute("budget"));
        assert_eq!(Some(2), relation.attribute_index("capacity"));
        assert_eq!(&[Type::Text, Type::Integer, Type::Integer], relation.types());
        assert_eq!(Cell::from("Taylor"), relation.row(1).unwrap()[0]);
        assert_eq!(None, relation.row(2));
        assert_eq!(
            vec!["Packard", "Taylor"],
            relation
                .iter()
                .map(|r| r[0].as_text().unwrap())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_relation_equality_ignores_name() {
        let left = classroom();
        let right = classroom().named("other");
        assert_eq!(left, right);
    }

    #[test]
    fn test_relation_display() {
        let relation = classroom();
        let expected = "classroom\n\
                        +----------+-------------+----------+\n\
                        | building | room_number | capacity |\n\
                        +----------+-------------+----------+\n\
                        | Packard  | 101         | 500      |\n\
                        | Taylor   | 3128        | 70       |\n\
                        +----------+-------------+----------+\n\
                        (2 rows)";
        assert_eq!(expected, relation.to_string());
    }
}
