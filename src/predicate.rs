use crate::{Cell, Error, Row, Schema};
use std::{fmt, rc::Rc};

/// Is a boolean test over rows, explicitly parameterized by the attributes it reads.
///
/// A predicate does not know the position of its attributes. Operators that accept a
/// predicate [`bind`] it to the schema of the rows it is going to see, which resolves the
/// attributes to positions and fails if the schema does not provide them. A predicate
/// therefore can never index outside the row it is given.
///
/// **Example**:
/// ```rust
/// use relbag::{Cell, Predicate, RelationBuilder, Type};
///
/// let classroom = RelationBuilder::new()
///     .attribute("building", Type::Text)
///     .attribute("capacity", Type::Integer)
///     .build()
///     .unwrap();
///
/// let large = Predicate::new(&["capacity"], |cells| cells[0].as_integer() > Some(70));
/// let in_taylor = Predicate::new(&["building"], |cells| cells[0].as_text() == Some("Taylor"));
/// let predicate = large.and(&in_taylor);
///
/// let bound = predicate.bind(classroom.schema()).unwrap();
/// assert!(bound.test(&vec![Cell::from("Taylor"), Cell::from(80)].into()));
/// assert!(!bound.test(&vec![Cell::from("Taylor"), Cell::from(70)].into()));
///
/// let budget = Predicate::new(&["budget"], |_| true);
/// assert!(budget.bind(classroom.schema()).is_err());
/// ```
///
/// [`bind`]: #method.bind
#[derive(Clone)]
pub struct Predicate {
    test: Test,
}

#[derive(Clone)]
enum Test {
    Constant(bool),
    Cells {
        attributes: Vec<String>,
        test: Rc<dyn Fn(&[&Cell]) -> bool>,
    },
    Row {
        attributes: Vec<String>,
        test: Rc<dyn Fn(&Row) -> bool>,
    },
    Not(Box<Test>),
    And(Box<Test>, Box<Test>),
    Or(Box<Test>, Box<Test>),
}

impl Predicate {
    /// Creates a predicate over the cells of `attributes`. `test` receives the cells of
    /// those attributes in the order they are listed in `attributes`.
    pub fn new<I, S, F>(attributes: I, test: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&[&Cell]) -> bool + 'static,
    {
        Self {
            test: Test::Cells {
                attributes: to_names(attributes),
                test: Rc::new(test),
            },
        }
    }

    /// Creates a predicate over whole rows of a relation whose attributes are exactly
    /// `attributes`, in this order.
    pub fn with_schema<I, S, F>(attributes: I, test: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&Row) -> bool + 'static,
    {
        Self {
            test: Test::Row {
                attributes: to_names(attributes),
                test: Rc::new(test),
            },
        }
    }

    /// Creates a predicate that holds for every row if `value` is true and for no row
    /// otherwise.
    pub fn constant(value: bool) -> Self {
        Self {
            test: Test::Constant(value),
        }
    }

    /// Returns a predicate that holds when both the receiver and `other` hold.
    pub fn and(&self, other: &Predicate) -> Self {
        Self {
            test: Test::And(Box::new(self.test.clone()), Box::new(other.test.clone())),
        }
    }

    /// Returns a predicate that holds when the receiver or `other` holds.
    pub fn or(&self, other: &Predicate) -> Self {
        Self {
            test: Test::Or(Box::new(self.test.clone()), Box::new(other.test.clone())),
        }
    }

    /// Returns a predicate that holds when the receiver does not.
    pub fn not(&self) -> Self {
        Self {
            test: Test::Not(Box::new(self.test.clone())),
        }
    }

    /// Returns the attributes read by the receiver, each once, in first-seen order.
    pub fn attributes(&self) -> Vec<&str> {
        let mut result = Vec::new();
        self.test.attributes(&mut result);
        result
    }

    /// Resolves the receiver's attributes against `schema`.
    pub fn bind(&self, schema: &Schema) -> Result<BoundPredicate<'_>, Error> {
        Ok(BoundPredicate {
            test: self.test.bind(schema)?,
        })
    }
}

impl Test {
    fn attributes<'a>(&'a self, result: &mut Vec<&'a str>) {
        match self {
            Test::Constant(_) => {}
            Test::Cells { attributes, .. } | Test::Row { attributes, .. } => {
                for attribute in attributes {
                    if !result.contains(&attribute.as_str()) {
                        result.push(attribute);
                    }
                }
            }
            Test::Not(test) => test.attributes(result),
            Test::And(left, right) | Test::Or(left, right) => {
                left.attributes(result);
                right.attributes(result);
            }
        }
    }

    fn bind(&self, schema: &Schema) -> Result<Bound<'_>, Error> {
        let bound = match self {
            Test::Constant(value) => Bound::Constant(*value),
            Test::Cells { attributes, test } => {
                let positions = attributes
                    .iter()
                    .map(|a| schema.position(a))
                    .collect::<Result<Vec<_>, _>>()?;
                Bound::Cells {
                    positions,
                    test: test.as_ref(),
                }
            }
            Test::Row { attributes, test } => {
                if attributes.as_slice() != schema.attributes() {
                    return Err(Error::SchemaMismatch {
                        expected: attributes.join(", "),
                        found: schema.attributes().join(", "),
                    });
                }
                Bound::Row(test.as_ref())
            }
            Test::Not(test) => Bound::Not(Box::new(test.bind(schema)?)),
            Test::And(left, right) => {
                Bound::And(Box::new(left.bind(schema)?), Box::new(right.bind(schema)?))
            }
            Test::Or(left, right) => {
                Bound::Or(Box::new(left.bind(schema)?), Box::new(right.bind(schema)?))
            }
        };
        Ok(bound)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("attributes", &self.attributes())
            .finish()
    }
}

/// Is a [`Predicate`] whose attributes are resolved to positions in a particular schema.
///
/// [`Predicate`]: ./struct.Predicate.html
pub struct BoundPredicate<'p> {
    test: Bound<'p>,
}

enum Bound<'p> {
    Constant(bool),
    Cells {
        positions: Vec<usize>,
        test: &'p dyn Fn(&[&Cell]) -> bool,
    },
    Row(&'p dyn Fn(&Row) -> bool),
    Not(Box<Bound<'p>>),
    And(Box<Bound<'p>>, Box<Bound<'p>>),
    Or(Box<Bound<'p>>, Box<Bound<'p>>),
}

impl<'p> BoundPredicate<'p> {
    /// Evaluates the predicate on `row`, which must conform to the schema the predicate
    /// was bound to.
    pub fn test(&self, row: &Row) -> bool {
        self.test.test(row)
    }
}

impl<'p> Bound<'p> {
    fn test(&self, row: &Row) -> bool {
        match self {
            Bound::Constant(value) => *value,
            Bound::Cells { positions, test } => {
                let cells: Vec<&Cell> = positions.iter().map(|&i| &row[i]).collect();
                test(&cells[..])
            }
            Bound::Row(test) => test(row),
            Bound::Not(test) => !test.test(row),
            Bound::And(left, right) => left.test(row) && right.test(row),
            Bound::Or(left, right) => left.test(row) || right.test(row),
        }
    }
}

fn to_names<I, S>(attributes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    attributes
        .into_iter()
        .map(|a| a.as_ref().to_string())
        .collect()
}
