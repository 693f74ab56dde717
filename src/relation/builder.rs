use super::{Relation, Schema, Type};
use crate::Error;

/// Is a builder that validates a schema and creates an empty [`Relation`] for it.
///
/// Attributes may be added one at a time with [`attribute`] or as parallel lists with
/// [`attribute_names`] and [`attribute_types`]. Validation happens in [`build`].
///
/// **Example**:
/// ```rust
/// use relbag::{RelationBuilder, Type};
///
/// let instructor = RelationBuilder::new()
///     .name("instructor")
///     .attribute_names(&["instructor_id", "instructor_name", "salary"])
///     .attribute_types(&[Type::Integer, Type::Text, Type::Real])
///     .build()
///     .unwrap();
///
/// assert_eq!(Some(2), instructor.attribute_index("salary"));
/// assert!(instructor.is_empty());
///
/// let broken = RelationBuilder::new()
///     .attribute_names(&["id", "id"])
///     .attribute_types(&[Type::Integer, Type::Integer])
///     .build();
/// assert!(broken.is_err());
/// ```
///
/// [`Relation`]: ./struct.Relation.html
/// [`attribute`]: #method.attribute
/// [`attribute_names`]: #method.attribute_names
/// [`attribute_types`]: #method.attribute_types
/// [`build`]: #method.build
#[derive(Clone, Debug, Default)]
pub struct RelationBuilder {
    name: Option<String>,
    attributes: Vec<String>,
    types: Vec<Type>,
}

impl RelationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name of the relation.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Appends an attribute named `name` of type `ty`.
    pub fn attribute(mut self, name: &str, ty: Type) -> Self {
        self.attributes.push(name.to_string());
        self.types.push(ty);
        self
    }

    /// Appends attribute names; their types are given by [`attribute_types`].
    ///
    /// [`attribute_types`]: #method.attribute_types
    pub fn attribute_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attributes
            .extend(names.into_iter().map(|n| n.as_ref().to_string()));
        self
    }

    /// Appends attribute types, positionally paired with the attribute names.
    pub fn attribute_types<'a, I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = &'a Type>,
    {
        self.types.extend(types.into_iter().copied());
        self
    }

    /// Validates the schema and returns an empty relation.
    pub fn build(self) -> Result<Relation, Error> {
        let schema = Schema::new(self.attributes, self.types)?;
        Ok(Relation::new(self.name, schema))
    }
}
