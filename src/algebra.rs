//! Implements the relational algebra operators as pure functions over [`Relation`]s.
//!
//! Every operator reads its inputs without modifying them and returns a new relation.
//! Relations are bags: no operator removes duplicate rows, and every operator preserves
//! the relative order of the rows it keeps.
//!
//! [`Relation`]: ../struct.Relation.html
use crate::{
    tools::{
        assemble, attribute_union, common_attributes, describe, diff_helper, product_helper,
        row_sources,
    },
    Error, Predicate, Relation, Row, Schema,
};

/// Returns the rows of `relation` for which `predicate` holds, under the same schema.
///
/// The predicate is bound to the schema of `relation`.
pub fn select(relation: &Relation, predicate: &Predicate) -> Result<Relation, Error> {
    let bound = predicate.bind(relation.schema())?;

    let mut result = Relation::empty(relation.schema().clone());
    for row in relation {
        if bound.test(row) {
            result.push(row.clone());
        }
    }

    log::debug!("select {} -> {}", describe(relation), describe(&result));
    Ok(result)
}

/// Restricts every row of `relation` to `attributes`, in the order they are listed.
///
/// Duplicate rows are kept. Fails with `UnknownAttribute` if `relation` has no attribute
/// by one of the names and with `DuplicateAttribute` if a name is listed twice; in both
/// cases no row is produced.
///
/// **Example**:
/// ```rust
/// use relbag::{algebra, Cell, RelationBuilder, Type};
///
/// let mut classroom = RelationBuilder::new()
///     .attribute_names(&["building", "room_number", "capacity"])
///     .attribute_types(&[Type::Text, Type::Integer, Type::Integer])
///     .build()
///     .unwrap();
/// classroom.insert(vec![Cell::from("Packard"), Cell::from(101), Cell::from(500)]).unwrap();
/// classroom.insert(vec![Cell::from("Packard"), Cell::from(101), Cell::from(500)]).unwrap();
///
/// let result = algebra::project(&classroom, &["capacity", "building"]).unwrap();
/// assert_eq!(&["capacity", "building"], result.attributes());
/// assert_eq!(2, result.len());
///
/// assert!(algebra::project(&classroom, &["budget"]).is_err());
/// ```
pub fn project<I, S>(relation: &Relation, attributes: I) -> Result<Relation, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let schema = relation.schema();
    let mut names = Vec::new();
    let mut types = Vec::new();
    let mut positions = Vec::new();
    for attribute in attributes {
        let attribute = attribute.as_ref();
        let position = schema.position(attribute)?;
        names.push(attribute.to_string());
        types.push(schema.types()[position]);
        positions.push(position);
    }

    let mut result = Relation::empty(Schema::new(names, types)?);
    for row in relation {
        result.push(positions.iter().map(|&i| row[i].clone()).collect());
    }

    log::debug!("project {} -> {}", describe(relation), describe(&result));
    Ok(result)
}

/// Renames every attribute in `from` to the name at the same position in `to`; the
/// other attributes, the types and the rows are unchanged.
///
/// Fails with `RenameArity` if `from` and `to` differ in length, with `UnknownAttribute`
/// if a name in `from` is not an attribute of `relation` and with `DuplicateAttribute`
/// if `from` lists a name twice or the renamed schema repeats a name. All checks happen
/// before anything is produced.
///
/// **Example**:
/// ```rust
/// use relbag::{algebra, RelationBuilder, Type};
///
/// let takes = RelationBuilder::new()
///     .attribute_names(&["ID", "course_id", "grade"])
///     .attribute_types(&[Type::Integer, Type::Integer, Type::Text])
///     .build()
///     .unwrap();
///
/// let result = algebra::rename(&takes, &["ID"], &["student_id"]).unwrap();
/// assert_eq!(&["student_id", "course_id", "grade"], result.attributes());
///
/// assert!(algebra::rename(&takes, &["ID", "grade"], &["student_id"]).is_err());
/// assert!(algebra::rename(&takes, &["id"], &["student_id"]).is_err());
/// ```
pub fn rename<I, J, S, T>(relation: &Relation, from: I, to: J) -> Result<Relation, Error>
where
    I: IntoIterator<Item = S>,
    J: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let from: Vec<S> = from.into_iter().collect();
    let to: Vec<T> = to.into_iter().collect();
    if from.len() != to.len() {
        return Err(Error::RenameArity {
            from: from.len(),
            to: to.len(),
        });
    }

    let schema = relation.schema();
    let mut names = schema.attributes().to_vec();
    for (i, (old, new)) in from.iter().zip(&to).enumerate() {
        let old = old.as_ref();
        if from[..i].iter().any(|o| o.as_ref() == old) {
            return Err(Error::DuplicateAttribute {
                name: old.to_string(),
            });
        }
        let position = schema.position(old)?;
        names[position] = new.as_ref().to_string();
    }

    let mut result = Relation::empty(Schema::new(names, schema.types().to_vec())?);
    for row in relation {
        result.push(row.clone());
    }

    log::debug!("rename {} -> {}", describe(relation), describe(&result));
    Ok(result)
}

/// Returns the rows of `left` followed by the rows of `right`, keeping duplicates.
///
/// Both relations must have the same schema; otherwise `SchemaMismatch` is returned.
pub fn union(left: &Relation, right: &Relation) -> Result<Relation, Error> {
    check_same_schema(left, right)?;

    let mut result = Relation::empty(left.schema().clone());
    for row in left.iter().chain(right) {
        result.push(row.clone());
    }

    log::debug!(
        "union {} {} -> {}",
        describe(left),
        describe(right),
        describe(&result)
    );
    Ok(result)
}

/// Returns the rows of `left` that are not equal to any row of `right`.
///
/// Every occurrence of a row in `left` is removed when `right` contains that row at
/// least once. Both relations must have the same schema; otherwise `SchemaMismatch` is
/// returned.
///
/// **Example**:
/// ```rust
/// use relbag::{algebra, Cell, RelationBuilder, Type};
///
/// let mut r = RelationBuilder::new().attribute("id", Type::Integer).build().unwrap();
/// let mut s = r.clone();
/// for id in &[1, 1, 2] {
///     r.insert(vec![Cell::from(*id)]).unwrap();
/// }
/// s.insert(vec![Cell::from(1)]).unwrap();
///
/// let result = algebra::diff(&r, &s).unwrap();
/// assert_eq!(1, result.len());
/// assert_eq!(Cell::from(2), result.row(0).unwrap()[0]);
/// ```
pub fn diff(left: &Relation, right: &Relation) -> Result<Relation, Error> {
    check_same_schema(left, right)?;

    let mut rows = Vec::new();
    diff_helper(left.rows(), right.rows(), &mut rows);

    let mut result = Relation::empty(left.schema().clone());
    for row in rows {
        result.push(row);
    }

    log::debug!(
        "diff {} {} -> {}",
        describe(left),
        describe(right),
        describe(&result)
    );
    Ok(result)
}

/// Computes the natural join of `left` and `right`.
///
/// The attributes common to both relations, in `left`'s order, are the join keys. The
/// result has the attributes of `left` followed by the attributes of `right` that `left`
/// does not have; a common attribute takes its type from `left`. A pair of rows
/// contributes one row to the result when all of their key cells are equal; without
/// common attributes every pair matches.
///
/// **Example**:
/// ```rust
/// use relbag::{algebra, Cell, RelationBuilder, Type};
///
/// let mut department = RelationBuilder::new()
///     .attribute_names(&["dept_name", "building", "budget"])
///     .attribute_types(&[Type::Text, Type::Text, Type::Integer])
///     .build()
///     .unwrap();
/// department.insert(vec![Cell::from("CS"), Cell::from("X"), Cell::from(50)]).unwrap();
///
/// let mut classroom = RelationBuilder::new()
///     .attribute_names(&["building", "room_number", "capacity"])
///     .attribute_types(&[Type::Text, Type::Integer, Type::Integer])
///     .build()
///     .unwrap();
/// classroom.insert(vec![Cell::from("X"), Cell::from(101), Cell::from(80)]).unwrap();
///
/// let result = algebra::join(&department, &classroom).unwrap();
/// assert_eq!(
///     &["dept_name", "building", "budget", "room_number", "capacity"],
///     result.attributes()
/// );
/// assert_eq!(1, result.len());
/// ```
pub fn join(left: &Relation, right: &Relation) -> Result<Relation, Error> {
    let (lschema, rschema) = (left.schema(), right.schema());
    let common = common_attributes(lschema, rschema);

    let mut keys = Vec::with_capacity(common.len());
    for &attribute in &common {
        let (i, j) = (lschema.position(attribute)?, rschema.position(attribute)?);
        let (ltype, rtype) = (lschema.types()[i], rschema.types()[j]);
        if ltype != rtype {
            log::warn!(
                "join key `{}` is {} on the left but {} on the right; using {}",
                attribute,
                ltype,
                rtype,
                ltype
            );
        }
        keys.push((i, j));
    }

    let (names, types) = attribute_union(lschema, rschema);
    let schema = Schema::new(names, types)?;
    let sources = row_sources(&schema, lschema, rschema)?;

    let mut result = Relation::empty(schema);
    product_helper(left.rows(), right.rows(), |l, r| {
        if keys.iter().all(|&(i, j)| l[i] == r[j]) {
            result.push(assemble(&sources, l, r));
        }
    });

    log::debug!(
        "join {} {} on [{}] -> {}",
        describe(left),
        describe(right),
        common.join(", "),
        describe(&result)
    );
    Ok(result)
}

/// Joins `left` and `right` on an arbitrary `predicate`.
///
/// The result has the attributes of `left` followed by the attributes of `right` that
/// `left` does not have. For every pair of rows, the combined row is built once (a
/// shared attribute takes `left`'s cell) and kept when `predicate` holds for it. The
/// predicate is bound to the combined schema.
///
/// **Example**:
/// ```rust
/// use relbag::{algebra, Cell, Predicate, RelationBuilder, Type};
///
/// let mut instructor = RelationBuilder::new()
///     .attribute_names(&["instructor_id", "department"])
///     .attribute_types(&[Type::Integer, Type::Text])
///     .build()
///     .unwrap();
/// instructor.insert(vec![Cell::from(1), Cell::from("Statistics")]).unwrap();
/// instructor.insert(vec![Cell::from(2), Cell::from("Physics")]).unwrap();
///
/// let mut department = RelationBuilder::new()
///     .attribute_names(&["dept_name", "building"])
///     .attribute_types(&[Type::Text, Type::Text])
///     .build()
///     .unwrap();
/// department.insert(vec![Cell::from("Statistics"), Cell::from("Taylor")]).unwrap();
///
/// let same_department = Predicate::new(&["department", "dept_name"], |c| c[0] == c[1]);
/// let result = algebra::theta_join(&instructor, &department, &same_department).unwrap();
///
/// assert_eq!(4, result.attributes().len());
/// assert_eq!(1, result.len());
/// ```
pub fn theta_join(
    left: &Relation,
    right: &Relation,
    predicate: &Predicate,
) -> Result<Relation, Error> {
    let (lschema, rschema) = (left.schema(), right.schema());
    let (names, types) = attribute_union(lschema, rschema);
    let schema = Schema::new(names, types)?;
    let bound = predicate.bind(&schema)?;
    let sources = row_sources(&schema, lschema, rschema)?;

    let mut result = Relation::empty(schema);
    product_helper(left.rows(), right.rows(), |l, r| {
        let row = assemble(&sources, l, r);
        if bound.test(&row) {
            result.push(row);
        }
    });

    log::debug!(
        "theta join {} {} -> {}",
        describe(left),
        describe(right),
        describe(&result)
    );
    Ok(result)
}

/// Returns the Cartesian product of `left` and `right`: every row of `left`
/// concatenated with every row of `right`.
///
/// Fails with `SchemaConflict` before processing any row if the two relations share an
/// attribute name.
pub fn product(left: &Relation, right: &Relation) -> Result<Relation, Error> {
    let (lschema, rschema) = (left.schema(), right.schema());
    let shared = common_attributes(lschema, rschema);
    if !shared.is_empty() {
        return Err(Error::SchemaConflict {
            shared: shared.into_iter().map(String::from).collect(),
        });
    }

    let mut names = lschema.attributes().to_vec();
    names.extend_from_slice(rschema.attributes());
    let mut types = lschema.types().to_vec();
    types.extend_from_slice(rschema.types());
    let schema = Schema::new(names, types)?;

    let mut rows = Vec::with_capacity(left.len() * right.len());
    product_helper(left.rows(), right.rows(), |l, r| {
        rows.push(l.iter().chain(r.iter()).cloned().collect::<Row>());
    });

    let mut result = Relation::empty(schema);
    for row in rows {
        if row.len() != result.schema().len() {
            return Err(Error::RowArity {
                expected: result.schema().len(),
                found: row.len(),
            });
        }
        result.push(row);
    }

    log::debug!(
        "product {} {} -> {}",
        describe(left),
        describe(right),
        describe(&result)
    );
    Ok(result)
}

fn check_same_schema(left: &Relation, right: &Relation) -> Result<(), Error> {
    if left.schema() != right.schema() {
        return Err(Error::SchemaMismatch {
            expected: left.schema().describe(),
            found: right.schema().describe(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, RelationBuilder, Type};

    fn relation(attributes: &[&str], types: &[Type], rows: Vec<Vec<Cell>>) -> Relation {
        let mut result = RelationBuilder::new()
            .attribute_names(attributes)
            .attribute_types(types)
            .build()
            .unwrap();
        for row in rows {
            result.insert(row).unwrap();
        }
        result
    }

    fn department() -> Relation {
        relation(
            &["dept_name", "building", "budget"],
            &[Type::Text, Type::Text, Type::Integer],
            vec![vec![Cell::from("CS"), Cell::from("X"), Cell::from(50)]],
        )
    }

    fn classroom() -> Relation {
        relation(
            &["building", "room_number", "capacity"],
            &[Type::Text, Type::Integer, Type::Integer],
            vec![vec![Cell::from("X"), Cell::from(101), Cell::from(80)]],
        )
    }

    fn grades(rows: &[(i64, &str)]) -> Relation {
        relation(
            &["id", "grade"],
            &[Type::Integer, Type::Text],
            rows.iter()
                .map(|&(id, grade)| vec![Cell::from(id), Cell::from(grade)])
                .collect(),
        )
    }

    fn values(relation: &Relation) -> Vec<Vec<Cell>> {
        relation.iter().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn test_select() {
        let r = grades(&[(1, "A"), (2, "B"), (3, "A"), (1, "A")]);
        {
            let result = select(&r, &Predicate::constant(true)).unwrap();
            assert_eq!(r, result);
        }
        {
            let result = select(&r, &Predicate::constant(false)).unwrap();
            assert!(result.is_empty());
            assert_eq!(r.schema(), result.schema());
        }
        {
            let a = Predicate::new(&["grade"], |c| c[0].as_text() == Some("A"));
            let result = select(&r, &a).unwrap();
            assert_eq!(grades(&[(1, "A"), (3, "A"), (1, "A")]), result);
        }
        {
            let result = select(&r, &Predicate::new(&["year"], |_| true));
            assert!(matches!(result, Err(Error::UnknownAttribute { .. })));
        }
    }

    #[test]
    fn test_select_does_not_modify_input() {
        let r = grades(&[(1, "A"), (2, "B")]);
        let before = r.clone();
        select(&r, &Predicate::constant(false)).unwrap();
        assert_eq!(before, r);
    }

    #[test]
    fn test_project() {
        let r = grades(&[(2, "B"), (1, "A"), (2, "B")]);
        {
            let result = project(&r, &["id", "grade"]).unwrap();
            assert_eq!(r, result);
        }
        {
            let result = project(&r, &["grade"]).unwrap();
            assert_eq!(&["grade"], result.attributes());
            assert_eq!(&[Type::Text], result.types());
            assert_eq!(
                vec![
                    vec![Cell::from("B")],
                    vec![Cell::from("A")],
                    vec![Cell::from("B")]
                ],
                values(&result)
            );
        }
        {
            let result = project(&r, &["grade", "id"]).unwrap();
            assert_eq!(&["grade", "id"], result.attributes());
            assert_eq!(&[Type::Text, Type::Integer], result.types());
            assert_eq!(vec![Cell::from("A"), Cell::from(1)], values(&result)[1]);
        }
        {
            let result = project(&r, Vec::<String>::new()).unwrap();
            assert_eq!(3, result.len());
            assert!(result.attributes().is_empty());
        }
    }

    #[test]
    fn test_project_errors() {
        let r = grades(&[(1, "A")]);
        {
            let result = project(&r, &["id", "semester"]);
            assert!(matches!(result, Err(Error::UnknownAttribute { name }) if name == "semester"));
        }
        {
            let result = project(&r, &["id", "id"]);
            assert!(matches!(result, Err(Error::DuplicateAttribute { name }) if name == "id"));
        }
    }

    #[test]
    fn test_rename() {
        let r = grades(&[(1, "A"), (2, "B")]);
        {
            let result = rename(&r, Vec::<&str>::new(), Vec::<&str>::new()).unwrap();
            assert_eq!(r, result);
        }
        {
            let result = rename(&r, &["grade"], &["letter"]).unwrap();
            assert_eq!(&["id", "letter"], result.attributes());
            assert_eq!(r.types(), result.types());
            assert_eq!(values(&r), values(&result));
        }
        {
            let result = rename(&r, &["grade", "id"], &["id", "grade"]).unwrap();
            assert_eq!(&["grade", "id"], result.attributes());
            assert_eq!(&[Type::Integer, Type::Text], result.types());
        }
        {
            let renamed = rename(&r, &["id"], &["student"]).unwrap();
            let back = rename(&renamed, &["student"], &["id"]).unwrap();
            assert_eq!(r, back);
        }
    }

    #[test]
    fn test_rename_errors() {
        let r = grades(&[(1, "A")]);
        {
            let result = rename(&r, &["id", "grade"], &["student"]);
            assert!(matches!(result, Err(Error::RenameArity { from: 2, to: 1 })));
        }
        {
            let result = rename(&r, &["year"], &["semester"]);
            assert!(matches!(result, Err(Error::UnknownAttribute { name }) if name == "year"));
        }
        {
            let result = rename(&r, &["id"], &["grade"]);
            assert!(matches!(result, Err(Error::DuplicateAttribute { name }) if name == "grade"));
        }
        {
            let result = rename(&r, &["id", "id"], &["x", "y"]);
            assert!(matches!(result, Err(Error::DuplicateAttribute { name }) if name == "id"));
        }
    }

    #[test]
    fn test_union() {
        let r = grades(&[(1, "A"), (2, "B")]);
        let s = grades(&[(3, "C"), (1, "A")]);
        {
            let result = union(&r, &r).unwrap();
            assert_eq!(2 * r.len(), result.len());
        }
        {
            let result = union(&r, &s).unwrap();
            assert_eq!(grades(&[(1, "A"), (2, "B"), (3, "C"), (1, "A")]), result);
        }
        {
            let other = rename(&r, &["grade"], &["letter"]).unwrap();
            assert!(matches!(union(&r, &other), Err(Error::SchemaMismatch { .. })));
        }
    }

    #[test]
    fn test_diff() {
        let r = grades(&[(1, "A"), (2, "B"), (1, "A"), (3, "C")]);
        {
            assert!(diff(&r, &r).unwrap().is_empty());
        }
        {
            let s = grades(&[(1, "A")]);
            let result = diff(&r, &s).unwrap();
            assert_eq!(grades(&[(2, "B"), (3, "C")]), result);
        }
        {
            let s = grades(&[]);
            assert_eq!(r, diff(&r, &s).unwrap());
            assert!(diff(&s, &r).unwrap().is_empty());
        }
        {
            let s = relation(&["id"], &[Type::Integer], vec![]);
            assert!(matches!(diff(&r, &s), Err(Error::SchemaMismatch { .. })));
        }
    }

    #[test]
    fn test_diff_of_union_is_bag_aware() {
        {
            let r = grades(&[(1, "A"), (2, "B")]);
            let s = grades(&[(2, "B"), (3, "C")]);
            let result = diff(&union(&r, &s).unwrap(), &s).unwrap();
            assert_ne!(r, result);
            assert_eq!(grades(&[(1, "A")]), result);
        }
        {
            let r = grades(&[(1, "A"), (2, "B")]);
            let s = grades(&[(3, "C"), (4, "D")]);
            let result = diff(&union(&r, &s).unwrap(), &s).unwrap();
            assert_eq!(r, result);
        }
    }

    #[test]
    fn test_union_and_diff_of_identical_rows() {
        let r = grades(&[(1, "A")]);
        let s = grades(&[(1, "A")]);
        assert!(diff(&r, &s).unwrap().is_empty());
        assert!(diff(&s, &r).unwrap().is_empty());
        assert_eq!(2, union(&r, &s).unwrap().len());
    }

    #[test]
    fn test_join() {
        {
            let result = join(&department(), &classroom()).unwrap();
            assert_eq!(
                &["dept_name", "building", "budget", "room_number", "capacity"],
                result.attributes()
            );
            assert_eq!(
                &[Type::Text, Type::Text, Type::Integer, Type::Integer, Type::Integer],
                result.types()
            );
            assert_eq!(
                vec![vec![
                    Cell::from("CS"),
                    Cell::from("X"),
                    Cell::from(50),
                    Cell::from(101),
                    Cell::from(80)
                ]],
                values(&result)
            );
        }
        {
            let mut classroom = classroom();
            classroom
                .insert(vec![Cell::from("Y"), Cell::from(7), Cell::from(10)])
                .unwrap();
            classroom
                .insert(vec![Cell::from("X"), Cell::from(102), Cell::from(20)])
                .unwrap();
            let result = join(&department(), &classroom).unwrap();
            assert_eq!(2, result.len());
            assert_eq!(Cell::from(101), result.row(0).unwrap()[3]);
            assert_eq!(Cell::from(102), result.row(1).unwrap()[3]);
        }
    }

    #[test]
    fn test_join_without_common_attributes() {
        let r = grades(&[(1, "A"), (2, "B")]);
        let result = join(&r, &classroom()).unwrap();
        assert_eq!(2, result.len());
        assert_eq!(5, result.attributes().len());
    }

    #[test]
    fn test_join_key_types_must_agree() {
        let r = grades(&[(1, "A")]);
        let s = relation(
            &["id", "name"],
            &[Type::Text, Type::Text],
            vec![vec![Cell::from("1"), Cell::from("Zhang")]],
        );
        let result = join(&r, &s).unwrap();
        assert_eq!(&[Type::Integer, Type::Text, Type::Text], result.types());
        assert!(result.is_empty());
    }

    #[test]
    fn test_join_is_commutative_up_to_attribute_order() {
        let r = relation(
            &["id", "course_id"],
            &[Type::Integer, Type::Integer],
            vec![
                vec![Cell::from(1), Cell::from(748)],
                vec![Cell::from(2), Cell::from(748)],
                vec![Cell::from(1), Cell::from(101)],
            ],
        );
        let s = relation(
            &["course_id", "title"],
            &[Type::Integer, Type::Text],
            vec![
                vec![Cell::from(748), Cell::from("Databases")],
                vec![Cell::from(101), Cell::from("Intro")],
                vec![Cell::from(999), Cell::from("Unused")],
            ],
        );

        let rs = join(&r, &s).unwrap();
        let sr = join(&s, &r).unwrap();
        let aligned = project(&sr, rs.attributes()).unwrap();

        let mut left = values(&rs);
        let mut right = values(&aligned);
        left.sort();
        right.sort();
        assert_eq!(3, left.len());
        assert_eq!(left, right);
    }

    #[test]
    fn test_theta_join() {
        let instructor = relation(
            &["instructor_id", "department"],
            &[Type::Integer, Type::Text],
            vec![
                vec![Cell::from(1), Cell::from("Statistics")],
                vec![Cell::from(2), Cell::from("Physics")],
                vec![Cell::from(3), Cell::from("Statistics")],
            ],
        );
        let department = relation(
            &["dept_name", "budget"],
            &[Type::Text, Type::Real],
            vec![
                vec![Cell::from("Physics"), Cell::from(70000.0)],
                vec![Cell::from("Statistics"), Cell::from(395051.0)],
            ],
        );
        {
            let same = Predicate::new(&["department", "dept_name"], |c| c[0] == c[1]);
            let result = theta_join(&instructor, &department, &same).unwrap();
            assert_eq!(
                &["instructor_id", "department", "dept_name", "budget"],
                result.attributes()
            );
            assert_eq!(
                vec![Cell::from(1), Cell::from(2), Cell::from(3)],
                result.iter().map(|r| r[0].clone()).collect::<Vec<_>>()
            );
        }
        {
            let result = theta_join(&instructor, &department, &Predicate::constant(true)).unwrap();
            assert_eq!(6, result.len());
            assert_eq!(Cell::from(1), result.row(1).unwrap()[0]);
            assert_eq!(Cell::from("Statistics"), result.row(1).unwrap()[2]);
        }
        {
            let result = theta_join(&instructor, &department, &Predicate::new(&["room"], |_| true));
            assert!(matches!(result, Err(Error::UnknownAttribute { .. })));
        }
    }

    #[test]
    fn test_theta_join_with_shared_attributes() {
        let r = grades(&[(1, "A"), (2, "B")]);
        let s = relation(
            &["id", "year"],
            &[Type::Integer, Type::Integer],
            vec![vec![Cell::from(9), Cell::from(2003)]],
        );
        let schema = ["id", "grade", "year"];
        let predicate = Predicate::with_schema(&schema, |row| row[0] == Cell::from(1));
        let result = theta_join(&r, &s, &predicate).unwrap();
        assert_eq!(&schema, result.attributes());
        assert_eq!(
            vec![vec![Cell::from(1), Cell::from("A"), Cell::from(2003)]],
            values(&result)
        );
    }

    #[test]
    fn test_product() {
        let r = grades(&[(1, "A"), (2, "B")]);
        let s = classroom();
        {
            let result = product(&r, &s).unwrap();
            assert_eq!(r.len() * s.len(), result.len());
            assert_eq!(
                &["id", "grade", "building", "room_number", "capacity"],
                result.attributes()
            );
            assert_eq!(
                vec![
                    Cell::from(2),
                    Cell::from("B"),
                    Cell::from("X"),
                    Cell::from(101),
                    Cell::from(80)
                ],
                values(&result)[1]
            );
        }
        {
            let empty = relation(&["year"], &[Type::Integer], vec![]);
            let result = product(&r, &empty).unwrap();
            assert!(result.is_empty());
            assert_eq!(&["id", "grade", "year"], result.attributes());
        }
    }

    #[test]
    fn test_product_rejects_shared_attributes() {
        let result = product(&department(), &classroom());
        match result {
            Err(Error::SchemaConflict { shared }) => assert_eq!(vec!["building"], shared),
            _ => panic!("expected a schema conflict"),
        }
    }
}
