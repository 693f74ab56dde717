use crate::{Error, Relation, Row, Schema, Type};

/// Calls `result` on every pair of rows, left rows in the outer loop.
pub(crate) fn product_helper(left: &[Row], right: &[Row], mut result: impl FnMut(&Row, &Row)) {
    for l in left {
        for r in right {
            result(l, r);
        }
    }
}

/// Pushes every row of `left` that is not equal to any row of `right` into `result`.
/// Each row of `left` is tested against all of `right`; multiplicities are not counted.
pub(crate) fn diff_helper(left: &[Row], right: &[Row], result: &mut Vec<Row>) {
    for row in left {
        if !contains_row(right, row) {
            result.push(row.clone());
        }
    }
}

pub(crate) fn contains_row(rows: &[Row], row: &Row) -> bool {
    rows.iter().any(|r| r == row)
}

/// Returns the attributes of `left` that `right` also has, in `left`'s order.
pub(crate) fn common_attributes<'a>(left: &'a Schema, right: &Schema) -> Vec<&'a str> {
    left.attributes()
        .iter()
        .filter(|a| right.contains(a))
        .map(String::as_str)
        .collect()
}

/// Returns the attributes of `left` followed by those of `right` that are not in `left`,
/// each with its type; a name declared by both takes `left`'s type.
pub(crate) fn attribute_union(left: &Schema, right: &Schema) -> (Vec<String>, Vec<Type>) {
    let mut attributes = left.attributes().to_vec();
    let mut types = left.types().to_vec();
    for (attribute, ty) in right.attributes().iter().zip(right.types()) {
        if !attributes.contains(attribute) {
            attributes.push(attribute.clone());
            types.push(*ty);
        }
    }
    (attributes, types)
}

/// Is where a cell of an assembled row is taken from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Source {
    Left(usize),
    Right(usize),
}

/// Returns, for every attribute of `target`, the position of its cell in `left` or, if
/// `left` does not have it, in `right`. Fails if neither schema has the attribute.
pub(crate) fn row_sources(
    target: &Schema,
    left: &Schema,
    right: &Schema,
) -> Result<Vec<Source>, Error> {
    target
        .attributes()
        .iter()
        .map(|a| match left.index_of(a) {
            Some(i) => Ok(Source::Left(i)),
            None => right.position(a).map(Source::Right),
        })
        .collect()
}

/// Assembles a row of the target schema from a pair of rows according to `sources`.
pub(crate) fn assemble(sources: &[Source], left: &Row, right: &Row) -> Row {
    sources
        .iter()
        .map(|source| match *source {
            Source::Left(i) => left[i].clone(),
            Source::Right(j) => right[j].clone(),
        })
        .collect()
}

/// Returns the size of the relation for logging, with its name when it has one.
pub(crate) fn describe(relation: &Relation) -> String {
    match relation.name() {
        Some(name) => format!("{}({} rows)", name, relation.len()),
        None => format!("({} rows)", relation.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn schema(attributes: &[&str], types: &[Type]) -> Schema {
        Schema::new(
            attributes.iter().map(|a| a.to_string()).collect(),
            types.to_vec(),
        )
        .unwrap()
    }

    fn row(cells: &[i64]) -> Row {
        cells.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn test_product_helper() {
        let mut pairs = Vec::new();
        product_helper(&[row(&[1]), row(&[2])], &[row(&[10]), row(&[20])], |l, r| {
            pairs.push((l[0].as_integer().unwrap(), r[0].as_integer().unwrap()))
        });
        assert_eq!(vec![(1, 10), (1, 20), (2, 10), (2, 20)], pairs);
    }

    #[test]
    fn test_diff_helper() {
        {
            let mut result = Vec::new();
            diff_helper(&[row(&[1]), row(&[2]), row(&[1])], &[row(&[1])], &mut result);
            assert_eq!(vec![row(&[2])], result);
        }
        {
            let mut result = Vec::new();
            diff_helper(&[row(&[3]), row(&[2]), row(&[3])], &[], &mut result);
            assert_eq!(vec![row(&[3]), row(&[2]), row(&[3])], result);
        }
    }

    #[test]
    fn test_common_attributes() {
        let left = schema(&["c", "a", "b"], &[Type::Text, Type::Text, Type::Text]);
        let right = schema(&["b", "d", "c"], &[Type::Text, Type::Text, Type::Text]);
        assert_eq!(vec!["c", "b"], common_attributes(&left, &right));
        assert_eq!(vec!["b", "c"], common_attributes(&right, &left));
    }

    #[test]
    fn test_attribute_union() {
        let left = schema(&["a", "b"], &[Type::Text, Type::Integer]);
        let right = schema(&["c", "b"], &[Type::Real, Type::Real]);
        let (attributes, types) = attribute_union(&left, &right);
        assert_eq!(vec!["a", "b", "c"], attributes);
        assert_eq!(vec![Type::Text, Type::Integer, Type::Real], types);
    }

    #[test]
    fn test_assemble() {
        let left = schema(&["a", "b"], &[Type::Integer, Type::Integer]);
        let right = schema(&["b", "c"], &[Type::Integer, Type::Integer]);
        let target = schema(
            &["b", "a", "c"],
            &[Type::Integer, Type::Integer, Type::Integer],
        );
        {
            let sources = row_sources(&target, &left, &right).unwrap();
            assert_eq!(
                vec![Source::Left(1), Source::Left(0), Source::Right(1)],
                sources
            );
            assert_eq!(
                row(&[2, 1, 4]),
                assemble(&sources, &row(&[1, 2]), &row(&[3, 4]))
            );
        }
        {
            let target = schema(&["a", "d"], &[Type::Integer, Type::Integer]);
            let result = row_sources(&target, &left, &right);
            assert!(matches!(result, Err(Error::UnknownAttribute { name }) if name == "d"));
        }
    }
}
