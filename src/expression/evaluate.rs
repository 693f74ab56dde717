use super::{
    Collector, Diff, Expression, Join, Product, Project, Rename, Select, ThetaJoin, Union,
};
use crate::{algebra, Error, Relation};

/// Is the [`Collector`] that computes expressions bottom-up with the operators of the
/// [`algebra`] module.
///
/// [`Collector`]: ./trait.Collector.html
/// [`algebra`]: ../algebra/index.html
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator;

impl Collector for Evaluator {
    fn collect_relation(&self, relation: &Relation) -> Result<Relation, Error> {
        Ok(relation.clone())
    }

    fn collect_select<E>(&self, select: &Select<E>) -> Result<Relation, Error>
    where
        E: Expression,
    {
        let input = select.expression().collect(self)?;
        algebra::select(&input, select.predicate())
    }

    fn collect_project<E>(&self, project: &Project<E>) -> Result<Relation, Error>
    where
        E: Expression,
    {
        let input = project.expression().collect(self)?;
        algebra::project(&input, project.attributes())
    }

    fn collect_rename<E>(&self, rename: &Rename<E>) -> Result<Relation, Error>
    where
        E: Expression,
    {
        let input = rename.expression().collect(self)?;
        algebra::rename(&input, rename.originals(), rename.replacements())
    }

    fn collect_union<L, R>(&self, union: &Union<L, R>) -> Result<Relation, Error>
    where
        L: Expression,
        R: Expression,
    {
        let left = union.left().collect(self)?;
        let right = union.right().collect(self)?;
        algebra::union(&left, &right)
    }

    fn collect_diff<L, R>(&self, diff: &Diff<L, R>) -> Result<Relation, Error>
    where
        L: Expression,
        R: Expression,
    {
        let left = diff.left().collect(self)?;
        let right = diff.right().collect(self)?;
        algebra::diff(&left, &right)
    }

    fn collect_join<L, R>(&self, join: &Join<L, R>) -> Result<Relation, Error>
    where
        L: Expression,
        R: Expression,
    {
        let left = join.left().collect(self)?;
        let right = join.right().collect(self)?;
        algebra::join(&left, &right)
    }

    fn collect_theta_join<L, R>(&self, theta_join: &ThetaJoin<L, R>) -> Result<Relation, Error>
    where
        L: Expression,
        R: Expression,
    {
        let left = theta_join.left().collect(self)?;
        let right = theta_join.right().collect(self)?;
        algebra::theta_join(&left, &right, theta_join.predicate())
    }

    fn collect_product<L, R>(&self, product: &Product<L, R>) -> Result<Relation, Error>
    where
        L: Expression,
        R: Expression,
    {
        let left = product.left().collect(self)?;
        let right = product.right().collect(self)?;
        algebra::product(&left, &right)
    }
}

/// Evaluates `expression` and returns the resulting relation, or the first error raised
/// by one of its operators.
pub fn evaluate<E>(expression: &E) -> Result<Relation, Error>
where
    E: Expression,
{
    expression.collect(&Evaluator)
}
