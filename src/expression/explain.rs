use super::*;

/// Is a [`Visitor`] that renders an expression in relational algebra notation.
///
/// Unary operators are written as prefixes (`σ`, `π`, `ρ`) and binary operators are
/// written infix inside parentheses. Relations are written by name, or `_` when they
/// have none.
///
/// [`Visitor`]: ./trait.Visitor.html
#[derive(Default, Debug)]
pub struct Explain {
    output: String,
}

impl Explain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the receiver and returns the rendered expression.
    pub fn into_string(self) -> String {
        self.output
    }

    fn binary<L, R>(&mut self, left: &L, operator: &str, right: &R)
    where
        L: Expression,
        R: Expression,
    {
        self.output.push('(');
        left.visit(self);
        self.output.push(' ');
        self.output.push_str(operator);
        self.output.push(' ');
        right.visit(self);
        self.output.push(')');
    }
}

impl Visitor for Explain {
    fn visit_relation(&mut self, relation: &Relation) {
        self.output.push_str(relation.name().unwrap_or("_"));
    }

    fn visit_select<E>(&mut self, select: &Select<E>)
    where
        E: Expression,
    {
        let attributes = select.predicate().attributes().join(", ");
        self.output.push_str(&format!("σ[{}] ", attributes));
        walk_select(self, select);
    }

    fn visit_project<E>(&mut self, project: &Project<E>)
    where
        E: Expression,
    {
        let attributes = project.attributes().join(", ");
        self.output.push_str(&format!("π[{}] ", attributes));
        walk_project(self, project);
    }

    fn visit_rename<E>(&mut self, rename: &Rename<E>)
    where
        E: Expression,
    {
        let pairs = rename
            .originals()
            .iter()
            .zip(rename.replacements())
            .map(|(from, to)| format!("{}→{}", from, to))
            .collect::<Vec<_>>()
            .join(", ");
        self.output.push_str(&format!("ρ[{}] ", pairs));
        walk_rename(self, rename);
    }

    fn visit_union<L, R>(&mut self, union: &Union<L, R>)
    where
        L: Expression,
        R: Expression,
    {
        self.binary(union.left(), "∪", union.right());
    }

    fn visit_diff<L, R>(&mut self, diff: &Diff<L, R>)
    where
        L: Expression,
        R: Expression,
    {
        self.binary(diff.left(), "−", diff.right());
    }

    fn visit_join<L, R>(&mut self, join: &Join<L, R>)
    where
        L: Expression,
        R: Expression,
    {
        self.binary(join.left(), "⋈", join.right());
    }

    fn visit_theta_join<L, R>(&mut self, theta_join: &ThetaJoin<L, R>)
    where
        L: Expression,
        R: Expression,
    {
        let operator = format!("⋈[{}]", theta_join.predicate().attributes().join(", "));
        self.binary(theta_join.left(), &operator, theta_join.right());
    }

    fn visit_product<L, R>(&mut self, product: &Product<L, R>)
    where
        L: Expression,
        R: Expression,
    {
        self.binary(product.left(), "×", product.right());
    }
}

/// Renders `expression` in relational algebra notation.
pub fn explain<E>(expression: &E) -> String
where
    E: Expression,
{
    let mut explain = Explain::new();
    expression.visit(&mut explain);
    explain.into_string()
}
