/*!
Clauses, collections of literals interpreted as their disjunction.

The canonical representation of a clause is a vector of
[SymLiteral](crate::structures::literal::SymLiteral)s, and of a formula in
conjunctive normal form a vector of clauses.
*/

use crate::structures::literal::SymLiteral;

/// The canonical representation of a clause.
pub type SymClause = Vec<SymLiteral>;

/// Methods on anything which may be read as a clause.
pub trait Clause {
    /// The literals of the clause, space separated.
    fn as_text(&self) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;
}

impl Clause for [SymLiteral] {
    fn as_text(&self) -> String {
        self.iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// A text rendering of a clause list, one clause per line.
pub fn cnf_text(clauses: &[SymClause]) -> String {
    clauses
        .iter()
        .map(|clause| clause.as_text())
        .collect::<Vec<_>>()
        .join("\n")
}
