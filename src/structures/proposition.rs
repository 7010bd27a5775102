/*!
The wire alphabet of propositional formula strings.

A grounded formula is a fully parenthesised UTF-8 string whose atoms are single
code points at or above U+0100, with the connectives below as control
characters.
Every binary application is wrapped as `(α op β)`; negation is the prefix `-`.

The grounder emits `∧`, `∨`, `>` and `-`; the biconditional `=` is accepted by
the [Tseitin transform](crate::tseitin) but never produced.
*/

/// Conjunction.
pub const CONJUNCTION: char = '∧';

/// Disjunction.
pub const DISJUNCTION: char = '∨';

/// Material implication.
pub const IMPLICATION: char = '>';

/// Biconditional.
pub const BICONDITIONAL: char = '=';

/// Negation, prefix.
pub const NEGATION: char = '-';

/// Opening parenthesis.
pub const LEFT_PAREN: char = '(';

/// Closing parenthesis.
pub const RIGHT_PAREN: char = ')';

/// The binary connectives, in no particular order.
pub const BINARY_CONNECTIVES: [char; 4] =
    [CONJUNCTION, DISJUNCTION, IMPLICATION, BICONDITIONAL];

/// True iff `character` is a binary connective.
pub fn is_binary_connective(character: char) -> bool {
    BINARY_CONNECTIVES.contains(&character)
}

/// True iff `character` is reserved by the alphabet, and so never an atom.
pub fn is_control(character: char) -> bool {
    character == NEGATION
        || character == LEFT_PAREN
        || character == RIGHT_PAREN
        || is_binary_connective(character)
}
