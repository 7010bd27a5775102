/*!
The Tseitin transform --- linear-size CNF for an arbitrary propositional string.

The input is a fully parenthesised string over single code point atoms and the
[connective alphabet](crate::structures::proposition).
The output is an equisatisfiable clause list: a fresh auxiliary atom names each
subformula, the defining equation of each auxiliary expands to at most four
clauses, and the root auxiliary is asserted as the leading unit clause.
Projecting any satisfying assignment of the output onto the input's atoms
yields a model of the input.

The translation is a single left-to-right scan with an explicit stack, so both
time and output size are linear in the input:

- A working symbol under a pending `-` pops the negation and defines a fresh
  auxiliary.
- A `)` pops `left connective right` over `(` and defines a fresh auxiliary.
- Anything else is pushed, and the next input character becomes the working
  symbol.

In the first two cases the fresh auxiliary becomes the working symbol, without
reading input, so an enclosing negation or connective sees the result --- and,
in particular, chained negations such as `--α` fold one definition at a time.

Auxiliary atoms are drawn from `max(ord(Σ)) + 256` upward, skipping anything
reserved by the alphabet or outside the `char` range, so disjointness from the
input's atoms and the control set holds by construction and is checked at
allocation.

# Example
```rust
# use heron_fol::tseitin::TseitinTransform;
let mut tseitin = TseitinTransform::default();
let clauses = tseitin.transform("(Ā∧-ā)").unwrap();

// The root unit clause, one definition for the negation, three for the
// conjunction: 1 + 2 + 3 clauses in all.
assert_eq!(clauses.len(), 6);
assert_eq!(clauses[0].len(), 1);
```
*/

use std::collections::HashSet;

use crate::{
    misc::log::targets,
    structures::{
        clause::{cnf_text, SymClause},
        literal::{SymLiteral, Symbol},
        proposition,
    },
    types::err::TseitinError,
};

/// The gap left above the highest input atom before auxiliary allocation.
const AUX_OFFSET: u32 = 256;

/// A defining equation for one auxiliary atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Definition {
    /// `out = -arg`.
    Negation { out: Symbol, arg: Symbol },

    /// `out = (left connective right)`.
    Connective {
        out: Symbol,
        connective: char,
        left: Symbol,
        right: Symbol,
    },
}

/// A Tseitin transformer, retaining the alphabets of its last transform.
#[derive(Clone, Debug, Default)]
pub struct TseitinTransform {
    /// The input's atoms, in first-seen order.
    pub atoms: Vec<Symbol>,

    /// The fresh auxiliaries, in allocation order.
    pub aux_atoms: Vec<Symbol>,
}

impl TseitinTransform {
    /// A fresh transformer.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `symbol` was allocated as an auxiliary by the last transform.
    pub fn is_auxiliary(&self, symbol: Symbol) -> bool {
        self.aux_atoms.contains(&symbol)
    }

    /// The equisatisfiable clause list of `formula`, root unit clause first.
    pub fn transform(&mut self, formula: &str) -> Result<Vec<SymClause>, TseitinError> {
        let characters: Vec<char> = formula.chars().collect();
        if characters.is_empty() {
            return Err(TseitinError::MalformedFormula);
        }

        self.atoms = Vec::default();
        for character in &characters {
            if !proposition::is_control(*character) && !self.atoms.contains(character) {
                self.atoms.push(*character);
            }
        }
        if self.atoms.is_empty() {
            return Err(TseitinError::MalformedFormula);
        }

        let definition_count = characters
            .iter()
            .filter(|c| {
                proposition::is_binary_connective(**c) || **c == proposition::NEGATION
            })
            .count();
        self.aux_atoms = self.allocate_auxiliaries(definition_count)?;

        let letters: HashSet<Symbol> =
            self.atoms.iter().chain(self.aux_atoms.iter()).copied().collect();

        let mut definitions: Vec<Definition> = Vec::with_capacity(definition_count);
        let mut stack: Vec<char> = Vec::default();
        let mut fresh = self.aux_atoms.iter().copied();

        let mut symbol = characters[0];
        let mut position = 1;

        loop {
            if letters.contains(&symbol) && stack.last() == Some(&proposition::NEGATION) {
                stack.pop();

                let out = fresh.next().ok_or(TseitinError::AuxExhausted)?;
                definitions.push(Definition::Negation { out, arg: symbol });
                symbol = out;
            } else if symbol == proposition::RIGHT_PAREN {
                if stack.len() < 4 {
                    return Err(TseitinError::MalformedFormula);
                }
                let right = stack.pop().unwrap();
                let connective = stack.pop().unwrap();
                let left = stack.pop().unwrap();
                let paren = stack.pop().unwrap();

                if paren != proposition::LEFT_PAREN
                    || !proposition::is_binary_connective(connective)
                    || !letters.contains(&left)
                    || !letters.contains(&right)
                {
                    return Err(TseitinError::MalformedFormula);
                }

                let out = fresh.next().ok_or(TseitinError::AuxExhausted)?;
                definitions.push(Definition::Connective {
                    out,
                    connective,
                    left,
                    right,
                });
                symbol = out;
            } else {
                stack.push(symbol);

                match characters.get(position) {
                    Some(next) => {
                        symbol = *next;
                        position += 1;
                    }
                    None => break,
                }
            }
        }

        // A well-bracketed input leaves exactly its result on the stack.
        let root = match stack.as_slice() {
            [atom] if letters.contains(atom) => *atom,
            _ => return Err(TseitinError::MalformedFormula),
        };

        log::debug!(
            target: targets::TSEITIN,
            "{} atom(s), {} auxiliary definition(s)",
            self.atoms.len(),
            definitions.len()
        );

        let mut clauses = Vec::with_capacity(1 + 4 * definitions.len());
        clauses.push(vec![SymLiteral::new(root, true)]);
        for definition in &definitions {
            clauses.extend(Self::expansion(definition));
        }

        log::trace!(target: targets::TSEITIN, "CNF:\n{}", cnf_text(&clauses));
        Ok(clauses)
    }

    /// `count` fresh code points above every input atom, skipping anything
    /// reserved by the alphabet or invalid as a `char`.
    fn allocate_auxiliaries(&self, count: usize) -> Result<Vec<Symbol>, TseitinError> {
        let ceiling = self
            .atoms
            .iter()
            .map(|atom| *atom as u32)
            .max()
            .unwrap_or(0);
        let start = ceiling + AUX_OFFSET;

        let auxiliaries: Vec<Symbol> = (start..=char::MAX as u32)
            .filter_map(char::from_u32)
            .filter(|candidate| !proposition::is_control(*candidate))
            .take(count)
            .collect();

        match auxiliaries.len() == count {
            true => Ok(auxiliaries),
            false => Err(TseitinError::AuxExhausted),
        }
    }

    /// The CNF expansion of a defining equation.
    fn expansion(definition: &Definition) -> Vec<SymClause> {
        let t = |s: Symbol| SymLiteral::new(s, true);
        let f = |s: Symbol| SymLiteral::new(s, false);

        match *definition {
            // p = -q expands to (-p ∨ -q) ∧ (p ∨ q).
            Definition::Negation { out: p, arg: q } => {
                vec![vec![f(p), f(q)], vec![t(p), t(q)]]
            }

            Definition::Connective {
                out: p,
                connective,
                left: q,
                right: r,
            } => match connective {
                // p = (q ∧ r): (q ∨ -p) ∧ (r ∨ -p) ∧ (-q ∨ -r ∨ p).
                proposition::CONJUNCTION => vec![
                    vec![t(q), f(p)],
                    vec![t(r), f(p)],
                    vec![f(q), f(r), t(p)],
                ],

                // p = (q ∨ r): (-q ∨ p) ∧ (-r ∨ p) ∧ (q ∨ r ∨ -p).
                proposition::DISJUNCTION => vec![
                    vec![f(q), t(p)],
                    vec![f(r), t(p)],
                    vec![t(q), t(r), f(p)],
                ],

                // p = (q > r): (q ∨ p) ∧ (-r ∨ p) ∧ (-q ∨ r ∨ -p).
                proposition::IMPLICATION => vec![
                    vec![t(q), t(p)],
                    vec![f(r), t(p)],
                    vec![f(q), t(r), f(p)],
                ],

                // p = (q = r): all four sign patterns.
                proposition::BICONDITIONAL => vec![
                    vec![t(q), f(r), f(p)],
                    vec![f(q), t(r), f(p)],
                    vec![f(q), f(r), t(p)],
                    vec![t(q), t(r), t(p)],
                ],

                // The scanner admits only binary connectives here.
                _ => unreachable!(),
            },
        }
    }
}

#[cfg(test)]
mod tseitin_tests {
    use super::*;

    fn atoms_of(clauses: &[SymClause]) -> HashSet<Symbol> {
        clauses
            .iter()
            .flat_map(|clause| clause.iter().map(|literal| literal.atom()))
            .collect()
    }

    #[test]
    fn single_atom_is_its_own_root() {
        let mut tseitin = TseitinTransform::new();
        let clauses = tseitin.transform("Ā").unwrap();

        assert_eq!(clauses, vec![vec![SymLiteral::new('Ā', true)]]);
        assert!(tseitin.aux_atoms.is_empty());
    }

    #[test]
    fn negation_defines_one_auxiliary() {
        let mut tseitin = TseitinTransform::new();
        let clauses = tseitin.transform("-Ā").unwrap();

        assert_eq!(clauses.len(), 3);
        assert_eq!(tseitin.aux_atoms.len(), 1);

        let root = clauses[0][0];
        assert!(tseitin.is_auxiliary(root.atom()));
        assert!(root.polarity());
    }

    #[test]
    fn negations_chain() {
        let mut tseitin = TseitinTransform::new();
        let clauses = tseitin.transform("--Ā").unwrap();

        // Two definitions, so five clauses, rooted at the outer negation.
        assert_eq!(clauses.len(), 5);
        assert_eq!(tseitin.aux_atoms.len(), 2);
        assert_eq!(clauses[0][0].atom(), tseitin.aux_atoms[1]);
    }

    #[test]
    fn clause_count_matches_the_expansion_table() {
        // One conjunction (3), one implication (3), one negation (2), the root (1).
        let mut tseitin = TseitinTransform::new();
        let clauses = tseitin.transform("((Ā∧ā)>-Ă)").unwrap();

        assert_eq!(clauses.len(), 1 + 3 + 3 + 2);
    }

    #[test]
    fn size_bound_holds() {
        let inputs = ["(Ā∨(ā∧Ă))", "-(Ā>-ā)", "((Ā=ā)∨-(Ă∧Ā))"];

        for input in inputs {
            let binary = input
                .chars()
                .filter(|c| proposition::is_binary_connective(*c))
                .count();
            let negations = input.chars().filter(|c| *c == '-').count();

            let mut tseitin = TseitinTransform::new();
            let clauses = tseitin.transform(input).unwrap();

            assert!(clauses.len() <= 4 * binary + 2 * negations + 1);
        }
    }

    #[test]
    fn auxiliaries_are_disjoint_from_input_and_controls() {
        let mut tseitin = TseitinTransform::new();
        tseitin.transform("((Ā∧ā)∨-Ă)").unwrap();

        for aux in &tseitin.aux_atoms {
            assert!(!tseitin.atoms.contains(aux));
            assert!(!proposition::is_control(*aux));
        }
    }

    #[test]
    fn each_auxiliary_is_defined_once() {
        let mut tseitin = TseitinTransform::new();
        let clauses = tseitin.transform("(-(Ā∧ā)∨(ā>Ă))").unwrap();

        // Every allocated auxiliary appears in the output.
        let seen = atoms_of(&clauses);
        for aux in &tseitin.aux_atoms {
            assert!(seen.contains(aux));
        }
        assert_eq!(tseitin.aux_atoms.len(), 4);
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        let inputs = ["", "()", "(Ā∧ā", "Āā", "Ā∧ā)", "(Ā∧∨ā)"];

        for input in inputs {
            let mut tseitin = TseitinTransform::new();
            assert_eq!(
                tseitin.transform(input),
                Err(TseitinError::MalformedFormula),
                "accepted {input:?}"
            );
        }
    }
}
