/*!
The numeric mapping --- symbols to DIMACS-style signed integers.

SAT backends take clauses of signed integers: the absolute value identifies an
atom, the sign its polarity.
A [NumericMap] is a view computed once per solve: clauses are scanned in
order, each literal stripped to its atom, and unseen atoms numbered from 1 in
first-seen order.
Index 0 is reserved as the `<PAD>` entry and never assigned.

Together with the grounder's insertion order and the Tseitin transform's
allocation order this makes the integer encoding of a check deterministic.
*/

use std::collections::HashMap;

use crate::structures::{
    clause::SymClause,
    literal::{SymLiteral, Symbol},
};

/// The reserved name of index 0.
pub const PAD: &str = "<PAD>";

/// A bijection between the atoms of a clause list and positive integers.
#[derive(Clone, Debug, Default)]
pub struct NumericMap {
    /// Index to symbol; index 0 is the [PAD] entry.
    itos: Vec<Option<Symbol>>,

    /// Symbol to index.
    stoi: HashMap<Symbol, usize>,
}

impl NumericMap {
    /// The map over `clauses`, atoms numbered in first-seen order.
    pub fn new(clauses: &[SymClause]) -> Self {
        let mut map = NumericMap {
            itos: vec![None],
            stoi: HashMap::default(),
        };

        for clause in clauses {
            for literal in clause {
                let atom = literal.atom();
                if !map.stoi.contains_key(&atom) {
                    map.stoi.insert(atom, map.itos.len());
                    map.itos.push(Some(atom));
                }
            }
        }

        map
    }

    /// The number of atoms mapped, excluding the [PAD] entry.
    pub fn atom_count(&self) -> usize {
        self.itos.len() - 1
    }

    /// The signed integer of `literal`, None for an atom outside the map.
    pub fn to_int(&self, literal: &SymLiteral) -> Option<i32> {
        let index = *self.stoi.get(&literal.atom())? as i32;
        match literal.polarity() {
            true => Some(index),
            false => Some(-index),
        }
    }

    /// The literal of a signed integer, None for 0 and unassigned indices.
    pub fn to_literal(&self, number: i32) -> Option<SymLiteral> {
        let atom = (*self.itos.get(number.unsigned_abs() as usize)?)?;
        Some(SymLiteral::new(atom, number > 0))
    }

    /// The clause list as signed integers.
    ///
    /// Intended for the clause list the map was built over; a literal outside
    /// the map is skipped.
    pub fn numeric(&self, clauses: &[SymClause]) -> Vec<Vec<i32>> {
        clauses
            .iter()
            .map(|clause| {
                clause
                    .iter()
                    .filter_map(|literal| {
                        let int = self.to_int(literal);
                        debug_assert!(int.is_some());
                        int
                    })
                    .collect()
            })
            .collect()
    }

    /// The integer clause list rendered as DIMACS text, with the problem line.
    pub fn as_dimacs(&self, clauses: &[Vec<i32>]) -> String {
        let mut out = format!("p cnf {} {}\n", self.atom_count(), clauses.len());
        for clause in clauses {
            for literal in clause {
                out.push_str(&literal.to_string());
                out.push(' ');
            }
            out.push_str("0\n");
        }
        out
    }
}
