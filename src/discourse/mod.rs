/*!
The discourse model --- the finite population a formula quantifies over.

A model is populated by a single walk of a formula, collecting:

- The constants of the formula, grouped into kind classes (individuals and
  events) in insertion order, deduplicated by name.
- The predicate signature, in insertion order, with arity and argument kinds
  fixed by each predicate's first occurrence.
  Equality anywhere in the formula registers the synthetic
  [EQUALITY](crate::structures::predicate::EQUALITY) predicate.

From these the model derives its `vocabulary` --- every entity name, grouped by
kind in kind-insertion order, followed by every predicate name --- and builds
an [AtomCodec] wide enough for the widest arity.
Positions in the vocabulary are the canonical indices the codec operates on.

Population is idempotent, and repeated runs over the same formula produce an
identical vocabulary.
The model is never mutated during grounding or coding.

# Example
```rust
# use heron_fol::{discourse::DiscourseModel, parser::{FolParser, LogicParser}};
let formula = LogicParser.parse("(all x. (P(x) -> Q(x)) & P(a))").unwrap();

let mut discourse = DiscourseModel::new();
discourse.populate(&formula);

assert_eq!(discourse.vocabulary, vec!["a", "P", "Q"]);
```
*/

use crate::{
    codec::{AtomCodec, CODE_BASE},
    misc::log::targets,
    reports::GroundAtom,
    structures::{
        constant::{Constant, ConstantKind},
        formula::{FolFormula, Term},
        literal::Symbol,
        predicate::Predicate,
        proposition,
    },
    types::err::{ErrorKind, GroundingError},
};

/// The members of one kind, in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityClass {
    /// The kind of every member.
    pub kind: ConstantKind,

    /// The members, deduplicated by name.
    pub members: Vec<Constant>,
}

/// A discourse model: entity classes, predicate signature, and the derived
/// vocabulary with its codec.
#[derive(Clone, Debug)]
pub struct DiscourseModel {
    /// Entity classes, in kind-insertion order.
    pub entities: Vec<EntityClass>,

    /// The predicate signature, in insertion order.
    pub predicates: Vec<Predicate>,

    /// Entity names then predicate names; positions are canonical indices.
    pub vocabulary: Vec<String>,

    /// The codec over the vocabulary, rebuilt by [update](Self::update).
    pub codec: AtomCodec,

    /// The code point offset handed to each rebuilt codec.
    base: u32,
}

impl Default for DiscourseModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscourseModel {
    /// An empty model, coding from [CODE_BASE].
    pub fn new() -> Self {
        Self::with_base(CODE_BASE)
    }

    /// An empty model, coding from the given offset.
    pub fn with_base(base: u32) -> Self {
        DiscourseModel {
            entities: Vec::default(),
            predicates: Vec::default(),
            vocabulary: Vec::default(),
            codec: AtomCodec::new(vec![1], base),
            base,
        }
    }

    /// Walks `formula` once, collecting constants and predicates, then
    /// recomputes the vocabulary and codec.
    pub fn populate(&mut self, formula: &FolFormula) {
        self.collect(formula);
        self.update();

        log::debug!(target: targets::DISCOURSE, "Vocabulary: {:?}", self.vocabulary);
    }

    fn collect(&mut self, formula: &FolFormula) {
        match formula {
            FolFormula::Exists { term, .. }
            | FolFormula::All { term, .. }
            | FolFormula::Lambda { term, .. }
            | FolFormula::Negated { term } => self.collect(term),

            FolFormula::And { first, second }
            | FolFormula::Or { first, second }
            | FolFormula::Imp { first, second } => {
                self.collect(first);
                self.collect(second);
            }

            FolFormula::Application { pred, args } => {
                let kinds = args.iter().map(|arg| arg.kind().to_string()).collect();
                self.note_predicate(Predicate::new(pred.clone(), kinds));

                for arg in args {
                    if let Term::Constant(name) = arg {
                        self.note_constant(Constant::new(name.clone()));
                    }
                }
            }

            FolFormula::Equality { left, right } => {
                self.note_predicate(Predicate::equality());

                for side in [left, right] {
                    if let Term::Constant(name) = side {
                        self.note_constant(Constant::new(name.clone()));
                    }
                }
            }
        }
    }

    /// Adds `constant` to its kind class, unless a constant of the same name exists.
    pub fn note_constant(&mut self, constant: Constant) {
        if self
            .entities
            .iter()
            .any(|class| class.members.contains(&constant))
        {
            return;
        }

        match self
            .entities
            .iter_mut()
            .find(|class| class.kind == constant.kind)
        {
            Some(class) => class.members.push(constant),
            None => self.entities.push(EntityClass {
                kind: constant.kind,
                members: vec![constant],
            }),
        }
    }

    /// Adds `predicate`, unless a predicate of the same name exists.
    pub fn note_predicate(&mut self, predicate: Predicate) {
        if !self.predicates.contains(&predicate) {
            self.predicates.push(predicate);
        }
    }

    /// Recomputes the vocabulary and rebuilds the codec.
    pub fn update(&mut self) {
        self.vocabulary = self
            .entities
            .iter()
            .flat_map(|class| class.members.iter().map(|member| member.name.clone()))
            .chain(self.predicates.iter().map(|p| p.name.clone()))
            .collect();

        let slots = self.max_arity() + 1;
        let width = self.vocabulary.len().max(1);
        self.codec = AtomCodec::new(vec![width; slots], self.base);

        log::trace!(
            target: targets::DISCOURSE,
            "Codec rebuilt: {} slot(s) of width {width}, {} symbol(s) from U+{:04X}",
            self.codec.slots(),
            self.codec.span(),
            self.codec.base()
        );
    }

    /// The widest arity in the signature, 0 when the signature is empty.
    pub fn max_arity(&self) -> usize {
        self.predicates.iter().map(|p| p.arity).max().unwrap_or(0)
    }

    /// The members of `kind`, empty when no constant of the kind was seen.
    pub fn members(&self, kind: ConstantKind) -> &[Constant] {
        self.entities
            .iter()
            .find(|class| class.kind == kind)
            .map(|class| class.members.as_slice())
            .unwrap_or(&[])
    }

    /// The canonical index of `name` in the vocabulary.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.vocabulary.iter().position(|entry| entry == name)
    }

    /// The unary predicates of the signature, in insertion order.
    pub fn unary_predicates(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter().filter(|p| p.arity == 1)
    }

    /// The predicate registered under `name`.
    pub fn predicate(&self, name: &str) -> Option<&Predicate> {
        self.predicates.iter().find(|p| p.name == name)
    }

    /// The symbol coding `pred` applied to `args`.
    pub fn encode_atom(&self, pred: &str, args: &[&str]) -> Result<Symbol, ErrorKind> {
        let mut indices = Vec::with_capacity(args.len() + 1);

        indices.push(
            self.index_of(pred)
                .ok_or_else(|| GroundingError::UnknownName(pred.to_string()))?,
        );
        for arg in args {
            indices.push(
                self.index_of(arg)
                    .ok_or_else(|| GroundingError::UnknownName(arg.to_string()))?,
            );
        }

        let symbol = self.codec.encode(&indices)?;
        log::trace!(target: targets::DISCOURSE, "Coded {pred}{args:?} as {symbol}");
        Ok(symbol)
    }

    /// The ground atom coded by `symbol`, arguments truncated to the
    /// predicate's arity.
    pub fn decode_atom(&self, symbol: Symbol) -> Result<GroundAtom, ErrorKind> {
        let indices = self.codec.decode(symbol)?;

        let name = |index: usize| -> Result<String, ErrorKind> {
            self.vocabulary
                .get(index)
                .cloned()
                .ok_or_else(|| GroundingError::UnknownName(index.to_string()).into())
        };

        let predicate = name(indices[0])?;
        let arity = self.predicate(&predicate).map(|p| p.arity).unwrap_or(0);
        let args = indices[1..]
            .iter()
            .take(arity)
            .map(|index| name(*index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GroundAtom { predicate, args })
    }

    /// A readable rendering of a propositional string over this model's
    /// alphabet, with each symbol decoded to its ground atom.
    pub fn readable(&self, formula: &str) -> Result<String, ErrorKind> {
        let mut out = String::new();
        for character in formula.chars() {
            match character {
                proposition::LEFT_PAREN | proposition::RIGHT_PAREN => out.push(character),
                proposition::NEGATION => out.push_str(" not "),
                proposition::CONJUNCTION => out.push_str(" and "),
                proposition::DISJUNCTION => out.push_str(" or "),
                proposition::IMPLICATION => out.push_str(" implies "),
                proposition::BICONDITIONAL => out.push_str(" iff "),
                symbol => out.push_str(&self.decode_atom(symbol)?.to_string()),
            }
        }
        Ok(out)
    }
}
