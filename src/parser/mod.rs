/*!
Parsing of surface sentences into [formulas](crate::structures::formula).

The parser is a seam: the [context](crate::context) takes any [FolParser], and
[LogicParser] is the bundled implementation, a recursive-descent reader of the
nltk-flavoured surface syntax:

```text
all x. (P(x) -> Q(x))
exists e. (Run(e) & Agent(e,maria))
((P(a) | -Q(b)) & (a = b))
\x. P(x)
```

Precedence, loosest first: `->` (right associated), `|`, `&`, prefix `-`.
A binder (`all`, `exists`, `\`) scopes as far right as possible.

Identifier classification: an identifier in term position is a variable iff an
enclosing binder binds it; every other identifier is a constant.
So `P(a)` is closed with constant `a`, and a sentence cannot introduce a free
variable.

# Example
```rust
# use heron_fol::parser::{FolParser, LogicParser};
let formula = LogicParser.parse("all x. (P(x) -> Q(x))").unwrap();
assert_eq!(formula.to_string(), "all x.(P(x) -> Q(x))");
assert!(formula.free().is_empty());
```
*/

use crate::{
    structures::formula::{FolFormula, Term},
    types::err::ParseError,
};

/// A parser of surface sentences.
pub trait FolParser {
    /// The formula of `input`, or why there is none.
    fn parse(&self, input: &str) -> Result<FolFormula, ParseError>;
}

/// The bundled recursive-descent parser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogicParser;

impl FolParser for LogicParser {
    fn parse(&self, input: &str) -> Result<FolFormula, ParseError> {
        let mut reader = Reader::new(input);

        reader.skip_space();
        if reader.exhausted() {
            return Err(ParseError::Empty);
        }

        let formula = reader.formula()?;

        reader.skip_space();
        match reader.exhausted() {
            true => Ok(formula),
            false => Err(ParseError::TrailingInput(reader.position)),
        }
    }
}

/// Reader state: the characters, a cursor, and the binders in scope.
struct Reader {
    characters: Vec<char>,
    position: usize,
    bound: Vec<String>,
}

impl Reader {
    fn new(input: &str) -> Self {
        Reader {
            characters: input.chars().collect(),
            position: 0,
            bound: Vec::default(),
        }
    }

    fn exhausted(&self) -> bool {
        self.position >= self.characters.len()
    }

    fn peek(&self) -> Option<char> {
        self.characters.get(self.position).copied()
    }

    fn skip_space(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace()) {
            self.position += 1;
        }
    }

    /// True iff the upcoming characters are `pattern`, consuming them if so.
    fn take(&mut self, pattern: &str) -> bool {
        let candidate = self.characters[self.position.min(self.characters.len())..]
            .iter()
            .take(pattern.chars().count());
        if candidate.eq(pattern.chars().collect::<Vec<_>>().iter()) {
            self.position += pattern.chars().count();
            true
        } else {
            false
        }
    }

    /// An identifier: a letter or underscore, then letters, digits, underscores.
    fn identifier(&mut self) -> Option<String> {
        let start = self.position;

        if !self
            .peek()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        {
            return None;
        }

        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.position += 1;
        }

        Some(self.characters[start..self.position].iter().collect())
    }

    /// formula := implication, with `->` associating to the right.
    fn formula(&mut self) -> Result<FolFormula, ParseError> {
        let left = self.disjunction()?;

        self.skip_space();
        if self.take("->") {
            self.skip_space();
            let right = self.formula()?;
            return Ok(FolFormula::imp(left, right));
        }

        Ok(left)
    }

    fn disjunction(&mut self) -> Result<FolFormula, ParseError> {
        let mut formula = self.conjunction()?;

        loop {
            self.skip_space();
            // `|` but not `|…>`-style digraphs; nothing else begins with `|`.
            if self.peek() == Some('|') {
                self.position += 1;
                self.skip_space();
                formula = FolFormula::or(formula, self.conjunction()?);
            } else {
                return Ok(formula);
            }
        }
    }

    fn conjunction(&mut self) -> Result<FolFormula, ParseError> {
        let mut formula = self.unary()?;

        loop {
            self.skip_space();
            if self.peek() == Some('&') {
                self.position += 1;
                self.skip_space();
                formula = FolFormula::and(formula, self.unary()?);
            } else {
                return Ok(formula);
            }
        }
    }

    /// unary := `-` unary | binder | atom.
    fn unary(&mut self) -> Result<FolFormula, ParseError> {
        self.skip_space();

        match self.peek() {
            None => Err(ParseError::UnexpectedEnd),

            Some('-') => {
                self.position += 1;
                Ok(FolFormula::negated(self.unary()?))
            }

            Some('\\') => {
                self.position += 1;
                self.binder(|variable, term| FolFormula::Lambda { variable, term })
            }

            Some('(') => {
                self.position += 1;
                let formula = self.formula()?;
                self.skip_space();
                match self.peek() {
                    Some(')') => {
                        self.position += 1;
                        Ok(formula)
                    }
                    Some(_) => Err(ParseError::Unexpected(self.position)),
                    None => Err(ParseError::UnexpectedEnd),
                }
            }

            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                let checkpoint = self.position;
                let word = self.identifier().expect("peeked a letter");

                match word.as_str() {
                    "all" => self.binder(|variable, term| FolFormula::All { variable, term }),
                    "exists" => {
                        self.binder(|variable, term| FolFormula::Exists { variable, term })
                    }
                    _ => {
                        self.position = checkpoint;
                        self.atom()
                    }
                }
            }

            Some(_) => Err(ParseError::Unexpected(self.position)),
        }
    }

    /// The variable and dot of a binder, then its wide-scoped body.
    fn binder(
        &mut self,
        build: fn(String, Box<FolFormula>) -> FolFormula,
    ) -> Result<FolFormula, ParseError> {
        self.skip_space();
        let variable = self
            .identifier()
            .ok_or(ParseError::ExpectedTerm(self.position))?;

        self.skip_space();
        if self.peek() != Some('.') {
            return Err(ParseError::ExpectedDot(self.position));
        }
        self.position += 1;

        self.bound.push(variable.clone());
        let term = self.formula();
        self.bound.pop();

        Ok(build(variable, Box::new(term?)))
    }

    /// atom := IDENT `(` term (`,` term)* `)` | term `=` term.
    fn atom(&mut self) -> Result<FolFormula, ParseError> {
        let name = self
            .identifier()
            .ok_or(ParseError::ExpectedTerm(self.position))?;

        self.skip_space();
        match self.peek() {
            Some('(') => {
                self.position += 1;

                let mut args = vec![self.term()?];
                loop {
                    self.skip_space();
                    match self.peek() {
                        Some(',') => {
                            self.position += 1;
                            args.push(self.term()?);
                        }
                        Some(')') => {
                            self.position += 1;
                            return Ok(FolFormula::Application { pred: name, args });
                        }
                        Some(_) => return Err(ParseError::Unexpected(self.position)),
                        None => return Err(ParseError::UnexpectedEnd),
                    }
                }
            }

            Some('=') => {
                self.position += 1;
                let left = self.classify(name);
                let right = self.term()?;
                Ok(FolFormula::Equality { left, right })
            }

            _ => Err(ParseError::Unexpected(self.position)),
        }
    }

    /// A term: an identifier, classified against the binders in scope.
    fn term(&mut self) -> Result<Term, ParseError> {
        self.skip_space();
        let name = self
            .identifier()
            .ok_or(ParseError::ExpectedTerm(self.position))?;
        Ok(self.classify(name))
    }

    fn classify(&self, name: String) -> Term {
        match self.bound.iter().any(|variable| *variable == name) {
            true => Term::Variable(name),
            false => Term::Constant(name),
        }
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    fn parsed(input: &str) -> FolFormula {
        LogicParser.parse(input).unwrap()
    }

    #[test]
    fn display_round_trip() {
        let sentences = [
            "P(a)",
            "(P(a) & Q(b))",
            "(P(a) | -Q(b))",
            "all x.(P(x) -> Q(x))",
            "exists e.(Run(e) & Agent(e,maria))",
            "(a = b)",
            "-exists x.P(x)",
            "\\x.P(x)",
        ];

        for sentence in sentences {
            assert_eq!(parsed(sentence).to_string(), sentence);
        }
    }

    #[test]
    fn bound_identifiers_are_variables() {
        let formula = parsed("all x. P(x)");

        let FolFormula::All { term, .. } = formula else {
            panic!("expected a universal");
        };
        let FolFormula::Application { args, .. } = *term else {
            panic!("expected an application");
        };

        assert_eq!(args, vec![Term::Variable("x".to_string())]);
    }

    #[test]
    fn unbound_identifiers_are_constants() {
        let formula = parsed("P(x)");

        let FolFormula::Application { args, .. } = formula else {
            panic!("expected an application");
        };

        assert_eq!(args, vec![Term::Constant("x".to_string())]);
        assert!(formula_is_closed(&parsed("P(x)")));
    }

    fn formula_is_closed(formula: &FolFormula) -> bool {
        formula.free().is_empty()
    }

    #[test]
    fn binders_scope_wide() {
        let formula = parsed("all x. P(x) -> Q(a)");
        assert_eq!(formula.to_string(), "all x.(P(x) -> Q(a))");
    }

    #[test]
    fn implication_associates_right() {
        let formula = parsed("P(a) -> Q(a) -> R(a)");
        assert_eq!(formula.to_string(), "(P(a) -> (Q(a) -> R(a)))");
    }

    #[test]
    fn conjunction_binds_tighter_than_disjunction() {
        let formula = parsed("P(a) | Q(a) & R(a)");
        assert_eq!(formula.to_string(), "(P(a) | (Q(a) & R(a)))");
    }

    #[test]
    fn shadowing_rebinds_the_inner_occurrence() {
        let formula = parsed("all x. (P(x) & exists x. Q(x))");
        assert!(formula.free().is_empty());
    }

    #[test]
    fn rejections() {
        assert_eq!(LogicParser.parse(""), Err(ParseError::Empty));
        assert_eq!(LogicParser.parse("   "), Err(ParseError::Empty));
        assert!(LogicParser.parse("P(a) Q(b)").is_err());
        assert!(LogicParser.parse("P(a").is_err());
        assert!(LogicParser.parse("all x P(x)").is_err());
        assert!(LogicParser.parse("(P(a) &)").is_err());
        assert!(LogicParser.parse("&P(a)").is_err());
    }
}
