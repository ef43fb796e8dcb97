use crate::common::*;
use std::fmt;

pub type Span = logos::Span;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiceGroup {
    pub count: NonZeroUInt,
    pub sides: UInt,
}

impl DiceGroup {
    pub const fn new(count: NonZeroUInt, sides: UInt) -> Self {
        Self { count, sides }
    }
}

impl fmt::Display for DiceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// One classified unit of a dice expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Number(Int),
    Operator(BinaryOperator),
    /// Only present until the dice have been rolled.
    DiceGroup(DiceGroup),
}

impl Token {
    pub fn as_number(&self) -> Option<Int> {
        match self {
            Self::Number(x) => Some(*x),
            _ => None,
        }
    }
}

impl From<Int> for Token {
    fn from(x: Int) -> Self {
        Self::Number(x)
    }
}

impl From<BinaryOperator> for Token {
    fn from(op: BinaryOperator) -> Self {
        Self::Operator(op)
    }
}

impl From<DiceGroup> for Token {
    fn from(group: DiceGroup) -> Self {
        Self::DiceGroup(group)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => fmt::Display::fmt(x, f),
            Self::Operator(op) => fmt::Display::fmt(op, f),
            Self::DiceGroup(group) => fmt::Display::fmt(group, f),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// The tokens of one expression, rewritten in place as it is reduced.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TokenSequence {
    tokens: Vec<Spanned<Token>>,
}

impl TokenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: impl Into<Token>, span: Span) {
        self.tokens.push(Spanned::new(token.into(), span));
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Spanned<Token>> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Spanned<Token>> {
        self.tokens.iter()
    }

    /// The tokens without their spans.
    pub fn tokens(&self) -> Vec<Token> {
        self.tokens.iter().map(|t| t.node).collect()
    }

    pub(crate) fn number_at(&self, index: usize) -> Option<Int> {
        self.get(index).and_then(|t| t.node.as_number())
    }

    /// Replaces the token at `index`, keeping its span.
    pub(crate) fn replace(&mut self, index: usize, token: impl Into<Token>) {
        self.tokens[index].node = token.into();
    }

    /// Replaces the operator at `index` and both of its neighbours with
    /// `Number(value)` spanning all three.
    ///
    /// `index` must not be the first or last position.
    pub(crate) fn collapse(&mut self, index: usize, value: Int) {
        let span = self.tokens[index - 1].span.start..self.tokens[index + 1].span.end;
        self.tokens[index - 1] = Spanned::new(Token::Number(value), span);
        self.tokens.drain(index..=index + 1);
    }

    /// The grand total, if exactly one number remains.
    pub fn single_number(&self) -> Option<Int> {
        match self.tokens.as_slice() {
            [only] => only.node.as_number(),
            _ => None,
        }
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token.node)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Spanned<Token>;
    type IntoIter = std::slice::Iter<'a, Spanned<Token>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
