use super::{ast::*, error::*, lexer::*};
use crate::common::*;
use std::str::FromStr;

type PResult<T = ()> = Result<T, ParseError>;

pub struct Tokenizer<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            source: s,
            lexer: lexer(s),
        }
    }

    pub fn tokenize(mut self) -> PResult<TokenSequence> {
        let mut seq = TokenSequence::new();
        while let Some(kind) = self.lexer.next() {
            let token = self.token(kind)?;
            seq.push(token, self.lexer.span());
        }
        Ok(seq)
    }

    fn token(&self, kind: TokenKind) -> PResult<Token> {
        if let Some(op) = kind.as_binary_op() {
            return Ok(Token::Operator(op));
        }
        match kind {
            TokenKind::Integer => self.parse_literal(self.lexer.slice()).map(Token::Number),
            TokenKind::Dice => self.parse_dice().map(Token::DiceGroup),
            _ => self.unexpected_character(),
        }
    }

    fn parse_dice(&self) -> PResult<DiceGroup> {
        // The lexer only produces dice tokens containing exactly one 'd'
        let (count, sides) = self.lexer.slice().split_once('d').unwrap_or_default();

        if sides.is_empty() {
            return self.error(ParseError::MissingSides);
        }
        let sides = self.parse_literal(sides)?;

        // Both an omitted and a zero count mean a single die
        let count = if count.is_empty() {
            1
        } else {
            self.parse_literal(count)?
        };
        let count = NonZeroUInt::new(count).unwrap_or(NonZeroUInt::MIN);

        Ok(DiceGroup::new(count, sides))
    }

    // Digit runs only fail to parse when they overflow
    fn parse_literal<T: FromStr>(&self, digits: &str) -> PResult<T> {
        digits
            .parse()
            .or_else(|_| self.error(ParseError::LiteralTooLarge))
    }

    fn error<T>(&self, kind: fn(SourcePosition) -> ParseError) -> PResult<T> {
        Err(kind(SourcePosition::new(
            self.lexer.span(),
            self.lexer.slice(),
        )))
    }

    fn unexpected_character<T>(&self) -> PResult<T> {
        let position = self.lexer.span().start;
        let found = self
            .source
            .get(position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Err(ParseError::UnexpectedCharacter { position, found })
    }
}
