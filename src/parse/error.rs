use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePosition {
    pub span: logos::Span,
    pub slice: String,
}

impl SourcePosition {
    pub(crate) fn new(span: logos::Span, slice: &str) -> Self {
        Self {
            span,
            slice: slice.to_owned(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("(at position {position}): unexpected character {found:?}")]
    UnexpectedCharacter { position: usize, found: char },
    #[error("(at position {}): {:?} is missing the number of sides after 'd'", .0.span.start, .0.slice)]
    MissingSides(SourcePosition),
    #[error("(at position {}): {:?} is too large", .0.span.start, .0.slice)]
    LiteralTooLarge(SourcePosition),
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } => *position,
            Self::MissingSides(pos) | Self::LiteralTooLarge(pos) => pos.span.start,
        }
    }
}
