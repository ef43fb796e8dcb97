pub mod ast;
mod error;
mod lexer;
mod tokenizer;

pub use error::{ParseError, SourcePosition};
pub use tokenizer::Tokenizer;

/// Splits a dice expression into numbers, operators and dice groups.
pub fn tokenize(s: &str) -> Result<ast::TokenSequence, ParseError> {
    let seq = Tokenizer::new(s).tokenize()?;
    tracing::trace!(tokens = %seq, "tokenized expression");
    Ok(seq)
}
