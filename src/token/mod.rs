// Public exports.
pub use token::{Token, TokenKind};
pub use tokenizer::{TokenizeError, TokenizeErrorKind, Tokenizer};

// Public mods.
pub mod token;

#[cfg(feature = "cli")]
pub mod cli_helper;

// Private mods.
mod tokenizer;
