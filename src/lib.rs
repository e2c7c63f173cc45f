use log::debug;

use crate::error::Error;
use crate::token::Tokenizer;


#[macro_use]
pub mod error;
#[macro_use]
pub mod sexp;

pub mod builtins;
pub mod eval_err;
pub mod evaluator;
pub mod parser;
pub mod serializer;
pub mod token;

pub mod prelude {
    pub use crate::error::{Error, ErrorCategory, ErrorKind};
    pub use crate::eval_err::{EvalErr, ExpectedCount};
    pub use crate::sexp::{Cons, ConsList, HeapSexp, Sexp, Symbol, ToSymbol};
    pub use crate::{run, Interpreter};
    // Macros.
    pub use crate::{eval_err, list};
}


/// Tunables for a run of the pipeline.
///
/// Note that the library never sets up logging; executables should take care
/// of that. See: https://github.com/rust-lang/log#in-executables.
#[derive(Clone, Debug)]
pub struct Interpreter {
    /// Nesting limit for lists and quotes while parsing.
    pub max_depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self {
            max_depth: parser::MAX_DEPTH,
        }
    }
}

impl Interpreter {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Read the first form of `source`, evaluate it, and print the result.
    ///
    /// Anything after the first form is checked lexically and for bracket
    /// balance, then discarded.
    pub fn run(&self, source: &str) -> Result<String, Error> {
        let mut tokenizer = Tokenizer::new(source);
        let form = parser::Parser::with_max_depth(&mut tokenizer, self.max_depth).read()?;
        let result = evaluator::evaluate(form.as_ref())?;
        let text = serializer::serialize(&result, form.as_deref());
        debug!("{:?} => {}", source, text);
        Ok(text)
    }
}


/// Run `source` with default settings.
pub fn run(source: &str) -> Result<String, Error> {
    Interpreter::default().run(source)
}
