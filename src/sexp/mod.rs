#[macro_use]
pub mod sexp;

pub mod cons;
pub mod cons_list;
pub mod symbol;


pub use cons::Cons;
pub use cons_list::ConsList;
pub use sexp::{HeapSexp, Sexp, SexpIter};
pub use symbol::{Symbol, SymbolError, ToSymbol};
