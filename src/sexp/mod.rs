#[macro_use]
mod sexp_conversion;

pub mod cons;
pub mod cons_list;
pub mod sexp;


pub use cons::Cons;
pub use cons_list::ConsList;
pub use sexp::{HeapSexp, Sexp, SexpIter};
