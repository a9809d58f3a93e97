#[macro_use]
pub mod sexp;

pub mod config;
pub mod error;
pub mod extractor;
pub mod interpreter;
pub mod primitive;
pub mod reader;
pub mod session;
pub mod std_error;
pub mod stream;

pub mod prelude {
    pub use crate::config::Limits;
    pub use crate::error::{Error, ErrorKind};
    pub use crate::extractor::{ExtractError, Extractor};
    pub use crate::interpreter::{EvalErr, HeadResolver, Interpreter};
    pub use crate::primitive::{Boolean, Number, SfsString, Symbol, ToSymbol};
    pub use crate::reader::{parse, ReadError, Reader};
    pub use crate::session::Session;
    pub use crate::sexp::{Cons, ConsList, HeapSexp, Sexp};
    pub use crate::std_error::StdError;
    pub use crate::stream::{FileStream, LineStream, StringStream};
    // Macros.
    pub use crate::list;
}
