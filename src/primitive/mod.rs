//! Representation of atom payloads.

pub mod boolean;
pub mod number;
pub mod string;
pub mod symbol;
pub mod text_buffer;

pub use self::boolean::Boolean;
pub use self::number::Number;
pub use self::string::SfsString;
pub use self::symbol::{Symbol, ToSymbol};
pub use self::text_buffer::{TextBuffer, TextOverflow};
