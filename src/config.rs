//! Size limits shared by the extractor and the reader.

/// Bound on a single line and on an accumulated S-expression.
pub const DEFAULT_MAX_LEN: usize = 65536;
/// Capacity of String and Symbol text buffers.
pub const DEFAULT_TEXT_CAPACITY: usize = 256;
/// Reader nesting bound.
pub const DEFAULT_MAX_DEPTH: usize = 128;


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    /// Maximum length in bytes of one input line, and of the text of one
    /// extracted S-expression.
    pub max_len: usize,
    /// Maximum number of characters in a String or Symbol.
    pub text_capacity: usize,
    /// Maximum list nesting accepted by the reader.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            text_capacity: DEFAULT_TEXT_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
