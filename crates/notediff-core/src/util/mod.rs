pub mod strings;

pub use strings::{normalize_spaces, quote_join, string_concatenate};
