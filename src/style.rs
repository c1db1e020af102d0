//! ANSI escape codes and pure text styling

pub mod codes;
pub mod text;

pub use codes::StyleCode;
pub use text::{aqua, blue, dim, green, pad_end, red};
