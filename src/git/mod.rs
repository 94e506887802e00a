//! Git history input: numstat record decoding and rename-path resolution.

mod numstat;
mod rename;

pub use numstat::{BINARY_PLACEHOLDER, ChangeRecord, ParsedLine, parse_line};
pub use rename::PathResolver;
