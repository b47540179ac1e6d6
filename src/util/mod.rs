//! Text helpers for CLI rendering.
//!
//! - **Width handling**: Unicode-aware width calculation and truncation for
//!   one-line summary rows
//! - **Sanitizing**: control-character stripping for server-supplied text
//! - **Body splitting**: paragraph extraction from article body text

mod text;

pub use text::{display_width, paragraphs, strip_control_chars, truncate_to_width};
