//! Small helpers shared by the UI and the feed code.
//!
//! - **Text**: Unicode-aware width, truncation and control-character stripping
//! - **URLs**: Scheme check for links opened from the news panel

mod links;
mod text;

pub use links::{validate_url_for_open, UrlValidationError};
pub use text::{display_width, pad_left, pad_right, strip_control_chars, truncate_to_width};
