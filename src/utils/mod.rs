//! Utility functions shared across the application.

mod permissions;
mod prompt;

pub use permissions::restrict_file_permissions;
pub use prompt::{parse_choice, prompt_line, prompt_selection, Selection};
