//! User interface module - terminal output.
//!
//! `formatter` builds the strings; the `display_*` functions print them.

pub mod formatter;

pub use formatter::{
    display_comparison, display_error, display_parsed_version, display_status, display_success,
    display_update_status,
};
