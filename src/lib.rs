pub mod compare;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod update;

pub use compare::{compare, compare_versions, try_compare_versions};
pub use domain::{PrereleaseTag, Version};
pub use error::{Result, VersionError};
