//! Domain logic - version values and their ordering, independent of any caller

pub mod prerelease;
pub mod version;

pub use prerelease::PrereleaseTag;
pub use version::Version;
