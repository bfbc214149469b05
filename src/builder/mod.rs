//! Builder API for ergonomic game construction.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::GameBuilder;
