//! Redmine API model types.

mod common;
mod project;

pub use common::*;
pub use project::*;
