//! Trait definitions for Redmine operations.
//!
//! Each entity type implements the traits its endpoints support, keeping
//! per-resource paths and envelopes inside the implementations.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use list::List;
pub use update::Update;
