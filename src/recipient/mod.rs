//! Recipient module - the external company/shipping profiles documents are
//! addressed to. Owned by an external directory in production; this module
//! models that collaborator behind a trait with an in-memory implementation.

pub mod directory;
pub mod model;
pub mod routes;

pub use directory::{DirectoryError, InMemoryDirectory, RecipientDirectory};
pub use model::Recipient;
