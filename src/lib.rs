//! Client-side loader for the datastore types a repository manager offers.
//!
//! [`store::TypeListLoader`] reads the list through a [`direct::ReadTransport`],
//! keeps the last good collection, and projects it sorted by name with disabled
//! types hidden.

pub mod cli;
pub mod direct;
pub mod error;
pub mod model;
pub mod store;

pub use error::StoretypesError;
