//! Infrastructure layer: external data store client and repository
//! implementations.

pub mod store;
