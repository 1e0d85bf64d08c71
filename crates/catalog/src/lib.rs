//! Client for the external movie catalog.
//!
//! The catalog is the system of record for which movies exist. This crate
//! only reads from it: [`MovieCatalog::lookup`] answers whether a movie id is
//! known, distinguishing "no such movie" from "could not ask".

pub mod client;
pub mod movie;

use async_trait::async_trait;
use operator_core::types::DbId;

pub use client::{CatalogError, HttpCatalogClient};
pub use movie::MovieDescriptor;

/// Outcome of a single catalog lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogLookup {
    /// The catalog answered with a descriptor for the movie.
    Found(MovieDescriptor),
    /// The catalog answered and the movie does not exist.
    NotFound,
    /// The catalog did not give a usable answer (transport error, timeout,
    /// unexpected status, undecodable body). Carries a readable reason.
    Unavailable(String),
}

/// Read access to the movie catalog.
///
/// Object-safe so the service layer can hold an `Arc<dyn MovieCatalog>` and
/// tests can substitute an in-process stub.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn lookup(&self, movie_id: DbId) -> CatalogLookup;
}
