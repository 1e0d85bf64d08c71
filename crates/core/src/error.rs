use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Movie {movie_id} does not exist in the catalog")]
    MovieNotFound { movie_id: DbId },

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
