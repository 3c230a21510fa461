//! Catalog Backend Module
//!
//! Read-through access to campaigns and reviews. Campaigns are seeded
//! outside this service and never mutated here; reviews are listed and
//! appended.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::catalog_router;

// Convenience re-exports
pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCatalogRepository as CatalogStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
