//! Infrastructure layer: storage, configuration, seed data, and the service
//! that wires the catalogue, the reorder engine and the strategy advisor.

pub mod catalog_service;
pub mod config;
pub mod repository;
pub mod seed;

pub use catalog_service::{CatalogService, ServiceError, Submitted};
pub use config::{AppConfig, StorageBackend};
pub use repository::{
    InMemoryProductRepository, ProductRepository, RepositoryError, STORAGE_KEY,
    SqliteProductRepository,
};
