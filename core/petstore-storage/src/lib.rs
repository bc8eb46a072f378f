//! DuckDB storage layer for the pet adoption service.
//!
//! Holds the single `pets` collection. Every operation is a point query or a
//! single-statement write; there are no multi-statement transactions.

mod error;
mod pet_store;

pub use error::{StorageError, StorageResult};
pub use pet_store::PetStore;
