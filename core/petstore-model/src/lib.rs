//! Entity types for the pet adoption service.
//!
//! This crate is storage- and transport-agnostic:
//! - `PetId`, the store-generated identifier (UUID v7)
//! - `Pet` and `NewPet`, the persisted record and its insert payload
//! - `PetForm`, the raw add-pet form and its age validation
//! - `AdoptOutcome` and `PetListing`, the tagged results the handlers render
//!
//! The user-facing messages live in [`messages`] so that every layer agrees
//! on the exact wording.

mod ids;
pub mod messages;
mod outcome;
mod pet;

pub use ids::PetId;
pub use outcome::{AdoptOutcome, PetListing};
pub use pet::{AgeError, NewPet, Pet, PetForm, parse_age};
