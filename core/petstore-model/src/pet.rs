use crate::ids::PetId;
use crate::messages;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A pet document as stored in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub pet_type: String,
    pub age: u32,
    pub species: String,
    pub adopted: bool,
}

/// Fields supplied when saving a new pet. The store assigns the id and
/// starts every pet as not adopted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub pet_type: String,
    pub age: u32,
    pub species: String,
}

impl NewPet {
    pub fn new(
        name: impl Into<String>,
        pet_type: impl Into<String>,
        age: u32,
        species: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pet_type: pet_type.into(),
            age,
            species: species.into(),
        }
    }
}

/// The add-pet form as submitted. Every field is optional text; only the age
/// is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PetForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pet_type: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
}

impl PetForm {
    /// Validates the form into an insert payload.
    ///
    /// Missing text fields become empty strings; a missing age is rejected.
    pub fn validate(self) -> Result<NewPet, AgeError> {
        let age = parse_age(self.age.as_deref().unwrap_or_default())?;
        Ok(NewPet {
            name: self.name.unwrap_or_default(),
            pet_type: self.pet_type.unwrap_or_default(),
            age,
            species: self.species.unwrap_or_default(),
        })
    }
}

/// Rejected age input. The display text is the message shown on the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", messages::INVALID_AGE)]
pub struct AgeError {
    pub input: String,
}

/// Parses an age made entirely of ASCII digits.
///
/// Signs, whitespace and non-ASCII digits are rejected, as is anything that
/// does not fit a `u32`.
pub fn parse_age(input: &str) -> Result<u32, AgeError> {
    let reject = || AgeError {
        input: input.to_string(),
    };
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(reject());
    }
    input.parse().map_err(|_| reject())
}
