use crate::messages;
use crate::pet::Pet;

/// Result of an adoption attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdoptOutcome {
    /// This attempt flipped `adopted` to true. Carries the updated pet.
    Adopted(Pet),
    /// The pet was already adopted; nothing changed.
    AlreadyAdopted(Pet),
    /// No pet matches the id.
    NotFound,
}

impl AdoptOutcome {
    /// The message rendered for this outcome.
    pub fn message(&self) -> String {
        match self {
            Self::Adopted(pet) => messages::adopted(&pet.name),
            Self::AlreadyAdopted(_) => messages::ALREADY_ADOPTED.to_string(),
            Self::NotFound => messages::PET_NOT_FOUND.to_string(),
        }
    }

    /// The pet involved, if one was found.
    pub fn pet(&self) -> Option<&Pet> {
        match self {
            Self::Adopted(pet) | Self::AlreadyAdopted(pet) => Some(pet),
            Self::NotFound => None,
        }
    }
}

/// The list page's view of the collection.
///
/// An empty collection is its own variant so the page can show a distinct
/// message instead of an empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetListing {
    Available(Vec<Pet>),
    NoneAvailable,
}

impl From<Vec<Pet>> for PetListing {
    fn from(pets: Vec<Pet>) -> Self {
        if pets.is_empty() {
            Self::NoneAvailable
        } else {
            Self::Available(pets)
        }
    }
}
