//! Messages shown to the user.

/// Shown on the list page when the collection is empty.
pub const NO_PETS_AVAILABLE: &str = "Sorry, no pets available for adoption.";

/// Shown on the add form when the age field is rejected.
pub const INVALID_AGE: &str = "Age cannot be less than zero";

/// Shown when adopting a pet that is already adopted.
pub const ALREADY_ADOPTED: &str = "Sorry, this pet has already been adopted";

/// Shown when adopting an id with no matching pet.
pub const PET_NOT_FOUND: &str = "Pet not found";

/// Success message for an adoption.
pub fn adopted(name: &str) -> String {
    format!("Pet {name} has been successfully adopted!")
}
