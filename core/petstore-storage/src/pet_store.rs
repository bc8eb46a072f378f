//! The pets collection.

use crate::error::{StorageError, StorageResult};
use duckdb::{Connection, Row, params};
use petstore_model::{AdoptOutcome, NewPet, Pet, PetId, PetListing};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS pets (
        id VARCHAR PRIMARY KEY,
        name VARCHAR NOT NULL,
        pet_type VARCHAR NOT NULL,
        age BIGINT NOT NULL,
        species VARCHAR NOT NULL,
        adopted BOOLEAN NOT NULL DEFAULT false
    );
";

const SELECT_PETS: &str = "SELECT id, name, pet_type, age, species, adopted FROM pets";

enum Backend {
    Connected(Mutex<Connection>),
    Disconnected(String),
}

/// Persistent store for pet documents backed by DuckDB.
///
/// A store that failed to open at startup can still be constructed with
/// [`PetStore::disconnected`]; every operation on it then fails with
/// [`StorageError::Unavailable`].
pub struct PetStore {
    backend: Backend,
}

impl PetStore {
    /// Opens (or creates) a pet store at the given path.
    pub fn open(path: &Path) -> StorageResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Opens an in-memory pet store (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    /// Wraps an existing connection, creating the `pets` table if needed.
    pub fn with_connection(conn: Connection) -> StorageResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            backend: Backend::Connected(Mutex::new(conn)),
        })
    }

    /// A store with no connection. `reason` is reported by every operation.
    pub fn disconnected(reason: impl Into<String>) -> Self {
        Self {
            backend: Backend::Disconnected(reason.into()),
        }
    }

    /// Whether the store holds a live connection.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self.backend, Backend::Connected(_))
    }

    fn conn(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        match &self.backend {
            Backend::Connected(conn) => conn.lock().map_err(|_| StorageError::LockPoisoned),
            Backend::Disconnected(reason) => Err(StorageError::Unavailable(reason.clone())),
        }
    }

    /// Round-trips a trivial query to check the connection.
    pub fn ping(&self) -> StorageResult<()> {
        let conn = self.conn()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i32>(0))?;
        Ok(())
    }

    /// Inserts a new pet with a fresh id and `adopted = false`.
    pub fn save(&self, pet: &NewPet) -> StorageResult<Pet> {
        let id = PetId::new();
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO pets (id, name, pet_type, age, species, adopted) VALUES (?, ?, ?, ?, ?, false)",
            params![
                id.to_string(),
                pet.name,
                pet.pet_type,
                i64::from(pet.age),
                pet.species,
            ],
        )?;
        debug!("Saved pet {}", id);
        Ok(Pet {
            id,
            name: pet.name.clone(),
            pet_type: pet.pet_type.clone(),
            age: pet.age,
            species: pet.species.clone(),
            adopted: false,
        })
    }

    /// Returns every pet, oldest first.
    pub fn get_all(&self) -> StorageResult<Vec<Pet>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_PETS} ORDER BY id"))?;
        let rows = stmt.query_map([], RawPet::from_row)?;
        rows.map(|row| row.map_err(StorageError::from).and_then(RawPet::into_pet))
            .collect()
    }

    /// Returns the pets, or [`PetListing::NoneAvailable`] if there are none.
    pub fn listing(&self) -> StorageResult<PetListing> {
        self.get_all().map(PetListing::from)
    }

    /// Fetches one pet.
    pub fn get_by_id(&self, id: &PetId) -> StorageResult<Option<Pet>> {
        let conn = self.conn()?;
        let raw = conn.query_row(
            &format!("{SELECT_PETS} WHERE id = ?"),
            params![id.to_string()],
            RawPet::from_row,
        );
        match raw {
            Ok(raw) => raw.into_pet().map(Some),
            Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Marks a pet as adopted if it is not already.
    ///
    /// Returns true only when this call performed the transition; an unknown
    /// id or an already adopted pet both return false.
    pub fn set_adopted(&self, id: &PetId) -> StorageResult<bool> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE pets SET adopted = true WHERE id = ? AND adopted = false",
            params![id.to_string()],
        )?;
        Ok(changed > 0)
    }

    /// Adopts a pet, reporting which of the three outcomes applied.
    pub fn adopt(&self, id: &PetId) -> StorageResult<AdoptOutcome> {
        let transitioned = self.set_adopted(id)?;
        // A concurrent delete between the update and this read reports NotFound.
        let outcome = match (self.get_by_id(id)?, transitioned) {
            (Some(pet), true) => AdoptOutcome::Adopted(pet),
            (Some(pet), false) => AdoptOutcome::AlreadyAdopted(pet),
            (None, _) => AdoptOutcome::NotFound,
        };
        Ok(outcome)
    }

    /// Deletes a pet. Unknown ids are a no-op. Returns the number of rows removed.
    pub fn delete(&self, id: &PetId) -> StorageResult<usize> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM pets WHERE id = ?", params![id.to_string()])?;
        Ok(removed)
    }

    /// Number of pets in the collection.
    pub fn count(&self) -> StorageResult<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM pets", [], |row| row.get(0))?;
        usize::try_from(count).map_err(|_| StorageError::InvalidData(format!("negative count {count}")))
    }
}

/// A `pets` row before its id and age are checked.
struct RawPet {
    id: String,
    name: String,
    pet_type: String,
    age: i64,
    species: String,
    adopted: bool,
}

impl RawPet {
    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            pet_type: row.get(2)?,
            age: row.get(3)?,
            species: row.get(4)?,
            adopted: row.get(5)?,
        })
    }

    fn into_pet(self) -> StorageResult<Pet> {
        let id = PetId::parse(&self.id)
            .map_err(|e| StorageError::InvalidData(format!("invalid pet id {}: {e}", self.id)))?;
        let age = u32::try_from(self.age)
            .map_err(|_| StorageError::InvalidData(format!("invalid age {} for pet {id}", self.age)))?;
        Ok(Pet {
            id,
            name: self.name,
            pet_type: self.pet_type,
            age,
            species: self.species,
            adopted: self.adopted,
        })
    }
}
