//! Durable store adapter.
//!
//! One redb table holding a single JSON-serialized [`StateSnapshot`] under a
//! fixed key. Load-or-absent semantics: a missing table or key is `None`,
//! not an error. Date fields round-trip through chrono's serde
//! representation and rehydrate to `DateTime<Utc>` on load.

use redb::{Database, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::errors::StoreError;
use crate::state::StateSnapshot;

const STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("global_state");
const STATE_KEY: &str = "state";

/// Handle to the on-disk snapshot blob. `Clone + Send + Sync` via the inner
/// `Arc<Database>`, so saves can run on blocking tasks.
#[derive(Clone)]
pub struct StateDb {
    db: Arc<Database>,
}

impl StateDb {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let db = Database::create(path)?;
        debug!(path = %path.display(), "durable store opened");
        Ok(Self { db: Arc::new(db) })
    }

    /// Reads the persisted snapshot. `Ok(None)` when no prior state exists.
    pub fn load(&self) -> Result<Option<StateSnapshot>, StoreError> {
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(STATE_TABLE) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match table.get(STATE_KEY)? {
            Some(blob) => {
                let snapshot: StateSnapshot = serde_json::from_slice(blob.value())?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    /// Overwrites the persisted snapshot with `snapshot`.
    pub fn save(&self, snapshot: &StateSnapshot) -> Result<(), StoreError> {
        let blob = serde_json::to_vec(snapshot)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(STATE_TABLE)?;
            table.insert(STATE_KEY, blob.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SerialInventory;
    use tempfile::tempdir;

    #[test]
    fn load_before_first_save_is_absent() {
        let dir = tempdir().unwrap();
        let db = StateDb::open(&dir.path().join("state.redb")).unwrap();
        assert!(db.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let db = StateDb::open(&dir.path().join("state.redb")).unwrap();

        let mut snapshot = StateSnapshot::default();
        snapshot
            .serials
            .push(SerialInventory::new("sup1", "buy1", "1", "SN-RT-1", "tester"));

        db.save(&snapshot).unwrap();
        let loaded = db.load().unwrap().expect("snapshot persisted");
        assert_eq!(loaded.serials, snapshot.serials);
        assert_eq!(
            loaded.serials[0].created_date,
            snapshot.serials[0].created_date
        );
    }

    #[test]
    fn save_overwrites_prior_value() {
        let dir = tempdir().unwrap();
        let db = StateDb::open(&dir.path().join("state.redb")).unwrap();

        let mut first = StateSnapshot::default();
        first
            .serials
            .push(SerialInventory::new("sup1", "buy1", "1", "SN-1", "tester"));
        db.save(&first).unwrap();

        let second = StateSnapshot::default();
        db.save(&second).unwrap();

        let loaded = db.load().unwrap().unwrap();
        assert!(loaded.serials.is_empty());
    }
}
