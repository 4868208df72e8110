//! Storage Backends
//!
//! The session never touches the filesystem directly; it reads and writes
//! raw record bytes through [`SaveStore`]. Frontends hand in a
//! [`FileStore`], tests a [`MemoryStore`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// The two persisted slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SaveSlot {
    /// Regular/endless round snapshot.
    Regular,
    /// Today's daily round.
    Daily,
}

impl SaveSlot {
    fn file_name(self) -> &'static str {
        match self {
            Self::Regular => "wordle.sav",
            Self::Daily => "daily.sav",
        }
    }
}

/// Byte-level storage for save records.
pub trait SaveStore {
    /// Read a slot's bytes, or `None` if the slot is empty.
    fn read(&self, slot: SaveSlot) -> Option<Vec<u8>>;

    /// Write a slot, replacing any previous content.
    fn write(&mut self, slot: SaveSlot, bytes: &[u8]) -> io::Result<()>;

    /// Empty a slot. Deleting an already empty slot is not an error.
    fn delete(&mut self, slot: SaveSlot) -> io::Result<()>;
}

/// Stores each slot as a file in a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store slots under `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, slot: SaveSlot) -> PathBuf {
        self.dir.join(slot.file_name())
    }
}

impl SaveStore for FileStore {
    fn read(&self, slot: SaveSlot) -> Option<Vec<u8>> {
        fs::read(self.path(slot)).ok()
    }

    fn write(&mut self, slot: SaveSlot, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(slot);
        debug!(path = %path.display(), len = bytes.len(), "writing save slot");
        fs::write(path, bytes)
    }

    fn delete(&mut self, slot: SaveSlot) -> io::Result<()> {
        let path = self.path(slot);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl AsRef<Path> for FileStore {
    fn as_ref(&self) -> &Path {
        &self.dir
    }
}

/// In-memory store for tests and headless use.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    regular: Option<Vec<u8>>,
    daily: Option<Vec<u8>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, slot: SaveSlot) -> &Option<Vec<u8>> {
        match slot {
            SaveSlot::Regular => &self.regular,
            SaveSlot::Daily => &self.daily,
        }
    }

    fn slot_mut(&mut self, slot: SaveSlot) -> &mut Option<Vec<u8>> {
        match slot {
            SaveSlot::Regular => &mut self.regular,
            SaveSlot::Daily => &mut self.daily,
        }
    }
}

impl SaveStore for MemoryStore {
    fn read(&self, slot: SaveSlot) -> Option<Vec<u8>> {
        self.slot(slot).clone()
    }

    fn write(&mut self, slot: SaveSlot, bytes: &[u8]) -> io::Result<()> {
        *self.slot_mut(slot) = Some(bytes.to_vec());
        Ok(())
    }

    fn delete(&mut self, slot: SaveSlot) -> io::Result<()> {
        *self.slot_mut(slot) = None;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_slots_are_independent() {
        let mut store = MemoryStore::new();
        store.write(SaveSlot::Regular, b"abc").unwrap();
        store.write(SaveSlot::Daily, b"xyz").unwrap();

        assert_eq!(store.read(SaveSlot::Regular).as_deref(), Some(&b"abc"[..]));
        assert_eq!(store.read(SaveSlot::Daily).as_deref(), Some(&b"xyz"[..]));

        store.delete(SaveSlot::Regular).unwrap();
        assert_eq!(store.read(SaveSlot::Regular), None);
        assert!(store.read(SaveSlot::Daily).is_some());
    }

    #[test]
    fn deleting_empty_slot_is_fine() {
        let mut store = MemoryStore::new();
        store.delete(SaveSlot::Daily).unwrap();
    }
}
