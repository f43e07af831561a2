use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::prelude::*;

/// Durable slot, each holding one serialized document.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, derive_more::Display)]
pub enum Slot {
    #[display("history")]
    History,

    #[display("current quote")]
    CurrentQuote,
}

impl Slot {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::History => "costeador_history",
            Self::CurrentQuote => "costeador_last_result",
        }
    }
}

/// Keyed durable storage: whole documents in, whole documents out.
pub trait Storage {
    /// Read the slot contents, `None` when the slot was never written.
    fn read(&self, slot: Slot) -> Result<Option<String>>;

    /// Replace the slot contents.
    fn write(&self, slot: Slot, contents: &str) -> Result;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: Slot, contents: &str) -> Result {
        (**self).write(slot, contents)
    }
}

/// One JSON file per slot in a data directory.
pub struct JsonFiles {
    directory: PathBuf,
}

impl JsonFiles {
    #[instrument(skip_all, fields(directory = %directory.as_ref().display()))]
    pub fn try_new(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref();
        fs::create_dir_all(directory)
            .with_context(|| format!("failed to create `{}`", directory.display()))?;
        Ok(Self { directory: directory.to_path_buf() })
    }

    fn path(&self, slot: Slot) -> PathBuf {
        self.directory.join(slot.key()).with_extension("json")
    }
}

impl Storage for JsonFiles {
    #[instrument(skip_all, fields(slot = %slot), level = Level::DEBUG)]
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        let path = self.path(slot);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => {
                Err(error).with_context(|| format!("failed to read `{}`", path.display()))
            }
        }
    }

    /// Write into a temporary sibling and rename it over the slot, so that readers never see a
    /// partially written document.
    #[instrument(skip_all, fields(slot = %slot, n_bytes = contents.len()), level = Level::DEBUG)]
    fn write(&self, slot: Slot, contents: &str) -> Result {
        let path = self.path(slot);
        let temporary_path = path.with_extension("json.tmp");
        fs::write(&temporary_path, contents)
            .with_context(|| format!("failed to write `{}`", temporary_path.display()))?;
        fs::rename(&temporary_path, &path)
            .with_context(|| format!("failed to replace `{}`", path.display()))?;
        debug!("written");
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_files() -> Result {
        let directory = tempfile::tempdir()?;
        let storage = JsonFiles::try_new(directory.path().join("data"))?;

        assert_eq!(storage.read(Slot::History)?, None);
        storage.write(Slot::History, "[]")?;
        storage.write(Slot::History, "[1]")?;
        assert_eq!(storage.read(Slot::History)?.as_deref(), Some("[1]"));
        assert_eq!(storage.read(Slot::CurrentQuote)?, None);

        assert!(directory.path().join("data/costeador_history.json").is_file());
        assert!(!directory.path().join("data/costeador_history.json.tmp").exists());
        Ok(())
    }
}
