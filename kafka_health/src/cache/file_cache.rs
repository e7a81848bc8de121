use crate::cache::OutputCache;
use anyhow::Context;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::path::{Path, PathBuf};

// group ids may hold any character, file names may not
const FILE_NAME_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'.').remove(b'-').remove(b'_');

/// One `<key>.txt` file per entry under `dir`.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Percent-encodes the key, `%` included, so distinct keys never share a file.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name = utf8_percent_encode(key, FILE_NAME_SET);
        self.dir.join(format!("{file_name}.txt"))
    }
}

impl OutputCache for FileCache {
    fn get(&self, key: &str) -> Result<Option<String>, anyhow::Error> {
        let path = self.path_for(key);
        if !path.is_file() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("While reading cache file {}", path.display()))?;

        Ok(Some(raw))
    }

    fn put(&self, key: &str, raw: &str) -> Result<(), anyhow::Error> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("While creating cache dir {}", self.dir.display()))?;

        let path = self.path_for(key);
        std::fs::write(&path, raw)
            .with_context(|| format!("While writing cache file {}", path.display()))?;

        Ok(())
    }
}
