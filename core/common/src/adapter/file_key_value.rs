//! ファイルによるキー・バリューストア
//!
//! 1 キーを `<dir>/<key>.json` の 1 ファイルに保存する。
//! 書き込みは一時ファイルに出してから rename で置き換える（途中で落ちても壊れた値を残さない）。

use crate::error::Error;
use crate::ports::outbound::{FileSystem, KeyValueStore};
use std::path::PathBuf;
use std::sync::Arc;

/// キーとして許す文字（ファイル名にそのまま使う）
fn validate_key(key: &str) -> Result<(), Error> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!("Invalid storage key: '{}'", key)))
    }
}

/// ディレクトリ配下にキーごとのファイルを置く KeyValueStore 実装
pub struct FileKeyValueStore {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(fs: Arc<dyn FileSystem>, dir: impl Into<PathBuf>) -> Self {
        Self { fs, dir: dir.into() }
    }

    fn path(&self, key: &str) -> Result<PathBuf, Error> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path(key)?;
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        self.fs.read_to_string(&path).map(Some)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path(key)?;
        self.fs.create_dir_all(&self.dir)?;
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        self.fs.write(&tmp, value)?;
        self.fs.rename(&tmp, &path)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let path = self.path(key)?;
        if self.fs.exists(&path) {
            self.fs.remove_file(&path)?;
        }
        Ok(())
    }
}
