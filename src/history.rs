//! Recency-ordered shell history.
//!
//! The history file holds a JSON array of shell identifiers, most recently
//! used first. It is only trusted when it names exactly the configured
//! shells; anything else (unparsable content, a shell added or removed in the
//! config) is ignored and the menu falls back to the sorted shell list.
//!
//! Concurrent launchers serialize on an exclusive file lock held for as long
//! as the [`HistoryFile`] guard lives.

use crate::error::{QuicktermError, Result};
use i3_quickterm_config::{Config, expand_command};
use std::collections::BTreeSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Exclusively locked history file. Unlocked and closed on drop.
#[derive(Debug)]
pub struct HistoryFile {
    file: File,
    path: PathBuf,
}

impl HistoryFile {
    /// Open (creating it and its parent directories if needed) and lock.
    ///
    /// Blocks until no other launcher holds the lock.
    pub fn open(path: &Path) -> Result<Self> {
        let err = |source| QuicktermError::History {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(err)?;
        }
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)
            .map_err(err)?;
        file.lock().map_err(err)?;
        file.seek(SeekFrom::Start(0)).map_err(err)?;

        log::debug!("locked history file {:?}", path);
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn err(&self, source: io::Error) -> QuicktermError {
        QuicktermError::History {
            path: self.path.display().to_string(),
            source,
        }
    }

    /// The stored order, if it is valid for `shells`.
    pub fn read_order(&mut self, shells: &[String]) -> Option<Vec<String>> {
        let mut contents = String::new();
        if let Err(e) = self
            .file
            .seek(SeekFrom::Start(0))
            .and_then(|_| self.file.read_to_string(&mut contents))
        {
            log::warn!("failed to read history {:?}: {e}", self.path);
            return None;
        }

        let order: Vec<String> = match serde_json::from_str(&contents) {
            Ok(order) => order,
            Err(e) => {
                log::debug!("ignoring unparsable history {:?}: {e}", self.path);
                return None;
            }
        };

        if is_valid_order(&order, shells) {
            Some(order)
        } else {
            log::debug!("history {:?} does not match configured shells", self.path);
            None
        }
    }

    /// Replace the stored order.
    pub fn write_order(&mut self, order: &[String]) -> Result<()> {
        let json = serde_json::to_string(order)
            .map_err(|e| self.err(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        // The file is in append mode, so writes land at the (new) end.
        self.file.set_len(0).map_err(|e| self.err(e))?;
        self.file
            .write_all(json.as_bytes())
            .and_then(|_| self.file.flush())
            .map_err(|e| self.err(e))
    }
}

impl Drop for HistoryFile {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            log::warn!("failed to unlock history {:?}: {e}", self.path);
        }
    }
}

/// History location for `config`, or `None` when history is disabled.
pub fn history_path(config: &Config) -> Result<Option<PathBuf>> {
    let Some(template) = config.history.as_deref() else {
        return Ok(None);
    };
    let path = expand_command(template)?
        .into_iter()
        .next()
        .ok_or_else(|| QuicktermError::History {
            path: template.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty history path"),
        })?;
    Ok(Some(PathBuf::from(path)))
}

/// Lock the history file for `config`, unless history is disabled.
pub fn open_history(config: &Config) -> Result<Option<HistoryFile>> {
    history_path(config)?
        .map(|path| HistoryFile::open(&path))
        .transpose()
}

/// Whether `order` names exactly the configured `shells` (as sets).
pub fn is_valid_order(order: &[String], shells: &[String]) -> bool {
    let stored: BTreeSet<&str> = order.iter().map(String::as_str).collect();
    let configured: BTreeSet<&str> = shells.iter().map(String::as_str).collect();
    stored == configured
}

/// `order` with `selected` moved to the front; other entries keep their order.
pub fn promote(order: &[String], selected: &str) -> Vec<String> {
    std::iter::once(selected.to_string())
        .chain(order.iter().filter(|s| *s != selected).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_promote_moves_selection_to_front() {
        let order = names(&["js", "python", "shell"]);
        assert_eq!(promote(&order, "shell"), names(&["shell", "js", "python"]));
        assert_eq!(promote(&order, "js"), order);
    }

    #[test]
    fn test_valid_order_is_set_equality() {
        let shells = names(&["js", "python", "shell"]);
        assert!(is_valid_order(&names(&["shell", "js", "python"]), &shells));
        assert!(!is_valid_order(&names(&["shell", "js"]), &shells));
        assert!(!is_valid_order(
            &names(&["shell", "js", "python", "ruby"]),
            &shells
        ));
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache/i3-quickterm/shells.order");
        let history = HistoryFile::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(history.path(), path);
    }

    #[test]
    fn test_write_then_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shells.order");
        let shells = names(&["js", "python", "shell"]);

        {
            let mut history = HistoryFile::open(&path).unwrap();
            assert_eq!(history.read_order(&shells), None);
            history.write_order(&names(&["python", "js", "shell"])).unwrap();
            history.write_order(&names(&["shell", "python", "js"])).unwrap();
        }

        let mut history = HistoryFile::open(&path).unwrap();
        assert_eq!(
            history.read_order(&shells),
            Some(names(&["shell", "python", "js"]))
        );
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"["shell","python","js"]"#
        );
    }

    #[test]
    fn test_stale_history_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shells.order");
        fs::write(&path, r#"["js", "ruby"]"#).unwrap();

        let mut history = HistoryFile::open(&path).unwrap();
        assert_eq!(history.read_order(&names(&["js", "shell"])), None);
    }

    #[test]
    fn test_garbage_history_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shells.order");
        fs::write(&path, "not json at all").unwrap();

        let mut history = HistoryFile::open(&path).unwrap();
        assert_eq!(history.read_order(&names(&["js"])), None);
    }

    #[test]
    fn test_lock_is_exclusive_until_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shells.order");

        let history = HistoryFile::open(&path).unwrap();
        let other = File::open(&path).unwrap();
        assert!(matches!(other.try_lock(), Err(fs::TryLockError::WouldBlock)));

        drop(history);
        assert!(other.try_lock().is_ok());
    }

    #[test]
    fn test_disabled_history_has_no_path() {
        let config = Config {
            history: None,
            ..Config::default()
        };
        assert!(history_path(&config).unwrap().is_none());
        assert!(open_history(&config).unwrap().is_none());
    }
}
