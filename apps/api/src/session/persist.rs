//! Session-flag persistence — the single externally stored datum: a boolean
//! flag at a fixed path, read once at startup, written on login/register and
//! cleared on logout.

use std::io;
use std::path::PathBuf;

const FLAG_VALUE: &str = "true";

/// Handle to the persisted authenticated flag.
#[derive(Debug, Clone)]
pub struct SessionFlag {
    path: PathBuf,
}

impl SessionFlag {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// True when a prior session persisted the flag.
    pub fn is_set(&self) -> bool {
        std::fs::read_to_string(&self.path)
            .map(|contents| contents.trim() == FLAG_VALUE)
            .unwrap_or(false)
    }

    pub fn set(&self) -> io::Result<()> {
        std::fs::write(&self.path, FLAG_VALUE)
    }

    /// Removes the flag. A missing file already means "unset".
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag_in_temp_dir() -> (tempfile::TempDir, SessionFlag) {
        let dir = tempfile::tempdir().expect("temp dir");
        let flag = SessionFlag::new(dir.path().join("session.flag"));
        (dir, flag)
    }

    #[test]
    fn test_flag_starts_unset() {
        let (_dir, flag) = flag_in_temp_dir();
        assert!(!flag.is_set());
    }

    #[test]
    fn test_set_then_is_set() {
        let (_dir, flag) = flag_in_temp_dir();
        flag.set().expect("set flag");
        assert!(flag.is_set());
    }

    #[test]
    fn test_clear_removes_flag() {
        let (_dir, flag) = flag_in_temp_dir();
        flag.set().expect("set flag");
        flag.clear().expect("clear flag");
        assert!(!flag.is_set());
    }

    #[test]
    fn test_clear_when_never_set_is_ok() {
        let (_dir, flag) = flag_in_temp_dir();
        assert!(flag.clear().is_ok());
    }

    #[test]
    fn test_stale_contents_do_not_count() {
        let (dir, flag) = flag_in_temp_dir();
        std::fs::write(dir.path().join("session.flag"), "false").expect("write");
        assert!(!flag.is_set());
    }
}
