//! Runtime-data directory resolution.
//!
//! The per-user cache files live in one directory, resolved from an
//! explicit override (settings), the `SCROBCACHE_DATA_PATH` environment
//! variable, or the platform data dir, in that order. The directory is
//! created if missing.

use std::path::{Path, PathBuf};
use std::{env, fs};

use directories::ProjectDirs;

use crate::error::DataDirError;

/// Environment override for the runtime-data directory.
pub const DATA_PATH_ENV: &str = "SCROBCACHE_DATA_PATH";

/// Resolve (and create, if needed) the directory holding the per-user
/// cache files.
pub fn runtime_data_dir(override_dir: Option<&Path>) -> Result<PathBuf, DataDirError> {
    let dir = if let Some(dir) = override_dir {
        dir.to_path_buf()
    } else if let Some(dir) = env::var_os(DATA_PATH_ENV) {
        PathBuf::from(dir)
    } else {
        ProjectDirs::from("com", "scrobcache", "scrobcache")
            .ok_or(DataDirError::NoHome)?
            .data_dir()
            .to_path_buf()
    };

    fs::create_dir_all(&dir).map_err(|source| DataDirError::Create {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
    }

    struct EnvGuard {
        key: &'static str,
        old: Option<std::ffi::OsString>,
    }

    impl EnvGuard {
        fn set(key: &'static str, val: &str) -> Self {
            let old = std::env::var_os(key);
            unsafe {
                std::env::set_var(key, val);
            }
            Self { key, old }
        }

        fn remove(key: &'static str) -> Self {
            let old = std::env::var_os(key);
            unsafe {
                std::env::remove_var(key);
            }
            Self { key, old }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match self.old.take() {
                Some(v) => unsafe {
                    std::env::set_var(self.key, v);
                },
                None => unsafe {
                    std::env::remove_var(self.key);
                },
            }
        }
    }

    #[test]
    fn explicit_override_wins_over_env_var() {
        let _lock = env_lock();
        let override_dir = tempdir().unwrap();
        let env_dir = tempdir().unwrap();
        let _g = EnvGuard::set(DATA_PATH_ENV, env_dir.path().to_str().unwrap());

        let resolved = runtime_data_dir(Some(override_dir.path())).unwrap();
        assert_eq!(resolved, override_dir.path());
    }

    #[test]
    fn env_var_is_used_when_no_override() {
        let _lock = env_lock();
        let env_dir = tempdir().unwrap();
        let nested = env_dir.path().join("scrobbles");
        let _g = EnvGuard::set(DATA_PATH_ENV, nested.to_str().unwrap());

        let resolved = runtime_data_dir(None).unwrap();
        assert_eq!(resolved, nested);
        assert!(nested.is_dir(), "resolution should create the directory");
    }

    #[test]
    fn missing_directories_are_created() {
        let _lock = env_lock();
        let _g = EnvGuard::remove(DATA_PATH_ENV);
        let base = tempdir().unwrap();
        let deep = base.path().join("a").join("b");

        let resolved = runtime_data_dir(Some(&deep)).unwrap();
        assert_eq!(resolved, deep);
        assert!(deep.is_dir());
    }
}
