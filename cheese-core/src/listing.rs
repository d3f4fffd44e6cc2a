use std::{io, path::Path};

use tracing::debug;

/// Capability to list the immediate children of a directory.
///
/// Language discovery only ever needs child names, so this is the whole
/// filesystem surface the config layer touches.
pub trait ListDir {
    /// Names of the entries directly inside `path`, in no particular order.
    fn list_child_names(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// [`ListDir`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDir;

impl ListDir for FsDir {
    /// Entries whose names are not valid UTF-8 are left out.
    fn list_child_names(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            match entry?.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => debug!(entry = ?name, "skipping entry with a non UTF-8 name"),
            }
        }
        Ok(names)
    }
}

#[cfg(any(test, feature = "testing"))]
pub use memory::MemoryDir;

#[cfg(any(test, feature = "testing"))]
mod memory {
    use std::{
        collections::HashMap,
        io,
        path::{Path, PathBuf},
    };

    use super::ListDir;

    /// In-memory [`ListDir`] for tests.
    ///
    /// Listing a directory that was never added fails with `NotFound`.
    #[derive(Debug, Clone, Default)]
    pub struct MemoryDir {
        dirs: HashMap<PathBuf, Vec<String>>,
    }

    impl MemoryDir {
        pub fn new() -> Self {
            Self::default()
        }

        /// Register a directory with the given child names.
        pub fn with_dir<I, S>(mut self, path: impl Into<PathBuf>, children: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.dirs
                .insert(path.into(), children.into_iter().map(Into::into).collect());
            self
        }
    }

    impl ListDir for MemoryDir {
        fn list_child_names(&self, path: &Path) -> io::Result<Vec<String>> {
            self.dirs.get(path).cloned().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such directory: {}", path.display()),
                )
            })
        }
    }
}
