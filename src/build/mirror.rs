//! Static asset mirroring.
//!
//! Non-compiled assets (the markup entry file, stylesheets, images) are
//! copied from the source tree into the output tree after every successful
//! compile. The mirrored roots are configuration, not hard-coded: the
//! mirror walks an enumerable list of `(source, destination)` pairs.
//!
//! A missing source *directory* is not an error (optional asset categories
//! may simply not exist). Copy failures abort the remainder of the mirror
//! pass without rolling back files already copied, and never crash the
//! process.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Errors raised while mirroring assets into the output tree.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// A destination directory could not be created
    #[error("failed to create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A source directory could not be enumerated
    #[error("failed to read {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A file copy failed
    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// One mirrored root: a single file or a whole directory tree.
#[derive(Debug, Clone)]
pub enum MirrorRoot {
    /// Copy one file; missing source is a copy failure
    File { src: PathBuf, dest: PathBuf },
    /// Copy a directory recursively; missing source is a no-op
    Tree { src: PathBuf, dest: PathBuf },
}

/// Mirrors configured asset roots into the output tree.
#[derive(Debug, Clone)]
pub struct AssetMirror {
    roots: Vec<MirrorRoot>,
}

impl AssetMirror {
    /// Create a mirror over an explicit list of roots.
    pub fn new(roots: Vec<MirrorRoot>) -> Self {
        Self { roots }
    }

    /// Copy every configured root. The first failure aborts the pass.
    pub async fn mirror(&self) -> Result<(), MirrorError> {
        for root in &self.roots {
            match root {
                MirrorRoot::File { src, dest } => copy_file(src, dest).await?,
                MirrorRoot::Tree { src, dest } => copy_tree(src, dest).await?,
            }
        }
        Ok(())
    }
}

/// Recursively copy `src` into `dest`, creating destination directories as
/// needed. A missing `src` leaves `dest` untouched and returns Ok.
pub async fn copy_tree(src: &Path, dest: &Path) -> Result<(), MirrorError> {
    if fs::metadata(src).await.is_err() {
        return Ok(());
    }

    let mut pending = vec![(src.to_path_buf(), dest.to_path_buf())];

    while let Some((src_dir, dest_dir)) = pending.pop() {
        fs::create_dir_all(&dest_dir)
            .await
            .map_err(|source| MirrorError::CreateDir {
                path: dest_dir.clone(),
                source,
            })?;

        let mut entries = fs::read_dir(&src_dir)
            .await
            .map_err(|source| MirrorError::ReadDir {
                path: src_dir.clone(),
                source,
            })?;

        loop {
            let entry = entries
                .next_entry()
                .await
                .map_err(|source| MirrorError::ReadDir {
                    path: src_dir.clone(),
                    source,
                })?;
            let Some(entry) = entry else { break };

            let from = entry.path();
            let to = dest_dir.join(entry.file_name());
            let file_type = entry
                .file_type()
                .await
                .map_err(|source| MirrorError::ReadDir {
                    path: from.clone(),
                    source,
                })?;

            if file_type.is_dir() {
                pending.push((from, to));
            } else {
                fs::copy(&from, &to)
                    .await
                    .map_err(|source| MirrorError::Copy { from, to, source })?;
            }
        }
    }

    Ok(())
}

/// Copy a single file, creating the destination's parent directory.
async fn copy_file(src: &Path, dest: &Path) -> Result<(), MirrorError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| MirrorError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    fs::copy(src, dest)
        .await
        .map_err(|source| MirrorError::Copy {
            from: src.to_path_buf(),
            to: dest.to_path_buf(),
            source,
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_copy_tree_missing_source_is_noop() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out");
        std_fs::create_dir(&dest).unwrap();
        std_fs::write(dest.join("keep.txt"), "keep").unwrap();

        copy_tree(&temp.path().join("missing"), &dest).await.unwrap();

        // Destination untouched
        assert_eq!(std_fs::read_dir(&dest).unwrap().count(), 1);
        assert_eq!(std_fs::read_to_string(dest.join("keep.txt")).unwrap(), "keep");
    }

    #[tokio::test]
    async fn test_copy_tree_recurses_into_subdirectories() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("styles");
        std_fs::create_dir_all(src.join("themes/dark")).unwrap();
        std_fs::write(src.join("app.css"), "body {}").unwrap();
        std_fs::write(src.join("themes/dark/colors.css"), ":root {}").unwrap();

        let dest = temp.path().join("out/styles");
        copy_tree(&src, &dest).await.unwrap();

        assert_eq!(
            std_fs::read_to_string(dest.join("app.css")).unwrap(),
            "body {}"
        );
        assert_eq!(
            std_fs::read_to_string(dest.join("themes/dark/colors.css")).unwrap(),
            ":root {}"
        );
    }

    #[tokio::test]
    async fn test_copy_tree_creates_empty_destination_for_empty_source() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("images");
        std_fs::create_dir(&src).unwrap();

        let dest = temp.path().join("out/images");
        copy_tree(&src, &dest).await.unwrap();

        assert!(dest.is_dir());
    }

    #[tokio::test]
    async fn test_mirror_copies_file_and_tree_roots() {
        let temp = TempDir::new().unwrap();
        std_fs::write(temp.path().join("index.html"), "<html></html>").unwrap();
        let styles = temp.path().join("styles");
        std_fs::create_dir(&styles).unwrap();
        std_fs::write(styles.join("app.css"), "body {}").unwrap();

        let out = temp.path().join("out");
        let mirror = AssetMirror::new(vec![
            MirrorRoot::File {
                src: temp.path().join("index.html"),
                dest: out.join("index.html"),
            },
            MirrorRoot::Tree {
                src: styles.clone(),
                dest: out.join("styles"),
            },
            // Missing tree roots are skipped without error
            MirrorRoot::Tree {
                src: temp.path().join("images"),
                dest: out.join("images"),
            },
        ]);

        mirror.mirror().await.unwrap();

        assert!(out.join("index.html").is_file());
        assert!(out.join("styles/app.css").is_file());
        assert!(!out.join("images").exists());
    }

    #[tokio::test]
    async fn test_mirror_missing_file_root_fails() {
        let temp = TempDir::new().unwrap();
        let mirror = AssetMirror::new(vec![MirrorRoot::File {
            src: temp.path().join("index.html"),
            dest: temp.path().join("out/index.html"),
        }]);

        let err = mirror.mirror().await.unwrap_err();
        assert!(matches!(err, MirrorError::Copy { .. }));
    }
}
