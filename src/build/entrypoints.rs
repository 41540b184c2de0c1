//! Entrypoint discovery.
//!
//! Every build composes its entrypoint list fresh: the core entry module
//! first, then one entry per component directory. Nothing is cached across
//! builds, so adding or removing a component directory takes effect on the
//! next rebuild.

use crate::error::BuildError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Enumerate the entrypoints for one compile invocation.
///
/// The core entry is always first. Component entries follow in
/// directory-enumeration order; that order is filesystem-dependent and
/// deliberately not sorted. Plain files inside the components root are
/// skipped.
///
/// # Errors
///
/// Returns `Discover` when the components root cannot be enumerated.
pub async fn discover(
    core_entry: &Path,
    components_dir: &Path,
    component_entry: &str,
) -> Result<Vec<PathBuf>, BuildError> {
    let mut entrypoints = vec![core_entry.to_path_buf()];

    let mut entries = fs::read_dir(components_dir)
        .await
        .map_err(|source| BuildError::Discover {
            path: components_dir.to_path_buf(),
            source,
        })?;

    loop {
        let entry = entries
            .next_entry()
            .await
            .map_err(|source| BuildError::Discover {
                path: components_dir.to_path_buf(),
                source,
            })?;
        let Some(entry) = entry else { break };

        let file_type = entry
            .file_type()
            .await
            .map_err(|source| BuildError::Discover {
                path: entry.path(),
                source,
            })?;

        if file_type.is_dir() {
            entrypoints.push(entry.path().join(component_entry));
        }
    }

    Ok(entrypoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_discover_core_first_then_components() {
        let temp = TempDir::new().unwrap();
        let components = temp.path().join("components");
        std_fs::create_dir_all(components.join("button")).unwrap();
        std_fs::create_dir_all(components.join("card")).unwrap();

        let core = temp.path().join("core/index.ts");
        let entrypoints = discover(&core, &components, "index.ts").await.unwrap();

        assert_eq!(entrypoints.len(), 3);
        assert_eq!(entrypoints[0], core);

        let rest: Vec<_> = entrypoints[1..].to_vec();
        assert!(rest.contains(&components.join("button/index.ts")));
        assert!(rest.contains(&components.join("card/index.ts")));
    }

    #[tokio::test]
    async fn test_discover_skips_plain_files() {
        let temp = TempDir::new().unwrap();
        let components = temp.path().join("components");
        std_fs::create_dir_all(components.join("button")).unwrap();
        std_fs::write(components.join("README.md"), "components").unwrap();

        let core = temp.path().join("core/index.ts");
        let entrypoints = discover(&core, &components, "index.ts").await.unwrap();

        assert_eq!(entrypoints.len(), 2);
        assert_eq!(entrypoints[1], components.join("button/index.ts"));
    }

    #[tokio::test]
    async fn test_discover_empty_components_root() {
        let temp = TempDir::new().unwrap();
        let components = temp.path().join("components");
        std_fs::create_dir(&components).unwrap();

        let core = temp.path().join("core/index.ts");
        let entrypoints = discover(&core, &components, "index.ts").await.unwrap();

        assert_eq!(entrypoints, vec![core]);
    }

    #[tokio::test]
    async fn test_discover_missing_components_root_fails() {
        let temp = TempDir::new().unwrap();
        let core = temp.path().join("core/index.ts");

        let err = discover(&core, &temp.path().join("components"), "index.ts")
            .await
            .unwrap_err();
        assert!(matches!(err, BuildError::Discover { .. }));
    }
}
