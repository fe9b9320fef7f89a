//! Sanity checks on the input and output paths before a run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FilterError;

/// Refuse to run when the input is missing or the output would overwrite it.
pub fn check_paths(input: &Path, output: &Path) -> Result<(), FilterError> {
    if !input.exists() {
        return Err(FilterError::InputNotFound(input.to_path_buf()));
    }
    let resolved = resolve(input);
    if resolved == resolve(output) {
        return Err(FilterError::SameFile(resolved));
    }
    Ok(())
}

/// Canonical form of `path`, also for a file that does not exist yet.
///
/// Symlinks are followed for every existing component, so two spellings of
/// the same file compare equal.
pub fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => fs::canonicalize(parent)
            .map(|dir| dir.join(name))
            .unwrap_or_else(|_| absolute.clone()),
        _ => absolute,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_distinct_paths_pass() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.conllu");
        fs::write(&input, "# text = x\n").unwrap();

        assert!(check_paths(&input, &dir.path().join("out.conllu")).is_ok());
    }

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.conllu");

        let err = check_paths(&input, &dir.path().join("out.conllu")).unwrap_err();
        assert!(matches!(err, FilterError::InputNotFound(_)));
    }

    #[test]
    fn test_same_path_refused() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.conllu");
        fs::write(&input, "# text = x\n").unwrap();

        let err = check_paths(&input, &input).unwrap_err();
        assert!(matches!(err, FilterError::SameFile(_)));
    }

    #[test]
    fn test_same_file_through_dot_segments() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let input = dir.path().join("in.conllu");
        fs::write(&input, "# text = x\n").unwrap();
        let aliased = dir.path().join("sub").join("..").join("in.conllu");

        let err = check_paths(&input, &aliased).unwrap_err();
        assert!(matches!(err, FilterError::SameFile(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_same_file_through_symlink() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.conllu");
        fs::write(&input, "# text = x\n").unwrap();
        let link = dir.path().join("link.conllu");
        std::os::unix::fs::symlink(&input, &link).unwrap();

        assert!(check_paths(&input, &link).is_err());
    }

    #[test]
    fn test_resolve_nonexistent_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("later.conllu");
        let resolved = resolve(&missing);
        assert_eq!(resolved, fs::canonicalize(dir.path()).unwrap().join("later.conllu"));
    }
}
