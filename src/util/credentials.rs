use std::fs;
use std::io;
use std::path::Path;

use crate::error::GoveeError;

/// Default key file location, relative to the working directory.
pub const DEFAULT_KEY_FILE: &str = "api_key";

/// Reads the API key from `path`.
///
/// The file contents are used verbatim as the `Govee-API-Key` header
/// value, except that a single trailing newline is trimmed so a key file
/// written with a text editor still produces a valid header. An empty or
/// whitespace-only file is rejected here rather than on the first
/// request.
pub fn load_api_key<P: AsRef<Path>>(path: P) -> Result<String, GoveeError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| GoveeError::CredentialLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let key = raw
        .strip_suffix('\n')
        .map(|stripped| stripped.strip_suffix('\r').unwrap_or(stripped))
        .unwrap_or(&raw);

    if key.trim().is_empty() {
        return Err(GoveeError::CredentialLoad {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, "key file is empty"),
        });
    }

    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn key_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_key_verbatim() {
        let (_dir, path) = key_file("abc123");
        assert_eq!(load_api_key(&path).unwrap(), "abc123");
    }

    #[test]
    fn trims_one_trailing_newline() {
        let (_dir, path) = key_file("abc123\n");
        assert_eq!(load_api_key(&path).unwrap(), "abc123");

        let (_dir, path) = key_file("abc123\r\n");
        assert_eq!(load_api_key(&path).unwrap(), "abc123");
    }

    #[test]
    fn keeps_interior_whitespace() {
        // Only the trailing newline is trimmed, nothing else.
        let (_dir, path) = key_file(" abc 123\n");
        assert_eq!(load_api_key(&path).unwrap(), " abc 123");
    }

    #[test]
    fn missing_file_is_a_credential_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_api_key(dir.path().join("no_such_file")).unwrap_err();
        assert!(matches!(err, GoveeError::CredentialLoad { .. }));
    }

    #[test]
    fn empty_file_is_a_credential_error() {
        let (_dir, path) = key_file("\n");
        let err = load_api_key(&path).unwrap_err();
        assert!(matches!(err, GoveeError::CredentialLoad { .. }));
    }
}
