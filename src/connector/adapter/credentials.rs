use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::DomainError;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Local-development key file, looked up relative to the working directory.
pub const DEFAULT_KEY_FILE: &str = "apikey.txt";
const KEY_FILE_FIELD: &str = "api_key";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Environment,
    KeyFile(PathBuf),
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Environment => write!(f, "{API_KEY_ENV} environment variable"),
            CredentialSource::KeyFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A generation API key and where it was found.
#[derive(Clone)]
pub struct ApiCredential {
    key: String,
    source: CredentialSource,
}

impl ApiCredential {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn source(&self) -> &CredentialSource {
        &self.source
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("key", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Load the API key from `GEMINI_API_KEY`, falling back to `key_file`.
pub fn load_api_credential(key_file: &Path) -> Result<ApiCredential, DomainError> {
    resolve_api_credential(std::env::var(API_KEY_ENV).ok(), key_file)
}

/// Resolution order: a non-blank environment value, then an `api_key:` line
/// in `key_file`. An unreadable key file counts as absent.
pub fn resolve_api_credential(
    env_value: Option<String>,
    key_file: &Path,
) -> Result<ApiCredential, DomainError> {
    if let Some(key) = env_value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        return Ok(ApiCredential {
            key,
            source: CredentialSource::Environment,
        });
    }

    match std::fs::read_to_string(key_file) {
        Ok(contents) => {
            if let Some(key) = parse_key_file(&contents) {
                return Ok(ApiCredential {
                    key,
                    source: CredentialSource::KeyFile(key_file.to_path_buf()),
                });
            }
            debug!("{} has no '{KEY_FILE_FIELD}:' line", key_file.display());
        }
        Err(e) => debug!("Key file {} not readable: {e}", key_file.display()),
    }

    Err(DomainError::upstream_unavailable(format!(
        "{API_KEY_ENV} environment variable not found."
    )))
}

/// Extract the key from a colon-delimited key file (`api_key: <key>`).
///
/// Everything after the first colon is the key, so keys containing colons
/// survive intact.
pub fn parse_key_file(contents: &str) -> Option<String> {
    contents
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(field, _)| field.trim() == KEY_FILE_FIELD)
        .map(|(_, value)| value.trim().to_string())
        .filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn key_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_key_file_reads_api_key_line() {
        let contents = "# local settings\nmodel: gemini\napi_key:  AIza-123 \n";
        assert_eq!(parse_key_file(contents).as_deref(), Some("AIza-123"));
    }

    #[test]
    fn parse_key_file_keeps_colons_in_key() {
        assert_eq!(parse_key_file("api_key: a:b:c").as_deref(), Some("a:b:c"));
    }

    #[test]
    fn parse_key_file_ignores_blank_or_missing_key() {
        assert_eq!(parse_key_file("api_key:   \n"), None);
        assert_eq!(parse_key_file("token: abc"), None);
        assert_eq!(parse_key_file(""), None);
    }

    #[test]
    fn environment_wins_over_key_file() {
        let file = key_file("api_key: from-file");
        let credential = resolve_api_credential(Some("from-env".into()), file.path()).unwrap();
        assert_eq!(credential.key(), "from-env");
        assert_eq!(credential.source(), &CredentialSource::Environment);
    }

    #[test]
    fn blank_environment_falls_back_to_key_file() {
        let file = key_file("api_key: from-file\n");
        let credential = resolve_api_credential(Some("  ".into()), file.path()).unwrap();
        assert_eq!(credential.key(), "from-file");
        assert_eq!(
            credential.source(),
            &CredentialSource::KeyFile(file.path().to_path_buf())
        );
    }

    #[test]
    fn missing_everything_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_api_credential(None, &dir.path().join("apikey.txt")).unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn debug_output_redacts_key() {
        let credential = resolve_api_credential(Some("secret".into()), Path::new("unused")).unwrap();
        let printed = format!("{credential:?}");
        assert!(!printed.contains("secret"));
    }
}
