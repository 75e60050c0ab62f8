use serde_derive::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Store credentials, read from `secrets.toml` in the working directory.
#[derive(Deserialize, Debug)]
pub struct Secrets {
    pub db_url: String,
}

#[derive(Debug, Error)]
pub enum SecretsError {
    #[error("secrets.toml not found at {0}")]
    NotFound(PathBuf),
    #[error("unable to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("secrets.toml is not valid TOML: {0}")]
    Malformed(#[from] toml::de::Error),
}

impl Secrets {
    pub fn read() -> Result<Self, SecretsError> {
        Secrets::read_from(Path::new("secrets.toml"))
    }

    pub fn read_from(path: &Path) -> Result<Self, SecretsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(SecretsError::NotFound(path.to_path_buf()))
            }
            Err(err) => {
                return Err(SecretsError::Unreadable {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        };

        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_db_url() {
        let path = std::env::temp_dir().join(format!(
            "route-uploader-secrets-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "db_url = \"mongodb://localhost:27017\"\n").unwrap();

        let secrets = Secrets::read_from(&path).unwrap();
        assert_eq!(secrets.db_url, "mongodb://localhost:27017");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_its_own_error() {
        let err = Secrets::read_from(Path::new("/nonexistent/secrets.toml")).unwrap_err();
        assert!(matches!(err, SecretsError::NotFound(_)));
    }

    #[test]
    fn garbage_content_is_malformed() {
        let path = std::env::temp_dir().join(format!(
            "route-uploader-secrets-bad-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "db_url = [not toml").unwrap();

        let err = Secrets::read_from(&path).unwrap_err();
        assert!(matches!(err, SecretsError::Malformed(_)));

        std::fs::remove_file(&path).ok();
    }
}
