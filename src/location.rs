use crate::error::{BasecoatError, Result};

/// A scheme or template repository, identified by its hosting user and
/// repository name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub user: String,
    pub repository: String,
}

const RAW_HOST: &str = "https://raw.githubusercontent.com";

impl Location {
    /// Parse a repository location of the fixed shape
    /// `https://<host>/<user>/<repository>`.
    ///
    /// Splitting on `/` must yield exactly five segments; anything else
    /// (extra path components, bare names, trailing slashes) is an
    /// unhandled format.
    pub fn parse(location: &str) -> Result<Self> {
        let parts: Vec<&str> = location.split('/').collect();
        if parts.len() != 5 {
            return Err(BasecoatError::LocationFormat {
                location: location.to_string(),
            });
        }

        Ok(Self {
            user: parts[3].to_string(),
            repository: parts[4].to_string(),
        })
    }

    /// URL of a raw file on the repository's master branch.
    pub fn file_url(&self, path: &str) -> String {
        raw_file_url(&self.user, &self.repository, path)
    }
}

pub fn raw_file_url(user: &str, repository: &str, path: &str) -> String {
    format!("{RAW_HOST}/{user}/{repository}/master/{path}")
}
