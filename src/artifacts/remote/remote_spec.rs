use crate::artifacts::core::error::{RepositoryError, RepositoryResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSpec {
    name: String,
    url: String,
}

impl RemoteSpec {
    pub fn try_parse(name: impl Into<String>, url: impl Into<String>) -> RepositoryResult<Self> {
        let name = name.into().trim().to_string();
        let url = url.into().trim().to_string();

        if name.is_empty() {
            return Err(RepositoryError::InvalidInput(
                "remote name cannot be empty".to_string(),
            ));
        }
        if name.starts_with('-') || name.chars().any(char::is_whitespace) {
            return Err(RepositoryError::InvalidInput(format!(
                "invalid remote name: {}",
                name
            )));
        }
        if url.is_empty() {
            return Err(RepositoryError::InvalidInput(
                "remote url cannot be empty".to_string(),
            ));
        }
        if url.starts_with('-') {
            return Err(RepositoryError::InvalidInput(format!(
                "invalid remote url: {}",
                url
            )));
        }

        Ok(RemoteSpec { name, url })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
