use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use regex::Regex;
use std::sync::LazyLock;

static INVALID_BRANCH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(INVALID_BRANCH_NAME_REGEX).expect("branch name regex is a valid pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> RepositoryResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(RepositoryError::InvalidInput(
                "branch name cannot be empty".to_string(),
            ));
        }

        // would be read as an option by git
        if name.starts_with('-') || INVALID_BRANCH_NAME.is_match(&name) {
            Err(RepositoryError::InvalidInput(format!(
                "invalid branch name: {}",
                name
            )))
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::BranchName;
    use proptest::proptest;

    #[test]
    fn empty_branch_name_is_rejected() {
        assert!(BranchName::try_parse("").is_err());
    }

    #[test]
    fn shell_metacharacters_are_rejected() {
        assert!(BranchName::try_parse("; rm -rf /").is_err());
    }

    #[test]
    fn leading_dash_is_rejected() {
        assert!(BranchName::try_parse("-D").is_err());
    }

    proptest! {
        #[test]
        fn test_is_valid_branch_name_with_valid_branch_name(
            branch_name in "[a-zA-Z0-9_][a-zA-Z0-9_-]*"
        ) {
            assert!(BranchName::try_parse(branch_name).is_ok());
        }

        #[test]
        fn test_is_valid_branch_name_with_slashes(
            prefix in "[a-zA-Z0-9_][a-zA-Z0-9_-]*",
            suffix in "[a-zA-Z0-9_][a-zA-Z0-9_-]*"
        ) {
            let branch_name = format!("{}/{}", prefix, suffix);
            assert!(BranchName::try_parse(branch_name).is_ok());
        }

        #[test]
        fn test_is_invalid_branch_name_starting_with_dot(
            suffix in "[a-zA-Z0-9_][a-zA-Z0-9_-]*"
        ) {
            let branch_name = format!(".{}", suffix);
            assert!(BranchName::try_parse(branch_name).is_err());
        }

        #[test]
        fn test_is_invalid_branch_name_ending_with_lock(
            prefix in "[a-zA-Z0-9_][a-zA-Z0-9_-]*"
        ) {
            let branch_name = format!("{}.lock", prefix);
            assert!(BranchName::try_parse(branch_name).is_err());
        }

        #[test]
        fn test_is_invalid_branch_name_with_consecutive_dots(
            prefix in "[a-zA-Z0-9_][a-zA-Z0-9_-]*",
            suffix in "[a-zA-Z0-9_][a-zA-Z0-9_-]*"
        ) {
            let branch_name = format!("{}..{}", prefix, suffix);
            assert!(BranchName::try_parse(branch_name).is_err());
        }

        #[test]
        fn test_is_invalid_branch_name_with_whitespace(
            prefix in "[a-zA-Z0-9_][a-zA-Z0-9_-]*",
            suffix in "[a-zA-Z0-9_][a-zA-Z0-9_-]*"
        ) {
            let branch_name = format!("{} {}", prefix, suffix);
            assert!(BranchName::try_parse(branch_name).is_err());
        }

        #[test]
        fn test_is_invalid_branch_name_ending_with_slash(
            prefix in "[a-zA-Z0-9_][a-zA-Z0-9_-]*"
        ) {
            let branch_name = format!("{}/", prefix);
            assert!(BranchName::try_parse(branch_name).is_err());
        }
    }
}
