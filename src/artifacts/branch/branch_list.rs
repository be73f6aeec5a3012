use crate::artifacts::branch::CURRENT_BRANCH_MARKER;

/// Branches reported by `git branch --list`, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BranchList {
    branches: Vec<String>,
    current: Option<String>,
}

impl BranchList {
    /// Each line is trimmed, the current-branch marker is dropped and empty
    /// lines are skipped.
    pub fn parse(raw: &str) -> Self {
        let mut branches = Vec::new();
        let mut current = None;

        for line in raw.lines() {
            let line = line.trim();
            let (is_current, name) = match line.strip_prefix(CURRENT_BRANCH_MARKER) {
                Some(rest) => (true, rest.trim()),
                None => (false, line),
            };

            if name.is_empty() {
                continue;
            }

            if is_current {
                current = Some(name.to_string());
            }
            branches.push(name.to_string());
        }

        BranchList { branches, current }
    }

    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.branches.iter().any(|branch| branch == name)
    }
}
