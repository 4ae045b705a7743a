//! Accumulated validation diagnostics.
//!
//! Every validation layer pushes into a [`Diagnostics`] list instead of
//! returning early, so one run reports all problems in a theme.

use std::fmt;

/// Category of a validation problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueKind {
    /// Missing required field or wrong JSON type.
    Structural,
    /// Malformed identifier, version, or hex color.
    Format,
    /// A default or reference that names no declared entry.
    Referential,
    /// Mode mismatch, incomplete accent coverage, or duplicate id/name.
    Consistency,
    /// Theme file unreadable or not valid JSON.
    Parse,
}

/// One human-readable validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered list of issues collected for one theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    issues: Vec<Issue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn structural(&mut self, message: impl Into<String>) {
        self.push(Issue::new(IssueKind::Structural, message));
    }

    pub fn format(&mut self, message: impl Into<String>) {
        self.push(Issue::new(IssueKind::Format, message));
    }

    pub fn referential(&mut self, message: impl Into<String>) {
        self.push(Issue::new(IssueKind::Referential, message));
    }

    pub fn consistency(&mut self, message: impl Into<String>) {
        self.push(Issue::new(IssueKind::Consistency, message));
    }

    pub fn parse(&mut self, message: impl Into<String>) {
        self.push(Issue::new(IssueKind::Parse, message));
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Count issues of one category.
    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

impl Extend<Issue> for Diagnostics {
    fn extend<T: IntoIterator<Item = Issue>>(&mut self, iter: T) {
        self.issues.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_tag_issue_kind() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.structural("a");
        diagnostics.format("b");
        diagnostics.format("c");
        diagnostics.consistency("d");

        assert_eq!(diagnostics.len(), 4);
        assert_eq!(diagnostics.count(IssueKind::Format), 2);
        assert_eq!(diagnostics.count(IssueKind::Parse), 0);
        assert_eq!(diagnostics.issues()[3].to_string(), "d");
    }
}
