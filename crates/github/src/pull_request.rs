//! Pull request parameters.

use mcp::ToolArguments;
use serde_json::Value;

/// Base branch used when none is given.
pub const DEFAULT_BASE: &str = "main";

/// Parameters for opening a pull request.
///
/// Maps one-to-one onto the remote tool's argument schema; no field is
/// validated or transformed locally.
#[derive(Debug, Clone)]
pub struct PullRequest {
    /// Repository identifier, e.g. `owner/repo`.
    pub repository: String,
    pub title: String,
    pub body: String,
    /// Branch the changes live on.
    pub head: String,
    /// Branch to merge into. Defaults to [`DEFAULT_BASE`].
    pub base: String,
}

impl PullRequest {
    /// New pull request from `head` into the default base branch.
    pub fn new(
        repository: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        head: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            title: title.into(),
            body: body.into(),
            head: head.into(),
            base: DEFAULT_BASE.to_string(),
        }
    }

    /// Target a different base branch.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// The argument mapping sent to the remote tool, all five fields verbatim.
    pub(crate) fn into_arguments(self) -> ToolArguments {
        let mut arguments = ToolArguments::new();
        arguments.insert("repository".to_string(), Value::String(self.repository));
        arguments.insert("title".to_string(), Value::String(self.title));
        arguments.insert("body".to_string(), Value::String(self.body));
        arguments.insert("head".to_string(), Value::String(self.head));
        arguments.insert("base".to_string(), Value::String(self.base));
        arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_defaults_to_main() {
        let pr = PullRequest::new("owner/repo", "t", "b", "feature-x");
        assert_eq!(pr.base, "main");
    }

    #[test]
    fn with_base_overrides_default() {
        let pr = PullRequest::new("owner/repo", "t", "b", "feature-x").with_base("develop");
        assert_eq!(pr.base, "develop");
    }

    #[test]
    fn arguments_carry_all_fields_verbatim() {
        let pr = PullRequest::new(
            "owner/repo",
            "  spaced title  ",
            "line one\nline two",
            "feature/nested-branch",
        );
        let arguments = pr.into_arguments();

        assert_eq!(arguments.len(), 5);
        assert_eq!(arguments["repository"], "owner/repo");
        assert_eq!(arguments["title"], "  spaced title  ");
        assert_eq!(arguments["body"], "line one\nline two");
        assert_eq!(arguments["head"], "feature/nested-branch");
        assert_eq!(arguments["base"], "main");
    }
}
