use camino::Utf8PathBuf;

/// Failure to populate an [`crate::IssueRegistry`] from an external source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read issue kinds file '{path}'")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("issue kinds source is not valid JSON")]
    Parse(#[from] serde_json::Error),

    #[error("issue kinds source does not contain an 'issue_kinds' array")]
    MissingIssueKinds,
}
