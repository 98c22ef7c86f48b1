use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ClogsError {
    #[error("unable to access the cluster - please verify your kubeconfig and credentials")]
    ClusterAccess(#[source] BoxError),

    #[error("no {kind} matched filter {pattern:?}")]
    NoMatch { kind: &'static str, pattern: String },

    #[error("selection aborted")]
    SelectionAborted,

    #[error("failed to open log stream for {target}")]
    StreamOpen {
        target: String,
        #[source]
        source: BoxError,
    },

    #[error("log stream for {target} failed after {written} bytes")]
    StreamCopy {
        target: String,
        written: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("interactive prompt failed")]
    Terminal(#[from] std::io::Error),

    #[error("interrupted")]
    Interrupted,
}

impl ClogsError {
    pub fn cluster_access<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        ClogsError::ClusterAccess(err.into())
    }

    pub fn no_match(kind: &'static str, pattern: &str) -> Self {
        ClogsError::NoMatch {
            kind,
            pattern: pattern.to_string(),
        }
    }
}
