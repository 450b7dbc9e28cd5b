use std::path::PathBuf;
use std::time::Duration;

use kube::config::KubeconfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("No kubeconfig found: set KUBECONFIG or HOME, or pass a path")]
    NoKubeconfig,

    #[error("Failed to load kubeconfig {path}: {source}")]
    Kubeconfig {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },

    #[error("{context}: {source}")]
    Kube {
        context: String,
        #[source]
        source: kube::Error,
    },

    #[error("Invalid manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error("Timed out after {elapsed:?} waiting for {what}")]
    Timeout { what: String, elapsed: Duration },

    #[error("Finalizer '{name}' failed: {source}")]
    Finalizer {
        name: String,
        #[source]
        source: Box<HarnessError>,
    },
}

pub type HarnessResult<T> = Result<T, HarnessError>;

impl HarnessError {
    pub fn kube(context: impl Into<String>, source: kube::Error) -> Self {
        Self::Kube {
            context: context.into(),
            source,
        }
    }

    pub fn manifest(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Manifest {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// True when the API server answered 404 for the object
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Kube { source, .. } => is_not_found(source),
            Self::Finalizer { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

pub fn is_not_found(error: &kube::Error) -> bool {
    matches!(error, kube::Error::Api(ae) if ae.code == 404)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use kube::core::ErrorResponse;

    pub(crate) fn api_error(code: u16, reason: &str) -> kube::Error {
        kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: format!("{} error", reason),
            reason: reason.to_string(),
            code,
        })
    }

    #[test]
    fn test_is_not_found() {
        let err = HarnessError::kube("Failed to get Deployment web", api_error(404, "NotFound"));
        assert!(err.is_not_found());

        let err = HarnessError::kube("Failed to get Deployment web", api_error(409, "Conflict"));
        assert!(!err.is_not_found());

        let err = HarnessError::Timeout {
            what: "Deployment web".to_string(),
            elapsed: Duration::from_secs(1),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_display() {
        let err = HarnessError::Timeout {
            what: "Namespace demo to be deleted".to_string(),
            elapsed: Duration::from_secs(5),
        };
        assert_eq!(
            err.to_string(),
            "Timed out after 5s waiting for Namespace demo to be deleted"
        );

        let err = HarnessError::manifest("deploy.yaml", "missing field `metadata`");
        assert_eq!(
            err.to_string(),
            "Invalid manifest deploy.yaml: missing field `metadata`"
        );
    }
}
