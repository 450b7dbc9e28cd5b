//! Harness configuration and kubeconfig discovery

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Explicit kubeconfig path; takes precedence over `KUBECONFIG`
    pub kubeconfig: Option<PathBuf>,
    /// Context to use (None = current context)
    pub context: Option<String>,
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            kubeconfig: None,
            context: None,
            poll_interval: Duration::from_secs(2),
            timeout: Duration::from_secs(300),
        }
    }
}

impl HarnessConfig {
    pub fn with_kubeconfig(mut self, path: impl Into<PathBuf>) -> Self {
        self.kubeconfig = Some(path.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Kubeconfig path for this process, reading `KUBECONFIG` and `HOME`
    pub fn kubeconfig_path(&self) -> Option<PathBuf> {
        let env = std::env::var_os(KUBECONFIG_ENV);
        let home = std::env::var_os("HOME").map(PathBuf::from);
        resolve_kubeconfig_path(self.kubeconfig.as_deref(), env.as_deref(), home.as_deref())
    }
}

/// Pick the kubeconfig file: explicit path, then the first entry of
/// `KUBECONFIG`, then `$HOME/.kube/config`.
pub fn resolve_kubeconfig_path(
    explicit: Option<&Path>,
    kubeconfig_env: Option<&OsStr>,
    home: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(first) = kubeconfig_env
        .into_iter()
        .flat_map(std::env::split_paths)
        .find(|p| !p.as_os_str().is_empty())
    {
        return Some(first);
    }

    home.map(|home| home.join(".kube").join("config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert!(config.kubeconfig.is_none());
        assert!(config.context.is_none());
    }

    #[test]
    fn test_explicit_path_wins() {
        let resolved = resolve_kubeconfig_path(
            Some(Path::new("/tmp/explicit")),
            Some(OsStr::new("/tmp/from-env")),
            Some(Path::new("/home/dev")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/tmp/explicit")));
    }

    #[test]
    fn test_env_before_home() {
        let resolved = resolve_kubeconfig_path(
            None,
            Some(OsStr::new("/tmp/from-env")),
            Some(Path::new("/home/dev")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/tmp/from-env")));
    }

    #[test]
    fn test_first_env_entry_wins() {
        let joined = std::env::join_paths(["/tmp/first", "/tmp/second"]).unwrap();
        let resolved = resolve_kubeconfig_path(None, Some(joined.as_os_str()), None);
        assert_eq!(resolved, Some(PathBuf::from("/tmp/first")));
    }

    #[test]
    fn test_empty_env_falls_back_to_home() {
        let resolved = resolve_kubeconfig_path(None, Some(OsStr::new("")), Some(Path::new("/home/dev")));
        assert_eq!(resolved, Some(PathBuf::from("/home/dev/.kube/config")));
    }

    #[test]
    fn test_nothing_to_resolve() {
        assert_eq!(resolve_kubeconfig_path(None, None, None), None);
    }

    #[test]
    fn test_builders() {
        let config = HarnessConfig::default()
            .with_kubeconfig("/tmp/kc")
            .with_context("kind-stratus")
            .with_poll_interval(Duration::from_millis(100))
            .with_timeout(Duration::from_secs(10));
        assert_eq!(config.kubeconfig_path(), Some(PathBuf::from("/tmp/kc")));
        assert_eq!(config.context.as_deref(), Some("kind-stratus"));
        assert_eq!(config.poll_interval, Duration::from_millis(100));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
