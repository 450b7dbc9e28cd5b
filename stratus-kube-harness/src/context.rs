use std::future::Future;

use log::info;

use crate::cleanup::Finalizers;
use crate::error::HarnessResult;

/// One integration test: its name, the namespace it owns and its cleanups
#[derive(Debug)]
pub struct TestContext {
    pub name: String,
    pub namespace: String,
    finalizers: Finalizers,
}

impl TestContext {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let namespace = namespace_for(&name);
        Self {
            name,
            namespace,
            finalizers: Finalizers::new(),
        }
    }

    pub fn add_finalizer<F>(&mut self, name: impl Into<String>, task: F)
    where
        F: Future<Output = HarnessResult<()>> + Send + 'static,
    {
        self.finalizers.add(name, task);
    }

    pub fn finalizers(&self) -> &Finalizers {
        &self.finalizers
    }

    pub async fn teardown(self) -> HarnessResult<()> {
        info!(
            "Tearing down test {} ({} finalizer(s))",
            self.name,
            self.finalizers.len()
        );
        self.finalizers.run().await
    }
}

/// Derive a DNS-1123 label from a test name
pub fn namespace_for(test_name: &str) -> String {
    let mut label = String::with_capacity(test_name.len());
    for c in test_name.chars() {
        if c.is_ascii_alphanumeric() {
            label.push(c.to_ascii_lowercase());
        } else if !label.ends_with('-') {
            label.push('-');
        }
    }
    label.truncate(63);
    let label = label.trim_matches('-');
    if label.is_empty() {
        "stratus-test".to_string()
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_namespace_for() {
        assert_eq!(namespace_for("TestDeploymentReady"), "testdeploymentready");
        assert_eq!(namespace_for("eks::cluster_ready"), "eks-cluster-ready");
        assert_eq!(namespace_for("__"), "stratus-test");
        assert_eq!(namespace_for(&"a".repeat(80)).len(), 63);
    }

    #[tokio::test]
    async fn test_teardown_runs_finalizers() {
        let ran = Arc::new(AtomicBool::new(false));
        let mut ctx = TestContext::new("teardown");
        assert_eq!(ctx.namespace, "teardown");

        let flag = Arc::clone(&ran);
        ctx.add_finalizer("flag", async move {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        });
        assert_eq!(ctx.finalizers().len(), 1);

        ctx.teardown().await.unwrap();
        assert!(ran.load(Ordering::SeqCst));
    }
}
