//! Cleanup queue run at the end of a test

use std::future::Future;

use futures::future::{self, BoxFuture};
use log::{debug, warn};

use crate::error::{HarnessError, HarnessResult};

struct Finalizer {
    name: String,
    task: BoxFuture<'static, HarnessResult<()>>,
}

/// Registered cleanup futures, launched newest first on `run`
#[derive(Default)]
pub struct Finalizers {
    queue: Vec<Finalizer>,
}

impl Finalizers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F>(&mut self, name: impl Into<String>, task: F)
    where
        F: Future<Output = HarnessResult<()>> + Send + 'static,
    {
        self.queue.push(Finalizer {
            name: name.into(),
            task: Box::pin(task),
        });
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Names in launch order (reverse of registration)
    pub fn names(&self) -> Vec<&str> {
        self.queue.iter().rev().map(|f| f.name.as_str()).collect()
    }

    /// Launch every finalizer concurrently, newest first, and wait for all.
    ///
    /// Returns the first failure in launch order.
    pub async fn run(self) -> HarnessResult<()> {
        let (names, tasks): (Vec<_>, Vec<_>) = self
            .queue
            .into_iter()
            .rev()
            .map(|f| (f.name, f.task))
            .unzip();

        debug!("Running {} finalizer(s)", names.len());
        let results = future::join_all(tasks).await;

        let mut first = None;
        for (name, result) in names.into_iter().zip(results) {
            if let Err(e) = result {
                warn!("Finalizer '{}' failed: {}", name, e);
                if first.is_none() {
                    first = Some(HarnessError::Finalizer {
                        name,
                        source: Box::new(e),
                    });
                }
            }
        }

        match first {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Finalizers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Finalizers")
            .field("queue", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording(log: &Arc<Mutex<Vec<String>>>, name: &str, fail: bool) -> impl Future<Output = HarnessResult<()>> + Send + 'static {
        let log = Arc::clone(log);
        let name = name.to_string();
        async move {
            log.lock().unwrap().push(name.clone());
            if fail {
                Err(HarnessError::manifest(format!("{}.yaml", name), "cleanup failed"))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_run_empty() {
        Finalizers::new().run().await.unwrap();
    }

    #[tokio::test]
    async fn test_launch_order_is_lifo() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut finalizers = Finalizers::new();
        finalizers.add("namespace", recording(&log, "namespace", false));
        finalizers.add("deployment", recording(&log, "deployment", false));
        finalizers.add("service", recording(&log, "service", false));

        assert_eq!(finalizers.names(), vec!["service", "deployment", "namespace"]);
        finalizers.run().await.unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec!["service", "deployment", "namespace"]
        );
    }

    #[tokio::test]
    async fn test_first_error_by_lifo_position() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut finalizers = Finalizers::new();
        finalizers.add("first", recording(&log, "first", true));
        finalizers.add("second", recording(&log, "second", true));
        finalizers.add("third", recording(&log, "third", false));

        let err = finalizers.run().await.unwrap_err();
        match err {
            HarnessError::Finalizer { name, .. } => assert_eq!(name, "second"),
            other => panic!("expected finalizer error, got {:?}", other),
        }
        // Every finalizer still ran
        assert_eq!(log.lock().unwrap().len(), 3);
    }
}
