use std::future::Future;
use std::time::{Duration, Instant};

use log::debug;

use crate::error::{HarnessError, HarnessResult};

/// Run `check` every `interval` until it returns `Ok(true)`.
///
/// `Ok(false)` keeps polling and any `Err` aborts immediately. Once `timeout`
/// has elapsed without success the loop fails with `HarnessError::Timeout`.
pub async fn poll_until<F, Fut>(
    what: &str,
    interval: Duration,
    timeout: Duration,
    mut check: F,
) -> HarnessResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = HarnessResult<bool>>,
{
    let start = Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        if check().await? {
            debug!("{} after {} attempt(s)", what, attempts);
            return Ok(());
        }

        let elapsed = start.elapsed();
        if elapsed >= timeout {
            return Err(HarnessError::Timeout {
                what: what.to_string(),
                elapsed,
            });
        }

        debug!("Waiting for {} (attempt {})", what, attempts);
        tokio::time::sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    const INTERVAL: Duration = Duration::from_millis(5);

    #[tokio::test]
    async fn test_immediate_success() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        poll_until("ready", INTERVAL, Duration::from_secs(1), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        })
        .await
        .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_polls_until_true() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        poll_until("third call", INTERVAL, Duration::from_secs(5), move || async move {
            Ok(calls.fetch_add(1, Ordering::SeqCst) + 1 >= 3)
        })
        .await
        .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_error_aborts() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let err = poll_until("broken", INTERVAL, Duration::from_secs(5), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(HarnessError::manifest("x.yaml", "bad"))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, HarnessError::Manifest { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_timeout() {
        let err = poll_until("never", INTERVAL, Duration::from_millis(30), || async {
            Ok(false)
        })
        .await
        .unwrap_err();
        match err {
            HarnessError::Timeout { what, elapsed } => {
                assert_eq!(what, "never");
                assert!(elapsed >= Duration::from_millis(30));
            }
            other => panic!("expected timeout, got {:?}", other),
        }
    }
}
