use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use super::shutdown::Shutdown;
use crate::error::{Result, TopicError};

/// Global token bucket with a burst of one: request starts are spaced at
/// least `interval` apart no matter how many tasks are waiting.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    next: Mutex<Instant>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: Mutex::new(Instant::now()),
        }
    }

    /// Claims the next free slot. The lock is released before any waiting.
    fn reserve(&self) -> Instant {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let slot = (*next).max(Instant::now());
        *next = slot + self.interval;
        slot
    }

    /// Waits for a slot, giving up early if `shutdown` fires.
    pub async fn acquire(&self, shutdown: &mut Shutdown) -> Result<()> {
        if shutdown.is_cancelled() {
            return Err(TopicError::Cancelled);
        }
        let slot = self.reserve();
        tokio::select! {
            _ = tokio::time::sleep_until(slot) => Ok(()),
            _ = shutdown.cancelled() => Err(TopicError::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_first_acquire_is_immediate() {
        let limiter = RateLimiter::new(Duration::from_secs(60));
        let mut shutdown = Shutdown::never();
        tokio::time::timeout(Duration::from_secs(1), limiter.acquire(&mut shutdown))
            .await
            .expect("burst slot should be free")
            .unwrap();
    }

    #[tokio::test]
    async fn test_acquires_are_spaced_by_interval() {
        let limiter = Arc::new(RateLimiter::new(Duration::from_millis(40)));
        let start = Instant::now();

        let mut handles = Vec::new();
        for _ in 0..4 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move {
                let mut shutdown = Shutdown::never();
                limiter.acquire(&mut shutdown).await.unwrap();
                Instant::now()
            }));
        }

        let mut finished = Vec::new();
        for handle in handles {
            finished.push(handle.await.unwrap());
        }
        finished.sort();

        // four slots: one burst plus three intervals
        assert!(finished[3] - start >= Duration::from_millis(120));
    }

    #[tokio::test]
    async fn test_wait_is_cancellable() {
        let limiter = RateLimiter::new(Duration::from_secs(60));
        let (tx, mut shutdown) = Shutdown::new();
        limiter.acquire(&mut shutdown).await.unwrap();

        let waiter = tokio::spawn(async move { limiter.acquire(&mut shutdown).await });
        tx.send(true).unwrap();

        let res = tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("cancelled wait should return promptly")
            .unwrap();
        assert!(matches!(res, Err(TopicError::Cancelled)));
    }

    #[tokio::test]
    async fn test_acquire_after_cancel_fails_fast() {
        let limiter = RateLimiter::new(Duration::from_millis(1));
        let (tx, mut shutdown) = Shutdown::new();
        tx.send(true).unwrap();
        assert!(matches!(
            limiter.acquire(&mut shutdown).await,
            Err(TopicError::Cancelled)
        ));
    }
}
