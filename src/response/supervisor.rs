//! Keeps an [`Engine`] running through failed polls.
use super::stream::Engine;
use crate::config;
use crate::event::StreamItem;
use crate::request::Api;

use std::future::Future;
use std::time::Duration;

/// The wait after a failed poll: 0, `step`, 2 × `step`, … taken modulo `max`.
///
/// Each supervisor owns its cooldown; a successful delivery starts it over.
#[derive(Debug, Clone, PartialEq)]
pub struct Cooldown {
    current: Duration,
    step: Duration,
    max: Duration,
}

impl Cooldown {
    pub fn new(step: Duration, max: Duration) -> Self {
        Self {
            current: Duration::ZERO,
            step,
            max,
        }
    }

    pub fn from_cfg(cfg: &config::Stream) -> Self {
        Self::new(*cfg.cooldown_step, *cfg.cooldown_max)
    }

    pub fn next_wait(&mut self) -> Duration {
        let wait = self.current;
        let next = (self.current + self.step).as_nanos();
        self.current = match self.max.as_nanos() {
            0 => Duration::ZERO,
            max => Duration::from_nanos((next % max) as u64),
        };
        wait
    }

    pub fn reset(&mut self) {
        self.current = Duration::ZERO;
    }
}

/// Delivers an engine's items to a handler, logging failed polls and retrying them after a
/// cooldown.  The engine is re-entered as-is, so nothing it has already seen is delivered twice.
#[derive(Debug)]
pub struct Supervisor<A, T> {
    engine: Engine<A, T>,
    cooldown: Cooldown,
}

impl<A: Api, T: StreamItem> Supervisor<A, T> {
    pub fn new(engine: Engine<A, T>, cooldown: Cooldown) -> Self {
        Self { engine, cooldown }
    }

    /// Hand every new item to `handle` until `shutdown` completes, then give back the API
    /// client.
    ///
    /// Shutdown interrupts a pending poll or cooldown, never a running handler.
    pub async fn run<H, Fut, S>(mut self, mut handle: H, shutdown: S) -> A
    where
        H: FnMut(T) -> Fut,
        Fut: Future<Output = ()>,
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            let item = tokio::select! {
                biased;
                _ = &mut shutdown => break,
                item = self.next_delivery() => item,
            };
            handle(item).await;
        }
        log::info!("Stopped streaming `{}`", T::LIST_ENDPOINT);
        self.engine.into_api()
    }

    async fn next_delivery(&mut self) -> T {
        loop {
            match self.engine.next_item().await {
                Ok(item) => {
                    self.cooldown.reset();
                    return item;
                }
                Err(e) => {
                    log::error!("Polling `{}` failed: {}", T::LIST_ENDPOINT, e);
                    let wait = self.cooldown.next_wait();
                    log::info!("Cooldown: {} seconds", wait.as_secs());
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::CommentView;
    use crate::request::mock_api::{comment_page, MockApi};
    use crate::request::{Error, ListQuery};
    use crate::response::{BackoffCounter, DedupWindow};
    use tokio::sync::oneshot;
    use tokio::time::Instant;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn cooldown_steps_and_wraps() {
        let mut cooldown = Cooldown::new(secs(30), secs(360));
        let waits: Vec<u64> = (0..14).map(|_| cooldown.next_wait().as_secs()).collect();
        assert_eq!(
            waits,
            vec![0, 30, 60, 90, 120, 150, 180, 210, 240, 270, 300, 330, 0, 30]
        );
    }

    #[test]
    fn uneven_step_wraps_past_zero() {
        let mut cooldown = Cooldown::new(secs(50), secs(360));
        let waits: Vec<u64> = (0..10).map(|_| cooldown.next_wait().as_secs()).collect();
        assert_eq!(waits, vec![0, 50, 100, 150, 200, 250, 300, 350, 40, 90]);
    }

    #[test]
    fn cooldown_reset_starts_over() {
        let mut cooldown = Cooldown::new(secs(30), secs(360));
        cooldown.next_wait();
        cooldown.next_wait();
        cooldown.reset();
        assert_eq!(cooldown.next_wait(), Duration::ZERO);
    }

    #[test]
    fn zero_max_never_waits() {
        let mut cooldown = Cooldown::new(secs(30), Duration::ZERO);
        assert_eq!(cooldown.next_wait(), Duration::ZERO);
        assert_eq!(cooldown.next_wait(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn resumes_the_same_engine_after_failures() {
        let bad_gateway = || Error::Request {
            status: 502,
            reason: "Bad Gateway".to_string(),
        };
        let api = MockApi::new()
            .reply(Ok(comment_page(&[2, 1])))
            .reply(Err(bad_gateway()))
            .reply(Err(bad_gateway()))
            .reply(Ok(comment_page(&[3, 2, 1])));
        let engine: Engine<_, CommentView> = Engine::new(
            api,
            ListQuery::newest(8),
            DedupWindow::default(),
            BackoffCounter::new(16),
            false,
        );
        let supervisor = Supervisor::new(engine, Cooldown::new(secs(30), secs(360)));

        let (done_tx, done_rx) = oneshot::channel();
        let mut done_tx = Some(done_tx);
        let mut received = Vec::new();
        let start = Instant::now();
        let api = supervisor
            .run(
                |view: CommentView| {
                    received.push(view.comment.id.0);
                    if received.len() == 3 {
                        if let Some(tx) = done_tx.take() {
                            let _ = tx.send(());
                        }
                    }
                    futures::future::ready(())
                },
                async {
                    done_rx.await.ok();
                },
            )
            .await;

        assert_eq!(received, vec![1, 2, 3]);
        // two failures: a 0s and then a 30s cooldown
        assert!(start.elapsed() >= secs(30));
        assert!(start.elapsed() < secs(31));
        assert_eq!(api.gets().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_interrupts_an_idle_wait() {
        let engine: Engine<_, CommentView> = Engine::new(
            MockApi::new(),
            ListQuery::newest(8),
            DedupWindow::default(),
            BackoffCounter::new(16),
            false,
        );
        let supervisor = Supervisor::new(engine, Cooldown::new(secs(30), secs(360)));

        let start = Instant::now();
        let shutdown = tokio::time::sleep(secs(5));
        let api = supervisor
            .run(|_: CommentView| futures::future::ready(()), shutdown)
            .await;

        assert!(start.elapsed() < secs(6));
        assert!(!api.gets().is_empty());
    }
}
