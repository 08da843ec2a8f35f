//! Turns the newest page of a Lemmy listing into a stream of items not seen before.
//!
//! Each poll reads the first page of the listing (newest first), walks it oldest-first, and
//! queues every item whose id is not in the [`DedupWindow`].  A poll that finds nothing new
//! sleeps for the [`BackoffCounter`]'s next wait; a poll that finds something resets it.
//!
//! Only the first page is ever read.  If more items arrive between two polls than fit on one
//! page, the oldest of them are never seen and no error is raised: the loss is bounded by the
//! page size and the polling interval.
mod backoff;
mod dedup;

pub use backoff::BackoffCounter;
pub use dedup::DedupWindow;

use crate::config;
use crate::event::{self, StreamItem};
use crate::request::{self, Api, ListQuery};

use futures::stream::{self, Stream};
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, request::Error>;

/// Polls one listing and yields each new item once, oldest first.
#[derive(Debug)]
pub struct Engine<A, T> {
    api: A,
    query: ListQuery,
    seen: DedupWindow,
    backoff: BackoffCounter,
    skip_backlog: bool,
    ready: VecDeque<T>,
}

impl<A: Api, T: StreamItem> Engine<A, T> {
    /// With `skip_existing`, the items on the first page are remembered but never yielded.
    pub fn new(
        api: A,
        query: ListQuery,
        seen: DedupWindow,
        backoff: BackoffCounter,
        skip_existing: bool,
    ) -> Self {
        Self {
            api,
            query,
            seen,
            backoff,
            skip_backlog: skip_existing,
            ready: VecDeque::new(),
        }
    }

    pub fn from_cfg(api: A, cfg: &config::Stream) -> Self {
        Self::new(
            api,
            ListQuery::from(cfg),
            DedupWindow::new(*cfg.dedup_capacity),
            BackoffCounter::new(*cfg.backoff_max),
            *cfg.skip_existing,
        )
    }

    /// Wait for the next new item.
    ///
    /// A failed poll returns its error and leaves the engine exactly as it was, so calling
    /// this again picks the stream back up.  Dropping the returned future cancels the pending
    /// request or wait without losing anything already registered.
    pub async fn next_item(&mut self) -> Result<T> {
        loop {
            if let Some(item) = self.ready.pop_front() {
                return Ok(item);
            }
            self.poll_once().await?;
        }
    }

    /// The engine as an endless stream.  Dropping the stream drops the engine and its API
    /// client with it.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        stream::unfold(self, |mut engine| async move {
            let item = engine.next_item().await;
            Some((item, engine))
        })
    }

    /// Hand back the API client, e.g. to close it.
    pub fn into_api(self) -> A {
        self.api
    }

    async fn poll_once(&mut self) -> Result<()> {
        let body = self
            .api
            .get(T::LIST_ENDPOINT, &self.query.to_params())
            .await?;
        let page = event::parse_page::<T>(body)?;

        if self.register(page) > 0 {
            self.backoff.reset();
        } else {
            let wait = self.backoff.next_wait();
            log::debug!(
                "Nothing new on `{}`; polling again in {:.2}s",
                T::LIST_ENDPOINT,
                wait.as_secs_f64()
            );
            tokio::time::sleep(wait).await;
        }
        Ok(())
    }

    /// Remember every unseen item of a newest-first page and queue them oldest-first.
    /// Returns how many were new.
    fn register(&mut self, page: Vec<T>) -> usize {
        let page_len = page.len();
        let mut new_items = 0;
        for item in page.into_iter().rev() {
            let id = item.id();
            if self.seen.contains(id) {
                continue;
            }
            self.seen.insert(id);
            new_items += 1;
            if !self.skip_backlog {
                self.ready.push_back(item);
            }
        }

        if self.skip_backlog {
            log::info!(
                "Skipping {} existing items on `{}`",
                new_items,
                T::LIST_ENDPOINT
            );
            self.skip_backlog = false;
        } else {
            log::debug!(
                "{} of {} items on `{}` are new",
                new_items,
                page_len,
                T::LIST_ENDPOINT
            );
        }
        new_items
    }
}
