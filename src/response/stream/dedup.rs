use crate::event::Id;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::Instant;

/// The ids registered most recently, with when each was first seen.
///
/// Lookups never refresh an entry, so once the window is full the oldest registration is the
/// one evicted.  An evicted id counts as unseen again.
#[derive(Debug)]
pub struct DedupWindow {
    seen: LruCache<Id, Instant>,
}

impl DedupWindow {
    pub const DEFAULT_CAPACITY: usize = 600;

    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            seen: LruCache::new(capacity),
        }
    }

    pub fn contains(&self, id: Id) -> bool {
        self.seen.contains(&id)
    }

    pub fn insert(&mut self, id: Id) {
        if let Some((evicted, first_seen)) = self.seen.push(id, Instant::now()) {
            if evicted != id {
                log::trace!(
                    "Forgetting id {} (first seen {:?} ago)",
                    evicted,
                    first_seen.elapsed()
                );
            }
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.seen.cap().get()
    }
}

impl Default for DedupWindow {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(Self::DEFAULT_CAPACITY).expect("hardcoded"))
    }
}
