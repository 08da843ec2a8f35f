//! Streaming client for Lemmy
//!
//!
//! Lemmy has no push API for new content: a bot that wants to react to every new comment (or
//! post) has to keep asking for the newest page of a listing and work out which items it has
//! not seen yet.  This crate does that asking for you and turns a listing into a stream of new
//! items, oldest first, each delivered once.
//!
//! # Notes on data flow
//! * **Config → Client**:
//! Settings come from environmental variables (optionally merged with a `.env` file).  The
//! `Client` is built from the Lemmy settings and logs in lazily, the first time a call needs a
//! token.  The token is kept and reused until Lemmy rejects it.
//!
//! * **Client → Engine**:
//! The `Engine` fetches the newest page of its listing through the `Api` trait, parses it into
//! typed items, and filters out ids its `DedupWindow` remembers.  New items are queued oldest
//! first.  When a poll turns up nothing new, the engine waits for its `BackoffCounter` before
//! polling again; the wait doubles on every idle poll and drops back to one second as soon as
//! something new shows up.
//!
//! * **Engine → Supervisor → handler**:
//! The `Supervisor` hands each item to the caller's handler.  A failed poll is logged, followed
//! by a cooldown, and the same engine is polled again, so the dedup memory survives the
//! failure and nothing is delivered twice.

pub mod config;
pub mod err;
pub mod event;
pub mod request;
pub mod response;
