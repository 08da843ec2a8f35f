//! Turn Lemmy's listings into streams of new items, and keep those streams running.

pub mod stream;
mod supervisor;

pub use stream::{BackoffCounter, DedupWindow, Engine};
pub use supervisor::{Cooldown, Supervisor};
