use crate::from_env_var;
use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Which Lemmy listing to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Comments,
    Posts,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Resource::Comments => "comments",
            Resource::Posts => "posts",
        })
    }
}

from_env_var!(
    /// The listing to stream
    let name = StreamResource;
    let default: Resource = Resource::Comments;
    let (env_var, allowed_values) = ("STREAM_RESOURCE", "`comments` or `posts`".to_string());
    let from_str = |s| match s.to_lowercase().as_str() {
        "comments" | "comment" => Some(Resource::Comments),
        "posts" | "post" => Some(Resource::Posts),
        _ => None,
    };
);
from_env_var!(
    /// Restrict the listing to one community, by id
    let name = CommunityId;
    let default: Option<i64> = None;
    let (env_var, allowed_values) = ("COMMUNITY_ID", "a positive integer".to_string());
    let from_str = |s| s.parse().ok().filter(|id: &i64| *id > 0).map(Some);
);
from_env_var!(
    /// Restrict the listing to one community, by name
    let name = CommunityName;
    let default: Option<String> = None;
    let (env_var, allowed_values) = ("COMMUNITY_NAME", "any string".to_string());
    let from_str = |s| Some(Some(s.to_string()));
);
from_env_var!(
    /// How deep comment threads are fetched
    let name = MaxDepth;
    let default: u32 = 8;
    let (env_var, allowed_values) = ("MAX_DEPTH", "a positive integer".to_string());
    let from_str = |s| s.parse().ok().filter(|depth: &u32| *depth > 0);
);
from_env_var!(
    /// How many ids the stream remembers
    let name = DedupCapacity;
    let default: NonZeroUsize = NonZeroUsize::new(600).expect("hardcoded");
    let (env_var, allowed_values) = ("DEDUP_CAPACITY", "a positive integer".to_string());
    let from_str = |s| s.parse().ok();
);
from_env_var!(
    /// Longest idle wait between polls, in seconds
    let name = BackoffMax;
    let default: u32 = 16;
    let (env_var, allowed_values) = ("BACKOFF_MAX", "a positive integer".to_string());
    let from_str = |s| s.parse().ok().filter(|max: &u32| *max >= 1);
);
from_env_var!(
    /// Whether items that exist when the stream starts are suppressed
    let name = SkipExisting;
    let default: bool = true;
    let (env_var, allowed_values) = ("SKIP_EXISTING", "`true` or `false`".to_string());
    let from_str = |s| match s.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    };
);
from_env_var!(
    /// How much longer each consecutive failed poll waits
    let name = CooldownStep;
    let default: Duration = Duration::from_secs(30);
    let (env_var, allowed_values) = ("COOLDOWN_STEP", "a number of seconds".to_string());
    let from_str = |s| s.parse().ok().map(Duration::from_secs);
);
from_env_var!(
    /// The failure cooldown wraps back to zero once it reaches this
    let name = CooldownMax;
    let default: Duration = Duration::from_secs(360);
    let (env_var, allowed_values) = ("COOLDOWN_MAX", "a number of seconds".to_string());
    let from_str = |s| s.parse().ok().map(Duration::from_secs);
);
