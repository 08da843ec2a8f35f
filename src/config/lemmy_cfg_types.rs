use crate::from_env_var;
use std::fmt;
use std::time::Duration;
use url::Url;

from_env_var!(
    /// The base URL of the Lemmy instance
    let name = LemmyUrl;
    let default: Url = Url::parse("http://localhost:8536").expect("hardcoded");
    let (env_var, allowed_values) = ("LEMMY_URL", "an http(s) URL (e.g., https://lemmy.ml)".to_string());
    let from_str = |s| Url::parse(s).ok().filter(|url| matches!(url.scheme(), "http" | "https"));
);
from_env_var!(
    /// The username or email the bot logs in with
    let name = LemmyUser;
    let default: String = String::new();
    let (env_var, allowed_values) = ("LEMMY_USERNAME", "any string".to_string());
    let from_str = |s| Some(s.to_string());
);
from_env_var!(
    /// How long a single request may take before it is abandoned
    let name = RequestTimeout;
    let default: Option<Duration> = Some(Duration::from_secs(30));
    let (env_var, allowed_values) = ("LEMMY_TIMEOUT", "a number of seconds (0 for no timeout)".to_string());
    let from_str = |s| s.parse().ok().map(|secs| match secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    });
);

/// The password the bot logs in with.  Never printed.
#[derive(Clone, Default)]
pub struct LemmyPass(String);

impl LemmyPass {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub(crate) fn maybe_update(self, var: Option<&String>) -> Self {
        match var {
            Some(password) => Self(password.clone()),
            None => self,
        }
    }
}

impl fmt::Debug for LemmyPass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0.is_empty() {
            true => write!(f, "None"),
            false => write!(f, "[redacted]"),
        }
    }
}
