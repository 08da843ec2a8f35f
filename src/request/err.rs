use reqwest::StatusCode;
use std::fmt;

/// Why a call to the Lemmy API failed.
#[derive(Debug)]
pub enum Error {
    /// No credential could be obtained
    Auth(AuthErr),
    /// The API answered with a non-2xx status
    Request { status: u16, reason: String },
    /// No response was received
    Transport(reqwest::Error),
    /// The body was not the JSON we expected
    Malformed(serde_json::Error),
}

/// Why logging in failed.
#[derive(Debug)]
pub enum AuthErr {
    MissingToken,
    Rejected(StatusCode),
    Transport(reqwest::Error),
    Malformed(serde_json::Error),
}

impl Error {
    pub(crate) fn from_status(status: StatusCode) -> Self {
        Self::Request {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
        }
    }

    /// The HTTP status the API answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Auth(AuthErr::Rejected(status)) => Some(status.as_u16()),
            _ => None,
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for AuthErr {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use Error::*;
        match self {
            Auth(inner) => write!(f, "could not log in to Lemmy: {}", inner),
            Request { status, reason } => {
                write!(f, "request failed with status {}: {}", status, reason)
            }
            Transport(inner) => write!(f, "could not reach Lemmy: {}", inner),
            Malformed(inner) => write!(f, "Lemmy sent an unexpected response: {}", inner),
        }
    }
}

impl fmt::Display for AuthErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use AuthErr::*;
        let msg = match self {
            MissingToken => "the login response did not contain a `jwt`".to_string(),
            Rejected(status) => format!("the login request was rejected with status {}", status),
            Transport(inner) => format!("{}", inner),
            Malformed(inner) => format!("the login response was not JSON: {}", inner),
        };
        write!(f, "{}", msg)
    }
}

impl From<AuthErr> for Error {
    fn from(e: AuthErr) -> Self {
        Self::Auth(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e)
    }
}
