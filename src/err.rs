use crate::request;
use std::fmt;

/// Errors that stop `lemmy_stream` before (or instead of) streaming.
pub enum FatalErr {
    Logger(log::SetLoggerError),
    Dotenv(dotenv::Error),
    StdIo(std::io::Error),
    Client(request::Error),
    // config errs
    ConfigErr(String),
}

impl FatalErr {
    pub fn config(
        var: impl fmt::Display,
        value: impl fmt::Display,
        allowed_vals: impl fmt::Display,
    ) -> Self {
        Self::ConfigErr(format!(
            "{0} is set to `{1}`, which is invalid.\n{3:7}{0} must be {2}.",
            var, value, allowed_vals, ""
        ))
    }
}

impl std::error::Error for FatalErr {}
impl fmt::Debug for FatalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl fmt::Display for FatalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use FatalErr::*;
        write!(
            f,
            "{}",
            match self {
                Logger(e) => format!("{}", e),
                StdIo(e) => format!("{}", e),
                Dotenv(e) => format!("could not read the `.env` file.\n{:7}{}", "", e),
                Client(e) => format!("could not set up the Lemmy client.\n{:7}{}", "", e),
                ConfigErr(e) => e.to_string(),
            }
        )
    }
}

impl From<request::Error> for FatalErr {
    fn from(e: request::Error) -> Self {
        Self::Client(e)
    }
}
impl From<dotenv::Error> for FatalErr {
    fn from(e: dotenv::Error) -> Self {
        Self::Dotenv(e)
    }
}
impl From<std::io::Error> for FatalErr {
    fn from(e: std::io::Error) -> Self {
        Self::StdIo(e)
    }
}
impl From<log::SetLoggerError> for FatalErr {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Logger(e)
    }
}
