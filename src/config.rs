//! Configuration, read from environmental variables (optionally merged with a `.env` file).
//!
//! Every setting has a default; an environmental variable of the same name overrides it.  A
//! variable set to the empty string restores the default.
pub use {lemmy_cfg::LemmyConfig as Lemmy, stream_cfg::StreamConfig as Stream};
pub use environmental_variables::EnvVar;
pub use lemmy_cfg_types::LemmyPass;
pub use stream_cfg_types::Resource;

use crate::err::FatalErr;
use hashbrown::HashMap;
use std::env;

mod environmental_variables;
mod lemmy_cfg;
mod lemmy_cfg_types;
mod stream_cfg;
mod stream_cfg_types;

/// Load `.env.production` when `ENV=production`, `.env` otherwise.  A missing file is fine.
pub fn merge_dotenv() -> Result<(), FatalErr> {
    let env_file = match env::var("ENV").ok().as_deref() {
        Some("production") => ".env.production",
        Some("development") | None => ".env",
        Some(unsupported) => Err(FatalErr::config(
            "ENV",
            unsupported,
            "`production` or `development`",
        ))?,
    };
    match dotenv::from_filename(env_file) {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => {
            log::debug!("No {} file; using the process environment only", env_file);
            Ok(())
        }
        Err(e) => Err(e)?,
    }
}

pub fn from_env(env_vars: HashMap<String, String>) -> Result<(Lemmy, Stream), FatalErr> {
    let env_vars = EnvVar::new(env_vars);
    log::info!("Environmental variables lemmy_stream received: {}", &env_vars);
    Ok((Lemmy::from_env(&env_vars)?, Stream::from_env(&env_vars)?))
}
