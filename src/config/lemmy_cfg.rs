use super::lemmy_cfg_types::*;
use crate::config::EnvVar;
use crate::err::FatalErr;

/// Where to connect, and as whom.
#[derive(Debug, Default, Clone)]
pub struct LemmyConfig {
    pub url: LemmyUrl,
    pub username: LemmyUser,
    pub password: LemmyPass,
    pub timeout: RequestTimeout,
}

impl LemmyConfig {
    const NO_USER_WARNING: &'static str =
        "LEMMY_USERNAME is not set.  Every request will fail until it is, because Lemmy \
         only serves the listing to a logged-in account.";

    pub fn from_env(env: &EnvVar) -> Result<Self, FatalErr> {
        let cfg = LemmyConfig {
            url: LemmyUrl::default().maybe_update(env.get("LEMMY_URL"))?,
            username: LemmyUser::default().maybe_update(env.get("LEMMY_USERNAME"))?,
            password: LemmyPass::default().maybe_update(env.get("LEMMY_PASSWORD")),
            timeout: RequestTimeout::default().maybe_update(env.get("LEMMY_TIMEOUT"))?,
        };

        if cfg.username.is_empty() {
            log::warn!("{}", Self::NO_USER_WARNING);
        }
        log::info!("Lemmy configuration:\n{:#?}", &cfg);
        Ok(cfg)
    }
}
