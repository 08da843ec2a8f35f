use super::stream_cfg_types::*;
use crate::config::EnvVar;
use crate::err::FatalErr;

/// What to stream, and how patiently.
#[derive(Debug, Default, Clone)]
pub struct StreamConfig {
    pub resource: StreamResource,
    pub community_id: CommunityId,
    pub community_name: CommunityName,
    pub max_depth: MaxDepth,
    pub dedup_capacity: DedupCapacity,
    pub backoff_max: BackoffMax,
    pub skip_existing: SkipExisting,
    pub cooldown_step: CooldownStep,
    pub cooldown_max: CooldownMax,
}

impl StreamConfig {
    const UNSCOPED_INFO: &'static str =
        "Neither COMMUNITY_ID nor COMMUNITY_NAME is set; streaming every community the \
         instance knows about.";

    pub fn from_env(env: &EnvVar) -> Result<Self, FatalErr> {
        let cfg = StreamConfig {
            resource: StreamResource::default().maybe_update(env.get("STREAM_RESOURCE"))?,
            community_id: CommunityId::default().maybe_update(env.get("COMMUNITY_ID"))?,
            community_name: CommunityName::default().maybe_update(env.get("COMMUNITY_NAME"))?,
            max_depth: MaxDepth::default().maybe_update(env.get("MAX_DEPTH"))?,
            dedup_capacity: DedupCapacity::default().maybe_update(env.get("DEDUP_CAPACITY"))?,
            backoff_max: BackoffMax::default().maybe_update(env.get("BACKOFF_MAX"))?,
            skip_existing: SkipExisting::default().maybe_update(env.get("SKIP_EXISTING"))?,
            cooldown_step: CooldownStep::default().maybe_update(env.get("COOLDOWN_STEP"))?,
            cooldown_max: CooldownMax::default().maybe_update(env.get("COOLDOWN_MAX"))?,
        };

        if cfg.community_id.is_none() && cfg.community_name.is_none() {
            log::warn!("{}", Self::UNSCOPED_INFO);
        }
        log::info!("Stream configuration:\n{:#?}", &cfg);
        Ok(cfg)
    }
}
