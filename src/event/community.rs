use super::Id;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Community {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub actor_id: String,
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub posting_restricted_to_mods: bool,
    #[serde(default)]
    pub instance_id: i64,
}
