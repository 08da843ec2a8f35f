//! Query parameters for Lemmy's listing endpoints
use crate::config;
use std::fmt;

macro_rules! api_enum {
    ($(#[$outer:meta])* $name:ident { $($variant:ident),* }) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),*
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self {
                    $(Self::$variant => f.write_str(stringify!($variant))),*
                }
            }
        }
    };
}

api_enum!(
    /// Which instances a listing draws from (Lemmy's `type_`)
    ListingType { All, Local, Subscribed }
);
api_enum!(
    /// How a listing is ordered
    SortType { New, Old, Hot, Top }
);

/// The parameters of a listing request.
///
/// The page is always the first one; the stream never pages back.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub listing: ListingType,
    pub sort: SortType,
    pub max_depth: u32,
    pub community_id: Option<i64>,
    pub community_name: Option<String>,
}

impl ListQuery {
    const PAGE: u32 = 1;

    /// The newest local items, across every community.
    pub fn newest(max_depth: u32) -> Self {
        Self {
            listing: ListingType::Local,
            sort: SortType::New,
            max_depth,
            community_id: None,
            community_name: None,
        }
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("type_", self.listing.to_string()),
            ("sort", self.sort.to_string()),
            ("max_depth", self.max_depth.to_string()),
            ("page", Self::PAGE.to_string()),
        ];
        if let Some(id) = self.community_id {
            params.push(("community_id", id.to_string()));
        }
        if let Some(name) = &self.community_name {
            params.push(("community_name", name.clone()));
        }
        params
    }
}

impl From<&config::Stream> for ListQuery {
    fn from(cfg: &config::Stream) -> Self {
        Self {
            community_id: *cfg.community_id,
            community_name: cfg.community_name.0.clone(),
            ..Self::newest(*cfg.max_depth)
        }
    }
}
