use crate::model::ErgMaterial;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default maximum number of search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Which resolution step produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Normalized identifier equals a UN number.
    UnNumber,
    /// Query equals a product alias key.
    AliasExact,
    /// Query contains an alias key, or an alias key contains the query.
    AliasSubstring,
    /// Material name contains the query.
    NameSubstring,
    /// An alternate name contains the query.
    AlternateNameSubstring,
}

impl MatchKind {
    /// Substring steps can hit more than one material; table order decides.
    pub fn is_fuzzy(self) -> bool {
        matches!(
            self,
            MatchKind::AliasSubstring
                | MatchKind::NameSubstring
                | MatchKind::AlternateNameSubstring
        )
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::UnNumber => write!(f, "UN number"),
            MatchKind::AliasExact => write!(f, "product alias"),
            MatchKind::AliasSubstring => write!(f, "partial product alias"),
            MatchKind::NameSubstring => write!(f, "name"),
            MatchKind::AlternateNameSubstring => write!(f, "alternate name"),
        }
    }
}

/// A resolved material together with how it was found.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution<'a> {
    pub material: &'a ErgMaterial,
    pub matched_by: MatchKind,
    /// Alias key, name or UN number that matched.
    pub matched_term: String,
    /// UN numbers of other materials that matched at the same step, in table order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other_candidates: Vec<String>,
}

impl Resolution<'_> {
    pub fn is_ambiguous(&self) -> bool {
        !self.other_candidates.is_empty()
    }
}

/// Filters for [`crate::ErgDatabase::search_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub limit: usize,
    /// Keep only materials whose class string starts with this (e.g. "2" matches "2.3").
    #[serde(default)]
    pub hazard_class: Option<String>,
    #[serde(default)]
    pub tih_only: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
            hazard_class: None,
            tih_only: false,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }
}
