// ============================================================
// SEO REPORT TYPES
// ============================================================
// Per-record outcome of the source vs. migrated consistency check

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall outcome for one source/migrated record pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeoStatus {
    Preserved,
    Mismatch,
}

impl fmt::Display for SeoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeoStatus::Preserved => write!(f, "SEO preserved"),
            SeoStatus::Mismatch => write!(f, "SEO mismatch"),
        }
    }
}

/// Result of checking one record pair. Comparisons use exact string
/// equality; no normalization or case-folding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoCheckResult {
    /// The source record's `product_name`, for human-readable reporting.
    pub label: String,

    /// `slug` survived as `Handle`.
    pub handle_match: bool,

    /// `meta_title` survived as `SEO Title`.
    pub seo_title_match: bool,

    /// `meta_description` survived as `SEO Description`.
    pub seo_description_match: bool,
}

impl SeoCheckResult {
    /// Preserved iff all three checked fields match.
    pub fn status(&self) -> SeoStatus {
        if self.handle_match && self.seo_title_match && self.seo_description_match {
            SeoStatus::Preserved
        } else {
            SeoStatus::Mismatch
        }
    }
}
