//! Movie catalog entity
//!
//! Movies are read-only from the application's point of view; they are loaded
//! into the `movies` table by an external import.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A movie in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    /// Unique movie ID
    pub id: i64,
    pub original_title: String,
    pub original_language: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub adult: bool,
    pub release_date: Option<DateTime<Utc>>,
    pub budget: Option<i64>,
    pub revenue: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Build a movie with only the required fields set
    pub fn new(id: i64, original_title: impl Into<String>, original_language: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            original_title: original_title.into(),
            original_language: original_language.into(),
            overview: None,
            poster_path: None,
            backdrop_path: None,
            adult: false,
            release_date: None,
            budget: None,
            revenue: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `keyword` appears (case-insensitively) in the title, overview or language
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.original_title.to_lowercase().contains(&needle)
            || self.original_language.to_lowercase().contains(&needle)
            || self
                .overview
                .as_deref()
                .is_some_and(|overview| overview.to_lowercase().contains(&needle))
    }
}
