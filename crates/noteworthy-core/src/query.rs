//! Listing-query normalization.
//!
//! A listing request arrives as loose, optional, untrusted parameters
//! (`RawNoteQuery`) and is normalized into a [`NoteQuery`] with every field
//! defaulted, clamped, or coerced into its valid domain. Normalization never
//! fails: a read path should degrade gracefully on cosmetic misuse rather
//! than error. Out-of-range pages clamp, unknown enum spellings fall back to
//! their defaults, and a blank search term means no search at all.
//!
//! The function is pure and knows nothing about HTTP or SQL; the transport
//! layer deserializes into `RawNoteQuery` and the storage layer turns the
//! normalized query into predicates.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Enumerated Parameters
// ============================================================================

/// Which note fields a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Match if either the title or the content contains the term.
    Both,
    /// Match against the title only.
    Title,
    /// Match against the content only.
    Content,
}

impl SearchScope {
    /// Parses the `search_in` parameter, falling back to [`SearchScope::Both`]
    /// for anything unrecognized. Case-insensitive.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => Self::Title,
            "content" => Self::Content,
            _ => Self::Both,
        }
    }

    /// The wire spelling of this scope.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Title => "title",
            Self::Content => "content",
        }
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::Both
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which subset of the owner's notes to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteFilter {
    /// Every note the owner has.
    All,
    /// Only notes with `is_favorite = true`.
    Favorites,
}

impl NoteFilter {
    /// Parses the `filter_by` parameter, falling back to [`NoteFilter::All`]
    /// for anything unrecognized. Case-insensitive.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "favorites" => Self::Favorites,
            _ => Self::All,
        }
    }

    /// The wire spelling of this filter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Favorites => "favorites",
        }
    }
}

impl Default for NoteFilter {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for NoteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordering of the listing, keyed on `updated_at`.
///
/// Ties are broken by id ascending so pagination is deterministic even when
/// many notes share a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recently updated first (`updated_at` descending).
    Newest,
    /// Least recently updated first (`updated_at` ascending).
    Oldest,
}

impl SortOrder {
    /// Parses the `sort_by` parameter, falling back to [`SortOrder::Newest`]
    /// for anything unrecognized. Case-insensitive.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "oldest" => Self::Oldest,
            _ => Self::Newest,
        }
    }

    /// The wire spelling of this order.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Newest
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Raw and Normalized Queries
// ============================================================================

/// Listing parameters exactly as the caller sent them.
///
/// Every field is optional and untrusted. The transport layer deserializes
/// straight into this; [`NoteQuery::from_raw`] does the rest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawNoteQuery {
    /// Free-text search term.
    pub search: Option<String>,
    /// Search scope: `both`, `title`, or `content`.
    pub search_in: Option<String>,
    /// Subset filter: `all` or `favorites`.
    pub filter_by: Option<String>,
    /// Ordering: `newest` or `oldest`.
    pub sort_by: Option<String>,
    /// 1-based page number.
    pub page: Option<i64>,
    /// Page size.
    pub per_page: Option<i64>,
}

/// Normalized listing parameters.
///
/// Construction via [`NoteQuery::from_raw`] guarantees the invariants:
/// `page >= 1`, `1 <= per_page <= MAX_PER_PAGE`, and `search` is `None` or
/// trimmed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteQuery {
    /// Trimmed search term, if the caller supplied a non-blank one.
    pub search: Option<String>,
    /// Fields the search term applies to.
    pub scope: SearchScope,
    /// Subset filter.
    pub filter: NoteFilter,
    /// Ordering key direction.
    pub sort: SortOrder,
    /// 1-based page number.
    pub page: u32,
    /// Page size, at most [`NoteQuery::MAX_PER_PAGE`].
    pub per_page: u32,
}

impl NoteQuery {
    /// Page size applied when the caller does not send one.
    pub const DEFAULT_PER_PAGE: u32 = 10;

    /// Upper bound on the page size; larger requests are clamped here.
    pub const MAX_PER_PAGE: u32 = 100;

    /// Normalizes raw parameters. Pure and total: no input fails.
    ///
    /// - `page < 1` clamps to 1, `per_page` clamps into `[1, MAX_PER_PAGE]`
    /// - unknown enum spellings fall back to their defaults
    /// - a blank search term normalizes to no search; a usable term is
    ///   trimmed
    #[must_use]
    pub fn from_raw(raw: RawNoteQuery) -> Self {
        let search = raw
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(ToOwned::to_owned);

        let scope = raw
            .search_in
            .as_deref()
            .map(SearchScope::parse)
            .unwrap_or_default();
        let filter = raw
            .filter_by
            .as_deref()
            .map(NoteFilter::parse)
            .unwrap_or_default();
        let sort = raw
            .sort_by
            .as_deref()
            .map(SortOrder::parse)
            .unwrap_or_default();

        let page = raw.page.unwrap_or(1).clamp(1, i64::from(u32::MAX)) as u32;
        let per_page = raw
            .per_page
            .unwrap_or(i64::from(Self::DEFAULT_PER_PAGE))
            .clamp(1, i64::from(Self::MAX_PER_PAGE)) as u32;

        Self {
            search,
            scope,
            filter,
            sort,
            page,
            per_page,
        }
    }

    /// Number of rows to skip: `(page - 1) * per_page`.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.per_page)
    }

    /// Number of rows to fetch.
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

impl Default for NoteQuery {
    fn default() -> Self {
        Self::from_raw(RawNoteQuery::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
