//! SQL assembly for the owner-scoped listing pipeline.
//!
//! [`ListSql`] turns a normalized [`NoteQuery`] into the pair of statements
//! the listing needs: the page query and the total count. Assembly is pure
//! string building with a positional-parameter counter, so the exact SQL and
//! bind order are unit-testable without a database.
//!
//! The owner predicate is always `$1` and always present; nothing a caller
//! puts in a query can remove it. The count statement shares every predicate
//! with the page statement and none of its pagination, so `total` reflects
//! all matching rows.

use noteworthy_core::{NoteFilter, NoteQuery, SearchScope, SortOrder};

use crate::models::NOTE_COLUMNS;

/// Escapes LIKE metacharacters so a search term matches literally.
///
/// Postgres treats `\` as the default escape character in LIKE patterns, so
/// it must be doubled first.
pub(crate) fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// The list and count statements for one [`NoteQuery`], plus the search
/// pattern to bind when the query carries a term.
///
/// Bind order for the list statement: owner, then the pattern (if any), then
/// limit, then offset. The count statement takes owner and the pattern only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSql {
    list: String,
    count: String,
    pattern: Option<String>,
}

impl ListSql {
    /// Assembles both statements from a normalized query.
    #[must_use]
    pub fn build(query: &NoteQuery) -> Self {
        let mut predicates = String::new();
        let mut param_idx = 2;

        if query.filter == NoteFilter::Favorites {
            predicates.push_str(" AND is_favorite = TRUE");
        }

        let pattern = query
            .search
            .as_deref()
            .map(|term| format!("%{}%", escape_like(term)));

        if pattern.is_some() {
            let clause = match query.scope {
                SearchScope::Both => {
                    format!(" AND (title ILIKE ${0} OR content ILIKE ${0})", param_idx)
                }
                SearchScope::Title => format!(" AND title ILIKE ${}", param_idx),
                SearchScope::Content => format!(" AND content ILIKE ${}", param_idx),
            };
            predicates.push_str(&clause);
            param_idx += 1;
        }

        let direction = match query.sort {
            SortOrder::Newest => "DESC",
            SortOrder::Oldest => "ASC",
        };

        let list = format!(
            "SELECT {NOTE_COLUMNS} FROM note WHERE owner_id = $1{predicates} \
             ORDER BY updated_at {direction}, id ASC LIMIT ${} OFFSET ${}",
            param_idx,
            param_idx + 1
        );
        let count = format!("SELECT COUNT(*) FROM note WHERE owner_id = $1{predicates}");

        Self {
            list,
            count,
            pattern,
        }
    }

    /// The paginated page statement.
    #[must_use]
    pub fn list_sql(&self) -> &str {
        &self.list
    }

    /// The count statement, sharing predicates but not pagination.
    #[must_use]
    pub fn count_sql(&self) -> &str {
        &self.count
    }

    /// The ILIKE pattern to bind after the owner, when a term is set.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noteworthy_core::RawNoteQuery;

    fn query(raw: RawNoteQuery) -> NoteQuery {
        NoteQuery::from_raw(raw)
    }

    #[test]
    fn test_default_query_is_owner_scoped_only() {
        let sql = ListSql::build(&NoteQuery::default());
        assert_eq!(
            sql.list_sql(),
            "SELECT id, title, content, is_favorite, owner_id, created_at, updated_at \
             FROM note WHERE owner_id = $1 \
             ORDER BY updated_at DESC, id ASC LIMIT $2 OFFSET $3"
        );
        assert_eq!(sql.count_sql(), "SELECT COUNT(*) FROM note WHERE owner_id = $1");
        assert_eq!(sql.pattern(), None);
    }

    #[test]
    fn test_search_both_matches_either_field() {
        let sql = ListSql::build(&query(RawNoteQuery {
            search: Some("meeting".to_string()),
            ..Default::default()
        }));
        assert!(
            sql.list_sql()
                .contains("AND (title ILIKE $2 OR content ILIKE $2)")
        );
        assert_eq!(sql.pattern(), Some("%meeting%"));
    }

    #[test]
    fn test_search_title_only() {
        let sql = ListSql::build(&query(RawNoteQuery {
            search: Some("meeting".to_string()),
            search_in: Some("title".to_string()),
            ..Default::default()
        }));
        assert!(sql.list_sql().contains("AND title ILIKE $2"));
        assert!(!sql.list_sql().contains("content ILIKE"));
    }

    #[test]
    fn test_search_content_only() {
        let sql = ListSql::build(&query(RawNoteQuery {
            search: Some("meeting".to_string()),
            search_in: Some("content".to_string()),
            ..Default::default()
        }));
        assert!(sql.list_sql().contains("AND content ILIKE $2"));
        assert!(!sql.list_sql().contains("title ILIKE"));
    }

    #[test]
    fn test_favorites_filter_adds_predicate() {
        let sql = ListSql::build(&query(RawNoteQuery {
            filter_by: Some("favorites".to_string()),
            ..Default::default()
        }));
        assert!(sql.list_sql().contains("AND is_favorite = TRUE"));
        assert!(sql.count_sql().contains("AND is_favorite = TRUE"));
    }

    #[test]
    fn test_favorites_and_search_share_parameter_numbering() {
        // The favorites predicate binds nothing, so the pattern is still $2.
        let sql = ListSql::build(&query(RawNoteQuery {
            search: Some("q3".to_string()),
            filter_by: Some("favorites".to_string()),
            ..Default::default()
        }));
        assert!(sql.list_sql().contains(
            "WHERE owner_id = $1 AND is_favorite = TRUE \
             AND (title ILIKE $2 OR content ILIKE $2)"
        ));
        assert!(sql.list_sql().ends_with("LIMIT $3 OFFSET $4"));
    }

    #[test]
    fn test_sort_oldest_ascends() {
        let sql = ListSql::build(&query(RawNoteQuery {
            sort_by: Some("oldest".to_string()),
            ..Default::default()
        }));
        assert!(sql.list_sql().contains("ORDER BY updated_at ASC, id ASC"));
    }

    #[test]
    fn test_id_tiebreak_always_ascending() {
        for sort_by in ["newest", "oldest"] {
            let sql = ListSql::build(&query(RawNoteQuery {
                sort_by: Some(sort_by.to_string()),
                ..Default::default()
            }));
            assert!(sql.list_sql().contains(", id ASC LIMIT"));
        }
    }

    #[test]
    fn test_count_has_no_ordering_or_pagination() {
        let sql = ListSql::build(&query(RawNoteQuery {
            search: Some("meeting".to_string()),
            search_in: None,
            filter_by: Some("favorites".to_string()),
            sort_by: Some("oldest".to_string()),
            page: Some(4),
            per_page: Some(5),
        }));
        assert!(!sql.count_sql().contains("ORDER BY"));
        assert!(!sql.count_sql().contains("LIMIT"));
        assert!(!sql.count_sql().contains("OFFSET"));
    }

    #[test]
    fn test_like_metacharacters_match_literally() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");

        let sql = ListSql::build(&query(RawNoteQuery {
            search: Some("100%_done".to_string()),
            ..Default::default()
        }));
        assert_eq!(sql.pattern(), Some("%100\\%\\_done%"));
    }

    #[test]
    fn test_plain_term_is_wrapped_unchanged() {
        let sql = ListSql::build(&query(RawNoteQuery {
            search: Some("quarterly report".to_string()),
            ..Default::default()
        }));
        assert_eq!(sql.pattern(), Some("%quarterly report%"));
    }
}
