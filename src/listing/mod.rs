/// Generic list view-model shared by every table page.
///
/// Each list page holds exactly one unfiltered collection as source of
/// truth; the visible rows are a pure function of that collection plus
/// the current query. The same search/status/slice derivation used to be
/// copy-pasted across every admin page of the old client; it lives here
/// once, parametrized by two accessors.
pub(crate) const PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ListQuery {
    /// Free-text query; trimmed and lowercased before matching.
    pub search: String,
    /// Exact backend enum value ("" means no status filter).
    pub status: String,
    /// 1-based requested page; clamped into range during derivation.
    pub page: usize,
}

impl ListQuery {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            status: String::new(),
            page: 1,
        }
    }
}

/// Page-reset rule shared by every list page: editing the search text or
/// picking a different status filter snaps the view back to page 1.
/// `previous` is None on the first observation (initial render), which is
/// not a filter edit and must not reset anything.
pub(crate) fn page_reset_required(
    previous: Option<&(String, String)>,
    current: &(String, String),
) -> bool {
    previous.is_some_and(|prev| prev != current)
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ListSlice<T> {
    pub rows: Vec<T>,
    /// The page actually shown (requested page clamped to range).
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

/// Derives the visible slice for one list page.
///
/// `search_text` yields every searchable field of a record (entity
/// specific: guest name, property title, the numeric id as a string...);
/// a record matches when any field contains the lowercased query.
/// `status_of` yields the record's status as the backend enum string;
/// the status filter is exact equality, matching the `<select>` values.
pub(crate) fn paginate<T: Clone>(
    items: &[T],
    query: &ListQuery,
    search_text: impl Fn(&T) -> Vec<String>,
    status_of: impl Fn(&T) -> String,
) -> ListSlice<T> {
    let needle = query.search.trim().to_lowercase();

    let filtered: Vec<&T> = items
        .iter()
        .filter(|item| {
            if needle.is_empty() {
                return true;
            }
            search_text(item)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .filter(|item| query.status.is_empty() || status_of(item) == query.status)
        .collect();

    let filtered_count = filtered.len();
    let total_pages = filtered_count.div_ceil(PAGE_SIZE).max(1);
    let page = query.page.clamp(1, total_pages);

    let start = (page - 1) * PAGE_SIZE;
    let rows = filtered
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    ListSlice {
        rows,
        page,
        total_pages,
        filtered_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: i64,
        name: String,
        status: &'static str,
    }

    fn row(id: i64, name: &str, status: &'static str) -> Row {
        Row {
            id,
            name: name.to_string(),
            status,
        }
    }

    fn derive(items: &[Row], query: &ListQuery) -> ListSlice<Row> {
        paginate(
            items,
            query,
            |r| vec![r.name.clone(), r.id.to_string()],
            |r| r.status.to_string(),
        )
    }

    #[test]
    fn empty_query_is_identity() {
        let items: Vec<Row> = (1..=7).map(|i| row(i, "x", "PENDING")).collect();
        let slice = derive(&items, &ListQuery::new());
        assert_eq!(slice.rows, items);
        assert_eq!(slice.filtered_count, 7);
        assert_eq!(slice.total_pages, 1);
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let items = vec![
            row(1, "Nguyen Van An", "PENDING"),
            row(2, "Tran Binh", "PENDING"),
        ];
        for query_text in ["nguyen", "NGUYEN", "  Nguyen  "] {
            let slice = derive(
                &items,
                &ListQuery {
                    search: query_text.to_string(),
                    status: String::new(),
                    page: 1,
                },
            );
            assert_eq!(slice.rows.len(), 1, "query {query_text:?}");
            assert_eq!(slice.rows[0].id, 1);
        }
    }

    #[test]
    fn search_matches_id_as_string() {
        let items = vec![row(42, "a", "PENDING"), row(7, "b", "PENDING")];
        let slice = derive(
            &items,
            &ListQuery {
                search: "42".to_string(),
                status: String::new(),
                page: 1,
            },
        );
        assert_eq!(slice.rows.len(), 1);
        assert_eq!(slice.rows[0].id, 42);
    }

    #[test]
    fn status_filter_is_exact() {
        let items = vec![
            row(1, "a", "PENDING"),
            row(2, "b", "CONFIRMED"),
            row(3, "c", "PENDING"),
        ];
        let slice = derive(
            &items,
            &ListQuery {
                search: String::new(),
                status: "PENDING".to_string(),
                page: 1,
            },
        );
        assert_eq!(slice.filtered_count, 2);
        assert!(slice.rows.iter().all(|r| r.status == "PENDING"));

        // Lowercased values never match: the filter carries backend enum strings.
        let slice = derive(
            &items,
            &ListQuery {
                search: String::new(),
                status: "pending".to_string(),
                page: 1,
            },
        );
        assert_eq!(slice.filtered_count, 0);
    }

    #[test]
    fn total_pages_formula() {
        for (count, expected) in [(0usize, 1usize), (1, 1), (10, 1), (11, 2), (20, 2), (21, 3)] {
            let items: Vec<Row> = (0..count as i64).map(|i| row(i, "x", "PENDING")).collect();
            let slice = derive(&items, &ListQuery::new());
            assert_eq!(slice.total_pages, expected, "count={count}");
        }
    }

    #[test]
    fn empty_collection_renders_one_empty_page() {
        let slice = derive(&[], &ListQuery::new());
        assert_eq!(slice.total_pages, 1);
        assert_eq!(slice.page, 1);
        assert!(slice.rows.is_empty());
    }

    #[test]
    fn out_of_range_page_is_clamped_to_last() {
        // 15 rows -> 2 pages. Requesting page 9 shows page 2, not an empty page.
        let items: Vec<Row> = (0..15).map(|i| row(i, "x", "PENDING")).collect();
        let slice = derive(
            &items,
            &ListQuery {
                search: String::new(),
                status: String::new(),
                page: 9,
            },
        );
        assert_eq!(slice.page, 2);
        assert_eq!(slice.rows.len(), 5);

        // Page 0 clamps up to 1.
        let slice = derive(
            &items,
            &ListQuery {
                search: String::new(),
                status: String::new(),
                page: 0,
            },
        );
        assert_eq!(slice.page, 1);
        assert_eq!(slice.rows.len(), PAGE_SIZE);
    }

    #[test]
    fn slice_never_exceeds_page_size() {
        let items: Vec<Row> = (0..37).map(|i| row(i, "x", "PENDING")).collect();
        for page in 1..=4 {
            let slice = derive(
                &items,
                &ListQuery {
                    search: String::new(),
                    status: String::new(),
                    page,
                },
            );
            assert!(slice.rows.len() <= PAGE_SIZE);
        }
    }

    #[test]
    fn pages_follow_backend_response_order() {
        // The backend's response order is the display order. A response
        // carrying ids 1..=50 must render ids 1..=10 on page 1 and
        // 41..=50 on page 5, never a re-sorted permutation.
        let items: Vec<Row> = (1..=50).map(|i| row(i, "x", "PENDING")).collect();

        let first = derive(&items, &ListQuery::new());
        assert_eq!(
            first.rows.iter().map(|r| r.id).collect::<Vec<_>>(),
            (1..=10).collect::<Vec<_>>()
        );

        let last = derive(
            &items,
            &ListQuery {
                search: String::new(),
                status: String::new(),
                page: 5,
            },
        );
        assert_eq!(
            last.rows.iter().map(|r| r.id).collect::<Vec<_>>(),
            (41..=50).collect::<Vec<_>>()
        );
    }

    #[test]
    fn page_resets_only_on_filter_edits() {
        let initial = ("".to_string(), "".to_string());
        let searched = ("nguyen".to_string(), "".to_string());
        let filtered = ("nguyen".to_string(), "PENDING".to_string());

        // First observation is the initial render, not an edit.
        assert!(!page_reset_required(None, &initial));
        // Editing search or status resets.
        assert!(page_reset_required(Some(&initial), &searched));
        assert!(page_reset_required(Some(&searched), &filtered));
        // Re-observing unchanged filters (e.g. a page step) does not.
        assert!(!page_reset_required(Some(&filtered), &filtered));
    }

    #[test]
    fn combined_status_and_search_across_page_boundaries() {
        // Admin scenario: status=PENDING plus search "Nguyen" must only
        // surface pending rows whose name contains "nguyen", paged by 10.
        let mut items = Vec::new();
        for i in 0..30 {
            items.push(row(i, &format!("Nguyen Guest {i}"), "PENDING"));
        }
        for i in 30..40 {
            items.push(row(i, &format!("Nguyen Guest {i}"), "CONFIRMED"));
        }
        for i in 40..50 {
            items.push(row(i, &format!("Tran Guest {i}"), "PENDING"));
        }

        let query = ListQuery {
            search: "nguyen".to_string(),
            status: "PENDING".to_string(),
            page: 3,
        };
        let slice = derive(&items, &query);
        assert_eq!(slice.filtered_count, 30);
        assert_eq!(slice.total_pages, 3);
        assert_eq!(slice.page, 3);
        assert_eq!(slice.rows.len(), 10);
        assert!(slice
            .rows
            .iter()
            .all(|r| r.status == "PENDING" && r.name.to_lowercase().contains("nguyen")));
        // Insertion order is preserved; page 3 starts at the 21st match.
        assert_eq!(slice.rows[0].id, 20);
    }
}
