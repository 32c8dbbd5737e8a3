//! Search, filter and sort pipeline for the wine list.
//!
//! [`project`] is the only way the visible list is produced: it takes the
//! loaded items and the live query/sort state and returns a fresh vector. The
//! application state never caches its output, so the list on screen cannot
//! outlive the category or query it was computed from.

use crate::domain::{SortKey, WineItem};
use std::cmp::Ordering;

/// Filters `items` by `query` and sorts the survivors by `sort_key`, descending.
///
/// - The query is matched case-insensitively as a substring of
///   [`WineItem::search_text`]. An empty query keeps every item.
/// - Sorting is stable: items with equal values keep their input order.
/// - Items whose sort field does not parse rank after every parsable item and
///   keep their input order among themselves.
///
/// # Examples
///
/// ```
/// use sommelier::app::pipeline::project;
/// use sommelier::domain::{Rating, SortKey, WineItem};
///
/// let wine = |id, average: &str, reviews: &str| WineItem {
///     id,
///     wine: format!("Wine {id}"),
///     winery: "Winery".into(),
///     rating: Rating { average: average.into(), reviews: reviews.into() },
///     location: "Rioja".into(),
///     image: String::new(),
/// };
/// let items = vec![wine(0, "4.5", "10"), wine(1, "3.0", "200")];
///
/// let by_reviews: Vec<i64> = project(&items, "", SortKey::ReviewCount)
///     .iter()
///     .map(|w| w.id)
///     .collect();
/// assert_eq!(by_reviews, vec![1, 0]);
/// ```
#[must_use]
pub fn project(items: &[WineItem], query: &str, sort_key: SortKey) -> Vec<WineItem> {
    let _span = tracing::trace_span!("project",
        item_count = items.len(),
        query_len = query.len(),
        sort_key = sort_key.id()
    )
    .entered();

    let needle = query.to_lowercase();

    let mut matching: Vec<WineItem> = items
        .iter()
        .filter(|item| needle.is_empty() || item.search_text().to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort_key {
        SortKey::Rating => matching.sort_by(|a, b| {
            descending_unparsable_last(a.rating.average_value(), b.rating.average_value())
        }),
        SortKey::ReviewCount => matching.sort_by(|a, b| {
            descending_unparsable_last(a.rating.review_count(), b.rating.review_count())
        }),
    }

    tracing::trace!(result_count = matching.len(), "list projected");
    matching
}

/// Orders parsed values descending, with `None` after every `Some`.
///
/// NaN never reaches here: [`Rating::average_value`](crate::domain::Rating::average_value)
/// already maps it to `None`, so `partial_cmp` is total on what remains.
fn descending_unparsable_last<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Returns the character ranges of every case-insensitive occurrence of
/// `query` in `text`, as `(start, end)` with exclusive end.
///
/// Occurrences do not overlap. An empty query has no ranges.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().map(fold).collect();
    if needle.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text.chars().map(fold).collect();
    let mut ranges = Vec::new();
    let mut start = 0;

    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }

    ranges
}

/// Lowercases one character without changing the character count.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rating;

    fn wine(id: i64, name: &str, average: &str, reviews: &str) -> WineItem {
        WineItem {
            id,
            wine: name.to_string(),
            winery: "Bodega Muga".to_string(),
            rating: Rating {
                average: average.to_string(),
                reviews: reviews.to_string(),
            },
            location: "Spain · Rioja".to_string(),
            image: String::new(),
        }
    }

    fn ids(items: &[WineItem]) -> Vec<i64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn two_items_order_by_each_key() {
        let items = vec![wine(0, "A", "4.5", "10"), wine(1, "B", "3.0", "200")];

        assert_eq!(ids(&project(&items, "", SortKey::Rating)), vec![0, 1]);
        assert_eq!(ids(&project(&items, "", SortKey::ReviewCount)), vec![1, 0]);
    }

    #[test]
    fn empty_query_keeps_everything() {
        let items = vec![
            wine(0, "A", "4.0", "1"),
            wine(1, "B", "4.1", "2"),
            wine(2, "C", "3.9", "3"),
        ];
        assert_eq!(project(&items, "", SortKey::Rating).len(), 3);
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let items = vec![
            wine(0, "Gran Reserva", "4.2", "50"),
            wine(1, "Crianza", "4.8", "80"),
        ];
        assert_eq!(ids(&project(&items, "reserva", SortKey::Rating)), vec![0]);
        assert_eq!(ids(&project(&items, "RESERVA", SortKey::Rating)), vec![0]);
    }

    #[test]
    fn query_matches_winery_and_location() {
        let items = vec![wine(0, "Gran Reserva", "4.2", "50")];
        assert_eq!(project(&items, "muga", SortKey::Rating).len(), 1);
        assert_eq!(project(&items, "rioja", SortKey::Rating).len(), 1);
        assert_eq!(project(&items, "reserva bodega", SortKey::Rating).len(), 1);
        assert!(project(&items, "burgundy", SortKey::Rating).is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![
            wine(0, "A", "4.0", "5"),
            wine(1, "B", "4.5", "5"),
            wine(2, "C", "4.0", "5"),
            wine(3, "D", "4.0", "5"),
        ];
        assert_eq!(ids(&project(&items, "", SortKey::Rating)), vec![1, 0, 2, 3]);
        assert_eq!(ids(&project(&items, "", SortKey::ReviewCount)), vec![0, 1, 2, 3]);
    }

    #[test]
    fn unparsable_values_rank_last_in_input_order() {
        let items = vec![
            wine(0, "A", "", "x"),
            wine(1, "B", "3.5", "12"),
            wine(2, "C", "NaN", "many"),
            wine(3, "D", "4.9", "3"),
        ];
        assert_eq!(ids(&project(&items, "", SortKey::Rating)), vec![3, 1, 0, 2]);
        assert_eq!(ids(&project(&items, "", SortKey::ReviewCount)), vec![1, 3, 0, 2]);
    }

    #[test]
    fn input_is_left_untouched() {
        let items = vec![wine(0, "A", "1.0", "1"), wine(1, "B", "5.0", "9")];
        let before = items.clone();
        let _ = project(&items, "a", SortKey::Rating);
        assert_eq!(items, before);
    }

    #[test]
    fn result_is_sorted_descending_and_complete() {
        let items: Vec<WineItem> = (0..40)
            .map(|i| {
                let average = format!("{}.{}", (i * 7) % 5, (i * 3) % 10);
                let name = if i % 3 == 0 { "Reserva" } else { "Joven" };
                wine(i, name, &average, &((i * 13) % 17).to_string())
            })
            .collect();

        for key in SortKey::ALL {
            let result = project(&items, "reserva", key);
            let expected = items.iter().filter(|w| w.wine == "Reserva").count();
            assert_eq!(result.len(), expected);
            assert!(result.iter().all(|w| w.wine == "Reserva"));

            for pair in result.windows(2) {
                match key {
                    SortKey::Rating => assert!(
                        pair[0].rating.average_value() >= pair[1].rating.average_value()
                    ),
                    SortKey::ReviewCount => assert!(
                        pair[0].rating.review_count() >= pair[1].rating.review_count()
                    ),
                }
            }
        }
    }

    #[test]
    fn match_ranges_finds_every_occurrence() {
        assert_eq!(match_ranges("Gran Reserva", "re"), vec![(5, 7)]);
        assert_eq!(match_ranges("Rosé Rosé", "rosé"), vec![(0, 4), (5, 9)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Malbec", "").is_empty());
        assert!(match_ranges("Malbec", "syrah").is_empty());
    }
}
