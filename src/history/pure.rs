// Pure history functions (no I/O)

use std::cmp::Reverse;
use std::collections::HashMap;

/// Count how often each entry appears in `history`.
pub fn count_occurrences(history: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for entry in history {
        *counts.entry(entry.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Order `all_items` by descending occurrence count in `history`.
///
/// The sort is stable: items with equal counts, including the ones never
/// chosen, keep their order from `all_items`. History entries that are no
/// longer available are ignored.
pub fn rank(all_items: &[String], history: &[String]) -> Vec<String> {
    let counts = count_occurrences(history);
    let mut ranked = all_items.to_vec();
    ranked.sort_by_key(|item| Reverse(counts.get(item.as_str()).copied().unwrap_or(0)));
    ranked
}

/// Move the members of `some` found in `list` to the front, in `some`'s order.
///
/// Members of `some` missing from `list` are dropped.
pub fn promote(list: Vec<String>, some: &[String]) -> Vec<String> {
    let mut front: Vec<String> = Vec::new();
    for item in some {
        if list.contains(item) && !front.contains(item) {
            front.push(item.clone());
        }
    }
    let rest: Vec<String> = list
        .into_iter()
        .filter(|item| !front.contains(item))
        .collect();
    front.into_iter().chain(rest).collect()
}

/// Put `selection` in front of `history`, keeping at most `cap` entries.
pub fn prepend_capped(history: Vec<String>, selection: &str, cap: usize) -> Vec<String> {
    std::iter::once(selection.to_string())
        .chain(history)
        .take(cap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HISTORY_CAP;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ── rank ──

    #[test]
    fn rank_orders_by_count() {
        let ranked = rank(&strings(&["A", "B", "C"]), &strings(&["B", "A", "A"]));
        assert_eq!(ranked, strings(&["A", "B", "C"]));
    }

    #[test]
    fn rank_empty_history_keeps_order() {
        let items = strings(&["C", "A", "B"]);
        assert_eq!(rank(&items, &[]), items);
    }

    #[test]
    fn rank_ties_keep_catalog_order() {
        let ranked = rank(
            &strings(&["A", "B", "C", "D"]),
            &strings(&["D", "B", "D", "B"]),
        );
        assert_eq!(ranked, strings(&["B", "D", "A", "C"]));
    }

    #[test]
    fn rank_ignores_stale_history() {
        let ranked = rank(
            &strings(&["A", "B"]),
            &strings(&["Gone", "Gone", "Gone", "B"]),
        );
        assert_eq!(ranked, strings(&["B", "A"]));
    }

    #[test]
    fn rank_is_a_permutation() {
        let items = strings(&["Portal", "Doom", "Quake", "Celeste", "Hades"]);
        let history = strings(&["Hades", "Quake", "Unknown", "Hades", "Doom", "Quake", "Hades"]);
        let mut ranked = rank(&items, &history);
        assert_eq!(ranked[0], "Hades");
        assert_eq!(ranked[1], "Quake");
        assert_eq!(ranked[2], "Doom");
        ranked.sort();
        let mut expected = items.clone();
        expected.sort();
        assert_eq!(ranked, expected);
    }

    #[test]
    fn rank_empty_catalog() {
        assert!(rank(&[], &strings(&["A"])).is_empty());
    }

    // ── promote ──

    #[test]
    fn promote_moves_present_items_to_front() {
        let list = strings(&["a", "b", "c", "d"]);
        let promoted = promote(list, &strings(&["c", "a"]));
        assert_eq!(promoted, strings(&["c", "a", "b", "d"]));
    }

    #[test]
    fn promote_drops_missing_items() {
        let list = strings(&["a", "b"]);
        let promoted = promote(list, &strings(&["zz", "b"]));
        assert_eq!(promoted, strings(&["b", "a"]));
    }

    #[test]
    fn promote_nothing() {
        let list = strings(&["a", "b"]);
        assert_eq!(promote(list.clone(), &[]), list);
    }

    // ── prepend_capped ──

    #[test]
    fn prepend_puts_selection_first() {
        let history = prepend_capped(strings(&["b", "c"]), "a", HISTORY_CAP);
        assert_eq!(history, strings(&["a", "b", "c"]));
    }

    #[test]
    fn prepend_drops_oldest_beyond_cap() {
        let full: Vec<String> = (0..HISTORY_CAP).map(|i| format!("item{}", i)).collect();
        let history = prepend_capped(full, "new", HISTORY_CAP);
        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history[0], "new");
        assert_eq!(history[HISTORY_CAP - 1], format!("item{}", HISTORY_CAP - 2));
        assert!(!history.contains(&format!("item{}", HISTORY_CAP - 1)));
    }

    #[test]
    fn prepend_never_exceeds_cap() {
        let mut history = Vec::new();
        for i in 0..100 {
            history = prepend_capped(history, &format!("{}", i % 7), HISTORY_CAP);
            assert!(history.len() <= HISTORY_CAP);
        }
        assert_eq!(history.len(), HISTORY_CAP);
    }

    // ── count_occurrences ──

    #[test]
    fn counts_duplicates() {
        let history = strings(&["x", "y", "x"]);
        let counts = count_occurrences(&history);
        assert_eq!(counts.get("x"), Some(&2));
        assert_eq!(counts.get("y"), Some(&1));
        assert_eq!(counts.get("z"), None);
    }
}
