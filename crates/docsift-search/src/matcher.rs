//! Exact and interval match discovery.

use crate::fold::fold_chars;
use crate::{MatchInfo, SearchOptions};

/// Finds all matches of `query` in `content` under the given options.
///
/// An empty query yields no matches; neither mode can loop or panic on empty
/// content or a query longer than the content.
pub fn find_matches(content: &str, query: &str, options: &SearchOptions) -> Vec<MatchInfo> {
    if options.is_exact {
        find_exact_matches(content, query)
    } else {
        find_interval_matches(content, query, options.max_gap)
    }
}

/// Case-insensitive contiguous substring search.
///
/// After a hit at offset `i` the scan resumes at `i + query_len`, so matches
/// never overlap and start offsets are unique even for queries with internal
/// repeats ("aa" in "aaa" matches once).
fn find_exact_matches(content: &str, query: &str) -> Vec<MatchInfo> {
    let content = fold_chars(content);
    let query = fold_chars(query);
    let mut matches = Vec::new();

    if query.is_empty() || query.len() > content.len() {
        return matches;
    }

    let mut offset = 0;
    while offset + query.len() <= content.len() {
        if content[offset..offset + query.len()] == query[..] {
            matches.push(MatchInfo {
                index: offset,
                length: query.len(),
                positions: (offset..offset + query.len()).collect(),
            });
            offset += query.len();
        } else {
            offset += 1;
        }
    }

    matches
}

/// Case-insensitive ordered-subsequence search with a per-gap bound.
///
/// Each candidate anchors on an occurrence of the first query character and
/// greedily takes the earliest occurrence of each subsequent character. A gap
/// over `max_gap` abandons that candidate; the scan then advances past the
/// anchor. After a successful match the scan also resumes just past the
/// match's first character, so overlapping interval matches are found.
fn find_interval_matches(content: &str, query: &str, max_gap: usize) -> Vec<MatchInfo> {
    let content = fold_chars(content);
    let query = fold_chars(query);
    let mut matches = Vec::new();

    if query.is_empty() {
        return matches;
    }

    let mut scan = 0;
    while scan < content.len() {
        let Some(anchor) = (scan..content.len()).find(|&i| content[i] == query[0]) else {
            break;
        };
        if let Some(found) = interval_match_at(&content, &query, max_gap, anchor) {
            matches.push(found);
        }
        scan = anchor + 1;
    }

    matches
}

/// Attempts one greedy interval match anchored at `anchor`.
///
/// The first character has no gap check; every later character must sit within
/// `max_gap` skipped characters of the previous matched position.
fn interval_match_at(
    content: &[char],
    query: &[char],
    max_gap: usize,
    anchor: usize,
) -> Option<MatchInfo> {
    let mut positions = Vec::with_capacity(query.len());
    positions.push(anchor);
    let mut cursor = anchor + 1;

    for &wanted in &query[1..] {
        let found = (cursor..content.len()).find(|&i| content[i] == wanted)?;
        let previous = *positions.last()?;
        if found - previous - 1 > max_gap {
            return None;
        }
        positions.push(found);
        cursor = found + 1;
    }

    let last = *positions.last()?;
    Some(MatchInfo {
        index: anchor,
        length: last - anchor + 1,
        positions,
    })
}
