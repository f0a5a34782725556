//! Result ranking by match tightness.

use crate::SearchResult;

/// Returns the results sorted ascending by `match_length`.
///
/// Tighter spans rank first. The input is not mutated; ordering among equal
/// lengths is not contractual.
pub fn sort_results(results: &[SearchResult]) -> Vec<SearchResult> {
    let mut sorted = results.to_vec();
    sorted.sort_by_key(|result| result.match_length);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(match_length: usize) -> SearchResult {
        SearchResult {
            document_id: 1,
            file_name: String::from("a.txt"),
            content: String::new(),
            match_index: 0,
            match_length,
            highlighted_snippet: String::new(),
        }
    }

    #[test]
    fn test_sorted_ascending_by_length() {
        let results: Vec<SearchResult> = [9, 2, 5, 1].into_iter().map(result).collect();
        let sorted = sort_results(&results);
        let lengths: Vec<usize> = sorted.iter().map(|r| r.match_length).collect();
        assert_eq!(lengths, vec![1, 2, 5, 9]);
    }

    #[test]
    fn test_input_is_untouched_and_output_is_permutation() {
        let results: Vec<SearchResult> = [3, 1, 3].into_iter().map(result).collect();
        let sorted = sort_results(&results);
        // Original order survives.
        let original: Vec<usize> = results.iter().map(|r| r.match_length).collect();
        assert_eq!(original, vec![3, 1, 3]);
        // Same multiset of lengths.
        let mut sorted_lengths: Vec<usize> = sorted.iter().map(|r| r.match_length).collect();
        let mut expected = original;
        sorted_lengths.sort_unstable();
        expected.sort_unstable();
        assert_eq!(sorted_lengths, expected);
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_results(&[]).is_empty());
    }
}
