//! Character-cell grouping for the query extractor grid.
//!
//! The extractor presents document text as a grid of selectable cells.
//! Consecutive ASCII letters and digits merge into one grouped cell (dates,
//! codes, words) so they can be picked in a single tap; everything else is a
//! single-character cell.

/// One selectable cell in the extractor grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCell {
    /// The cell's text: one character, or a merged alphanumeric run.
    pub text: String,
    /// Character offset of the cell's first character in the source text.
    pub index: usize,
    /// Whether this cell is a merged run of two or more characters.
    pub grouped: bool,
}

/// Splits text into grid cells, merging consecutive ASCII alphanumerics.
pub fn char_cells(text: &str) -> Vec<CharCell> {
    let chars: Vec<char> = text.chars().collect();
    let mut cells = Vec::new();
    let mut offset = 0;

    while offset < chars.len() {
        if chars[offset].is_ascii_alphanumeric() {
            let start = offset;
            while offset < chars.len() && chars[offset].is_ascii_alphanumeric() {
                offset += 1;
            }
            cells.push(CharCell {
                text: chars[start..offset].iter().collect(),
                index: start,
                grouped: offset - start > 1,
            });
        } else {
            cells.push(CharCell {
                text: chars[offset].to_string(),
                index: offset,
                grouped: false,
            });
            offset += 1;
        }
    }

    cells
}

/// Expands a cell to the source character offsets it covers.
pub fn cell_indices(cell: &CharCell) -> Vec<usize> {
    (cell.index..cell.index + cell.text.chars().count()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(char_cells("").is_empty());
    }

    #[test]
    fn test_consecutive_alphanumerics_merge() {
        let cells = char_cells("ab12, x");
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].text, "ab12");
        assert!(cells[0].grouped);
        assert_eq!(cells[1].text, ",");
        assert_eq!(cells[2].text, " ");
        assert_eq!(cells[3].text, "x");
        assert!(!cells[3].grouped);
    }

    #[test]
    fn test_single_alphanumeric_is_not_grouped() {
        let cells = char_cells("a b");
        assert!(cells.iter().all(|c| !c.grouped));
    }

    #[test]
    fn test_indices_anchor_at_run_start() {
        let cells = char_cells("xy 2024");
        assert_eq!(cells[2].index, 3);
        assert_eq!(cell_indices(&cells[2]), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_non_ascii_characters_stay_single() {
        let cells = char_cells("日期2024");
        assert_eq!(cells[0].text, "日");
        assert_eq!(cells[1].text, "期");
        assert_eq!(cells[2].text, "2024");
        assert_eq!(cells[2].index, 2);
    }

    #[test]
    fn test_cells_cover_every_offset_exactly_once() {
        let text = "a1! b2\nc";
        let mut covered: Vec<usize> = char_cells(text).iter().flat_map(cell_indices).collect();
        covered.sort_unstable();
        let expected: Vec<usize> = (0..text.chars().count()).collect();
        assert_eq!(covered, expected);
    }
}
