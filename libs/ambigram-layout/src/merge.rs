//! # Sequence Pairing
//!
//! Interleaves two sequences into ordered column groups and repairs
//! degenerate columns.
//!
//! The longer sequence is distributed evenly behind the shorter one:
//! `floor(longest / shortest)` elements per column, with the first
//! `longest % shortest` eligible columns taking one extra element.

use crate::column::{BorrowDirection, Column, MergeOptions};
use crate::error::{LayoutError, LayoutResult};
use config::constants::REPAIR_ITERATION_CAP;

// =============================================================================
// MERGE
// =============================================================================

/// Pair two sequences into ordered columns.
///
/// The shorter sequence (by effective length) provides one lead per
/// column; the longer sequence is consumed left to right into the tails.
/// When `ignore_delimiter` is set, delimiter leads receive an empty tail
/// and do not count toward the distribution, and unless
/// `allow_delimiter_column` is set the repair pass then guarantees no
/// content lead is left with an all-delimiter tail.
///
/// Ties in effective length resolve in favor of `first` being the
/// shorter sequence.
///
/// ## Example
///
/// ```rust
/// use ambigram_layout::{merge_strings, MergeOptions};
///
/// let columns = merge_strings("function", "recursive", &MergeOptions::default()).unwrap();
/// assert_eq!(columns[0].lead, 'f');
/// assert_eq!(columns[0].tail, vec!['r', 'e']);
/// ```
pub fn merge_strings(
    first: &str,
    second: &str,
    options: &MergeOptions,
) -> LayoutResult<Vec<Column>> {
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();

    if a.is_empty() || b.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    let delimiter = options.delimiter;

    if options.ignore_delimiter {
        for (raw, seq) in [(first, &a), (second, &b)] {
            if seq[0] == delimiter || seq[seq.len() - 1] == delimiter {
                return Err(LayoutError::DelimiterAtEdge(raw.to_string()));
            }
        }
    }

    let effective_len = |seq: &[char]| -> usize {
        if options.ignore_delimiter {
            seq.iter().filter(|&&c| c != delimiter).count()
        } else {
            seq.len()
        }
    };

    // Stable ordering: the first argument wins "shortest" on a tie.
    let (shortest, longest) = if effective_len(&b) < effective_len(&a) {
        (b, a)
    } else {
        (a, b)
    };

    // Delimiter leads consume nothing, so only the shortest length is
    // reduced to its effective count; the longest is consumed in full.
    let shortest_len = effective_len(&shortest);
    let longest_len = longest.len();

    let column_height = longest_len / shortest_len;
    let remainder = longest_len % shortest_len;

    let mut columns = Vec::with_capacity(shortest.len());
    let mut consumed = 0;
    let mut extras_granted = 0;

    for &lead in &shortest {
        let mut column = Column::new(lead);

        // A delimiter lead under ignore_delimiter never receives
        // paired content and never takes a remainder extra.
        if !(lead == delimiter && options.ignore_delimiter) {
            let take = column_height.min(longest.len() - consumed);
            column.tail.extend_from_slice(&longest[consumed..consumed + take]);
            consumed += take;

            // The first `remainder` eligible columns take one extra.
            if extras_granted < remainder {
                if let Some(&extra) = longest.get(consumed) {
                    column.tail.push(extra);
                    consumed += 1;
                    extras_granted += 1;
                }
            }
        }

        columns.push(column);
    }

    if options.ignore_delimiter && !options.allow_delimiter_column {
        repair_columns(&mut columns, options)?;
    }

    Ok(columns)
}

// =============================================================================
// REPAIR
// =============================================================================

/// Repair columns whose content lead carries an all-delimiter tail.
///
/// Fixed-point scan over `[0, len - 1)` (the last column is exempt):
/// every violating column borrows one tail element from an adjacent
/// column per [`BorrowDirection`], and the scan restarts from index 0
/// after each mutation since a borrow can create a new violation at the
/// resized neighbor. Element order within the longer sequence is
/// preserved because borrows only move elements across one column
/// boundary.
///
/// Normally invoked by [`merge_strings`]; public so the pipeline can be
/// exercised stage by stage.
pub fn repair_columns(columns: &mut [Column], options: &MergeOptions) -> LayoutResult<()> {
    let delimiter = options.delimiter;
    let mut mutations = 0;
    let mut idx = 0;

    while idx + 1 < columns.len() {
        let violates =
            !columns[idx].is_delimiter_lead(delimiter) && columns[idx].tail_is_all_delimiter(delimiter);
        if !violates {
            idx += 1;
            continue;
        }

        if mutations >= REPAIR_ITERATION_CAP {
            return Err(LayoutError::RepairDiverged(mutations));
        }
        mutations += 1;

        match options.borrow {
            BorrowDirection::Backward => {
                if idx == 0 {
                    return Err(LayoutError::RepairUnderflow(0));
                }
                let borrowed = match columns[idx - 1].tail.pop() {
                    Some(element) => element,
                    None => return Err(LayoutError::RepairUnderflow(idx - 1)),
                };
                columns[idx].tail.insert(0, borrowed);
            }
            BorrowDirection::Forward => {
                if columns[idx + 1].tail.is_empty() {
                    return Err(LayoutError::RepairUnderflow(idx + 1));
                }
                let borrowed = columns[idx + 1].tail.remove(0);
                columns[idx].tail.push(borrowed);
            }
        }

        idx = 0;
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(a: &str, b: &str) -> Vec<Column> {
        merge_strings(a, b, &MergeOptions::default()).unwrap()
    }

    fn merge_ignoring(a: &str, b: &str) -> LayoutResult<Vec<Column>> {
        let options = MergeOptions {
            ignore_delimiter: true,
            ..MergeOptions::default()
        };
        merge_strings(a, b, &options)
    }

    fn flatten(columns: &[Column]) -> (String, String) {
        let leads: String = columns.iter().map(|c| c.lead).collect();
        let tails: String = columns.iter().flat_map(|c| c.tail.iter()).collect();
        (leads, tails)
    }

    #[test]
    fn test_merge_function_recursive() {
        let columns = merge("function", "recursive");
        let expected = [
            ('f', "re"),
            ('u', "c"),
            ('n', "u"),
            ('c', "r"),
            ('t', "s"),
            ('i', "i"),
            ('o', "v"),
            ('n', "e"),
        ];
        assert_eq!(columns.len(), expected.len());
        for (column, (lead, tail)) in columns.iter().zip(expected) {
            assert_eq!(column.lead, lead);
            assert_eq!(column.tail.iter().collect::<String>(), tail);
        }
    }

    #[test]
    fn test_merge_alphabet_split() {
        let columns = merge("ABCDEFG", "HIJKLMNOPQRSTUVWXYZ");
        let expected = [
            ('A', "HIJ"),
            ('B', "KLM"),
            ('C', "NOP"),
            ('D', "QRS"),
            ('E', "TUV"),
            ('F', "WX"),
            ('G', "YZ"),
        ];
        assert_eq!(columns.len(), expected.len());
        for (column, (lead, tail)) in columns.iter().zip(expected) {
            assert_eq!(column.lead, lead);
            assert_eq!(column.tail.iter().collect::<String>(), tail);
        }
    }

    #[test]
    fn test_argument_order_does_not_matter() {
        assert_eq!(merge("function", "recursive"), merge("recursive", "function"));
    }

    #[test]
    fn test_conservation_plain() {
        let columns = merge("ABCDEFG", "HIJKLMNOPQRSTUVWXYZ");
        let (leads, tails) = flatten(&columns);
        assert_eq!(leads, "ABCDEFG");
        assert_eq!(tails, "HIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn test_conservation_with_delimiters() {
        let columns = merge_ignoring("AA AAAAAA AAA", "FFFF FFF FFFFF FFF").unwrap();
        let (leads, tails) = flatten(&columns);
        assert_eq!(leads, "AA AAAAAA AAA");
        assert_eq!(tails, "FFFF FFF FFFFF FFF");
    }

    #[test]
    fn test_distribution_exactness() {
        let columns = merge("AAAAA", "FFFFFFFFFFFFF");
        let total: usize = columns.iter().map(|c| c.tail.len()).sum();
        assert_eq!(total, 13);

        let max = columns.iter().map(|c| c.tail.len()).max().unwrap();
        let min = columns.iter().map(|c| c.tail.len()).min().unwrap();
        assert!(max - min <= 1);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = merge_strings("", "AB", &MergeOptions::default()).unwrap_err();
        assert_eq!(err, LayoutError::EmptyInput);
    }

    #[test]
    fn test_leading_delimiter_rejected() {
        let err = merge_ignoring(" AB", "CD").unwrap_err();
        assert!(matches!(err, LayoutError::DelimiterAtEdge(_)));
    }

    #[test]
    fn test_trailing_delimiter_rejected() {
        let err = merge_ignoring("AB", "CD ").unwrap_err();
        assert!(matches!(err, LayoutError::DelimiterAtEdge(_)));
    }

    #[test]
    fn test_edge_delimiters_allowed_without_ignore() {
        // Strict edge validation only applies under ignore_delimiter;
        // here " AB" is the longer sequence and "CD" drives the columns
        let columns = merge(" AB", "CD");
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].tail, vec![' ', 'A']);
        assert_eq!(columns[1].tail, vec!['B']);
    }

    #[test]
    fn test_delimiter_lead_consumes_nothing() {
        let columns = merge_ignoring("A B", "CDEF").unwrap();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[1].lead, ' ');
        assert!(columns[1].tail.is_empty());
        let (_, tails) = flatten(&columns);
        assert_eq!(tails, "CDEF");
    }

    #[test]
    fn test_repair_backward_borrow() {
        // Column 'b' receives the tail "  " and must borrow backward
        // until a content element arrives.
        let columns = merge_ignoring("abc", "xy   z").unwrap();
        assert_eq!(columns[0].tail, vec!['x']);
        assert_eq!(columns[1].tail, vec!['y', ' ', ' ']);
        assert_eq!(columns[2].tail, vec![' ', 'z']);

        let (leads, tails) = flatten(&columns);
        assert_eq!(leads, "abc");
        assert_eq!(tails, "xy   z");
    }

    #[test]
    fn test_repair_forward_borrow() {
        let options = MergeOptions {
            ignore_delimiter: true,
            borrow: BorrowDirection::Forward,
            ..MergeOptions::default()
        };
        let columns = merge_strings("abc", "xy   z", &options).unwrap();
        assert_eq!(columns[0].tail, vec!['x', 'y']);
        assert_eq!(columns[1].tail, vec![' ', ' ', ' ', 'z']);
        assert_eq!(columns[2].tail, Vec::<char>::new());

        let (_, tails) = flatten(&columns);
        assert_eq!(tails, "xy   z");
    }

    #[test]
    fn test_repair_fixed_point() {
        let options = MergeOptions {
            ignore_delimiter: true,
            ..MergeOptions::default()
        };
        let columns = merge_strings("AA AAAAAA AAA", "FFFF FFF FFFFF FFF", &options).unwrap();
        for column in &columns[..columns.len() - 1] {
            assert!(
                column.is_delimiter_lead(' ') || !column.tail_is_all_delimiter(' '),
                "unrepaired column: {:?}",
                column
            );
        }
    }

    #[test]
    fn test_repair_idempotent() {
        let options = MergeOptions {
            ignore_delimiter: true,
            ..MergeOptions::default()
        };
        let mut columns = merge_strings("abc", "xy   z", &options).unwrap();
        let before = columns.clone();
        repair_columns(&mut columns, &options).unwrap();
        assert_eq!(columns, before);
    }

    #[test]
    fn test_repair_underflow_is_fatal() {
        let options = MergeOptions {
            ignore_delimiter: true,
            ..MergeOptions::default()
        };
        // Handcrafted defect: a violating column with no donor behind it
        let mut columns = vec![
            Column::new('a'),
            Column::with_tail('b', vec![' ']),
            Column::with_tail('c', vec!['x']),
        ];
        let err = repair_columns(&mut columns, &options).unwrap_err();
        assert_eq!(err, LayoutError::RepairUnderflow(0));
    }

    #[test]
    fn test_delimiter_column_allowed_when_configured() {
        let options = MergeOptions {
            ignore_delimiter: true,
            allow_delimiter_column: true,
            ..MergeOptions::default()
        };
        let columns = merge_strings("abc", "xy   z", &options).unwrap();
        // No repair: the middle column keeps its delimiter-only tail
        assert_eq!(columns[1].tail, vec![' ', ' ']);
    }
}
