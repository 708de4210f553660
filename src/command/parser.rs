//! Raw line tokenization.
//!
//! Splits one input line into a command name and an ordered list of
//! (flag, value) pairs. No semantic matching happens here; which declared
//! slot a flag targets is resolved later by the binder.

use crate::error::{HandbaseError, Result};

/// One parsed (flag, value) pair.
///
/// The flag token is normalized: leading dashes stripped, lowercased.
/// `value` is `None` when the flag was the final, unpaired fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagPair {
    pub flag: String,
    pub value: Option<String>,
}

/// A tokenized input line: the command name and its parameter pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub name: String,
    pub pairs: Vec<FlagPair>,
}

/// Normalize a flag token: strip leading `-`/`--`, lowercase.
pub fn normalize_flag(token: &str) -> String {
    token.trim_start_matches('-').to_lowercase()
}

/// Tokenize one raw input line.
///
/// Splits on whitespace, discarding empty fragments. The first fragment is
/// the command name; the rest are grouped strictly pairwise in positional
/// order as (flag, value). An odd trailing fragment becomes a pair with no
/// value token.
///
/// Fails with [`HandbaseError::EmptyInput`] on a blank line.
pub fn parse_line(line: &str) -> Result<ParsedLine> {
    let mut fragments = line.split_whitespace();
    let name = fragments.next().ok_or(HandbaseError::EmptyInput)?.to_string();

    let rest: Vec<&str> = fragments.collect();
    let mut pairs = Vec::with_capacity(rest.len() / 2 + 1);
    for chunk in rest.chunks(2) {
        pairs.push(FlagPair {
            flag: normalize_flag(chunk[0]),
            value: chunk.get(1).map(|v| (*v).to_string()),
        });
    }

    Ok(ParsedLine { name, pairs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_empty_input() {
        for line in ["", "   ", "\t \n"] {
            assert!(matches!(
                parse_line(line),
                Err(HandbaseError::EmptyInput)
            ));
        }
    }

    #[test]
    fn bare_name_has_no_pairs() {
        let parsed = parse_line("showallinfo").unwrap();
        assert_eq!(parsed.name, "showallinfo");
        assert!(parsed.pairs.is_empty());
    }

    #[test]
    fn pairs_are_positional() {
        let parsed = parse_line("showplayer --n alice").unwrap();
        assert_eq!(parsed.name, "showplayer");
        assert_eq!(
            parsed.pairs,
            vec![FlagPair {
                flag: "n".into(),
                value: Some("alice".into()),
            }]
        );
    }

    #[test]
    fn flags_are_normalized_but_values_are_not() {
        let parsed = parse_line("showplayer --N Alice").unwrap();
        assert_eq!(parsed.pairs[0].flag, "n");
        assert_eq!(parsed.pairs[0].value.as_deref(), Some("Alice"));
    }

    #[test]
    fn single_dash_and_double_dash_normalize_identically() {
        assert_eq!(normalize_flag("-h"), "h");
        assert_eq!(normalize_flag("--h"), "h");
        assert_eq!(normalize_flag("--Hand"), "hand");
    }

    #[test]
    fn odd_trailing_fragment_has_no_value() {
        let parsed = parse_line("deletehand --h 42 --force").unwrap();
        assert_eq!(parsed.pairs.len(), 2);
        assert_eq!(parsed.pairs[1].flag, "force");
        assert_eq!(parsed.pairs[1].value, None);
    }

    #[test]
    fn extra_whitespace_is_discarded() {
        let parsed = parse_line("  deletehand    --h   42  ").unwrap();
        assert_eq!(parsed.name, "deletehand");
        assert_eq!(parsed.pairs[0].value.as_deref(), Some("42"));
    }
}
