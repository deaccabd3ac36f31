//! Word-level diff between two texts.

use serde::{Deserialize, Serialize};

use crate::change::ChangeType;
use crate::lcs::{edit_script, Step};

/// One token of a word-level diff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiff {
    pub text: String,
    #[serde(rename = "type")]
    pub change: ChangeType,
}

impl WordDiff {
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            change: ChangeType::Unchanged,
        }
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            change: ChangeType::Added,
        }
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            change: ChangeType::Removed,
        }
    }
}

/// Word separator: Unicode white space plus the byte order mark, minus
/// NEXT LINE (U+0085). This is the `\s` class of ECMAScript regexes.
fn is_separator(ch: char) -> bool {
    ch == '\u{feff}' || (ch.is_whitespace() && ch != '\u{85}')
}

/// Split `text` on runs of whitespace.
///
/// Leading or trailing whitespace yields an empty token at that edge, and an
/// empty string yields a single empty token. Internal runs of any length are
/// one boundary.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = false;

    for (idx, ch) in text.char_indices() {
        if is_separator(ch) {
            if !in_space {
                tokens.push(&text[start..idx]);
                in_space = true;
            }
        } else if in_space {
            start = idx;
            in_space = false;
        }
    }
    tokens.push(if in_space { "" } else { &text[start..] });
    tokens
}

/// Diff two texts word by word.
///
/// Tokens are aligned with an LCS on exact equality. With
/// `ignore_whitespace`, leading and trailing whitespace is trimmed before
/// tokenizing; internal runs collapse either way.
pub fn diff_words(old_text: &str, new_text: &str, ignore_whitespace: bool) -> Vec<WordDiff> {
    let (old_text, new_text) = if ignore_whitespace {
        (old_text.trim_matches(is_separator), new_text.trim_matches(is_separator))
    } else {
        (old_text, new_text)
    };

    let old = tokenize(old_text);
    let new = tokenize(new_text);

    edit_script(&old, &new, |a, b| a == b)
        .into_iter()
        .map(|step| match step {
            Step::Keep(_, j) => WordDiff::unchanged(new[j]),
            Step::Delete(i) => WordDiff::removed(old[i]),
            Step::Insert(j) => WordDiff::added(new[j]),
        })
        .collect()
}
