//! Question-text normalization.
//!
//! Raw schema text can embed a conditional prefix ("(Only if U3 = Yes) ...")
//! and an inline numbered-option legend ("1=Never, 2=Sometimes, 3=Always").
//! This module strips the former and parses the latter into explicit data,
//! so widget classification never has to look at raw text again.
//!
//! All of this is pure string transformation and idempotent: normalizing
//! already-normalized text is a no-op.

use debrief_types::ChoiceOption;

/// The normalized view of one question's raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuestion {
    /// Text with the conditional prefix and inline "U<n> = Yes" tokens
    /// removed and whitespace collapsed.
    pub normalized_text: String,

    /// Parsed `<int>=<label>` pairs, present only when at least two were
    /// found.
    pub numbered_options: Option<Vec<ChoiceOption>>,

    /// The text shown as the question label: the normalized text with any
    /// numbered-option legend truncated away.
    pub display_label: String,

    /// The `(low, high)` endpoints of a "low ↔ high" display label.
    pub bipolar_ends: Option<(String, String)>,
}

impl NormalizedQuestion {
    /// Normalize and classify the raw text of one question.
    pub fn parse(raw: &str) -> Self {
        let normalized_text = normalize_question_text(raw);
        let numbered_options = parse_numbered_options(&normalized_text);
        let display_label = if numbered_options.is_some() {
            strip_numbered_legend(&normalized_text)
        } else {
            normalized_text.clone()
        };
        let bipolar_ends = bipolar_ends(&display_label);
        Self {
            normalized_text,
            numbered_options,
            display_label,
            bipolar_ends,
        }
    }
}

/// Strip conditional clauses and collapse whitespace.
pub fn normalize_question_text(text: &str) -> String {
    let stripped = strip_leading_condition(text);
    let cleaned = remove_condition_tokens(stripped);
    collapse_whitespace(&cleaned)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Strip a leading conditional clause: either a parenthesized form like
/// "(Only if U3 = Yes)" or a bare "Only if U3 = Yes:" prefix, plus any
/// stray closing parenthesis left behind.
fn strip_leading_condition(text: &str) -> &str {
    let mut rest = text.trim_start();
    if let Some(inner) = rest.strip_prefix('(') {
        if strip_condition_marker(inner.trim_start()).is_some() {
            // Consume up to the first closing paren; an unclosed clause
            // is left alone.
            if let Some(close) = inner.find(')') {
                rest = inner[close + 1..].trim_start();
            }
        }
    } else if let Some(after) = strip_bare_condition(rest) {
        rest = after;
    }
    match rest.strip_prefix(')') {
        Some(tail) => tail.trim_start(),
        None => rest,
    }
}

/// Case-insensitively strip a leading "Only if" or "If" ending on a word
/// boundary. Returns the tail after the marker.
fn strip_condition_marker(text: &str) -> Option<&str> {
    for marker in ["only if", "if"] {
        if let Some(head) = text.get(..marker.len()) {
            if head.eq_ignore_ascii_case(marker) {
                let tail = &text[marker.len()..];
                if !tail.chars().next().is_some_and(is_word_char) {
                    return Some(tail);
                }
            }
        }
    }
    None
}

/// Strip a bare "Only if U3 = Yes" prefix with trailing punctuation.
fn strip_bare_condition(text: &str) -> Option<&str> {
    let tail = strip_condition_marker(text)?;
    // The marker must be separated from the token by whitespace.
    let trimmed = tail.trim_start();
    if trimmed.len() == tail.len() {
        return None;
    }
    let tail = strip_condition_token(trimmed)?;
    let tail = tail.trim_start_matches([':', '.', ')', '-']);
    Some(tail.trim_start())
}

/// Anchored, case-insensitive match of "U<digits> = Yes" ending on a word
/// boundary. Returns the tail after "Yes".
fn strip_condition_token(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(['U', 'u'])?;
    let digit_count = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digit_count == 0 {
        return None;
    }
    let rest = rest[digit_count..].trim_start();
    let rest = rest.strip_prefix('=')?.trim_start();
    let head = rest.get(..3)?;
    if !head.eq_ignore_ascii_case("yes") {
        return None;
    }
    let tail = &rest[3..];
    if tail.chars().next().is_some_and(is_word_char) {
        return None;
    }
    Some(tail)
}

/// Remove every inline "U<n> = Yes" token, respecting word boundaries.
fn remove_condition_tokens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut prev_is_word = false;
    while let Some(c) = rest.chars().next() {
        if (c == 'U' || c == 'u') && !prev_is_word {
            if let Some(tail) = strip_condition_token(rest) {
                rest = tail;
                // The consumed "Yes" remains the left context.
                prev_is_word = true;
                continue;
            }
        }
        out.push(c);
        prev_is_word = is_word_char(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Parse the comma-separated `<int>=<label>` legend out of normalized text.
/// Requires at least two pairs to count as a legend.
fn parse_numbered_options(text: &str) -> Option<Vec<ChoiceOption>> {
    let mut options = Vec::new();
    let mut rest = text;
    while let Some((option, tail)) = next_numbered_option(rest) {
        options.push(option);
        rest = tail;
    }
    (options.len() >= 2).then_some(options)
}

fn next_numbered_option(text: &str) -> Option<(ChoiceOption, &str)> {
    for (start, c) in text.char_indices() {
        if !c.is_ascii_digit() {
            continue;
        }
        let digit_len = text[start..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len() - start);
        let value = &text[start..start + digit_len];
        let after_digits = text[start + digit_len..].trim_start();
        let Some(after_eq) = after_digits.strip_prefix('=') else {
            continue;
        };
        let after_eq = after_eq.trim_start();
        let label_end = after_eq.find(',').unwrap_or(after_eq.len());
        if label_end == 0 {
            continue;
        }
        let label = trim_option_label(&after_eq[..label_end]);
        return Some((ChoiceOption::new(value, label), &after_eq[label_end..]));
    }
    None
}

fn trim_option_label(raw: &str) -> String {
    raw.trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace())
        .to_string()
}

/// Truncate the legend (from the first literal "1=" on) out of the display
/// label and drop a dangling open paren left in front of it.
fn strip_numbered_legend(text: &str) -> String {
    let Some(start) = text.find("1=") else {
        return text.trim().to_string();
    };
    let head = text[..start].trim_end();
    let head = match head.strip_suffix('(') {
        Some(stripped) => stripped.trim_end(),
        None => head,
    };
    head.trim().to_string()
}

/// Split on the last "↔" or "<->" with non-empty trimmed endpoints.
fn bipolar_ends(text: &str) -> Option<(String, String)> {
    let unicode = text.rfind('↔').map(|at| (at, '↔'.len_utf8()));
    let ascii = text.rfind("<->").map(|at| (at, "<->".len()));
    let (at, len) = match (unicode, ascii) {
        (Some(u), Some(a)) => {
            if u.0 > a.0 {
                u
            } else {
                a
            }
        }
        (Some(u), None) => u,
        (None, Some(a)) => a,
        (None, None) => return None,
    };
    let low = text[..at].trim();
    let high = text[at + len..].trim();
    if low.is_empty() || high.is_empty() {
        return None;
    }
    Some((low.to_string(), high.to_string()))
}
