//! Directives embedded in chatbot replies.
//!
//! The chat backend mixes machine instructions into its free-text replies as
//! bracketed tokens:
//!
//! ```text
//! [NAVIGATE: <path>]   move the client to <path>
//! [ACTION: <name>]     run a UI action (THEME_DARK / THEME_LIGHT)
//! ```
//!
//! The keyword is case-sensitive, exactly one space follows the colon, and
//! the argument is one or more characters other than `]`. Unbalanced or
//! otherwise malformed brackets are ordinary text.
//!
//! At most one directive of each kind is extracted: the first `NAVIGATE`,
//! then the first `ACTION` in the text that remains. The returned list is
//! always Navigate-before-UiAction regardless of where the tokens sat in
//! the reply; backends rely on that precedence. Further tokens are still
//! stripped from the display text but never executed.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static NAVIGATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[NAVIGATE: ([^\]]+)\]").expect("navigate pattern compiles"));

static ACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[ACTION: ([^\]]+)\]").expect("action pattern compiles"));

static ANY_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:NAVIGATE|ACTION): [^\]]+\]").expect("directive pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedDirective {
    /// Route change to `target_path`, unvalidated.
    Navigate { target_path: String },
    /// UI action by name, unvalidated.
    UiAction { action_name: String },
}

/// A reply split into what the user sees and what the client executes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReply {
    pub display_text: String,
    pub directives: Vec<ParsedDirective>,
}

impl ParsedReply {
    pub fn navigate_target(&self) -> Option<&str> {
        self.directives.iter().find_map(|d| match d {
            ParsedDirective::Navigate { target_path } => Some(target_path.as_str()),
            ParsedDirective::UiAction { .. } => None,
        })
    }

    pub fn action_name(&self) -> Option<&str> {
        self.directives.iter().find_map(|d| match d {
            ParsedDirective::UiAction { action_name } => Some(action_name.as_str()),
            ParsedDirective::Navigate { .. } => None,
        })
    }
}

/// Separate `raw` into display text and directives.
///
/// Text without any directive comes back byte-for-byte unchanged. Otherwise
/// each matched bracket span is cut out, the whitespace around the cut
/// collapses to a single separator, and the result is trimmed.
pub fn parse_reply(raw: &str) -> ParsedReply {
    let mut text = raw.to_string();
    let mut directives = Vec::new();

    if let Some((span, target_path)) = first_capture(&NAVIGATE, &text) {
        directives.push(ParsedDirective::Navigate { target_path });
        text = cut(&text, span);
    }

    if let Some((span, action_name)) = first_capture(&ACTION, &text) {
        directives.push(ParsedDirective::UiAction { action_name });
        text = cut(&text, span);
    }

    // Extra tokens are display residue only. Each cut shrinks the text, so
    // this terminates even if a cut joins two halves into a new token.
    while let Some(span) = ANY_DIRECTIVE.find(&text).map(|m| m.range()) {
        text = cut(&text, span);
    }

    ParsedReply {
        display_text: text,
        directives,
    }
}

/// True when `text` still holds something the grammar would match.
pub fn contains_directive(text: &str) -> bool {
    ANY_DIRECTIVE.is_match(text)
}

fn first_capture(pattern: &Regex, text: &str) -> Option<(Range<usize>, String)> {
    let caps = pattern.captures(text)?;
    let whole = caps.get(0)?;
    let arg = caps.get(1)?;
    Some((whole.range(), arg.as_str().to_string()))
}

fn cut(text: &str, span: Range<usize>) -> String {
    let left = &text[..span.start];
    let right = &text[span.end..];
    let left_kept = left.trim_end();
    let right_kept = right.trim_start();

    let separator = if left_kept.is_empty() || right_kept.is_empty() {
        ""
    } else if left[left_kept.len()..].contains('\n')
        || right[..right.len() - right_kept.len()].contains('\n')
    {
        "\n"
    } else {
        " "
    };

    format!("{left_kept}{separator}{right_kept}")
        .trim()
        .to_string()
}
