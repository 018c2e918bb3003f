use regex::Regex;
use std::sync::LazyLock;

static MARKDOWN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*_#`]").expect("markdown pattern compiles"));

static PICTOGRAPHS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Extended_Pictographic}").expect("pictograph pattern compiles")
});

/// Text handed to speech synthesis: markdown punctuation and emoji removed.
///
/// Derived from the display text, never written back to it. Applying it to
/// its own output changes nothing.
pub fn speech_text(display_text: &str) -> String {
    let without_markdown = MARKDOWN.replace_all(display_text, "");
    PICTOGRAPHS.replace_all(&without_markdown, "").into_owned()
}
