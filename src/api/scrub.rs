use std::borrow::Cow;

const MAX_API_ERROR_CHARS: usize = 200;

const MARKER_PATTERNS: [&str; 6] = [
    "Authorization: Bearer ",
    "\"token\":\"",
    "\"password\":\"",
    "\"api_key\":\"",
    "xi-api-key: ",
    "token=",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

fn token_end(input: &str, from: usize) -> usize {
    let mut end = from;
    for (i, c) in input[from..].char_indices() {
        if is_secret_char(c) {
            end = from + i + c.len_utf8();
        } else {
            break;
        }
    }
    end
}

fn scrub_after_marker(scrubbed: &mut String, marker: &str) -> bool {
    let mut modified = false;
    let mut search_from = 0;
    loop {
        let Some(rel) = scrubbed[search_from..].find(marker) else {
            break;
        };

        let start = search_from + rel;
        let content_start = start + marker.len();
        let end = token_end(scrubbed, content_start);

        // Skip bare markers without a token value.
        if end == content_start {
            search_from = content_start;
            continue;
        }

        scrubbed.replace_range(content_start..end, "[REDACTED]");
        modified = true;
        search_from = content_start + "[REDACTED]".len();
    }

    modified
}

/// Redact session tokens, passwords and keys from backend error bodies.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    if !MARKER_PATTERNS.iter().any(|marker| input.contains(marker)) {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    let mut modified = false;
    for marker in MARKER_PATTERNS {
        modified |= scrub_after_marker(&mut scrubbed, marker);
    }

    if modified {
        Cow::Owned(scrubbed)
    } else {
        Cow::Borrowed(input)
    }
}

/// Scrub and truncate a response body for inclusion in an error message.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);

    if scrubbed.chars().count() <= MAX_API_ERROR_CHARS {
        return scrubbed.into_owned();
    }

    let truncated: String = scrubbed.chars().take(MAX_API_ERROR_CHARS).collect();
    format!("{truncated}...")
}
