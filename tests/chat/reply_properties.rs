use sdherbs::chat::{ParsedDirective, contains_directive, parse_reply};

/// Replies shaped like what the chatbot service actually sends.
const REPLIES: &[&str] = &[
    "Sure! [NAVIGATE: /products]",
    "Switching to dark mode 🌙 [ACTION: THEME_DARK]",
    "[ACTION: THEME_DARK] [NAVIGATE: /products]",
    "Here is our story.\n[NAVIGATE: /about]\nAnything else?",
    "Two pages? [NAVIGATE: /about] or [NAVIGATE: /contact]",
    "Light it is [ACTION: THEME_LIGHT] [ACTION: THEME_DARK]",
    "Nested [NAVIGATE: /a[NAVIGATE: /b]] text",
    "Broken [NAVIGATE /products] and [navigate: /x] stay",
    "Empty [NAVIGATE: ] argument",
    "🌿 *Tulsi Drops* — Holy basil extract",
    "",
    "[NAVIGATE: /contact]",
];

#[test]
fn display_text_never_carries_a_directive() {
    for reply in REPLIES {
        let parsed = parse_reply(reply);
        assert!(
            !contains_directive(&parsed.display_text),
            "residue in {:?} -> {:?}",
            reply,
            parsed.display_text
        );
    }
}

#[test]
fn parsing_display_text_again_changes_nothing() {
    for reply in REPLIES {
        let once = parse_reply(reply);
        let twice = parse_reply(&once.display_text);
        assert_eq!(twice.display_text, once.display_text, "for {reply:?}");
        assert!(twice.directives.is_empty(), "for {reply:?}");
    }
}

#[test]
fn at_most_one_of_each_kind_navigate_first() {
    for reply in REPLIES {
        let directives = parse_reply(reply).directives;
        assert!(directives.len() <= 2, "for {reply:?}");

        let navigates = directives
            .iter()
            .filter(|d| matches!(d, ParsedDirective::Navigate { .. }))
            .count();
        assert!(navigates <= 1, "for {reply:?}");

        if let [first, second] = directives.as_slice() {
            assert!(matches!(first, ParsedDirective::Navigate { .. }));
            assert!(matches!(second, ParsedDirective::UiAction { .. }));
        }
    }
}

#[test]
fn first_of_each_kind_is_the_one_executed() {
    let parsed = parse_reply("Two pages? [NAVIGATE: /about] or [NAVIGATE: /contact]");
    assert_eq!(parsed.navigate_target(), Some("/about"));
    assert_eq!(parsed.display_text, "Two pages? or");

    let parsed = parse_reply("Light it is [ACTION: THEME_LIGHT] [ACTION: THEME_DARK]");
    assert_eq!(parsed.action_name(), Some("THEME_LIGHT"));
    assert_eq!(parsed.display_text, "Light it is");
}

#[test]
fn malformed_tokens_are_plain_text() {
    for reply in [
        "Broken [NAVIGATE /products] and [navigate: /x] stay",
        "Empty [NAVIGATE: ] argument",
    ] {
        let parsed = parse_reply(reply);
        assert!(parsed.directives.is_empty());
        assert_eq!(parsed.display_text, reply);
    }
}

#[test]
fn newlines_around_a_cut_are_kept_as_one() {
    let parsed = parse_reply("Here is our story.\n[NAVIGATE: /about]\nAnything else?");
    assert_eq!(parsed.display_text, "Here is our story.\nAnything else?");
    assert_eq!(parsed.navigate_target(), Some("/about"));
}

#[test]
fn json_shape_is_tagged() {
    let parsed = parse_reply("Sure! [NAVIGATE: /products] [ACTION: THEME_DARK]");
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "display_text": "Sure!",
            "directives": [
                {"kind": "navigate", "target_path": "/products"},
                {"kind": "ui_action", "action_name": "THEME_DARK"}
            ]
        })
    );
}
