use directory_engine::strip_tags;

#[test]
fn strips_markup_and_trims() {
    assert_eq!(
        strip_tags("<p>Fresh <strong>crabs</strong> daily.</p>\n"),
        "Fresh crabs daily."
    );
}

#[test]
fn decodes_entities() {
    assert_eq!(strip_tags("Bob&#8217;s Bait &amp; Tackle"), "Bob\u{2019}s Bait & Tackle");
}

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(strip_tags("Just text"), "Just text");
    assert_eq!(strip_tags(""), "");
}

#[test]
fn nested_and_unclosed_tags_are_dropped() {
    assert_eq!(
        strip_tags("<div><p>Open <em>late</p> on weekends"),
        "Open late on weekends"
    );
}
