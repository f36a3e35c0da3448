use scraper::Html;

/// Text content of a rendered HTML fragment: tags dropped, entities decoded,
/// surrounding whitespace trimmed.
pub fn strip_tags(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}
