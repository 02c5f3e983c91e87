use scraper::{ElementRef, Html};

/// Reduces an HTML fragment to its text content.
///
/// Tags are dropped, their text is kept and character references are
/// decoded. Input without markup is returned unchanged.
pub fn sanitize(value: &str) -> String {
    if !value.contains('<') && !value.contains('&') {
        return value.to_string();
    }
    Html::parse_fragment(value)
        .root_element()
        .text()
        .collect()
}

/// Converts a description written in the WordPress editor to plain text.
///
/// `div` and `br` elements end a line. List items start on a new line with a
/// `- ` marker; an item that does not begin with text gets the line break
/// only. Inline lists typed as `a, - b` are split onto separate lines too.
pub fn description_to_text(value: &str) -> String {
    let fragment = Html::parse_fragment(value);
    let mut text = String::with_capacity(value.len());
    push_block_text(fragment.root_element(), &mut text);
    text.replace(", -", ",\n-")
}

fn push_block_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            continue;
        }
        let Some(child_element) = ElementRef::wrap(child) else {
            continue;
        };
        let tag = child_element.value().name();
        if tag == "li" {
            if starts_with_text(child_element) {
                out.push_str("\n- ");
            } else {
                out.push('\n');
            }
        }
        push_block_text(child_element, out);
        if matches!(tag, "div" | "br") {
            out.push('\n');
        }
    }
}

fn starts_with_text(element: ElementRef<'_>) -> bool {
    element
        .children()
        .next()
        .and_then(|node| node.value().as_text())
        .is_some_and(|text| !text.is_empty())
}
