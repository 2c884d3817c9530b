/// Validates translator output invariants.
///
/// Asserts that:
/// - Every `<ul>`, `<ol>` and `<p>` line is closed by its matching tag
/// - Block tags never nest
/// - `<li>` lines only appear inside a list
/// - Headings and `<br/>` only appear outside any block
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(html: &str) {
    let mut open: Option<&str> = None;

    for (idx, line) in html.lines().enumerate() {
        let n = idx + 1;
        match line {
            "<ul>" | "<ol>" | "<p>" => {
                assert!(
                    open.is_none(),
                    "line {n}: {line} opened inside {open:?}\n{html}"
                );
                open = Some(line);
            }
            "</ul>" | "</ol>" | "</p>" => {
                let expected = open.map(|tag| format!("</{}", &tag[1..]));
                assert_eq!(
                    expected.as_deref(),
                    Some(line),
                    "line {n}: unbalanced close tag\n{html}"
                );
                open = None;
            }
            "<br/>" => assert!(open.is_none(), "line {n}: <br/> inside {open:?}\n{html}"),
            _ if line.starts_with("<li>") => assert!(
                matches!(open, Some("<ul>" | "<ol>")),
                "line {n}: list item outside a list\n{html}"
            ),
            _ if line.starts_with("<h") && line.as_bytes().get(2).is_some_and(u8::is_ascii_digit) => {
                assert!(open.is_none(), "line {n}: heading inside {open:?}\n{html}")
            }
            _ => {}
        }
    }

    assert!(open.is_none(), "unclosed block {open:?} at end of output\n{html}");
}
