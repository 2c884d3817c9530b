//! Fixture tests for the translator.
//!
//! Each `fixtures/<name>.md` is translated and compared with
//! `fixtures/<name>.html`, then checked for balanced block tags.

mod invariants;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{Translator, translate, translate_lines};

// Fixture-based tests

#[rstest]
#[case::headings("headings")]
#[case::lists("lists")]
#[case::paragraphs("paragraphs")]
#[case::extensions("extensions")]
#[case::readme("readme")]
#[case::blank_only("blank_only")]
#[case::crlf("crlf")]
fn fixture(#[case] name: &str) {
    assert_fixture(name);
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let html = translate(&md);
    invariants::check(&html);
    assert_eq!(html, expected, "fixture {name}");
}

// Documented examples

#[test]
fn heading_document() {
    assert_eq!(translate("# Title\n"), "<h1>Title</h1>\n");
}

#[test]
fn list_wrapped_once() {
    assert_eq!(
        translate("- item1\n- item2\n"),
        "<ul>\n<li>item1</li>\n<li>item2</li>\n</ul>\n"
    );
}

#[test]
fn bold_document() {
    assert_eq!(translate("**bold**\n"), "<p>\n<b>bold</b>\n</p>\n");
}

#[test]
fn hash_document() {
    assert_eq!(
        translate("[[hello]]\n"),
        "<p>\n5d41402abc4b2a76b9719d911017c592\n</p>\n"
    );
}

#[test]
fn strip_document() {
    assert_eq!(translate("((Cat))\n"), "<p>\nat\n</p>\n");
}

#[test]
fn empty_document() {
    assert_eq!(translate(""), "");
}

#[test]
fn blank_document_is_only_breaks() {
    for blanks in 1..=5 {
        let md = "\n".repeat(blanks);
        let html = translate(&md);
        assert_eq!(html, "<br/>\n".repeat(blanks));
        invariants::check(&html);
    }
}

#[test]
fn unterminated_document_is_flushed() {
    assert_eq!(translate("* last"), "<ol>\n<li>last</li>\n</ol>\n");
}

// Entry points agree

#[test]
fn translate_lines_matches_translate() {
    let md = "# A\n- b\n\nc\nd\n";
    let fragments = translate_lines(md.lines());
    assert_eq!(format!("{}\n", fragments.join("\n")), translate(md));
}

#[test]
fn translator_reports_state_between_lines() {
    let mut translator = Translator::new();
    assert_eq!(translator.push_line("text"), vec!["<p>", "text"]);
    assert!(translator.state().paragraph_open);
    assert_eq!(translator.finish(), vec!["</p>"]);
}

#[test]
fn mixed_document_fragments() {
    let fragments = translate_lines([
        "## **Big** news",
        "- one",
        "* two",
        "__quiet__ ((Cc))end",
    ]);
    insta::assert_debug_snapshot!(fragments, @r#"
    [
        "<h2><b>Big</b> news</h2>",
        "<ul>",
        "<li>one</li>",
        "</ul>",
        "<ol>",
        "<li>two</li>",
        "</ol>",
        "<p>",
        "<em>quiet</em> end",
        "</p>",
    ]
    "#);
}
