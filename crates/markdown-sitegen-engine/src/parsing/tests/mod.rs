//! End-to-end tests for the parsing pipeline.
//!
//! Rendered documents are checked with inline `insta` snapshots; tree shape
//! is snapshotted through [`outline::outline`].

mod outline;

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::html::{HtmlError, LeafNode, ParentNode};
use crate::parsing::{
    ParseError, blocks::BlockKind, extract_title, markdown_to_html, markdown_to_html_node,
    parse_blocks,
};

#[test]
fn title_and_paragraph() {
    let md = "# Title\n\nSome *text* here.";
    assert_eq!(
        markdown_to_html_node(md).unwrap(),
        ParentNode::new(
            "div",
            [
                ParentNode::new("h1", [LeafNode::text("Title")]),
                ParentNode::new(
                    "p",
                    [
                        LeafNode::text("Some "),
                        LeafNode::new("i", "text"),
                        LeafNode::text(" here."),
                    ]
                ),
            ]
        )
    );
    assert_snapshot!(
        markdown_to_html(md).unwrap(),
        @"<div><h1>Title</h1><p>Some <i>text</i> here.</p></div>"
    );
}

#[test]
fn unordered_list_document() {
    assert_snapshot!(
        markdown_to_html("- one\n- two").unwrap(),
        @"<div><ul><li>one</li><li>two</li></ul></div>"
    );
}

#[test]
fn every_block_kind() {
    let md = "\
# Heading with **bold**

A paragraph with `code` and a [link](https://example.com).

```
fn main() {}
```

> quoted *words*
> on two lines

1. first
2. second

- ![logo](logo.png)
- plain";
    let root = markdown_to_html_node(md).unwrap();
    assert_snapshot!(outline::outline(&root), @r#"
    div
      h1
        "Heading with "
        b "bold"
      p
        "A paragraph with "
        code "code"
        " and a "
        a href="https://example.com" "link"
        "."
      pre
        code
          "fn main() {}"
      blockquote
        "quoted "
        i "words"
        "\non two lines"
      ol
        li
          "first"
        li
          "second"
      ul
        li
          img src="logo.png" alt="logo"
        li
          "plain"
    "#);
}

#[test]
fn blocks_follow_source_order() {
    let md = "para one\n\n## two\n\n- three\n\n\n\npara four";
    let blocks = parse_blocks(md);
    invariants::check(md, &blocks);
    let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Paragraph,
            BlockKind::Heading { level: 2 },
            BlockKind::UnorderedList,
            BlockKind::Paragraph,
        ]
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\n")]
fn empty_document_has_no_blocks(#[case] md: &str) {
    assert!(parse_blocks(md).is_empty());
    assert_eq!(
        markdown_to_html(md),
        Err(ParseError::Html(HtmlError::EmptyChildren {
            tag: "div".into()
        }))
    );
}

#[test]
fn rendering_is_deterministic() {
    let md = "# T\n\n**b** *i* `c` ![a](x.png) [l](y.com)\n\n> q\n\n1. x\n\n* y";
    let first = markdown_to_html(md).unwrap();
    for _ in 0..10 {
        assert_eq!(markdown_to_html(md).unwrap(), first);
    }
}

#[test]
fn inline_errors_surface_from_the_pipeline() {
    let result = markdown_to_html("# ok\n\nthis is **not closed");
    assert!(matches!(result, Err(ParseError::Inline(_))));
}

#[test]
fn hash_without_space_is_paragraph() {
    assert_snapshot!(markdown_to_html("#Text").unwrap(), @"<div><p>#Text</p></div>");
    assert_snapshot!(markdown_to_html("# Text").unwrap(), @"<div><h1>Text</h1></div>");
}

#[rstest]
#[case("# Hello", "Hello")]
#[case("# Hello world  ", "Hello world")]
#[case("intro\n## Sub\n# Main\n# Second", "Main")]
#[case("text\n\n#   Spaced   \n", "Spaced")]
fn extract_title_finds_first_h1(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(extract_title(md).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("## Only a subheading")]
#[case("#NoSpace")]
#[case(" # indented")]
fn extract_title_requires_h1(#[case] md: &str) {
    assert_eq!(extract_title(md), Err(ParseError::NoTitleFound));
}
