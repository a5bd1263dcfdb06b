use super::{
    cursor::Cursor,
    kinds::{Image, Link, SpanKind},
    types::TextSpan,
};

/// A `[text](url)` or `![alt](url)` construct located in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Found<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    url: &'a str,
}

/// Returns `(alt, url)` for every `![alt](url)` in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    extract(text, SpanKind::Image)
}

/// Returns `(text, url)` for every `[text](url)` not preceded by `!`.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    extract(text, SpanKind::Link)
}

/// Splits image spans out of every plain span.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split(spans, SpanKind::Image)
}

/// Splits link spans out of every plain span.
///
/// Run after [`split_images`]; a `[` preceded by `!` never opens a link.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split(spans, SpanKind::Link)
}

fn extract(text: &str, kind: SpanKind) -> Vec<(&str, &str)> {
    let mut out = vec![];
    let mut pos = 0;
    while let Some(found) = next_match(text, pos, kind) {
        out.push((found.text, found.url));
        pos = found.end;
    }
    out
}

fn split(spans: Vec<TextSpan>, kind: SpanKind) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() || !span.text.contains(kind.opening()) {
            out.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut pos = 0;
        while let Some(found) = next_match(text, pos, kind) {
            TextSpan::push_plain(&mut out, &text[pos..found.start]);
            out.push(match kind {
                SpanKind::Image => TextSpan::image(found.text, found.url),
                _ => TextSpan::link(found.text, found.url),
            });
            pos = found.end;
        }
        if pos == 0 {
            out.push(span);
        } else {
            TextSpan::push_plain(&mut out, &text[pos..]);
        }
    }
    out
}

/// Finds the first complete construct of `kind` starting at or after `from`.
///
/// Text and URL are the shortest runs that close the construct and may not
/// contain a newline. An opener that does not complete is skipped.
fn next_match(text: &str, from: usize, kind: SpanKind) -> Option<Found<'_>> {
    let open = kind.opening();
    let mut cur = Cursor::new(text, from);

    loop {
        let start = cur.seek(open)?;
        cur.bump_n(open.len());

        if kind == SpanKind::Link && start > 0 && text.as_bytes()[start - 1] == Image::BANG {
            continue;
        }
        if let Some(found) = match_tail(text, start, cur.pos()) {
            return Some(found);
        }
    }
}

fn match_tail(text: &str, start: usize, text_start: usize) -> Option<Found<'_>> {
    let mut cur = Cursor::new(text, text_start);
    let text_end = cur.seek_on_line(Link::TEXT_END)?;
    cur.bump_n(Link::TEXT_END.len());
    let url_start = cur.pos();
    let url_end = cur.seek_on_line(Link::URL_END)?;

    Some(Found {
        start,
        end: url_end + Link::URL_END.len(),
        text: &text[text_start..text_end],
        url: &text[url_start..url_end],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extract_image() {
        let text = "This block includes an image.. ![I'm alt text](image.jpg) before here!";
        assert_eq!(extract_images(text), vec![("I'm alt text", "image.jpg")]);
    }

    #[test]
    fn extract_image_multiple() {
        let text = "An image.. ![I'm alt text](image.jpg) and another: ![I'm alt text too](image2.jpg)";
        assert_eq!(
            extract_images(text),
            vec![
                ("I'm alt text", "image.jpg"),
                ("I'm alt text too", "image2.jpg")
            ]
        );
    }

    #[test]
    fn extract_image_ignores_links() {
        let text = "![I'm alt text](image.jpg) plus a link.. [I'm a link](www.linkedUrl.com)";
        assert_eq!(extract_images(text), vec![("I'm alt text", "image.jpg")]);
    }

    #[test]
    fn extract_link_ignores_images() {
        let text = "A link.. [I'm a link](www.linkedUrl.com) and an image: ![I'm alt text too](image2.jpg)";
        assert_eq!(
            extract_links(text),
            vec![("I'm a link", "www.linkedUrl.com")]
        );
    }

    #[test]
    fn extract_link_multiple() {
        let text = "[one](www.a.com) and [two](www.b.com)";
        assert_eq!(
            extract_links(text),
            vec![("one", "www.a.com"), ("two", "www.b.com")]
        );
    }

    #[test]
    fn construct_may_not_cross_a_line() {
        assert!(extract_links("[broken\ntext](url)").is_empty());
        assert!(extract_links("[text](broken\nurl)").is_empty());
        assert_eq!(extract_links("[a\n[b](c)"), vec![("b", "c")]);
    }

    #[test]
    fn incomplete_constructs_are_not_matched() {
        assert!(extract_links("[text] (url)").is_empty());
        assert!(extract_images("![alt](no close").is_empty());
    }

    #[test]
    fn empty_text_and_url_are_allowed() {
        assert_eq!(extract_images("![](x.png)"), vec![("", "x.png")]);
        assert_eq!(extract_links("[t]()"), vec![("t", "")]);
    }

    #[test]
    fn split_node_with_link() {
        let spans = vec![TextSpan::plain(
            "This block includes a link.. [I'm a link](www.linkedUrl.com) before here!",
        )];
        let out = split_links(spans);
        assert_eq!(
            out,
            vec![
                TextSpan::plain("This block includes a link.. "),
                TextSpan::link("I'm a link", "www.linkedUrl.com"),
                TextSpan::plain(" before here!"),
            ]
        );
        assert_eq!(out[1].url.as_deref(), Some("www.linkedUrl.com"));
    }

    #[test]
    fn split_links_leaves_images_as_text() {
        let spans = vec![TextSpan::plain(
            "A link.. [I'm a link](www.linkedUrl.com) and an image: ![I'm alt text too](image2.jpg)",
        )];
        assert_eq!(
            split_links(spans),
            vec![
                TextSpan::plain("A link.. "),
                TextSpan::link("I'm a link", "www.linkedUrl.com"),
                TextSpan::plain(" and an image: ![I'm alt text too](image2.jpg)"),
            ]
        );
    }

    #[test]
    fn split_images_over_many_spans() {
        let spans = vec![
            TextSpan::plain("Image.. ![I'm alt text](image.jpg) before here!"),
            TextSpan::plain(" I'm all text"),
            TextSpan::bold("![not](split.png)"),
            TextSpan::plain("![a](1.png)![b](2.png)"),
        ];
        let out = split_images(spans);
        assert_eq!(
            out,
            vec![
                TextSpan::plain("Image.. "),
                TextSpan::image("I'm alt text", "image.jpg"),
                TextSpan::plain(" before here!"),
                TextSpan::plain(" I'm all text"),
                TextSpan::bold("![not](split.png)"),
                TextSpan::image("a", "1.png"),
                TextSpan::image("b", "2.png"),
            ]
        );
        assert_eq!(out[6].url.as_deref(), Some("2.png"));
    }

    #[test]
    fn repeated_identical_images_are_all_split() {
        let out = split_images(vec![TextSpan::plain("![a](x) mid ![a](x) end")]);
        assert_eq!(
            out,
            vec![
                TextSpan::image("a", "x"),
                TextSpan::plain(" mid "),
                TextSpan::image("a", "x"),
                TextSpan::plain(" end"),
            ]
        );
    }

    #[test]
    fn unmatched_opener_keeps_span() {
        let spans = vec![TextSpan::plain("just [brackets] here")];
        assert_eq!(
            split_links(spans),
            vec![TextSpan::plain("just [brackets] here")]
        );
    }
}
