//! Link extraction over raw wikitext.
//!
//! A single left-to-right pass copies the wikitext into a cleaned buffer,
//! replacing every `[[target]]` / `[[target|description]]` construct with its
//! description and recording the description's span. Offsets are code point
//! indices into the cleaned buffer, never into the raw markup. Blank lines
//! (two or more `\n`) become a single [`PARAGRAPH_SEPARATOR`] and close the
//! current paragraph, whose links are re-expressed relative to its start.

use crate::config::PARAGRAPH_SEPARATOR;
use crate::models::{Link, Paragraph};
use memchr::{memchr2, memchr3};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub cleaned_text: String,
    pub links: Vec<Link>,
    pub paragraphs: Vec<Paragraph>,
}

struct ParsedLink<'a> {
    target: &'a str,
    description: &'a str,
    /// Byte offset just past the closing `]]`.
    end: usize,
}

/// Parses the link construct opening at byte `open` (which must point at `[[`).
///
/// Returns `None` when the construct is not a link: no `]]` before the end of
/// input, another `[[`, or a newline; or an empty target.
fn parse_link(text: &str, open: usize) -> Option<ParsedLink<'_>> {
    let body_start = open + 2;
    let rest = &text.as_bytes()[body_start..];

    let mut from = 0;
    let close = loop {
        let idx = from + memchr3(b']', b'[', b'\n', &rest[from..])?;
        match rest[idx] {
            b'\n' => return None,
            b']' if rest.get(idx + 1) == Some(&b']') => break idx,
            b'[' if rest.get(idx + 1) == Some(&b'[') => return None,
            _ => from = idx + 1,
        }
    };

    let body = &text[body_start..body_start + close];
    let (target, description) = body.split_once('|').unwrap_or((body, body));
    let target = target.trim();
    if target.is_empty() {
        return None;
    }

    Some(ParsedLink {
        target,
        description,
        end: body_start + close + 2,
    })
}

/// Output buffer with a code point cursor and the paragraph being built.
struct CleanedText {
    text: String,
    chars: usize,
    links: Vec<Link>,
    paragraphs: Vec<Paragraph>,
    paragraph_byte: usize,
    paragraph_char: usize,
    paragraph_first_link: usize,
}

impl CleanedText {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            chars: 0,
            links: Vec::new(),
            paragraphs: Vec::new(),
            paragraph_byte: 0,
            paragraph_char: 0,
            paragraph_first_link: 0,
        }
    }

    fn push_text(&mut self, s: &str) {
        self.text.push_str(s);
        self.chars += s.chars().count();
    }

    fn push_link(&mut self, target: &str, description: &str) {
        let start = self.chars;
        self.push_text(description);
        self.links.push(Link {
            target: target.to_string(),
            description: description.to_string(),
            start,
            end: self.chars,
        });
    }

    fn close_paragraph(&mut self) {
        let links = self.links[self.paragraph_first_link..]
            .iter()
            .map(|link| link.rebased(self.paragraph_char))
            .collect();
        self.paragraphs.push(Paragraph {
            text: self.text[self.paragraph_byte..].to_string(),
            links,
        });
    }

    fn paragraph_break(&mut self) {
        self.close_paragraph();
        self.push_text(PARAGRAPH_SEPARATOR);
        self.paragraph_byte = self.text.len();
        self.paragraph_char = self.chars;
        self.paragraph_first_link = self.links.len();
    }

    fn finish(mut self) -> Extraction {
        self.close_paragraph();
        Extraction {
            cleaned_text: self.text,
            links: self.links,
            paragraphs: self.paragraphs,
        }
    }
}

/// Strips link markup from `wikitext`, returning the cleaned text, its links in
/// order, and its paragraphs. Everything that is not a link construct or a
/// blank line is copied through unchanged.
pub fn extract_links(wikitext: &str) -> Extraction {
    let bytes = wikitext.as_bytes();
    let mut out = CleanedText::with_capacity(wikitext.len());
    // start of text not yet copied to `out`
    let mut run_start = 0;
    let mut pos = 0;

    while let Some(found) = memchr2(b'\n', b'[', &bytes[pos..]) {
        let i = pos + found;

        if bytes[i] == b'\n' {
            let newlines = bytes[i..].iter().take_while(|&&b| b == b'\n').count();
            if newlines >= 2 {
                out.push_text(&wikitext[run_start..i]);
                out.paragraph_break();
                run_start = i + newlines;
            }
            pos = i + newlines;
            continue;
        }

        if bytes.get(i + 1) != Some(&b'[') || bytes.get(i + 2) == Some(&b'[') {
            // lone `[`, or the first of `[[[` which stays literal
            pos = i + 1;
            continue;
        }

        match parse_link(wikitext, i) {
            Some(link) => {
                out.push_text(&wikitext[run_start..i]);
                out.push_link(link.target, link.description);
                pos = link.end;
                run_start = pos;
            }
            None => pos = i + 2,
        }
    }

    out.push_text(&wikitext[run_start..]);
    out.finish()
}

/// The substring of `text` between code point offsets `start` and `end`.
pub fn char_span(text: &str, start: usize, end: usize) -> Option<&str> {
    if start > end {
        return None;
    }
    let byte_at = |n: usize| {
        text.char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(text.len()))
            .nth(n)
    };
    let from = byte_at(start)?;
    let to = byte_at(end)?;
    Some(&text[from..to])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(links: &[Link]) -> Vec<&str> {
        links.iter().map(|l| l.description.as_str()).collect()
    }

    fn assert_spans(extraction: &Extraction) {
        for link in &extraction.links {
            assert_eq!(
                char_span(&extraction.cleaned_text, link.start, link.end),
                Some(link.description.as_str())
            );
        }
        for paragraph in &extraction.paragraphs {
            for link in &paragraph.links {
                assert_eq!(
                    char_span(&paragraph.text, link.start, link.end),
                    Some(link.description.as_str())
                );
            }
        }
    }

    #[test]
    fn plain_link() {
        let e = extract_links("Rust is a [[programming language]].");
        assert_eq!(e.cleaned_text, "Rust is a programming language.");
        assert_eq!(e.links.len(), 1);
        assert_eq!(e.links[0].target, "programming language");
        assert_eq!(e.links[0].start, 10);
        assert_eq!(e.links[0].end, 30);
        assert_spans(&e);
    }

    #[test]
    fn piped_link_uses_description() {
        let e = extract_links("See [[C++|C plus plus]] and [[Mozilla]].");
        assert_eq!(e.cleaned_text, "See C plus plus and Mozilla.");
        assert_eq!(descriptions(&e.links), ["C plus plus", "Mozilla"]);
        assert_eq!(e.links[0].target, "C++");
        assert_spans(&e);
    }

    #[test]
    fn pipe_splits_at_first_occurrence() {
        let e = extract_links("[[File:X.png|thumb|Caption]]");
        assert_eq!(e.links[0].target, "File:X.png");
        assert_eq!(e.links[0].description, "thumb|Caption");
        assert_eq!(e.cleaned_text, "thumb|Caption");
    }

    #[test]
    fn empty_description_is_zero_length_span() {
        let e = extract_links("before [[Target|]] after");
        assert_eq!(e.cleaned_text, "before  after");
        assert_eq!(e.links.len(), 1);
        assert_eq!(e.links[0].start, 7);
        assert_eq!(e.links[0].end, 7);
        assert_eq!(e.paragraphs[0].links[0].start, 7);
        assert_spans(&e);
    }

    #[test]
    fn empty_target_is_literal() {
        let e = extract_links("a [[]] b [[|shown]] c [[ ]]");
        assert_eq!(e.cleaned_text, "a [[]] b [[|shown]] c [[ ]]");
        assert!(e.links.is_empty());
    }

    #[test]
    fn unclosed_link_is_literal() {
        let e = extract_links("broken [[link here");
        assert_eq!(e.cleaned_text, "broken [[link here");
        assert!(e.links.is_empty());
    }

    #[test]
    fn link_reopened_before_close() {
        let e = extract_links("[[File:A.jpg|thumb|a [[cat]] photo]] end");
        assert_eq!(e.cleaned_text, "[[File:A.jpg|thumb|a cat photo]] end");
        assert_eq!(descriptions(&e.links), ["cat"]);
        assert_eq!(e.links[0].start, 21);
        assert_spans(&e);
    }

    #[test]
    fn triple_bracket_keeps_first_literal() {
        let e = extract_links("[[[Rust]]]");
        assert_eq!(e.cleaned_text, "[Rust]");
        assert_eq!(e.links[0].start, 1);
        assert_eq!(e.links[0].end, 5);
        assert_spans(&e);
    }

    #[test]
    fn single_brackets_are_text() {
        let e = extract_links("[http://example.com site] and [x]");
        assert_eq!(e.cleaned_text, "[http://example.com site] and [x]");
        assert!(e.links.is_empty());
    }

    #[test]
    fn newline_inside_construct_is_not_a_link() {
        let e = extract_links("[[Foo\nbar]] and [[Baz]]");
        assert_eq!(e.cleaned_text, "[[Foo\nbar]] and Baz");
        assert_eq!(descriptions(&e.links), ["Baz"]);
        assert_spans(&e);
    }

    #[test]
    fn offsets_count_code_points() {
        let e = extract_links("Ünîcödé → [[Zürich|Zürich city]] ✓ [[日本]]");
        assert_eq!(e.cleaned_text, "Ünîcödé → Zürich city ✓ 日本");
        assert_eq!(e.links[0].start, 10);
        assert_eq!(e.links[0].end, 21);
        assert_eq!(e.links[1].start, 24);
        assert_eq!(e.links[1].end, 26);
        assert_spans(&e);
    }

    #[test]
    fn paragraphs_rebase_links() {
        let e = extract_links("First [[A]].\n\nSecond [[B|bee]] and [[C]].");
        assert_eq!(e.cleaned_text, "First A.\n\nSecond bee and C.");
        assert_eq!(e.paragraphs.len(), 2);
        assert_eq!(e.paragraphs[0].text, "First A.");
        assert_eq!(e.paragraphs[1].text, "Second bee and C.");
        assert_eq!(e.paragraphs[1].links[0].start, 7);
        assert_eq!(e.links[1].start, 17);
        assert_eq!(e.paragraphs[1].links[1].start, 15);
        assert_eq!(e.links[2].start, 25);
        assert_spans(&e);
    }

    #[test]
    fn blank_line_runs_collapse() {
        let e = extract_links("one\n\n\n\ntwo\nstill two\n\nthree");
        assert_eq!(e.cleaned_text, "one\n\ntwo\nstill two\n\nthree");
        let texts: Vec<&str> = e.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["one", "two\nstill two", "three"]);
    }

    #[test]
    fn paragraphs_reconstruct_text() {
        let e = extract_links("\n\nlead [[x]]\n\n\nbody\n\n");
        let joined = e
            .paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(PARAGRAPH_SEPARATOR);
        assert_eq!(joined, e.cleaned_text);
        assert_eq!(e.paragraphs.first().map(|p| p.text.as_str()), Some(""));
        assert_eq!(e.paragraphs.last().map(|p| p.text.as_str()), Some(""));
    }

    #[test]
    fn partition_counts_match() {
        let e = extract_links("[[a]] [[b]]\n\n[[c]]\n\nno links\n\n[[d|]]");
        let per_paragraph: usize = e.paragraphs.iter().map(|p| p.links.len()).sum();
        assert_eq!(per_paragraph, e.links.len());
        assert_eq!(e.links.len(), 4);
    }

    #[test]
    fn empty_input_has_one_empty_paragraph() {
        let e = extract_links("");
        assert_eq!(e.cleaned_text, "");
        assert!(e.links.is_empty());
        assert_eq!(e.paragraphs.len(), 1);
    }

    #[test]
    fn unrecognized_markup_copied_through() {
        let text = "'''Bold''' {{cite|x=[1]}} <ref>r</ref> == H ==";
        let e = extract_links(text);
        assert_eq!(e.cleaned_text, text);
    }

    #[test]
    fn char_span_bounds() {
        assert_eq!(char_span("héllo", 1, 3), Some("él"));
        assert_eq!(char_span("héllo", 5, 5), Some(""));
        assert_eq!(char_span("héllo", 4, 6), None);
        assert_eq!(char_span("héllo", 3, 2), None);
    }
}
