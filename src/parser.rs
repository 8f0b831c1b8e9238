use crate::models::WikiPage;
use anyhow::{Context, Result};
use bzip2::read::MultiBzDecoder;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fs::File;
use std::io::{BufReader, Read};
use tracing::{error, warn};

#[derive(Default, Clone, Copy, PartialEq, Eq)]
enum Field {
    #[default]
    None,
    Title,
    Ns,
    Id,
    Text,
}

#[derive(Default)]
struct PageState {
    in_page: bool,
    in_revision: bool,
    field: Field,
    id: Option<u64>,
    ns: Option<i32>,
    title: String,
    text: String,
    scalar: String,
}

impl PageState {
    fn start_page(&mut self) {
        *self = PageState {
            in_page: true,
            ..PageState::default()
        };
    }

    fn start_field(&mut self, name: &[u8]) {
        if !self.in_page {
            return;
        }
        self.field = match name {
            b"title" => Field::Title,
            b"ns" => Field::Ns,
            // revisions carry their own <id>
            b"id" if !self.in_revision && self.id.is_none() => Field::Id,
            b"text" if self.in_revision => Field::Text,
            b"revision" => {
                self.in_revision = true;
                Field::None
            }
            _ => Field::None,
        };
        self.scalar.clear();
    }

    fn push(&mut self, chunk: &str) {
        match self.field {
            Field::Title => self.title.push_str(chunk),
            Field::Text => self.text.push_str(chunk),
            Field::Ns | Field::Id => self.scalar.push_str(chunk),
            Field::None => {}
        }
    }

    fn end_field(&mut self, name: &[u8]) {
        match self.field {
            Field::Id => match self.scalar.trim().parse() {
                Ok(id) => self.id = Some(id),
                Err(_) => warn!(value = %self.scalar, "Unparseable page id"),
            },
            Field::Ns => self.ns = self.scalar.trim().parse().ok(),
            _ => {}
        }
        if name == b"revision" {
            self.in_revision = false;
        }
        self.field = Field::None;
    }

    fn finish_page(&mut self) -> WikiPage {
        let state = std::mem::take(self);
        WikiPage {
            id: state.id.unwrap_or_default(),
            title: state.title,
            ns: state.ns,
            text: state.text,
        }
    }
}

/// Streams `<page>` elements out of a MediaWiki XML export, in dump order.
pub struct WikiReader {
    reader: Reader<BufReader<Box<dyn Read>>>,
    buf: Vec<u8>,
    state: PageState,
}

impl WikiReader {
    /// Opens a dump file, decompressing it on the fly when it ends in `.bz2`.
    pub fn open(path: &str) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("Failed to open wiki dump at: {}", path))?;
        let source: Box<dyn Read> = if path.ends_with(".bz2") {
            Box::new(MultiBzDecoder::new(file))
        } else {
            Box::new(file)
        };
        Ok(Self::from_reader(source))
    }

    pub fn from_reader(source: Box<dyn Read>) -> Self {
        Self {
            reader: Reader::from_reader(BufReader::with_capacity(256 * 1024, source)),
            buf: Vec::with_capacity(64 * 1024),
            state: PageState::default(),
        }
    }
}

impl Iterator for WikiReader {
    type Item = WikiPage;

    fn next(&mut self) -> Option<WikiPage> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"page" => self.state.start_page(),
                    name => self.state.start_field(name),
                },
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"page" if self.state.in_page => return Some(self.state.finish_page()),
                    name => self.state.end_field(name),
                },
                Ok(Event::Text(e)) => match e.unescape() {
                    Ok(chunk) => self.state.push(&chunk),
                    Err(err) => {
                        warn!(error = %err, title = %self.state.title, "Skipping undecodable text");
                    }
                },
                Ok(Event::CData(e)) => {
                    let raw = e.into_inner();
                    self.state.push(&String::from_utf8_lossy(&raw));
                }
                Ok(Event::Eof) => return None,
                Err(e) => {
                    error!(
                        position = self.reader.buffer_position(),
                        error = %e,
                        "Malformed XML, stopping"
                    );
                    return None;
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(xml: &'static str) -> Vec<WikiPage> {
        WikiReader::from_reader(Box::new(xml.as_bytes())).collect()
    }

    #[test]
    fn reads_page_fields() {
        let pages = read(
            "<mediawiki><page><title>Anarchism</title><ns>0</ns><id>12</id>\
             <revision><id>999</id><text xml:space=\"preserve\">A [[link]] &amp; more</text></revision>\
             </page></mediawiki>",
        );
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].id, 12);
        assert_eq!(pages[0].ns, Some(0));
        assert_eq!(pages[0].title, "Anarchism");
        assert_eq!(pages[0].text, "A [[link]] & more");
    }

    #[test]
    fn namespace_is_per_page() {
        let pages = read(
            "<mediawiki>\
             <page><title>Category:Physics</title><ns>14</ns><id>1</id><revision><text>a</text></revision></page>\
             <page><title>NoNs</title><id>2</id><revision><text>b</text></revision></page>\
             <page><title>Bad</title><ns>main</ns><id>3</id><revision><text>c</text></revision></page>\
             </mediawiki>",
        );
        let namespaces: Vec<Option<i32>> = pages.iter().map(|p| p.ns).collect();
        assert_eq!(namespaces, [Some(14), None, None]);
    }

    #[test]
    fn preserves_text_whitespace() {
        let pages = read(
            "<mediawiki><page><title>T</title><id>1</id><revision>\
             <text>  lead\n\nbody  </text></revision></page></mediawiki>",
        );
        assert_eq!(pages[0].text, "  lead\n\nbody  ");
    }

    #[test]
    fn empty_text_element() {
        let pages = read(
            "<mediawiki><page><title>Blank</title><id>3</id><revision><text bytes=\"0\" /></revision></page></mediawiki>",
        );
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].text, "");
    }

    #[test]
    fn multiple_pages_in_order() {
        let pages = read(
            "<mediawiki>\
             <page><title>A</title><id>1</id><revision><text>a</text></revision></page>\
             <page><title>B</title><id>2</id><redirect title=\"A\" /><revision><text>#REDIRECT [[A]]</text></revision></page>\
             </mediawiki>",
        );
        let titles: Vec<&str> = pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
        assert_eq!(pages[1].text, "#REDIRECT [[A]]");
    }

    #[test]
    fn malformed_xml_stops_iteration() {
        let pages = read(
            "<mediawiki><page><title>A</title><id>1</id><revision><text>a</text></revision></page>\
             <page><title>B</wrong></page></mediawiki>",
        );
        assert_eq!(pages.len(), 1);
    }
}
