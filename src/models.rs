use crate::config::PARAGRAPH_SEPARATOR;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One `<page>` of a MediaWiki XML export.
#[derive(Debug, Clone)]
pub struct WikiPage {
    pub id: u64,
    pub title: String,
    pub ns: Option<i32>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Classification {
    Article,
    Redirect { target: String },
    Disambiguation,
    Category,
    List,
    ImageDescription,
    Unknown,
}

impl Classification {
    pub fn name(&self) -> &'static str {
        match self {
            Classification::Article => "Article",
            Classification::Redirect { .. } => "Redirect",
            Classification::Disambiguation => "Disambiguation",
            Classification::Category => "Category",
            Classification::List => "List",
            Classification::ImageDescription => "ImageDescription",
            Classification::Unknown => "Unknown",
        }
    }

    /// Whether pages of this kind have their body link-indexed.
    pub fn has_body(&self) -> bool {
        !matches!(
            self,
            Classification::Redirect { .. } | Classification::Unknown
        )
    }
}

/// An internal link, anchored by `[start, end)` code point offsets into either the
/// cleaned article text or a paragraph's text, depending on which list holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub target: String,
    pub description: String,
    pub start: usize,
    pub end: usize,
}

impl Link {
    /// Same link, shifted `by` code points towards the start of the buffer.
    pub fn rebased(&self, by: usize) -> Link {
        Link {
            target: self.target.clone(),
            description: self.description.clone(),
            start: self.start - by,
            end: self.end - by,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed article {title:?}: {detail} ({article_links} article links, {paragraph_links} paragraph links)")]
pub struct MalformedArticleError {
    pub title: String,
    pub article_links: usize,
    pub paragraph_links: usize,
    pub detail: String,
}

/// The structured result for one page, handed to the serializer as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub language: String,
    pub classification: Classification,
    pub cleaned_text: String,
    pub links: Vec<Link>,
    pub paragraphs: Vec<Paragraph>,
}

impl ArticleRecord {
    /// Builds a record for a page whose body was link-indexed, checking that the
    /// paragraphs account for every article link exactly once.
    pub fn new(
        title: String,
        language: String,
        classification: Classification,
        cleaned_text: String,
        links: Vec<Link>,
        paragraphs: Vec<Paragraph>,
    ) -> Result<Self, MalformedArticleError> {
        let paragraph_links: usize = paragraphs.iter().map(|p| p.links.len()).sum();
        let fail = |detail: String| MalformedArticleError {
            title: title.clone(),
            article_links: links.len(),
            paragraph_links,
            detail,
        };

        if paragraph_links != links.len() {
            return Err(fail("paragraph links do not partition article links".into()));
        }

        let separator_len = PARAGRAPH_SEPARATOR.chars().count();
        let mut offset = 0;
        let mut expected = links.iter();
        for (index, paragraph) in paragraphs.iter().enumerate() {
            for link in &paragraph.links {
                let absolute = Link {
                    start: link.start + offset,
                    end: link.end + offset,
                    ..link.clone()
                };
                if expected.next() != Some(&absolute) {
                    return Err(fail(format!(
                        "paragraph {} link {:?} does not line up with the article links",
                        index, link.description
                    )));
                }
            }
            offset += paragraph.text.chars().count() + separator_len;
        }

        Ok(Self {
            title,
            language,
            classification,
            cleaned_text,
            links,
            paragraphs,
        })
    }

    /// Record for a page whose body is not link-indexed (redirects, unknown pages).
    pub fn without_body(title: String, language: String, classification: Classification) -> Self {
        Self {
            title,
            language,
            classification,
            cleaned_text: String::new(),
            links: Vec::new(),
            paragraphs: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(target: &str, description: &str, start: usize) -> Link {
        Link {
            target: target.to_string(),
            description: description.to_string(),
            start,
            end: start + description.chars().count(),
        }
    }

    #[test]
    fn record_accepts_consistent_partition() {
        // "See Rust.\n\nAnd Go."
        let links = vec![link("Rust", "Rust", 4), link("Go", "Go", 15)];
        let paragraphs = vec![
            Paragraph {
                text: "See Rust.".into(),
                links: vec![link("Rust", "Rust", 4)],
            },
            Paragraph {
                text: "And Go.".into(),
                links: vec![link("Go", "Go", 4)],
            },
        ];
        let record = ArticleRecord::new(
            "T".into(),
            "en".into(),
            Classification::Article,
            "See Rust.\n\nAnd Go.".into(),
            links,
            paragraphs,
        );
        assert!(record.is_ok());
    }

    #[test]
    fn record_rejects_lost_link() {
        let links = vec![link("Rust", "Rust", 4), link("Go", "Go", 15)];
        let paragraphs = vec![Paragraph {
            text: "See Rust.".into(),
            links: vec![link("Rust", "Rust", 4)],
        }];
        let err = ArticleRecord::new(
            "T".into(),
            "en".into(),
            Classification::Article,
            "See Rust.\n\nAnd Go.".into(),
            links,
            paragraphs,
        )
        .unwrap_err();
        assert_eq!(err.article_links, 2);
        assert_eq!(err.paragraph_links, 1);
    }

    #[test]
    fn record_rejects_duplicated_link() {
        let links = vec![link("Rust", "Rust", 4)];
        let paragraphs = vec![
            Paragraph {
                text: "See Rust.".into(),
                links: vec![link("Rust", "Rust", 4)],
            },
            Paragraph {
                text: "See Rust.".into(),
                links: vec![link("Rust", "Rust", 4)],
            },
        ];
        let result = ArticleRecord::new(
            "T".into(),
            "en".into(),
            Classification::Article,
            "See Rust.\n\nSee Rust.".into(),
            links,
            paragraphs,
        );
        assert!(result.is_err());
    }

    #[test]
    fn record_rejects_misplaced_offsets() {
        let links = vec![link("Go", "Go", 15)];
        let paragraphs = vec![
            Paragraph {
                text: "See Rust.".into(),
                links: vec![],
            },
            Paragraph {
                text: "And Go.".into(),
                // article-relative offset left in place of the paragraph one
                links: vec![link("Go", "Go", 15)],
            },
        ];
        let result = ArticleRecord::new(
            "T".into(),
            "en".into(),
            Classification::Article,
            "See Rust.\n\nAnd Go.".into(),
            links,
            paragraphs,
        );
        assert!(result.is_err());
    }

    #[test]
    fn classification_serializes_tagged() {
        let json = serde_json::to_string(&Classification::Redirect {
            target: "History_of_Afghanistan".into(),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"type":"Redirect","target":"History_of_Afghanistan"}"#
        );
        let json = serde_json::to_string(&Classification::Article).unwrap();
        assert_eq!(json, r#"{"type":"Article"}"#);
    }

    #[test]
    fn record_json_keeps_offsets_as_integers() {
        let record = ArticleRecord::new(
            "T".into(),
            "en".into(),
            Classification::Article,
            "See Rust.".into(),
            vec![link("Rust", "Rust", 4)],
            vec![Paragraph {
                text: "See Rust.".into(),
                links: vec![link("Rust", "Rust", 4)],
            }],
        )
        .unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["links"][0]["start"], 4);
        assert_eq!(value["links"][0]["end"], 8);

        let back: ArticleRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn body_flag_per_classification() {
        assert!(Classification::Article.has_body());
        assert!(Classification::Category.has_body());
        assert!(!Classification::Unknown.has_body());
        assert!(!Classification::Redirect { target: "X".into() }.has_body());
    }
}
