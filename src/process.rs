use crate::classify::classify;
use crate::links::{extract_links, Extraction};
use crate::locale::{LocaleMarkers, LocaleRegistry};
use crate::models::{ArticleRecord, MalformedArticleError};

/// A raw page as handed over by a dump reader.
#[derive(Debug, Clone, Copy)]
pub struct PageInput<'a> {
    pub title: &'a str,
    pub wikitext: &'a str,
    pub language: &'a str,
}

/// Classifies a page and, unless it is a redirect or unknown, indexes its links.
pub fn process_page(
    page: &PageInput<'_>,
    markers: &LocaleMarkers,
) -> Result<ArticleRecord, MalformedArticleError> {
    let classification = classify(page.title, page.wikitext, markers);

    if !classification.has_body() {
        return Ok(ArticleRecord::without_body(
            page.title.to_string(),
            page.language.to_string(),
            classification,
        ));
    }

    let Extraction {
        cleaned_text,
        links,
        paragraphs,
    } = extract_links(page.wikitext);

    ArticleRecord::new(
        page.title.to_string(),
        page.language.to_string(),
        classification,
        cleaned_text,
        links,
        paragraphs,
    )
}

/// Looks up the page's language in `registry` and processes it. Unknown
/// languages use the fallback markers without logging; callers that want the
/// warning call [`LocaleRegistry::load`] once per language.
pub fn process_with_registry(
    page: &PageInput<'_>,
    registry: &LocaleRegistry,
) -> Result<ArticleRecord, MalformedArticleError> {
    let markers = registry.lookup(page.language);
    process_page(page, &markers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Classification;

    fn page<'a>(title: &'a str, wikitext: &'a str, language: &'a str) -> PageInput<'a> {
        PageInput {
            title,
            wikitext,
            language,
        }
    }

    #[test]
    fn redirect_record_has_no_body() {
        let registry = LocaleRegistry::builtin();
        let record = process_with_registry(
            &page(
                "AfghanistanHistory",
                "#REDIRECT [[History_of_Afghanistan]] {{R from CamelCase}}",
                "en",
            ),
            &registry,
        )
        .unwrap();
        assert_eq!(
            record.classification,
            Classification::Redirect {
                target: "History_of_Afghanistan".into()
            }
        );
        assert!(record.cleaned_text.is_empty());
        assert!(record.links.is_empty());
        assert!(record.paragraphs.is_empty());
    }

    #[test]
    fn article_record_carries_links() {
        let registry = LocaleRegistry::builtin();
        let record = process_with_registry(
            &page(
                "Anarchism",
                "'''Anarchism''' is a [[political philosophy]].\n\nIt rejects [[State (polity)|the state]].",
                "en",
            ),
            &registry,
        )
        .unwrap();
        assert_eq!(record.classification, Classification::Article);
        assert_eq!(record.language, "en");
        assert_eq!(record.links.len(), 2);
        assert_eq!(record.paragraphs.len(), 2);
        assert_eq!(record.links[1].target, "State (polity)");
        assert_eq!(record.paragraphs[1].links[0].description, "the state");
    }

    #[test]
    fn disambiguation_record_is_link_indexed() {
        let registry = LocaleRegistry::builtin();
        let record = process_with_registry(
            &page(
                "Mercury",
                "'''Mercury''' may refer to:\n* [[Mercury (planet)]]\n* [[Mercury (element)]]\n{{Disambiguation}}",
                "en",
            ),
            &registry,
        )
        .unwrap();
        assert_eq!(record.classification, Classification::Disambiguation);
        assert_eq!(record.links.len(), 2);
    }

    #[test]
    fn blank_page_is_unknown() {
        let registry = LocaleRegistry::builtin();
        let record = process_with_registry(&page("Blank", "", "nl"), &registry).unwrap();
        assert_eq!(record.classification, Classification::Unknown);
        assert!(record.paragraphs.is_empty());
    }

    #[test]
    fn unknown_language_shard_uses_fallback_for_every_page() {
        let registry = LocaleRegistry::builtin();
        let pages = [
            page("A", "#REDIRECT [[X]]", "zz-nonexistent"),
            page("B", "Text with {{Disambiguation}}", "zz-nonexistent"),
            page("Category:C", "Members.", "zz-nonexistent"),
        ];
        let kinds: Vec<Classification> = pages
            .iter()
            .map(|p| process_with_registry(p, &registry).unwrap().classification)
            .collect();
        assert_eq!(
            kinds,
            [
                Classification::Redirect { target: "X".into() },
                Classification::Article,
                Classification::Article,
            ]
        );
    }

    #[test]
    fn unknown_language_still_processes() {
        let registry = LocaleRegistry::builtin();
        let record =
            process_with_registry(&page("A", "#REDIRECT [[X]]", "zz-nonexistent"), &registry)
                .unwrap();
        assert_eq!(
            record.classification,
            Classification::Redirect { target: "X".into() }
        );
    }
}
