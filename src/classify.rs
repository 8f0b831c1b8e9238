use crate::locale::LocaleMarkers;
use crate::models::Classification;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Name segment of a template invocation: `{{Name}}` or `{{Name|...}}`.
static TEMPLATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([^{}|\n]+?)\s*(?:\||\}\})").unwrap());

/// Page-name segment of a link construct: `[[Target]]` or `[[Target|...]]`.
static LINK_TARGET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^|\[\]\n]+)(?:\|[^\[\]\n]*)?\]\]").unwrap());

/// Decides the page type. Checks run in a fixed order and the first match wins:
/// redirect, disambiguation, title namespace (category, list, image), then
/// unknown for blank pages and article for everything else.
pub fn classify(title: &str, wikitext: &str, markers: &LocaleMarkers) -> Classification {
    let body = wikitext.trim_start();

    if let Some(marker) = markers.redirect_marker_at_start(body) {
        return match redirect_target(&body[marker.len()..]) {
            Some(target) => Classification::Redirect {
                target: target.to_string(),
            },
            None => {
                debug!(title, marker, "Redirect marker without a link target");
                Classification::Unknown
            }
        };
    }

    if is_disambiguation(wikitext, markers) {
        return Classification::Disambiguation;
    }

    if let Some(namespace) = title_namespace(title) {
        if markers.category_aliases().contains(namespace) {
            return Classification::Category;
        }
        if markers.list_aliases().contains(namespace) {
            return Classification::List;
        }
        if markers.image_aliases().contains(namespace) {
            return Classification::ImageDescription;
        }
    }

    if body.is_empty() {
        Classification::Unknown
    } else {
        Classification::Article
    }
}

/// First link target after a redirect marker, in its raw page-name form.
pub fn redirect_target(text: &str) -> Option<&str> {
    LINK_TARGET_REGEX
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .find(|target| !target.is_empty())
}

/// Whether any template invoked in `wikitext` is one of the locale's
/// disambiguation templates. Names match exactly, in the locale table's casing.
pub fn is_disambiguation(wikitext: &str, markers: &LocaleMarkers) -> bool {
    let templates = markers.disambiguation_templates();
    if templates.is_empty() {
        return false;
    }
    TEMPLATE_REGEX
        .captures_iter(wikitext)
        .any(|c| templates.contains(&c[1]))
}

/// Text before the first `:` of a title.
pub fn title_namespace(title: &str) -> Option<&str> {
    title.split_once(':').map(|(namespace, _)| namespace.trim())
}
