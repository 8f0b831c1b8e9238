//! Per-language marker sets used to classify pages.
//!
//! Markers come from two sources: the built-in redirect table in
//! [`crate::locale_data`] and locale property files (`locale-<code>.properties`),
//! either compiled into the binary or loaded from a directory at startup. The
//! registry is built once and never mutated afterwards, so it can be shared
//! across worker threads by reference.

use crate::config::{
    CANONICAL_REDIRECT, LOCALE_FILE_PREFIX, LOCALE_FILE_SUFFIX, LOCALE_VALUE_SEPARATOR,
    REDIRECT_TABLE_SEPARATOR,
};
use crate::locale_data::{EMBEDDED_LOCALES, REDIRECT_TABLE};
use rustc_hash::{FxHashMap, FxHashSet};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("failed to read locale file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: malformed \\uXXXX escape in {content:?}")]
    MalformedEscape { line: usize, content: String },
}

/// Insertion-ordered set of literal marker strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    ordered: Vec<String>,
    index: FxHashSet<String>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `marker` unless an identical string is already present.
    pub fn insert(&mut self, marker: &str) -> bool {
        if self.index.contains(marker) {
            return false;
        }
        self.index.insert(marker.to_string());
        self.ordered.push(marker.to_string());
        true
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.index.contains(marker)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Marker sets for one language. Always contains [`CANONICAL_REDIRECT`] among
/// its redirect markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMarkers {
    language_code: String,
    language_name: Option<String>,
    redirect_markers: MarkerSet,
    /// Redirect markers sorted longest first, for prefix matching.
    redirect_match_order: Vec<String>,
    disambiguation_templates: MarkerSet,
    category_aliases: MarkerSet,
    image_aliases: MarkerSet,
    list_aliases: MarkerSet,
}

impl LocaleMarkers {
    pub fn builder(language_code: &str) -> LocaleMarkersBuilder {
        LocaleMarkersBuilder {
            language_code: language_code.to_string(),
            language_name: None,
            redirect_markers: MarkerSet::new(),
            disambiguation_templates: MarkerSet::new(),
            category_aliases: MarkerSet::new(),
            image_aliases: MarkerSet::new(),
            list_aliases: MarkerSet::new(),
        }
    }

    /// Markers for a language without locale data: the canonical redirect token only.
    pub fn fallback(language_code: &str) -> Self {
        Self::builder(language_code).build()
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn language_name(&self) -> Option<&str> {
        self.language_name.as_deref()
    }

    /// Redirect markers in declaration order.
    pub fn redirect_markers(&self) -> &[String] {
        self.redirect_markers.as_slice()
    }

    /// The most idiomatic local redirect term (first declared).
    pub fn preferred_redirect_marker(&self) -> &str {
        self.redirect_markers
            .as_slice()
            .first()
            .map(String::as_str)
            .unwrap_or(CANONICAL_REDIRECT)
    }

    /// Longest redirect marker that `text` starts with.
    pub fn redirect_marker_at_start(&self, text: &str) -> Option<&str> {
        self.redirect_match_order
            .iter()
            .find(|marker| text.starts_with(marker.as_str()))
            .map(String::as_str)
    }

    pub fn disambiguation_templates(&self) -> &MarkerSet {
        &self.disambiguation_templates
    }

    pub fn category_aliases(&self) -> &MarkerSet {
        &self.category_aliases
    }

    pub fn image_aliases(&self) -> &MarkerSet {
        &self.image_aliases
    }

    pub fn list_aliases(&self) -> &MarkerSet {
        &self.list_aliases
    }
}

pub struct LocaleMarkersBuilder {
    language_code: String,
    language_name: Option<String>,
    redirect_markers: MarkerSet,
    disambiguation_templates: MarkerSet,
    category_aliases: MarkerSet,
    image_aliases: MarkerSet,
    list_aliases: MarkerSet,
}

fn extend<I, S>(set: &mut MarkerSet, values: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for value in values {
        set.insert(value.as_ref());
    }
}

impl LocaleMarkersBuilder {
    pub fn language_name(mut self, name: &str) -> Self {
        self.language_name = Some(name.to_string());
        self
    }

    pub fn redirects<I: IntoIterator<Item = S>, S: AsRef<str>>(mut self, values: I) -> Self {
        extend(&mut self.redirect_markers, values);
        self
    }

    pub fn disambiguation<I: IntoIterator<Item = S>, S: AsRef<str>>(mut self, values: I) -> Self {
        extend(&mut self.disambiguation_templates, values);
        self
    }

    pub fn categories<I: IntoIterator<Item = S>, S: AsRef<str>>(mut self, values: I) -> Self {
        extend(&mut self.category_aliases, values);
        self
    }

    pub fn images<I: IntoIterator<Item = S>, S: AsRef<str>>(mut self, values: I) -> Self {
        extend(&mut self.image_aliases, values);
        self
    }

    pub fn lists<I: IntoIterator<Item = S>, S: AsRef<str>>(mut self, values: I) -> Self {
        extend(&mut self.list_aliases, values);
        self
    }

    pub fn build(mut self) -> LocaleMarkers {
        self.redirect_markers.insert(CANONICAL_REDIRECT);

        let mut redirect_match_order = self.redirect_markers.as_slice().to_vec();
        // stable sort keeps declaration order among equal lengths
        redirect_match_order.sort_by_key(|marker| std::cmp::Reverse(marker.len()));

        LocaleMarkers {
            language_code: self.language_code,
            language_name: self.language_name,
            redirect_markers: self.redirect_markers,
            redirect_match_order,
            disambiguation_templates: self.disambiguation_templates,
            category_aliases: self.category_aliases,
            image_aliases: self.image_aliases,
            list_aliases: self.list_aliases,
        }
    }
}

/// Parsed contents of a locale property file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleProperties {
    values: FxHashMap<String, Vec<String>>,
}

/// Whitespace as the properties format defines it.
const PROPERTY_WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

/// Joins natural lines ending in an odd number of backslashes with the next
/// one and drops comments. Each logical line keeps the number of its first line.
fn logical_lines(contents: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, raw) in contents.lines().enumerate() {
        let natural = raw.trim_start_matches(PROPERTY_WHITESPACE);
        let (number, mut line) = match pending.take() {
            Some(continued) => continued,
            None if natural.is_empty() || natural.starts_with(['#', '!']) => continue,
            None => (index + 1, String::new()),
        };

        let trailing = natural.bytes().rev().take_while(|&b| b == b'\\').count();
        if trailing % 2 == 1 {
            line.push_str(&natural[..natural.len() - 1]);
            pending = Some((number, line));
        } else {
            line.push_str(natural);
            lines.push((number, line));
        }
    }

    lines.extend(pending);
    lines
}

/// Splits at the first unescaped `=`, `:` or whitespace. Whitespace around the
/// separator belongs to neither side.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let split = line.char_indices().find(|&(_, c)| {
        if escaped {
            escaped = false;
            return false;
        }
        escaped = c == '\\';
        c == '=' || c == ':' || PROPERTY_WHITESPACE.contains(&c)
    });

    let Some((at, _)) = split else {
        return (line, "");
    };
    let rest = line[at..].trim_start_matches(PROPERTY_WHITESPACE);
    let rest = match rest.strip_prefix(['=', ':']) {
        Some(value) => value.trim_start_matches(PROPERTY_WHITESPACE),
        None => rest,
    };
    (&line[..at], rest)
}

fn hex_unit(chars: &mut std::str::Chars<'_>) -> Option<u16> {
    let digits: String = chars.take(4).collect();
    if digits.len() != 4 {
        return None;
    }
    u16::from_str_radix(&digits, 16).ok()
}

/// Decodes `\t`, `\n`, `\r`, `\f` and `\uXXXX` (surrogate pairs included); any
/// other escaped character stands for itself. `None` on a broken `\u` escape.
fn unescape(text: &str) -> Option<String> {
    if !text.contains('\\') {
        return Some(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = hex_unit(&mut chars)?;
                let mut units = vec![unit];
                if (0xD800..0xDC00).contains(&unit) {
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return None;
                    }
                    units.push(hex_unit(&mut chars)?);
                }
                for decoded in char::decode_utf16(units) {
                    out.push(decoded.ok()?);
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Some(out)
}

impl LocaleProperties {
    /// Parses the properties format: `key=value`, `key: value` or `key value`
    /// lines, `#` and `!` comments, backslash line continuations and escapes.
    /// Values are comma separated.
    pub fn parse(contents: &str) -> Result<Self, LocaleError> {
        let mut values = FxHashMap::default();

        for (number, line) in logical_lines(contents) {
            let (key, value) = split_key_value(&line);
            let malformed = || LocaleError::MalformedEscape {
                line: number,
                content: line.clone(),
            };
            let key = unescape(key).ok_or_else(malformed)?;
            let value = unescape(value).ok_or_else(malformed)?;

            let parsed: Vec<String> = value
                .split(LOCALE_VALUE_SEPARATOR)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
            values.insert(key, parsed);
        }

        Ok(Self { values })
    }

    /// Reads a locale file. Files that are not valid UTF-8 are read as ISO-8859-1.
    pub fn read(path: &Path) -> Result<Self, LocaleError> {
        let bytes = fs::read(path).map_err(|source| LocaleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let contents = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
        };
        Self::parse(&contents)
    }

    pub fn get(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Combines the built-in redirect row (if any) with a property file (if any).
fn assemble(
    code: &str,
    table_row: Option<&str>,
    properties: Option<&LocaleProperties>,
) -> LocaleMarkers {
    let mut builder = LocaleMarkers::builder(code);

    if let Some(row) = table_row {
        builder = builder.redirects(
            row.split(REDIRECT_TABLE_SEPARATOR)
                .filter(|m| !m.is_empty()),
        );
    }

    if let Some(props) = properties {
        if let Some(name) = props.get("language").first() {
            builder = builder.language_name(name);
        }
        builder = builder
            .redirects(props.get("redirect"))
            .disambiguation(props.get("disambiguation"))
            .categories(props.get("category"))
            .images(props.get("image"))
            .lists(props.get("list"));
    }

    builder.build()
}

/// Language code to marker sets, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    locales: FxHashMap<String, LocaleMarkers>,
}

impl LocaleRegistry {
    /// Registry from the built-in redirect table and the embedded property files.
    pub fn builtin() -> Self {
        Self::from_properties(embedded_properties())
    }

    /// Built-in registry with `locale-<code>.properties` files from `dir` taking the
    /// place of the embedded ones. Unreadable files are logged and skipped.
    pub fn with_locale_dir(dir: &Path) -> Self {
        let mut properties = embedded_properties();

        match read_locale_dir(dir) {
            Ok(found) => {
                info!(dir = %dir.display(), locales = found.len(), "Loaded locale files");
                properties.extend(found);
            }
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Locale directory unreadable, using built-in locales");
            }
        }

        Self::from_properties(properties)
    }

    fn from_properties(properties: FxHashMap<String, LocaleProperties>) -> Self {
        let table: FxHashMap<&str, &str> = REDIRECT_TABLE.iter().copied().collect();

        let mut codes: Vec<&str> = table.keys().copied().collect();
        codes.extend(properties.keys().map(String::as_str));
        codes.sort_unstable();
        codes.dedup();

        let locales = codes
            .into_iter()
            .map(|code| {
                let markers = assemble(code, table.get(code).copied(), properties.get(code));
                (code.to_string(), markers)
            })
            .collect();

        Self { locales }
    }

    /// Markers for `language_code`. Never fails: an unknown code yields the
    /// fallback markers (canonical redirect token only) and a warning.
    pub fn load(&self, language_code: &str) -> Cow<'_, LocaleMarkers> {
        let markers = self.lookup(language_code);
        if matches!(markers, Cow::Owned(_)) {
            warn!(
                language = language_code,
                "No locale data for language, only {} will be recognized", CANONICAL_REDIRECT
            );
        }
        markers
    }

    /// Same as [`load`](Self::load) without the warning, for per-page callers.
    pub fn lookup(&self, language_code: &str) -> Cow<'_, LocaleMarkers> {
        match self.locales.get(language_code) {
            Some(markers) => Cow::Borrowed(markers),
            None => Cow::Owned(LocaleMarkers::fallback(language_code)),
        }
    }

    pub fn contains(&self, language_code: &str) -> bool {
        self.locales.contains_key(language_code)
    }

    /// Known language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

fn embedded_properties() -> FxHashMap<String, LocaleProperties> {
    EMBEDDED_LOCALES
        .iter()
        .filter_map(|(code, contents)| match LocaleProperties::parse(contents) {
            Ok(props) => Some((code.to_string(), props)),
            Err(e) => {
                warn!(language = code, error = %e, "Embedded locale file is malformed");
                None
            }
        })
        .collect()
}

fn read_locale_dir(dir: &Path) -> std::io::Result<FxHashMap<String, LocaleProperties>> {
    let mut found = FxHashMap::default();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(code) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_prefix(LOCALE_FILE_PREFIX))
            .and_then(|name| name.strip_suffix(LOCALE_FILE_SUFFIX))
        else {
            continue;
        };

        match LocaleProperties::read(&path) {
            Ok(props) => {
                debug!(language = code, path = %path.display(), "Read locale file");
                found.insert(code.to_string(), props);
            }
            Err(e) => {
                warn!(language = code, error = %e, "Skipping unreadable locale file");
            }
        }
    }

    Ok(found)
}
