//! Theseus: locale-aware classification and link extraction for MediaWiki dumps
//!
//! This crate turns raw MediaWiki pages (title, wikitext, language code) into
//! structured records: what kind of page it is, where a redirect points, and
//! which internal links the page contains, each anchored to exact character
//! offsets in both its paragraph and the full cleaned text.
//!
//! # Pipeline
//!
//! 1. **Locale lookup** -- The [`locale::LocaleRegistry`] is built once at startup
//!    from the built-in redirect table and locale property files. Unknown
//!    languages degrade to the canonical `#REDIRECT` token instead of failing
//! 2. **Classification** -- [`classify::classify`] decides between redirect,
//!    disambiguation, category, list, image description, article and unknown,
//!    in that priority order
//! 3. **Link extraction** -- [`links::extract_links`] strips `[[...]]` markup,
//!    recording each link's rendered description and its span in the cleaned
//!    text, and splits the cleaned text into paragraphs at blank lines
//! 4. **Record** -- [`models::ArticleRecord`] checks that the paragraphs account
//!    for every link exactly once
//!
//! # Offsets
//!
//! Link offsets are half-open `[start, end)` ranges counted in Unicode code
//! points over the cleaned text (markup removed), never over the raw wikitext.
//! For every link `cleaned_text[start..end] == description`, and the same holds
//! for paragraph links against their paragraph's text.
//!
//! # Key Modules
//!
//! - [`parser`] -- Streaming XML dump reader with BZ2 decompression
//! - [`locale`] -- Marker sets per language and the registry
//! - [`locale_data`] -- Built-in redirect table and embedded locale files
//! - [`classify`] -- Page type classification
//! - [`links`] -- Link extraction and paragraph partitioning
//! - [`models`] -- Core data types (WikiPage, Classification, Link, ArticleRecord)
//! - [`process`] -- Per-page glue from raw page to record
//! - [`extract`] -- Parallel batch processing into JSON lines
//! - [`stats`] -- Thread-safe atomic counters for extraction metrics
//! - [`config`] -- Constants
//!
//! # Example Usage
//!
//! ```bash
//! # Extract an English dump into JSON lines
//! theseus extract -i enwiki-latest-pages-articles.xml.bz2 -o enwiki.jsonl -l en
//!
//! # Show the marker sets used for French
//! theseus locale fr
//! ```

pub mod classify;
pub mod config;
pub mod extract;
pub mod links;
pub mod locale;
pub mod locale_data;
pub mod models;
pub mod parser;
pub mod process;
pub mod stats;
