use crate::models::{ArticleRecord, Classification};
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics collected during the extraction process
#[derive(Default)]
pub struct ExtractionStats {
    pub pages_processed: AtomicU64,
    pub articles: AtomicU64,
    pub redirects: AtomicU64,
    pub disambiguations: AtomicU64,
    pub categories: AtomicU64,
    pub lists: AtomicU64,
    pub image_descriptions: AtomicU64,
    pub unknown: AtomicU64,
    pub links_extracted: AtomicU64,
    pub paragraphs_extracted: AtomicU64,
    pub pages_rejected: AtomicU64,
    pub records_written: AtomicU64,
}

impl ExtractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a successfully built record under its classification.
    pub fn record(&self, record: &ArticleRecord) {
        self.pages_processed.fetch_add(1, Ordering::Relaxed);
        let counter = match record.classification {
            Classification::Article => &self.articles,
            Classification::Redirect { .. } => &self.redirects,
            Classification::Disambiguation => &self.disambiguations,
            Classification::Category => &self.categories,
            Classification::List => &self.lists,
            Classification::ImageDescription => &self.image_descriptions,
            Classification::Unknown => &self.unknown,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.links_extracted
            .fetch_add(record.links.len() as u64, Ordering::Relaxed);
        self.paragraphs_extracted
            .fetch_add(record.paragraphs.len() as u64, Ordering::Relaxed);
    }

    pub fn inc_rejected(&self) {
        self.pages_processed.fetch_add(1, Ordering::Relaxed);
        self.pages_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_written(&self) {
        self.records_written.fetch_add(1, Ordering::Relaxed);
    }

    pub fn pages(&self) -> u64 {
        self.pages_processed.load(Ordering::Relaxed)
    }

    pub fn articles(&self) -> u64 {
        self.articles.load(Ordering::Relaxed)
    }

    pub fn redirects(&self) -> u64 {
        self.redirects.load(Ordering::Relaxed)
    }

    pub fn disambiguations(&self) -> u64 {
        self.disambiguations.load(Ordering::Relaxed)
    }

    pub fn categories(&self) -> u64 {
        self.categories.load(Ordering::Relaxed)
    }

    pub fn lists(&self) -> u64 {
        self.lists.load(Ordering::Relaxed)
    }

    pub fn image_descriptions(&self) -> u64 {
        self.image_descriptions.load(Ordering::Relaxed)
    }

    pub fn unknown(&self) -> u64 {
        self.unknown.load(Ordering::Relaxed)
    }

    pub fn links(&self) -> u64 {
        self.links_extracted.load(Ordering::Relaxed)
    }

    pub fn paragraphs(&self) -> u64 {
        self.paragraphs_extracted.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> u64 {
        self.pages_rejected.load(Ordering::Relaxed)
    }

    pub fn written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }
}
