use crate::config::{BATCH_SIZE, PROGRESS_INTERVAL, WRITER_BUFFER_SIZE};
use crate::locale::{LocaleMarkers, LocaleRegistry};
use crate::models::{ArticleRecord, MalformedArticleError, WikiPage};
use crate::parser::WikiReader;
use crate::process::{process_page, PageInput};
use crate::stats::ExtractionStats;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, error, info};

/// Reads every page of the dump at `input`, classifies and link-indexes it
/// with the markers for `language`, and writes one JSON record per line to
/// `output`. Pages are processed in parallel batches; output keeps dump order.
///
/// A page whose record fails the paragraph/link accounting check is logged and
/// skipped; the run continues.
pub fn run_extraction(
    input: &str,
    output: &str,
    language: &str,
    registry: &LocaleRegistry,
    limit: Option<u64>,
    dry_run: bool,
) -> Result<ExtractionStats> {
    let markers = registry.load(language);
    info!(
        language,
        redirect_markers = markers.redirect_markers().len(),
        disambiguation_templates = markers.disambiguation_templates().len(),
        "Using locale"
    );

    let reader = WikiReader::open(input)?;

    let mut writer = if dry_run {
        None
    } else {
        if let Some(parent) = Path::new(output).parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
        }
        let file = File::create(output)
            .with_context(|| format!("Failed to create output file: {}", output))?;
        Some(BufWriter::with_capacity(WRITER_BUFFER_SIZE, file))
    };

    let stats = ExtractionStats::new();
    let pb = ProgressBar::new_spinner();
    let limit = limit.and_then(|l| usize::try_from(l).ok()).unwrap_or(usize::MAX);

    let mut batch: Vec<WikiPage> = Vec::with_capacity(BATCH_SIZE);
    for page in reader.take(limit) {
        batch.push(page);
        if batch.len() == BATCH_SIZE {
            process_batch(&batch, language, &markers, &stats, writer.as_mut(), &pb)?;
            batch.clear();
        }
    }
    if !batch.is_empty() {
        process_batch(&batch, language, &markers, &stats, writer.as_mut(), &pb)?;
    }

    if let Some(mut w) = writer {
        w.flush().context("Failed to flush output file")?;
    }
    pb.finish_and_clear();

    info!(
        pages = stats.pages(),
        links = stats.links(),
        rejected = stats.rejected(),
        "Extraction finished"
    );

    Ok(stats)
}

fn process_batch<W: Write>(
    batch: &[WikiPage],
    language: &str,
    markers: &LocaleMarkers,
    stats: &ExtractionStats,
    mut writer: Option<&mut W>,
    pb: &ProgressBar,
) -> Result<()> {
    let results: Vec<Result<ArticleRecord, MalformedArticleError>> = batch
        .par_iter()
        .map(|page| {
            let input = PageInput {
                title: &page.title,
                wikitext: &page.text,
                language,
            };
            process_page(&input, markers)
        })
        .collect();

    for (page, result) in batch.iter().zip(results) {
        match result {
            Ok(record) => {
                stats.record(&record);
                debug!(
                    id = page.id,
                    ns = ?page.ns,
                    title = %page.title,
                    kind = record.classification.name(),
                    links = record.links.len(),
                    "Processed page"
                );
                if let Some(w) = writer.as_deref_mut() {
                    write_record(w, &record)?;
                    stats.inc_written();
                }
            }
            Err(e) => {
                stats.inc_rejected();
                error!(id = page.id, ns = ?page.ns, title = %page.title, error = %e, "Rejected page");
            }
        }

        if stats.pages() % PROGRESS_INTERVAL == 0 {
            pb.set_message(format!("{} pages", stats.pages()));
            pb.tick();
        }
    }

    Ok(())
}

/// Writes `record` as a single JSON line.
pub fn write_record<W: Write>(writer: &mut W, record: &ArticleRecord) -> Result<()> {
    serde_json::to_writer(&mut *writer, record).context("Failed to serialize record")?;
    writer.write_all(b"\n").context("Failed to write record")?;
    Ok(())
}
