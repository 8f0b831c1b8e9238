use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use theseus::locale::LocaleRegistry;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "theseus")]
#[command(about = "Classify MediaWiki dump pages and extract their internal links")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a dump into line-delimited JSON records
    Extract(ExtractArgs),
    /// Show the marker sets used for a language
    Locale(LocaleArgs),
}

#[derive(Args)]
struct ExtractArgs {
    /// Path to the Wikipedia dump file (.xml or .xml.bz2)
    #[arg(short, long)]
    input: String,

    /// Output file for JSON lines
    #[arg(short, long)]
    output: String,

    /// Language code of the dump (e.g. en, fr, ja)
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Directory of locale-<code>.properties files overriding the built-in ones
    #[arg(long)]
    locale_dir: Option<PathBuf>,

    /// Limit number of pages to process (for testing)
    #[arg(long)]
    limit: Option<u64>,

    /// Dry run - don't write output files
    #[arg(long)]
    dry_run: bool,
}

#[derive(Args)]
struct LocaleArgs {
    /// Language code
    language: String,

    /// Directory of locale-<code>.properties files overriding the built-in ones
    #[arg(long)]
    locale_dir: Option<PathBuf>,
}

fn build_registry(locale_dir: Option<&PathBuf>) -> LocaleRegistry {
    match locale_dir {
        Some(dir) => LocaleRegistry::with_locale_dir(dir),
        None => LocaleRegistry::builtin(),
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let registry = build_registry(args.locale_dir.as_ref());
    info!(locales = registry.len(), "Locale registry ready");

    let start = Instant::now();
    let stats = theseus::extract::run_extraction(
        &args.input,
        &args.output,
        &args.language,
        &registry,
        args.limit,
        args.dry_run,
    )?;
    let duration = start.elapsed();

    println!();
    println!("=== Summary ===");
    println!("Extraction time:    {:.2}s", duration.as_secs_f64());
    println!();
    println!("Pages processed:    {}", stats.pages());
    println!("Articles:           {}", stats.articles());
    println!("Redirects:          {}", stats.redirects());
    println!("Disambiguations:    {}", stats.disambiguations());
    println!("Categories:         {}", stats.categories());
    println!("Lists:              {}", stats.lists());
    println!("Image descriptions: {}", stats.image_descriptions());
    println!("Unknown:            {}", stats.unknown());
    println!("Links extracted:    {}", stats.links());
    println!("Paragraphs:         {}", stats.paragraphs());
    println!("Rejected pages:     {}", stats.rejected());
    println!("Records written:    {}", stats.written());

    Ok(())
}

fn run_locale(args: LocaleArgs) -> Result<()> {
    let registry = build_registry(args.locale_dir.as_ref());
    let markers = registry.load(&args.language);

    let join = |values: &[String]| values.join(", ");

    println!("Language:           {}", markers.language_code());
    if let Some(name) = markers.language_name() {
        println!("Name:               {}", name);
    }
    if !registry.contains(&args.language) {
        println!("(no locale data, using fallback markers)");
    }
    println!("Preferred redirect: {}", markers.preferred_redirect_marker());
    println!("Redirect markers:   {}", join(markers.redirect_markers()));
    println!(
        "Disambiguation:     {}",
        join(markers.disambiguation_templates().as_slice())
    );
    println!(
        "Category aliases:   {}",
        join(markers.category_aliases().as_slice())
    );
    println!(
        "Image aliases:      {}",
        join(markers.image_aliases().as_slice())
    );
    println!(
        "List aliases:       {}",
        join(markers.list_aliases().as_slice())
    );

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let result = match cli.command {
        Commands::Extract(args) => run_extract(args),
        Commands::Locale(args) => run_locale(args),
    };

    match result {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
