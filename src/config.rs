/// Redirect token the wiki engine accepts in every language, localized or not
pub const CANONICAL_REDIRECT: &str = "#REDIRECT";

/// Separator between paragraphs of cleaned text
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Locale files are named `locale-<code>.properties`
pub const LOCALE_FILE_PREFIX: &str = "locale-";
pub const LOCALE_FILE_SUFFIX: &str = ".properties";

/// Separator between values of a locale property
pub const LOCALE_VALUE_SEPARATOR: char = ',';

/// Separator between markers in the built-in redirect table
pub const REDIRECT_TABLE_SEPARATOR: char = '|';

/// Pages handed to the worker pool at once
pub const BATCH_SIZE: usize = 2048;

/// Progress update interval (tick every N pages)
pub const PROGRESS_INTERVAL: u64 = 1000;

/// Buffer size for the JSON lines writer
pub const WRITER_BUFFER_SIZE: usize = 128 * 1024;
