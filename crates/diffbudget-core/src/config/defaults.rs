// Single source of truth for all default values.

// --- Budget ---
pub const DEFAULT_MAX_TOKENS: usize = 32_000;
pub const DEFAULT_OVERHEAD_RESERVE: usize = 200;

// --- Context ---
pub const DEFAULT_MAX_EXTRA_LINES: usize = 10;
pub const DEFAULT_CLIPPED_CONTEXT_LINES: usize = 2;
pub const DEFAULT_SYNTH_CONTEXT_LINES: usize = 3;

// --- Ranking ---
pub const DEFAULT_MAIN_LANGUAGE_BONUS: i64 = 100;
pub const DEFAULT_VOLUME_CAP: usize = 50;
pub const DEFAULT_CONFIG_ADJUSTMENT: i64 = 10;
pub const DEFAULT_TEST_ADJUSTMENT: i64 = -5;
pub const DEFAULT_GENERATED_ADJUSTMENT: i64 = -20;

// --- Filter ---
pub const DEFAULT_SKIP_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "svg", "webp", "tiff", "psd", "mp3", "mp4",
    "wav", "avi", "mov", "ogg", "flac", "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar", "war", "ear", "exe", "dll",
    "so", "dylib", "a", "o", "obj", "class", "pyc", "pyo", "wasm", "bin", "dat", "db",
    "sqlite", "ttf", "otf", "woff", "woff2", "eot", "lockb",
];

// --- Output ---
pub const DEFAULT_LINE_NUMBERS: bool = false;

// --- Tokenizer ---
pub const DEFAULT_ENCODING: &str = "cl100k_base";
pub const DEFAULT_TOKEN_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_CHARS_PER_TOKEN: usize = 4;
pub const KNOWN_ENCODINGS: &[&str] = &["cl100k_base", "o200k_base", "chars", "ratio"];

// --- Logging ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_ENV_VAR: &str = "DIFFBUDGET_LOG";
