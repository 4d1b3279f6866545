//! API configuration constants

/// Default bind address
///
/// Local development port.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Bind address
pub const ENV_BIND_ADDR: &str = "ANAGRAMS_API_BASE_URL";

/// TOML configuration file. When set, the per-field variables below are ignored.
pub const ENV_CONFIG: &str = "ANAGRAMS_CONFIG";

/// Index directory
pub const ENV_DATA_DIR: &str = "ANAGRAMS_DATA_DIR";

/// Reference English word list
pub const ENV_WORDS_PATH: &str = "ANAGRAMS_WORDS_PATH";

/// Tagged lexicon
pub const ENV_TAGS_PATH: &str = "ANAGRAMS_TAGS_PATH";

/// IndexWriter memory budget (bytes)
pub const ENV_WRITER_MEMORY_BYTES: &str = "ANAGRAMS_WRITER_MEMORY_BYTES";

/// Log level
pub const ENV_LOG_LEVEL: &str = "ANAGRAMS_LOG_LEVEL";
