//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_CONFIG, ENV_DATA_DIR, ENV_LOG_LEVEL, ENV_TAGS_PATH,
  ENV_WORDS_PATH, ENV_WRITER_MEMORY_BYTES,
};
pub use env::Config;
