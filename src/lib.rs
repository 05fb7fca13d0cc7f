//! # tinyconf
//!
//! A tiny reader and writer for flat `key=value` configuration files.
//!
//! The format has no sections, quoting or escaping:
//!
//! ```text
//! key1=value1
//! key2 = value2   # inline comment allowed after value or on its own line
//! # full-line comment
//! key-with-dash=123
//! ```
//!
//! - `=` and surrounding whitespace separate a key from its value
//! - `#` starts a comment that runs to the end of the line
//! - keys and values are single tokens: they start with an ASCII letter,
//!   digit or `-` and end at whitespace, `=` or a line break
//!
//! ## Features
//!
//! - **Ordered table**: pairs keep file order; duplicate keys are kept and
//!   the first one wins on lookup
//! - **Typed accessors**: [`Config::get_int`], [`Config::get_float`],
//!   [`Config::get_bool`] report malformed numbers instead of returning zero
//! - **Mutation**: [`Config::set_value`] updates in place or appends
//! - **Serialization**: [`Config::serialize`], [`Config::save`],
//!   [`Config::save_as`] (atomic replace)
//!
//! ## Example
//!
//! ```rust
//! use tinyconf::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config: Config = r#"
//! player_power=100
//! player_name = Hero   # inline comment
//! base_attack=12.5
//! "#
//! .parse()?;
//!
//! assert_eq!(config.get_int("player_power")?, 100);
//! assert_eq!(config.get_float("base_attack")?, 12.5);
//! assert_eq!(config.get_value("player_name"), Some("Hero"));
//! assert_eq!(config.get_value("player_intelligence"), None);
//!
//! config.set_value("player_power", "330")?;
//! assert_eq!(config.get_int("player_power")?, 330);
//!
//! assert_eq!(
//!     config.serialize(),
//!     "player_power=330\nplayer_name=Hero\nbase_attack=12.5\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Loading and saving files
//!
//! ```no_run
//! use tinyconf::Config;
//!
//! # fn main() -> Result<(), tinyconf::ConfigError> {
//! let mut config = Config::load("tiny.conf")?;
//! config.set_value("player_level", "2")?;
//! config.save()?;
//! # Ok(())
//! # }
//! ```
//!
//! A [`Config`] owns all of its strings and releases them when dropped. It
//! does no internal locking; share one across threads behind a `Mutex`.

// Module declarations
mod config;
mod document;
mod error;
mod mutation;
mod parser;
mod table;
mod types;

// Public API exports
pub use config::{Config, ConfigOptions};
pub use document::render;
pub use error::{ConfigError, ParseResult};
pub use parser::{TinyconfParser, Token, TokenRole};
pub use table::{DEFAULT_CAPACITY, DEFAULT_GROW_SIZE, Pair, Table};
pub use types::ValueParser;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Split configuration text into its alternating key/value tokens
pub fn tokenize(input: &str) -> ParseResult<Vec<Token<'_>>> {
    TinyconfParser::tokenize(input)
}
