//! Configuration mutation API.
//!
//! [`Config::set_value`] updates the first pair with a matching key or
//! appends a new pair at the end of the table. Keys and values are stored
//! verbatim; text that would not load back as a single token (spaces, `=`,
//! a leading `_` or `.`) is kept as given but logged.
//!
//! # Examples
//!
//! ```
//! use tinyconf::Config;
//!
//! let mut config: Config = "player_power = 100".parse().unwrap();
//!
//! config.set_value("player_power", "330").unwrap();
//! config.set_value("player_level", "7").unwrap();
//!
//! assert_eq!(config.get_int("player_power").unwrap(), 330);
//! assert_eq!(config.keys(), vec!["player_power", "player_level"]);
//! ```

use crate::config::Config;
use crate::error::{ConfigError, ParseResult};
use crate::table::Pair;

impl Config {
    /// Set the value for `key`, inserting a new pair if the key is absent.
    ///
    /// Only the first pair with a matching key is updated; later duplicates
    /// are left alone. Returns the value now stored for `key`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidKey`] for an empty key and
    /// [`ConfigError::AllocationError`] if storage runs out. The table is
    /// unchanged on every error path.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyconf::Config;
    ///
    /// let mut config = Config::new();
    /// let stored = config.set_value("player_name", "Hero").unwrap();
    /// assert_eq!(stored, "Hero");
    ///
    /// config.set_value("title", "Sir Hero").unwrap();
    /// assert_eq!(config.get_value("title"), Some("Sir Hero"));
    ///
    /// assert!(config.set_value("", "Hero").is_err());
    /// ```
    pub fn set_value(&mut self, key: &str, value: &str) -> ParseResult<&str> {
        if key.is_empty() {
            return Err(ConfigError::invalid_key(key, "must not be empty"));
        }
        if let Err(reason) = check_token(key) {
            tracing::warn!("Key '{}' {}, it will not load back unchanged", key, reason);
        }
        if let Err(reason) = check_token(value) {
            tracing::warn!(
                "Value '{}' for '{}' {}, it will not load back unchanged",
                value,
                key,
                reason
            );
        }

        let table = self.table_mut();

        if let Some(index) = table.position(key) {
            tracing::trace!("Updating '{}' to '{}'", key, value);
            return table
                .replace_value(index, value)?
                .ok_or_else(|| ConfigError::key_not_found(key));
        }

        tracing::trace!("Inserting '{}' = '{}'", key, value);
        let pair = owned_pair(key, value)?;
        table.push(pair)?;

        let index = table.len() - 1;
        table
            .get(index)
            .map(|pair| pair.value.as_str())
            .ok_or_else(|| ConfigError::key_not_found(key))
    }
}

/// Check that `text` reads back as exactly one token
fn check_token(text: &str) -> Result<(), &'static str> {
    let Some(first) = text.chars().next() else {
        return Err("is empty");
    };

    if !(first.is_ascii_alphanumeric() || first == '-') {
        return Err("does not start with an ASCII letter, digit or '-'");
    }

    if text.contains([' ', '\t', '=', '\r', '\n']) {
        return Err("contains whitespace, a line break or '='");
    }

    Ok(())
}

/// Copy key and value into exactly-sized owned strings
fn owned_pair(key: &str, value: &str) -> ParseResult<Pair> {
    let mut owned_key = String::new();
    owned_key
        .try_reserve_exact(key.len())
        .map_err(|_| ConfigError::allocation(key.len(), "bytes for key"))?;
    owned_key.push_str(key);

    let mut owned_value = String::new();
    owned_value
        .try_reserve_exact(value.len())
        .map_err(|_| ConfigError::allocation(value.len(), "bytes for value"))?;
    owned_value.push_str(value);

    Ok(Pair::new(owned_key, owned_value))
}
