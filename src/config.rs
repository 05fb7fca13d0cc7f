use crate::error::{ConfigError, ParseResult};
use crate::parser::TinyconfParser;
use crate::table::{DEFAULT_CAPACITY, DEFAULT_GROW_SIZE, Pair, Table};
use crate::types::ValueParser;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration handle: an ordered table of `key=value` pairs
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed pairs, in file order
    table: Table,

    /// Configuration options
    options: ConfigOptions,

    /// File the pairs were loaded from, used by [`Config::save`]
    source_path: Option<PathBuf>,
}

/// Configuration options
#[derive(Debug, Clone)]
pub struct ConfigOptions {
    /// Pair slots allocated up front
    pub initial_capacity: usize,

    /// Pair slots added each time the table fills up
    pub grow_size: usize,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            grow_size: DEFAULT_GROW_SIZE,
        }
    }
}

impl Config {
    /// Create a new, empty configuration with default options
    pub fn new() -> Self {
        Self::with_options(ConfigOptions::default())
    }

    /// Create a new, empty configuration with custom options.
    ///
    /// If the initial slots cannot be allocated the table starts empty and
    /// grows on first insert.
    pub fn with_options(options: ConfigOptions) -> Self {
        let table = Table::with_capacity(options.initial_capacity, options.grow_size)
            .unwrap_or_else(|e| {
                tracing::warn!("{}, starting with no preallocated slots", e);
                Table::unallocated(options.grow_size)
            });

        Self {
            table,
            options,
            source_path: None,
        }
    }

    /// Load a configuration file into a new table
    pub fn load(path: impl AsRef<Path>) -> ParseResult<Self> {
        Self::load_with_options(path, ConfigOptions::default())
    }

    /// Load a configuration file into a new table with custom options
    pub fn load_with_options(path: impl AsRef<Path>, options: ConfigOptions) -> ParseResult<Self> {
        let path = path.as_ref();
        let table = Table::with_capacity(options.initial_capacity, options.grow_size)?;

        let mut config = Self {
            table,
            options,
            source_path: None,
        };
        config.parse_file(path)?;
        Ok(config)
    }

    /// Read a whole configuration file and append its pairs.
    ///
    /// The file must exist, be readable, be valid UTF-8 and not be empty.
    /// On failure the table is left as it was.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> ParseResult<()> {
        let path = path.as_ref();
        let content = read_config_file(path)?;

        self.parse(&content)?;

        if self.source_path.is_none() {
            self.source_path = Some(path.to_path_buf());
        }

        tracing::debug!(
            "Loaded {} pairs ({} bytes) from {}",
            self.table.len(),
            content.len(),
            path.display()
        );
        Ok(())
    }

    /// Parse configuration text and append its pairs.
    ///
    /// Either every pair in `input` is appended or, on error, none is.
    pub fn parse(&mut self, input: &str) -> ParseResult<()> {
        let pairs = TinyconfParser::parse_pairs(input)?;
        warn_duplicates(&self.table, &pairs);
        self.table.append_all(pairs)
    }

    /// Value of the first pair with this key, if any
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.table.find(key).map(|pair| pair.value.as_str())
    }

    /// Value of the first pair with this key, or [`ConfigError::KeyNotFound`]
    pub fn get(&self, key: &str) -> ParseResult<&str> {
        self.get_value(key)
            .ok_or_else(|| ConfigError::key_not_found(key))
    }

    /// Get a value parsed as an integer
    pub fn get_int(&self, key: &str) -> ParseResult<i64> {
        ValueParser::parse_int(self.get(key)?)
    }

    /// Get a value parsed as a float
    pub fn get_float(&self, key: &str) -> ParseResult<f64> {
        ValueParser::parse_float(self.get(key)?)
    }

    pub fn get_bool(&self, key: &str) -> ParseResult<bool> {
        ValueParser::parse_bool(self.get(key)?)
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> bool {
        self.table.find(key).is_some()
    }

    /// Number of pairs, duplicates included
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Allocated pair slots
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Byte length of [`Config::serialize`]'s output
    pub fn serialized_len(&self) -> usize {
        self.table.serialized_len()
    }

    /// Get all keys in file order
    pub fn keys(&self) -> Vec<&str> {
        self.table.keys().collect()
    }

    /// Iterate pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.table.iter()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub(crate) fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    pub fn options(&self) -> &ConfigOptions {
        &self.options
    }

    /// Path of the first file parsed into this configuration
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = Config::new();
        config.parse(s)?;
        Ok(config)
    }
}

fn warn_duplicates(table: &Table, pairs: &[Pair]) {
    let mut seen: HashSet<&str> = table.keys().collect();
    for pair in pairs {
        if !seen.insert(pair.key.as_str()) {
            tracing::warn!(
                "Duplicate key '{}', lookups will see the first occurrence",
                pair.key
            );
        }
    }
}

fn read_config_file(path: &Path) -> ParseResult<String> {
    let io_err = |e: std::io::Error| ConfigError::io(path.display().to_string(), e.to_string());

    let mut file = File::open(path).map_err(io_err)?;
    let size = file.metadata().map_err(io_err)?.len() as usize;

    let mut content = String::new();
    content
        .try_reserve_exact(size)
        .map_err(|_| ConfigError::allocation(size, "bytes for file buffer"))?;
    file.read_to_string(&mut content).map_err(io_err)?;

    if content.is_empty() {
        return Err(ConfigError::io(path.display().to_string(), "file is empty"));
    }

    Ok(content)
}
