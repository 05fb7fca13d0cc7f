//! Serialization back to file text.
//!
//! Every pair is written as `key=value\n` in table order. Comments, blank
//! lines and the original spacing are not preserved.

use crate::config::Config;
use crate::error::{ConfigError, ParseResult};
use crate::table::Table;
use std::fmt;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Render a table into a buffer sized from the live key/value lengths
pub fn render(table: &Table) -> ParseResult<String> {
    let size = table.compute_serialized_len();
    debug_assert_eq!(size, table.serialized_len());

    let mut output = String::new();
    output
        .try_reserve_exact(size)
        .map_err(|_| ConfigError::allocation(size, "bytes for output buffer"))?;

    push_pairs(table, &mut output);
    Ok(output)
}

fn push_pairs(table: &Table, output: &mut String) {
    for pair in table {
        output.push_str(&pair.key);
        output.push('=');
        output.push_str(&pair.value);
        output.push('\n');
    }
}

impl Config {
    /// Serialize the configuration to file text
    pub fn serialize(&self) -> String {
        let mut output = String::with_capacity(self.table().compute_serialized_len());
        push_pairs(self.table(), &mut output);
        output
    }

    /// Write the configuration back to the file it was loaded from
    pub fn save(&self) -> ParseResult<()> {
        let path = self
            .source_path()
            .ok_or_else(|| ConfigError::io("<none>", "configuration was not loaded from a file"))?;
        self.save_as(path)
    }

    /// Write the configuration to `path`, replacing any existing file.
    ///
    /// The text is written to a uniquely named temporary file next to
    /// `path`, synced, then renamed into place, so `path` is never left half
    /// written. The temporary file is removed if any step fails.
    pub fn save_as(&self, path: impl AsRef<Path>) -> ParseResult<()> {
        let path = path.as_ref();
        let output = render(self.table())?;

        write_and_replace(path, output.as_bytes())
            .map_err(|e| ConfigError::io(path.display().to_string(), e.to_string()))?;

        tracing::debug!(
            "Saved {} pairs ({} bytes) to {}",
            self.len(),
            output.len(),
            path.display()
        );
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pair in self.table() {
            writeln!(f, "{}", pair)?;
        }
        Ok(())
    }
}

fn write_and_replace(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_exact_size() {
        let config: Config = "a = 1\n# c\nlonger_key = some-value\n".parse().unwrap();
        let text = render(config.table()).unwrap();
        assert_eq!(text, "a=1\nlonger_key=some-value\n");
        assert_eq!(text.len(), config.serialized_len());
    }

    #[test]
    fn test_render_after_growing_value() {
        let mut config: Config = "a=1\n".parse().unwrap();
        config.set_value("a", "a-much-longer-value").unwrap();
        config.set_value("b", "2").unwrap();
        let text = render(config.table()).unwrap();
        assert_eq!(text, "a=a-much-longer-value\nb=2\n");
    }

    #[test]
    fn test_serialize_matches_display() {
        let config: Config = "x=1\ny=2\n".parse().unwrap();
        assert_eq!(config.serialize(), config.to_string());
    }

    #[test]
    fn test_empty_table_serializes_to_nothing() {
        assert_eq!(Config::new().serialize(), "");
    }

    #[test]
    fn test_save_without_source_path() {
        let config: Config = "x=1".parse().unwrap();
        assert!(matches!(config.save(), Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn test_write_and_replace_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("out.conf");
        std::fs::write(&target, "old=1\n").unwrap();

        write_and_replace(&target, b"new=2\n").unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new=2\n");
    }
}
