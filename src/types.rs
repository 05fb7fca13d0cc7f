use crate::error::{ConfigError, ParseResult};

/// Text-to-number conversions used by the typed accessors.
///
/// Unlike `atoi`-style parsing, malformed text is reported instead of
/// silently becoming zero.
pub struct ValueParser;

impl ValueParser {
    /// Parse an integer (decimal with optional sign, or `0x` hex)
    pub fn parse_int(s: &str) -> ParseResult<i64> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        if let Some(hex) = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ConfigError::invalid_number(s, "invalid hex integer"));
            }
            let magnitude = u64::from_str_radix(hex, 16)
                .map_err(|_| ConfigError::invalid_number(s, "hex integer out of range"))?;
            let signed = if negative {
                -i128::from(magnitude)
            } else {
                i128::from(magnitude)
            };
            i64::try_from(signed)
                .map_err(|_| ConfigError::invalid_number(s, "hex integer out of range"))
        } else {
            s.parse::<i64>()
                .map_err(|e| ConfigError::invalid_number(s, format!("invalid integer: {e}")))
        }
    }

    /// Parse a float
    pub fn parse_float(s: &str) -> ParseResult<f64> {
        s.parse::<f64>()
            .map_err(|e| ConfigError::invalid_number(s, format!("invalid float: {e}")))
    }

    /// Parse a boolean value (true/false/on/off/yes/no/1/0)
    pub fn parse_bool(s: &str) -> ParseResult<bool> {
        match s.to_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(true),
            "false" | "off" | "no" | "0" => Ok(false),
            _ => Err(ConfigError::invalid_number(s, "not a valid boolean")),
        }
    }
}
