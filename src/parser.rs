use crate::error::{ConfigError, ParseResult};
use crate::table::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "tinyconf.pest"]
pub struct TinyconfParser;

/// Position of a token in the alternating key/value stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRole {
    Key,
    Value,
}

impl TokenRole {
    fn flip(self) -> Self {
        match self {
            TokenRole::Key => TokenRole::Value,
            TokenRole::Value => TokenRole::Key,
        }
    }
}

/// A maximal run of token characters, borrowed from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub role: TokenRole,
    /// 1-based line of the first character
    pub line: usize,
    /// 1-based column of the first character
    pub column: usize,
}

impl TinyconfParser {
    /// Split the input into key/value tokens.
    ///
    /// Separators (`=`, spaces, tabs, line breaks), comments and characters
    /// that cannot start a token are skipped. Roles alternate starting with
    /// [`TokenRole::Key`].
    pub fn tokenize(input: &str) -> ParseResult<Vec<Token<'_>>> {
        let pairs = TinyconfParser::parse(Rule::file, input)?;

        let mut tokens = Vec::new();
        let mut role = TokenRole::Key;

        for pair in pairs {
            if pair.as_rule() != Rule::file {
                continue;
            }
            for inner in pair.into_inner() {
                if inner.as_rule() != Rule::token {
                    continue;
                }
                let (line, column) = inner.line_col();
                tokens.push(Token {
                    text: inner.as_str(),
                    role,
                    line,
                    column,
                });
                role = role.flip();
            }
        }

        Ok(tokens)
    }

    /// Parse the input into owned pairs, in file order.
    ///
    /// Duplicate keys are kept. A trailing key with no value is an error,
    /// and no pairs are returned in that case.
    pub fn parse_pairs(input: &str) -> ParseResult<Vec<Pair>> {
        let tokens = Self::tokenize(input)?;

        let mut pairs = Vec::with_capacity(tokens.len() / 2);
        let mut chunks = tokens.chunks_exact(2);

        for chunk in chunks.by_ref() {
            pairs.push(Pair::new(chunk[0].text, chunk[1].text));
        }

        if let [dangling] = chunks.remainder() {
            return Err(ConfigError::parse(
                dangling.line,
                dangling.column,
                format!("key '{}' has no value", dangling.text),
            ));
        }

        Ok(pairs)
    }
}
