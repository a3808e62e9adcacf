//! Delimiter detection for the two supported table flavours.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::path::Path;

use crate::domain::DelimiterStrategy;

static SPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(" {2,}").expect("valid space-run regex"));

/// Concrete column separator, resolved from the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
    /// Two or more consecutive spaces.
    SpaceRuns,
}

impl Delimiter {
    /// Naive split: no quoting, no escapes.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Comma => line.split(',').collect(),
            Delimiter::Tab => line.split('\t').collect(),
            Delimiter::SpaceRuns => SPACE_RUN_RE.split(line).collect(),
        }
    }
}

impl DelimiterStrategy {
    /// Pick a strategy from the input file extension: `.csv` is comma, anything else tab.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => DelimiterStrategy::Comma,
            _ => DelimiterStrategy::TabOrSpaces,
        }
    }

    /// Rewrite `\r\n` and lone `\r` to `\n` (tab flavour only).
    pub fn normalize_newlines<'a>(&self, content: &'a str) -> Cow<'a, str> {
        match self {
            DelimiterStrategy::TabOrSpaces if content.contains('\r') => {
                Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
            }
            _ => Cow::Borrowed(content),
        }
    }

    pub fn resolve(&self, header: &str) -> Delimiter {
        match self {
            DelimiterStrategy::Comma => Delimiter::Comma,
            DelimiterStrategy::TabOrSpaces if header.contains('\t') => Delimiter::Tab,
            DelimiterStrategy::TabOrSpaces => Delimiter::SpaceRuns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_from_extension() {
        assert_eq!(DelimiterStrategy::for_path(Path::new("vars.csv")), DelimiterStrategy::Comma);
        assert_eq!(DelimiterStrategy::for_path(Path::new("VARS.CSV")), DelimiterStrategy::Comma);
        assert_eq!(
            DelimiterStrategy::for_path(Path::new("vars.tsv")),
            DelimiterStrategy::TabOrSpaces
        );
        assert_eq!(DelimiterStrategy::for_path(Path::new("vars")), DelimiterStrategy::TabOrSpaces);
    }

    #[test]
    fn tab_strategy_falls_back_to_space_runs() {
        let strategy = DelimiterStrategy::TabOrSpaces;
        assert_eq!(strategy.resolve("file\tkey\tvalue"), Delimiter::Tab);
        assert_eq!(strategy.resolve("file  key   value"), Delimiter::SpaceRuns);
        assert_eq!(DelimiterStrategy::Comma.resolve("file\tkey"), Delimiter::Comma);
    }

    #[test]
    fn space_runs_keep_single_spaces() {
        let fields = Delimiter::SpaceRuns.split("prod.env  GREETING    hello world");
        assert_eq!(fields, vec!["prod.env", "GREETING", "hello world"]);
    }

    #[test]
    fn comma_split_is_naive() {
        assert_eq!(Delimiter::Comma.split(".env,LIST,a,b"), vec![".env", "LIST", "a", "b"]);
    }

    #[test]
    fn newline_normalization_only_for_tab_flavour() {
        let content = "a\r\nb\rc";
        assert_eq!(DelimiterStrategy::TabOrSpaces.normalize_newlines(content), "a\nb\nc");
        assert_eq!(DelimiterStrategy::Comma.normalize_newlines(content), content);
    }
}
