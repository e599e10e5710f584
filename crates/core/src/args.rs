// Free-form `--flag value` argument scanning

use std::collections::HashMap;

/// Prefix marking a token as a flag name.
pub const FLAG_PREFIX: &str = "--";

/// Value recorded for a flag that is not followed by a value token.
pub const FLAG_PRESENT: &str = "true";

/// Flag name to value mapping built from the process arguments.
///
/// Only the final value per flag is kept. Unknown flags are retained and simply
/// never looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    flags: HashMap<String, String>,
}

impl ArgumentMap {
    /// Scan an argument vector (program name already removed).
    ///
    /// A token starting with `--` names a flag. The following token becomes its
    /// value unless it is missing or is itself a flag, in which case the value is
    /// `"true"`. Any other token is ignored.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = args.into_iter().map(Into::into).peekable();
        let mut flags = HashMap::new();

        while let Some(token) = tokens.next() {
            let Some(key) = token.strip_prefix(FLAG_PREFIX) else {
                continue;
            };
            let value = tokens
                .next_if(|next| !next.starts_with(FLAG_PREFIX))
                .unwrap_or_else(|| FLAG_PRESENT.to_string());
            flags.insert(key.to_string(), value);
        }

        Self { flags }
    }

    /// Value of a flag, if it was given.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.flags.get(key).map(String::as_str)
    }

    /// Value of a flag, treating an empty string as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.flags.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ArgumentMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            flags: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_with_value() {
        let args = ArgumentMap::parse(["--method", "tools/list", "--id", "7"]);

        assert_eq!(args.get("method"), Some("tools/list"));
        assert_eq!(args.get("id"), Some("7"));
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_flag_without_value_is_true() {
        let args = ArgumentMap::parse(["--verbose"]);
        assert_eq!(args.get("verbose"), Some("true"));
    }

    #[test]
    fn test_flag_followed_by_flag_is_true() {
        let args = ArgumentMap::parse(["--dry-run", "--method", "initialize"]);

        assert_eq!(args.get("dry-run"), Some("true"));
        assert_eq!(args.get("method"), Some("initialize"));
    }

    #[test]
    fn test_stray_tokens_ignored() {
        let args = ArgumentMap::parse(["stray", "--url", "http://x", "extra", "more"]);

        assert_eq!(args.get("url"), Some("http://x"));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_later_occurrence_overwrites() {
        let args = ArgumentMap::parse(["--id", "first", "--id", "second"]);
        assert_eq!(args.get("id"), Some("second"));
    }

    #[test]
    fn test_single_dash_value_is_consumed() {
        let args = ArgumentMap::parse(["--params", "-1"]);
        assert_eq!(args.get("params"), Some("-1"));
    }

    #[test]
    fn test_json_value_is_kept_verbatim() {
        let args = ArgumentMap::parse(["--params", r#"{"a": 1}"#]);
        assert_eq!(args.get("params"), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_empty_input() {
        let args = ArgumentMap::parse(Vec::<String>::new());
        assert!(args.is_empty());
    }

    #[test]
    fn test_get_non_empty() {
        let args = ArgumentMap::parse(["--key", "", "--url", "http://x"]);

        assert!(args.contains("key"));
        assert_eq!(args.get("key"), Some(""));
        assert_eq!(args.get_non_empty("key"), None);
        assert_eq!(args.get_non_empty("url"), Some("http://x"));
    }

    #[test]
    fn test_from_iterator() {
        let args: ArgumentMap = [("method", "tools/call"), ("name", "foo")]
            .into_iter()
            .collect();

        assert_eq!(args, ArgumentMap::parse(["--method", "tools/call", "--name", "foo"]));
    }
}
