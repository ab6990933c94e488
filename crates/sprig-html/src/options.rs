//! Parser configuration

use serde::Deserialize;

/// Options for [`HtmlParser`](crate::HtmlParser).
///
/// Deserializes from camelCase keys; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Attach a [`SourceLocation`](sprig_dom::SourceLocation) to elements,
    /// text and comments
    pub source_code_location_info: bool,
    /// Parse `<noscript>` content as if scripting were enabled
    pub scripting_enabled: bool,
    /// Ask html5ever for detailed parse error messages
    pub exact_errors: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_code_location_info: false,
            scripting_enabled: true,
            exact_errors: false,
        }
    }
}

impl ParseOptions {
    /// Builder: enable source location tracking
    pub fn with_source_code_location_info(mut self, enabled: bool) -> Self {
        self.source_code_location_info = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ParseOptions::default();
        assert!(!opts.source_code_location_info);
        assert!(opts.scripting_enabled);
        assert!(!opts.exact_errors);
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: ParseOptions =
            serde_json::from_str(r#"{ "sourceCodeLocationInfo": true }"#).unwrap();
        assert_eq!(
            opts,
            ParseOptions {
                source_code_location_info: true,
                ..ParseOptions::default()
            }
        );
    }

    #[test]
    fn test_deserialize_all_keys() {
        let json = r#"{
            "sourceCodeLocationInfo": false,
            "scriptingEnabled": false,
            "exactErrors": true
        }"#;
        let opts: ParseOptions = serde_json::from_str(json).unwrap();
        assert!(!opts.scripting_enabled);
        assert!(opts.exact_errors);
    }
}
