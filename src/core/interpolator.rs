//! Placeholder interpolation for log messages
//!
//! Replaces `{key}` placeholders in log messages with the textual form of
//! scalar values from the supplied context.

use super::context::LogContext;

/// Substitutes `{key}` placeholders with scalar context values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageInterpolator;

impl MessageInterpolator {
    pub fn new() -> Self {
        Self
    }

    /// Replace every `{key}` occurrence whose context value is scalar.
    ///
    /// The message is scanned once, left to right; substituted text is not
    /// rescanned. Placeholders for missing keys or non-scalar values are
    /// left verbatim, as are unmatched braces. An empty context returns the
    /// message unchanged.
    pub fn interpolate(&self, message: &str, context: &LogContext) -> String {
        if context.is_empty() {
            return message.to_string();
        }

        let replacements: Vec<(String, String)> = context
            .iter()
            .filter_map(|(key, value)| value.as_text().map(|text| (format!("{{{}}}", key), text)))
            .collect();

        if replacements.is_empty() {
            return message.to_string();
        }

        let mut output = String::with_capacity(message.len());
        let mut rest = message;

        while let Some(brace) = rest.find('{') {
            output.push_str(&rest[..brace]);
            rest = &rest[brace..];

            // Distinct keys produce disjoint tokens, so the first match is
            // the only possible match at this position.
            match replacements
                .iter()
                .find(|(token, _)| rest.starts_with(token.as_str()))
            {
                Some((token, text)) => {
                    output.push_str(text);
                    rest = &rest[token.len()..];
                }
                None => {
                    output.push('{');
                    rest = &rest[1..];
                }
            }
        }

        output.push_str(rest);
        output
    }
}
