//! Error message formatting with actionable suggestions.

use std::error::Error;

use npmq_core::NpmqError;

use super::colors::ColorSupport;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self {
            colors: ColorSupport::detect(),
        }
    }

    /// Format an error with its suggestion and source chain
    pub fn format_error(&self, error: &NpmqError) -> String {
        let mut output = String::new();

        output.push_str(&self.colors.red("error"));
        output.push_str(": ");
        output.push_str(&error.to_string());
        output.push('\n');

        if let Some(suggestion) = error.suggestion() {
            output.push_str(&self.colors.dim("help"));
            output.push_str(": ");
            output.push_str(suggestion);
            output.push('\n');
        }

        let mut source = error.source();
        while let Some(err) = source {
            output.push_str(&self.colors.dim("caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            output.push('\n');
            source = err.source();
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_formatter() -> ErrorFormatter {
        ErrorFormatter {
            colors: ColorSupport::disabled(),
        }
    }

    #[test]
    fn test_format_includes_suggestion() {
        let error = NpmqError::PackageNotFound {
            name: "left-pad".to_string(),
        };
        let rendered = plain_formatter().format_error(&error);

        assert!(rendered.starts_with("error: Package 'left-pad' not found\n"));
        assert!(rendered.contains("help: Check the package name spelling"));
    }

    #[test]
    fn test_format_without_suggestion() {
        let error = NpmqError::RequestFailed { status: 502 };
        let rendered = plain_formatter().format_error(&error);

        assert_eq!(rendered, "error: Registry request failed with status 502\n");
    }
}
