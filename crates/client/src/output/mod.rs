//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;

/// Render `value` as JSON, or with `pretty` for human-readable output.
pub fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> String
where
    T: serde::Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => pretty(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_picks_formatter() {
        let value = serde_json::json!({ "status": "ok" });

        assert_eq!(
            render(&value, OutputFormat::Json, |_| "pretty".to_string()),
            r#"{"status":"ok"}"#
        );
        assert_eq!(
            render(&value, OutputFormat::Pretty, |_| "pretty".to_string()),
            "pretty"
        );
    }
}
