//! Output format selection shared by the CLI subcommands.

use rotaplan_lib::RouteRenderMode;

/// How command results are rendered to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Rich,
    Json,
}

impl OutputFormat {
    /// Render mode to use for textual route summaries; `None` for JSON.
    pub fn render_mode(self) -> Option<RouteRenderMode> {
        match self {
            OutputFormat::Text => Some(RouteRenderMode::PlainText),
            OutputFormat::Rich => Some(RouteRenderMode::RichText),
            OutputFormat::Json => None,
        }
    }
}
