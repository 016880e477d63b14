//! Rendering of move lists for output.

use clap::ValueEnum;
use lifemaze_core::Direction;

use crate::Result;

/// How solved move lists are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `['up','up','left']`
    #[default]
    List,
    /// `["up","up","left"]`
    Json,
}

/// Render the moves of one maze in `format`.
///
/// An unsolvable maze has no moves and renders as an empty list.
pub fn render(moves: &[Direction], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::List => {
            let items: Vec<String> = moves.iter().map(|d| format!("'{d}'")).collect();
            Ok(format!("[{}]", items.join(",")))
        }
        OutputFormat::Json => {
            let labels: Vec<&str> = moves.iter().map(|d| d.label()).collect();
            Ok(serde_json::to_string(&labels)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn list_format() {
        let moves = [Right, Up, Up, Left, Left];
        assert_eq!(
            render(&moves, OutputFormat::List).unwrap(),
            "['right','up','up','left','left']"
        );
        assert_eq!(render(&[], OutputFormat::List).unwrap(), "[]");
    }

    #[test]
    fn json_format() {
        let moves = [Up, Up, Left];
        assert_eq!(
            render(&moves, OutputFormat::Json).unwrap(),
            r#"["up","up","left"]"#
        );
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]");
    }
}
