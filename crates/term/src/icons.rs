//! Icon art for menu tiles.
//!
//! An icon reference is a path. Known stems resolve to built-in art; any
//! other path is read from disk (first [`ICON_ROWS`] lines), and anything
//! unreadable falls back to a monogram of the game's title.

use std::path::Path;

/// Rows of art inside a tile.
pub const ICON_ROWS: usize = 3;

const SNAKE: [&str; ICON_ROWS] = ["  ▄▄▄▄▄  ●", "  █      ", "  ▀▀▀▀▀▀▀ "];
const TICTACTOE: [&str; ICON_ROWS] = ["X │ O │  ", "──┼───┼──", "  │ X │ O"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconArt {
    rows: Vec<String>,
}

impl IconArt {
    /// Resolve the art for `icon_path`, using `title` for the fallback.
    pub fn resolve(icon_path: &str, title: &str) -> Self {
        let path = Path::new(icon_path);
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_lowercase();

        let builtin = match stem.as_str() {
            "snake" => Some(SNAKE),
            "tictactoe" | "tic-tac-toe" => Some(TICTACTOE),
            _ => None,
        };
        if let Some(rows) = builtin {
            return Self::from_rows(rows.iter().copied());
        }

        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_rows(text.lines()),
            Err(err) => {
                tracing::debug!(icon_path, error = %err, "icon not found, using monogram");
                Self::monogram(title)
            }
        }
    }

    fn from_rows<'a>(rows: impl Iterator<Item = &'a str>) -> Self {
        let mut rows: Vec<String> = rows.take(ICON_ROWS).map(str::to_string).collect();
        rows.resize(ICON_ROWS, String::new());
        Self { rows }
    }

    fn monogram(title: &str) -> Self {
        let letter = title
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string());
        Self {
            rows: vec!["┏━━━┓".to_string(), format!("┃ {letter} ┃"), "┗━━━┛".to_string()],
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}
