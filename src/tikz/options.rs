use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Picture-wide style. Serialised as RON, any missing field falls back to the
/// default look (12pt cells, 2pt rounded black grid lines).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TikzOptions {
    pub x_unit: String,
    pub y_unit: String,
    /// Body of the `gridline` style, used by every square and arc.
    pub gridline: String,
}

impl Default for TikzOptions {
    fn default() -> Self {
        Self {
            x_unit: "12pt".to_string(),
            y_unit: "12pt".to_string(),
            gridline: "black, line width = 2pt, line join = round, line cap = round".to_string(),
        }
    }
}

impl TikzOptions {
    /// The option list that goes inside `\begin{tikzpicture}[...]`.
    pub fn to_tikz(&self) -> String {
        format!(
            "x = {}, y = {}, gridline/.style = {{{}}}",
            self.x_unit, self.y_unit, self.gridline
        )
    }

    pub fn from_ron(data: &str) -> Result<TikzOptions> {
        Ok(ron::from_str(data)?)
    }

    pub fn from_file(path: &Path) -> Result<TikzOptions> {
        let mut reader = std::fs::File::open(path)
            .with_context(|| format!("opening style file {}", path.display()))?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        TikzOptions::from_ron(data.as_str())
            .with_context(|| format!("parsing style file {}", path.display()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_options() {
        assert_eq!(
            TikzOptions::default().to_tikz(),
            "x = 12pt, y = 12pt, gridline/.style = {black, line width = 2pt, \
             line join = round, line cap = round}"
        );
    }

    #[test]
    fn test_partial_ron() {
        let opts = TikzOptions::from_ron(r#"(x_unit: "8pt", gridline: "gray")"#).unwrap();
        assert_eq!(opts.x_unit, "8pt");
        assert_eq!(opts.y_unit, "12pt");
        assert_eq!(opts.to_tikz(), "x = 8pt, y = 12pt, gridline/.style = {gray}");
    }

    #[test]
    fn test_bad_ron() {
        assert!(TikzOptions::from_ron("(x_unit: 8)").is_err());
    }
}
