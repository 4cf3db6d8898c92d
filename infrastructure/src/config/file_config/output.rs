//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use statehouse_domain::OutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.output.color);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let toml_str = r#"
[output]
format = "yaml"
"#;
        assert!(toml::from_str::<super::super::FileConfig>(toml_str).is_err());
    }
}
