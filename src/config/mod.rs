mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./config.toml",
        "./submarine.toml",
        "~/.config/submarine/config.toml",
        "/etc/submarine/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    for group in config.parser.release_group_sources.keys() {
        if group.trim().is_empty() {
            anyhow::bail!("Release group source mapping has an empty group name");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use submarine_parser::{Language, QualitySource};
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
[server]
host = "127.0.0.1"
port = 9090

[parser]
default_language = "GERMAN"
usenet_validation = false

[parser.release_group_sources]
MyGroup = "WEB_RIP"
"#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.parser.default_language, Language::German);
        assert!(!config.parser.usenet_validation);

        let parser_config = config.parser.to_parser_config();
        assert_eq!(
            parser_config.release_group_source("mygroup"),
            Some(QualitySource::WebRip)
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = write_config("[server]\nport = 3000\n");

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.parser.default_language, Language::English);
        assert!(config.parser.usenet_validation);
    }

    #[test]
    fn test_port_zero_is_rejected() {
        let file = write_config("[server]\nport = 0\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let file = write_config("[parser]\ndefault_language = \"KLINGON\"\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_parser_config_from_toml_keeps_group_lookup() {
        let parser_config: submarine_parser::config::ParserConfig = toml::from_str(
            r#"
default_language = "ENGLISH"
usenet_validation = true

[release_group_sources]
ASW = "WEB_DL"
"#,
        )
        .unwrap();

        assert_eq!(
            parser_config.release_group_source("asw"),
            Some(QualitySource::WebDl)
        );
        assert_eq!(
            parser_config.release_group_source("ASW"),
            Some(QualitySource::WebDl)
        );
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_config(Path::new("/nonexistent/submarine.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
