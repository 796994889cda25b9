use crate::app::config::card::CardConfig;
use crate::app::config::colors::ColorsConfig;
use crate::app::config::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub card: CardConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Known top-level sections
const KNOWN_SECTIONS: &[&str] = &["card", "colors", "logging"];

/// Known fields per section
const KNOWN_FIELDS: &[(&str, &[&str])] = &[
    ("card", &["entity"]),
    ("colors", &["border", "title", "previous", "current", "next"]),
    (
        "logging",
        &[
            "enabled",
            "level",
            "log_to_stderr",
            "append_to_file",
            "rotate_logs",
            "rotation_size_mb",
            "keep_log_files",
            "custom_log_path",
        ],
    ),
];

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two rows instead of the full matrix
    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_chars.len()]
}

/// Find the most similar string from a list of candidates
fn find_similar(unknown: &str, candidates: &[&str]) -> Option<String> {
    let unknown_lower = unknown.to_lowercase();

    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = levenshtein_distance(&unknown_lower, &candidate.to_lowercase());
            // At least 3 edits allowed, or half the longer string
            let threshold = (unknown.len().max(candidate.len()) / 2).max(3);
            (distance <= threshold).then_some((candidate, distance))
        })
        .min_by_key(|&(_, distance)| distance)
        .map(|(candidate, _)| candidate.to_string())
}

/// Format an unknown config warning with optional "did you mean" suggestion
fn format_unknown_warning(section: Option<&str>, key: &str, suggestion: Option<&str>) -> String {
    match (section, suggestion) {
        (None, Some(s)) => format!("Unknown config section: [{}] (did you mean: [{}]?)", key, s),
        (None, None) => format!("Unknown config section: [{}]", key),
        (Some(section), Some(s)) => format!(
            "Unknown option in [{}]: {} (did you mean: {}?)",
            section, key, s
        ),
        (Some(section), None) => format!("Unknown option in [{}]: {}", section, key),
    }
}

impl Config {
    /// Returns the default config file path based on the platform:
    /// - Linux: ~/.config/lyricard/config.toml (XDG_CONFIG_HOME)
    /// - macOS: ~/Library/Application Support/lyricard/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\lyricard\config.toml
    pub fn default_config_path() -> color_eyre::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))?;
        Ok(config_dir.join("lyricard").join("config.toml"))
    }

    /// Load the config, creating a default file when none exists.
    ///
    /// Returns the config together with warnings about unknown options. The
    /// warnings are logged by the caller once the logger is running.
    pub fn load(config_path: Option<PathBuf>) -> color_eyre::Result<(Self, Vec<String>)> {
        let config_path = match config_path {
            Some(path) => path,
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let default_config = Config::default();
            let toml_string = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_path, &toml_string)?;

            eprintln!("Created default config file at: {}", config_path.display());

            return Ok((default_config, Vec::new()));
        }

        let contents = std::fs::read_to_string(&config_path)?;
        Ok(Self::from_toml_str(&contents))
    }

    /// Parse config text. An unparsable file falls back to the defaults and
    /// reports why in the warnings.
    pub fn from_toml_str(contents: &str) -> (Self, Vec<String>) {
        let mut warnings = Self::check_unknown_fields(contents);

        let config = toml::from_str::<Config>(contents).unwrap_or_else(|e| {
            warnings.push(format!("Failed to parse config file, using defaults: {}", e));
            Config::default()
        });
        (config, warnings)
    }

    /// Check for unknown fields in the config file and return warnings
    fn check_unknown_fields(contents: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        let table = match toml::from_str::<toml::Table>(contents) {
            Ok(t) => t,
            Err(_) => return warnings, // Let the main parser handle errors
        };

        for key in table.keys() {
            if !KNOWN_SECTIONS.contains(&key.as_str()) {
                let suggestion = find_similar(key, KNOWN_SECTIONS);
                warnings.push(format_unknown_warning(None, key, suggestion.as_deref()));
            }
        }

        for (section, fields) in KNOWN_FIELDS {
            if let Some(toml::Value::Table(values)) = table.get(*section) {
                for key in values.keys() {
                    if !fields.contains(&key.as_str()) {
                        let suggestion = find_similar(key, fields);
                        warnings.push(format_unknown_warning(
                            Some(*section),
                            key,
                            suggestion.as_deref(),
                        ));
                    }
                }
            }
        }

        warnings
    }

    /// Generate a default config file at the specified path
    pub fn generate_default(path: PathBuf) -> color_eyre::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        if path.exists() {
            return Err(color_eyre::eyre::eyre!(
                "Config file already exists at: {}",
                path.display()
            ));
        }

        let default_config = Config::default();
        let toml_string = toml::to_string_pretty(&default_config)?;
        std::fs::write(&path, &toml_string)?;

        println!("Generated default config at: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("entity", "entity"), 0);
    }

    #[test]
    fn test_parse_full_config() {
        let (config, warnings) = Config::from_toml_str(
            r##"
            [card]
            entity = "media_player.cloud_music"

            [colors]
            current = "#00FF00"

            [logging]
            enabled = false
            "##,
        );

        assert!(warnings.is_empty());
        assert_eq!(config.card.entity, "media_player.cloud_music");
        assert_eq!(config.colors.current, "#00FF00");
        assert_eq!(config.colors.border, ColorsConfig::default().border);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_log_to_stderr_option() {
        let (config, warnings) = Config::from_toml_str("[logging]\nlog_to_stderr = true\n");
        assert!(warnings.is_empty());
        assert!(config.logging.log_to_stderr);

        let (config, _) = Config::from_toml_str("");
        assert!(!config.logging.log_to_stderr);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let (config, warnings) = Config::from_toml_str("");
        assert!(warnings.is_empty());
        assert!(!config.card.has_entity());
        assert!(config.logging.enabled);
    }

    #[test]
    fn test_unknown_field_suggestion() {
        let (config, warnings) = Config::from_toml_str(
            r#"
            [card]
            entiy = "media_player.x"
            "#,
        );

        assert_eq!(
            warnings,
            vec!["Unknown option in [card]: entiy (did you mean: entity?)".to_string()]
        );
        assert_eq!(config.card.entity, "");
    }

    #[test]
    fn test_unknown_section_suggestion() {
        let (_, warnings) = Config::from_toml_str("[colours]\nborder = \"#FFFFFF\"\n");
        assert_eq!(
            warnings,
            vec!["Unknown config section: [colours] (did you mean: [colors]?)".to_string()]
        );
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let (config, warnings) = Config::from_toml_str("[card\nentity = ");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to parse config file"));
        assert_eq!(config.card.entity, "");
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let (_, warnings) = Config::from_toml_str(&text);
        assert!(warnings.is_empty());
    }
}
