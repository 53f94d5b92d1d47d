use crate::app::OutputFormat;
use crate::domain::ports::{CatalogLocation, ConfigProvider};
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Embedded,
    File,
    Remote,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: SourceKind,
    pub path: Option<String>,
    pub categories_url: Option<String>,
    pub items_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
    pub viewport_width: Option<u32>,
    pub default_category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MenuError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MENU_API})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MenuError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        match self.catalog.source {
            SourceKind::Embedded => {}
            SourceKind::File => {
                let path = validation::validate_required_field("catalog.path", &self.catalog.path)?;
                validation::validate_path("catalog.path", path)?;
                validation::validate_file_extension("catalog.path", path, &["json"])?;
            }
            SourceKind::Remote => {
                let categories = validation::validate_required_field(
                    "catalog.categories_url",
                    &self.catalog.categories_url,
                )?;
                validation::validate_url("catalog.categories_url", categories)?;
                let items =
                    validation::validate_required_field("catalog.items_url", &self.catalog.items_url)?;
                validation::validate_url("catalog.items_url", items)?;
            }
        }

        if let Some(timeout) = self.catalog.timeout_seconds {
            validation::validate_positive_number("catalog.timeout_seconds", timeout, 1)?;
        }

        if let Some(symbol) = &self.display.currency_symbol {
            validation::validate_non_empty_string("display.currency_symbol", symbol)?;
        }

        if let Some(width) = self.display.viewport_width {
            validation::validate_range("display.viewport_width", width, 200, 7680)?;
        }

        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_location(&self) -> CatalogLocation {
        match self.catalog.source {
            SourceKind::Embedded => CatalogLocation::Embedded,
            SourceKind::File => CatalogLocation::File(self.catalog.path.clone().unwrap_or_default()),
            SourceKind::Remote => CatalogLocation::Remote {
                categories_url: self.catalog.categories_url.clone().unwrap_or_default(),
                items_url: self.catalog.items_url.clone().unwrap_or_default(),
            },
        }
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn currency_symbol(&self) -> &str {
        self.display
            .currency_symbol
            .as_deref()
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }

    fn viewport_width(&self) -> u32 {
        self.display.viewport_width.unwrap_or(DEFAULT_VIEWPORT_WIDTH)
    }

    fn default_category(&self) -> Option<&str> {
        self.display.default_category.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_remote_config() {
        let toml_content = r#"
[catalog]
source = "remote"
categories_url = "https://menu.example.com/api/categories"
items_url = "https://menu.example.com/api/items"
timeout_seconds = 3

[display]
currency_symbol = "€"
viewport_width = 390
default_category = "mains"

[output]
format = "csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.catalog_location(),
            CatalogLocation::Remote {
                categories_url: "https://menu.example.com/api/categories".to_string(),
                items_url: "https://menu.example.com/api/items".to_string(),
            }
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.currency_symbol(), "€");
        assert_eq!(config.viewport_width(), 390);
        assert_eq!(config.default_category(), Some("mains"));
        assert_eq!(config.output_format(), OutputFormat::Csv);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog_location(), CatalogLocation::Embedded);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.currency_symbol(), "$");
        assert_eq!(config.viewport_width(), 1280);
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HAYAT_TEST_ITEMS_URL", "https://test.menu.com/items");

        let toml_content = r#"
[catalog]
source = "remote"
categories_url = "https://test.menu.com/categories"
items_url = "${HAYAT_TEST_ITEMS_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.catalog.items_url.as_deref(),
            Some("https://test.menu.com/items")
        );

        std::env::remove_var("HAYAT_TEST_ITEMS_URL");
    }

    #[test]
    fn test_config_validation() {
        let invalid_url = TomlConfig::from_toml_str(
            r#"
[catalog]
source = "remote"
categories_url = "invalid-url"
items_url = "https://menu.example.com/items"
"#,
        )
        .unwrap();
        assert!(invalid_url.validate().is_err());

        let missing_path = TomlConfig::from_toml_str("[catalog]\nsource = \"file\"\n").unwrap();
        assert!(matches!(
            missing_path.validate(),
            Err(MenuError::MissingConfigError { .. })
        ));

        let narrow = TomlConfig::from_toml_str("[display]\nviewport_width = 50\n").unwrap();
        assert!(narrow.validate().is_err());

        assert!(TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalog]\nsource = \"file\"\npath = \"./menu.json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.catalog_location(),
            CatalogLocation::File("./menu.json".to_string())
        );
    }
}
