use crate::app::OutputFormat;
use crate::config::toml_config::{SourceKind, TomlConfig};
use crate::core::session::Intent;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "hayat-menu")]
#[command(about = "Browse the HAYAT RIVER menu and build an order")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read the catalog from a local JSON file
    #[arg(long, conflicts_with_all = ["categories_url", "items_url"])]
    pub catalog_file: Option<String>,

    /// Remote categories endpoint (requires --items-url)
    #[arg(long, requires = "items_url")]
    pub categories_url: Option<String>,

    /// Remote items endpoint (requires --categories-url)
    #[arg(long, requires = "categories_url")]
    pub items_url: Option<String>,

    #[arg(long, help = "Catalog request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    /// Category to open the menu on
    #[arg(long)]
    pub category: Option<String>,

    /// Gestures to replay, e.g. add:12,add:12,category:drinks,select:21
    #[arg(long, value_delimiter = ',')]
    pub ops: Vec<Intent>,

    /// Viewport width in pixels, used to pick the layout breakpoint
    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long, help = "Currency symbol used for display")]
    pub currency: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Print the whole catalog and exit")]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the TOML file (if any), applies command-line overrides and validates.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(path) = &self.catalog_file {
            config.catalog.source = SourceKind::File;
            config.catalog.path = Some(path.clone());
        }
        if let (Some(categories), Some(items)) = (&self.categories_url, &self.items_url) {
            config.catalog.source = SourceKind::Remote;
            config.catalog.categories_url = Some(categories.clone());
            config.catalog.items_url = Some(items.clone());
        }
        if self.timeout_seconds.is_some() {
            config.catalog.timeout_seconds = self.timeout_seconds;
        }
        if self.category.is_some() {
            config.display.default_category = self.category.clone();
        }
        if self.width.is_some() {
            config.display.viewport_width = self.width;
        }
        if self.currency.is_some() {
            config.display.currency_symbol = self.currency.clone();
        }
        if self.format.is_some() {
            config.output.format = self.format;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{CatalogLocation, ConfigProvider};

    #[test]
    fn test_cli_overrides() {
        let cli = CliConfig::parse_from([
            "hayat-menu",
            "--catalog-file",
            "menu.json",
            "--ops",
            "add:12,remove:12,category:drinks",
            "--width",
            "375",
            "--format",
            "json",
        ]);

        assert_eq!(
            cli.ops,
            vec![
                Intent::Add(12),
                Intent::Remove(12),
                Intent::SelectCategory("drinks".to_string())
            ]
        );

        let config = cli.resolve().unwrap();
        assert_eq!(
            config.catalog_location(),
            CatalogLocation::File("menu.json".to_string())
        );
        assert_eq!(config.viewport_width(), 375);
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let cli = CliConfig::parse_from([
            "hayat-menu",
            "--categories-url",
            "ftp://menu.example.com/categories",
            "--items-url",
            "https://menu.example.com/items",
        ]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_bad_op_is_rejected_by_parser() {
        assert!(CliConfig::try_parse_from(["hayat-menu", "--ops", "dance:1"]).is_err());
    }
}
