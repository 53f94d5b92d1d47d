use anyhow::Result;
use hayat_menu::adapters::source_from_config;
use hayat_menu::app::export;
use hayat_menu::domain::ports::ConfigProvider;
use hayat_menu::{EmbeddedCatalog, Intent, MenuEngine, MenuError, Money, TomlConfig};
use httpmock::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn intents(ops: &[&str]) -> Vec<Intent> {
    ops.iter().map(|op| op.parse().unwrap()).collect()
}

#[tokio::test]
async fn test_end_to_end_with_remote_catalog() -> Result<()> {
    let server = MockServer::start();
    let categories_mock = server.mock(|when, then| {
        when.method(GET).path("/api/categories");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": "starters", "name": "Starters"},
                {"id": "drinks", "name": "Drinks"}
            ]));
    });
    let items_mock = server.mock(|when, then| {
        when.method(GET).path("/api/items");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 1, "name": "Falafel", "description": "Crispy", "price": 13, "image": "f.jpg", "category": "starters"},
                {"id": 2, "name": "Arak Sour", "description": "Lemon", "formatted_price": "$14.00", "image": "a.jpg", "category": "drinks"}
            ]));
    });

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[catalog]
source = "remote"
categories_url = "{}"
items_url = "{}"
timeout_seconds = 5
"#,
        server.url("/api/categories"),
        server.url("/api/items")
    ))?;

    let engine = MenuEngine::with_currency(source_from_config(&config)?, config.currency_symbol());
    let (_, session) = engine
        .run(None, &intents(&["add:1", "add:1", "add:2", "remove:1"]))
        .await?;

    categories_mock.assert();
    items_mock.assert();

    let summary = engine.summarize(&session);
    assert_eq!(summary.total_items, 2);
    assert_eq!(summary.total_price, Money::from_major(27));
    let names: Vec<&str> = summary.lines.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Falafel", "Arak Sour"]);
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_with_fetch_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/categories");
        then.status(503);
    });

    let config = TomlConfig::from_toml_str(&format!(
        "[catalog]\nsource = \"remote\"\ncategories_url = \"{}\"\nitems_url = \"{}\"\n",
        server.url("/api/categories"),
        server.url("/api/items")
    ))
    .unwrap();

    let engine = MenuEngine::new(source_from_config(&config).unwrap());
    let err = engine.run(None, &[]).await.unwrap_err();

    assert!(matches!(err, MenuError::CatalogFetch { .. }));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(err.user_friendly_message(), "We couldn't load the menu right now.");
}

#[tokio::test]
async fn test_end_to_end_with_catalog_file_and_csv_export() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog_path = temp_dir.path().join("menu.json");
    std::fs::write(
        &catalog_path,
        serde_json::json!({
            "categories": [{"id": "desserts", "name": "Desserts", "icon": "🍰"}],
            "items": [
                {"id": 17, "name": "Baklava Selection", "price": 14, "category": "desserts"},
                {"id": 18, "name": "Saffron Rice Pudding", "price": 12.5, "category": "desserts"}
            ]
        })
        .to_string(),
    )?;

    let mut config_file = NamedTempFile::new()?;
    write!(
        config_file,
        "[catalog]\nsource = \"file\"\npath = \"{}\"\n\n[display]\ndefault_category = \"desserts\"\n",
        catalog_path.to_string_lossy().replace('\\', "/")
    )?;

    let config = TomlConfig::from_file(config_file.path())?;
    let engine = MenuEngine::new(source_from_config(&config)?);
    let (catalog, session) = engine
        .run(
            config.default_category(),
            &intents(&["select:18", "add-selected", "add-selected", "add:17", "close"]),
        )
        .await?;

    assert!(session.detail(&catalog).is_none());
    let csv = export::summary_to_csv(&engine.summarize(&session))?;
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], "18,Saffron Rice Pudding,12.50,2,25.00");
    assert_eq!(rows[2], "17,Baklava Selection,14.00,1,14.00");
    Ok(())
}

#[tokio::test]
async fn test_embedded_menu_session() -> Result<()> {
    let engine = MenuEngine::new(EmbeddedCatalog::new());
    let (catalog, session) = engine
        .run(
            Some("mains"),
            &intents(&["select:14", "add-selected", "cart", "category:desserts", "add:17"]),
        )
        .await?;

    assert_eq!(session.active_category, "desserts");
    assert_eq!(session.selected_item, None);
    assert!(session.cart_open);
    assert_eq!(catalog.item(14).map(|i| i.name.as_str()), Some("Slow-Cooked Lamb"));
    assert_eq!(session.cart.total_price(), Money::from_major(38 + 14));
    Ok(())
}
