use clap::Parser;
use hayat_menu::adapters::source_from_config;
use hayat_menu::app::{export, render, OutputFormat};
use hayat_menu::core::layout::Breakpoint;
use hayat_menu::domain::ports::ConfigProvider;
use hayat_menu::utils::logger;
use hayat_menu::{Catalog, CliConfig, MenuEngine, MenuError, MenuSession};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting hayat-menu");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        fail(e);
    }
}

fn fail(e: MenuError) -> ! {
    tracing::error!(
        "❌ hayat-menu failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

async fn run(cli: CliConfig) -> hayat_menu::Result<()> {
    let config = cli.resolve()?;
    tracing::info!("✅ Configuration loaded and validated");

    let source = source_from_config(&config)?;
    let engine = MenuEngine::with_currency(source, config.currency_symbol());
    let breakpoint = Breakpoint::from_width(config.viewport_width());
    tracing::debug!("Viewport {}px uses {:?} layout", config.viewport_width(), breakpoint);

    if cli.list {
        let catalog = engine.load().await?;
        print_catalog(&catalog, breakpoint, engine.currency_symbol())?;
        return Ok(());
    }

    let (catalog, session) = engine.run(config.default_category(), &cli.ops).await?;
    let summary = engine.summarize(&session);

    match config.output_format() {
        OutputFormat::Text => {
            print_session(&catalog, &session, breakpoint, engine.currency_symbol())
        }
        OutputFormat::Json => println!("{}", export::summary_to_json(&summary)?),
        OutputFormat::Csv => print!("{}", export::summary_to_csv(&summary)?),
    }

    Ok(())
}

fn print_catalog(
    catalog: &Catalog,
    breakpoint: Breakpoint,
    currency_symbol: &str,
) -> hayat_menu::Result<()> {
    for category in catalog.categories() {
        let session = MenuSession::open(catalog, Some(&category.id))?;
        println!("== {} ({})", category.name, category.id);
        print!("{}", render::render_gallery(catalog, &session, breakpoint, currency_symbol));
    }
    Ok(())
}

fn print_session(
    catalog: &Catalog,
    session: &MenuSession,
    breakpoint: Breakpoint,
    currency_symbol: &str,
) {
    if let Some(sheet) = render::render_nav_sheet(catalog, session, breakpoint) {
        print!("{}", sheet);
        println!();
    }
    println!("{}", render::render_navigation(catalog, session, breakpoint));
    println!();
    print!("{}", render::render_gallery(catalog, session, breakpoint, currency_symbol));
    if let Some(detail) = render::render_detail(catalog, session, breakpoint, currency_symbol) {
        println!();
        print!("{}", detail);
    }
    println!();
    print!("{}", render::render_cart_area(session, currency_symbol));
}
