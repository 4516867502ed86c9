use anyhow::Context;
use clap::Parser;
use hovmart_listings::config::AppConfig;
use hovmart_listings::data::{JsonFileProvider, MockProvider, PropertyProvider};
use hovmart_listings::listing::{format_price, BookingQuote, GridConfig, PageItem};
use hovmart_listings::listing::quote::DEFAULT_NIGHTS;
use hovmart_listings::models::{partition_categories, PropertyType};
use hovmart_listings::search::guests::GuestCounts;
use hovmart_listings::search::{FileStore, FilterSelection, PriceRange, RoomThreshold, SearchParams, SearchSession};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search the property listings
#[derive(Debug, Parser)]
#[command(name = "hovmart-listings", version)]
struct Cli {
    /// Text matched against title and location
    #[arg(long, default_value = "")]
    location: String,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    check_in: String,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    check_out: String,

    /// Adults; with children this is the guest count, so land is never shown
    #[arg(long, default_value_t = 1)]
    adults: u32,

    #[arg(long, default_value_t = 0)]
    children: u32,

    #[arg(long, default_value_t = 0)]
    infants: u32,

    /// Category id, or "all"
    #[arg(long, default_value = "all")]
    category: String,

    #[arg(long, default_value_t = 0)]
    min_price: u64,

    #[arg(long, default_value_t = hovmart_listings::search::types::DEFAULT_MAX_PRICE)]
    max_price: u64,

    /// Property type, repeatable
    #[arg(long = "type")]
    property_types: Vec<PropertyType>,

    /// Required amenity, repeatable
    #[arg(long = "amenity")]
    amenities: Vec<String>,

    /// Minimum beds: 1-4 or 5+
    #[arg(long)]
    beds: Option<RoomThreshold>,

    /// Minimum baths: 1-4 or 5+
    #[arg(long)]
    baths: Option<RoomThreshold>,

    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Listings JSON file instead of the built-in demo data
    #[arg(long)]
    data: Option<PathBuf>,

    /// Config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::default_path);
    let config = AppConfig::load(&config_path)?;

    info!("🏠 Hovmart Listings");
    info!("===================");

    let provider: Box<dyn PropertyProvider> = match cli.data.as_ref().or(config.data_file.as_ref()) {
        Some(path) => Box::new(JsonFileProvider::new(path)),
        None => Box::new(MockProvider::new()),
    };
    let store = Arc::new(FileStore::new(&config.storage_dir));

    let mut session = SearchSession::open(provider.as_ref(), store, &config)
        .await
        .context("Failed to open search session")?;

    let (featured, regular) = partition_categories(session.categories());
    info!(
        "Categories: {} featured, {} more",
        featured.iter().map(|c| c.label.as_str()).collect::<Vec<_>>().join(", "),
        regular.len()
    );

    let guest_details = GuestCounts {
        adults: cli.adults,
        children: cli.children,
        infants: cli.infants,
    };
    let guests = guest_details.total();

    session.search(SearchParams {
        location: cli.location,
        check_in: cli.check_in,
        check_out: cli.check_out,
        guests,
        guest_details,
        ..SearchParams::default()
    });
    session.set_category(&cli.category);
    session.apply_filters(FilterSelection {
        price_range: PriceRange::new(cli.min_price, cli.max_price),
        property_types: cli.property_types.into_iter().collect(),
        amenities: cli.amenities.into_iter().collect(),
        beds: cli.beds,
        baths: cli.baths,
    });
    session.refresh().await;
    session.set_page(cli.page);

    // Display results
    let view = session.view();
    info!(
        "✅ {} {} available, {} active filters",
        view.total,
        if view.total == 1 { "property" } else { "properties" },
        view.active_filters
    );

    let offset = (view.page - 1) * view.per_page;
    for (i, property) in view.items.iter().enumerate() {
        println!("{}. {} ({})", offset + i + 1, property.title, format_price(property));
        println!("   {} · {}", property.property_type, property.location);
        match (property.beds(), property.baths()) {
            (Some(beds), Some(baths)) => println!("   {} beds, {} baths", beds, baths),
            _ => println!("   Land"),
        }
        let quote = BookingQuote::for_property(property, DEFAULT_NIGHTS);
        println!("   Quote: {} x {} + fee = {}", quote.unit_price, quote.quantity, quote.total);
        println!("   ID: {}", property.id);
        println!();
    }

    let picks = GridConfig::featured().select(session.results());
    if !picks.is_empty() {
        let titles: Vec<&str> = picks.iter().map(|p| p.title.as_str()).collect();
        info!("⭐ Featured among results: {}", titles.join(", "));
    }

    let pages: Vec<String> = view
        .pages
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == view.page => format!("[{}]", n),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect();
    println!("Page {} of {}: {}", view.page, view.total_pages, pages.join(" "));

    if !session.history().is_empty() {
        info!("💾 {} recent searches saved to {}", session.history().len(), config.storage_dir.display());
    }

    Ok(())
}
