use anyhow::Result;
use property_pricing::catalog::{BuiltinSource, CatalogSource, JsonFileSource};
use property_pricing::{Config, PropertyReport, PropertyStatus};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🏠 Property Pricing");

    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(BuiltinSource::new()),
    };
    info!("Loading catalog from {} source", source.source_name());
    let catalog = source.load().await?;

    for status in [
        PropertyStatus::Upcoming,
        PropertyStatus::Completed,
        PropertyStatus::Available,
    ] {
        info!("{} {} properties", catalog.by_status(status).count(), status);
    }

    let mut reports = Vec::with_capacity(catalog.len());
    for property in catalog.properties() {
        let report = PropertyReport::build(property)?;

        println!("{} ({})", report.title, report.price);
        println!(
            "   {} · {} · {}",
            report.location, report.area, report.price_per_sq_ft
        );
        for plan in &report.plans {
            match &plan.monthly_installment {
                Some(monthly) => println!(
                    "   {}: {} down + {} x {} = {}",
                    plan.name,
                    plan.down_payment,
                    plan.figures.installment_period,
                    monthly,
                    plan.total_payable
                ),
                None => println!("   {}: {}", plan.name, plan.total_payable),
            }
        }
        println!();

        reports.push(report);
    }

    // Save all quotes to one JSON file
    tokio::fs::create_dir_all(&config.export_dir).await?;
    let all_path = config.export_dir.join("quotes.json");
    tokio::fs::write(&all_path, serde_json::to_string_pretty(&reports)?).await?;
    info!("💾 Saved all quotes to {}", all_path.display());

    // Save each property to a separate file
    let per_property_dir = config.export_dir.join("quotes");
    tokio::fs::create_dir_all(&per_property_dir).await?;
    for report in &reports {
        let path = per_property_dir.join(format!("{}.json", report.slug));
        tokio::fs::write(&path, serde_json::to_string_pretty(report)?).await?;
    }
    info!(
        "💾 Saved {} individual quote files to {}",
        reports.len(),
        per_property_dir.display()
    );

    Ok(())
}
