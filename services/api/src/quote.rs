use crate::infra::load_catalog;
use clap::Args;
use resale_calculator::config::AppConfig;
use resale_calculator::error::AppError;
use resale_calculator::valuation::{
    Catalog, ValuationEngine, ValuationRequest, ValuationResult,
};
use std::fmt::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Original purchase price
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) price: f64,
    /// Age of the item in whole years
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) age: i64,
    /// Category label, e.g. Electronics
    #[arg(long)]
    pub(crate) category: String,
    /// Condition label, e.g. good
    #[arg(long)]
    pub(crate) condition: String,
    /// Catalog definition file (defaults to APP_CATALOG_PATH or the built-in tables)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Catalog definition file (defaults to APP_CATALOG_PATH or the built-in tables)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let QuoteArgs {
        price,
        age,
        category,
        condition,
        catalog,
        json,
    } = args;

    let config = AppConfig::load()?;
    let catalog = load_catalog(catalog, &config.catalog)?;
    let engine = ValuationEngine::new(Arc::new(catalog));

    let result = engine.valuate(&ValuationRequest::new(price, age, category, condition))?;

    if json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
    } else {
        print!("{}", render_quote(&result));
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(args.catalog, &config.catalog)?;
    print!("{}", render_catalog(&catalog));
    Ok(())
}

fn render_quote(result: &ValuationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Resale estimate");
    let _ = writeln!(
        out,
        "- {} in {} condition, {} year(s) old",
        result.category, result.condition, result.age
    );
    let _ = writeln!(out, "- Original price: {:.2}", result.original_price);
    let _ = writeln!(out, "- Resale price:   {:.2}", result.resale_price);
    out
}

fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Categories");
    for category in catalog.list_categories() {
        if let Ok(curve) = catalog.parameters_for(category) {
            let _ = writeln!(
                out,
                "- {}: {:.0}% per year, capped at {:.0}%",
                category,
                curve.base_rate * 100.0,
                curve.cap * 100.0
            );
        }
    }

    let _ = writeln!(out, "\nConditions");
    for condition in catalog.list_conditions() {
        if let Ok(multiplier) = catalog.multiplier_for(condition) {
            let _ = writeln!(out, "- {}: x{:.2}", condition, multiplier);
        }
    }

    out
}
