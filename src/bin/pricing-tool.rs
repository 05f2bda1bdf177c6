//! Pricing CLI tool
//!
//! Prices services and packages against a tenant configuration.
//!
//! Usage:
//!   pricing-tool --config config/pricing.yaml quote --cost 1000 --utility-type service
//!   pricing-tool quote --cost 1000 --expense prints=120 --sale-price 1200
//!   pricing-tool quote --cost 1000 --unconfigured
//!   pricing-tool --config config/pricing.yaml package wedding.yaml --sale-price 9000
//!   pricing-tool --format json check-config
//!
//! Without `--config` the tenant is read from `STUDIO_*` environment
//! variables (a `.env` file is honoured).

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

use studio_pricing::config::{Config, LoggingConfig};
use studio_pricing::core::pricing::{
    Expense, LineItem, PackageTotals, PriceBreakdown, PricingConfig, ProfitAnalysis, UtilityType,
    aggregate_package, compute_service_price, compute_unconfigured_price, format_amount,
    reconcile_manual_price, reconcile_package, sum_expenses,
};
use studio_pricing::utils::logging::init_logging;

const DEFAULT_CURRENCY: &str = "MXN";

#[derive(Parser)]
#[command(name = "pricing-tool")]
#[command(version, about = "Price studio services and packages")]
struct Cli {
    /// Tenant configuration file (YAML); falls back to STUDIO_* variables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single service
    Quote {
        /// Direct cost of the service
        #[arg(long)]
        cost: f64,

        /// Fixed expense as NAME=AMOUNT, may be repeated
        #[arg(short, long = "expense", value_parser = parse_expense)]
        expenses: Vec<Expense>,

        /// Which utility margin applies
        #[arg(short, long, default_value = "service", value_parser = parse_utility_type)]
        utility_type: UtilityType,

        /// Manual sale price to reconcile against the system price
        #[arg(short, long)]
        sale_price: Option<f64>,

        /// Price without a tenant configuration (cost plus expenses only)
        #[arg(long)]
        unconfigured: bool,
    },

    /// Price a package described in a YAML file
    Package {
        /// Package file with `name` and `items`
        file: PathBuf,

        /// Manual sale price for the whole package
        #[arg(short, long)]
        sale_price: Option<f64>,
    },

    /// Validate the tenant configuration and print normalized fractions
    CheckConfig,
}

/// Package definition as read from disk
#[derive(Debug, Deserialize)]
struct PackageFile {
    name: String,
    items: Vec<LineItem>,
}

#[derive(Serialize)]
struct QuoteOutput<'a> {
    breakdown: &'a PriceBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a ProfitAnalysis>,
}

#[derive(Serialize)]
struct PackageOutput<'a> {
    name: &'a str,
    totals: &'a PackageTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a ProfitAnalysis>,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    tenant_id: &'a str,
    currency: &'a str,
    pricing: &'a PricingConfig,
}

fn parse_expense(raw: &str) -> std::result::Result<Expense, String> {
    let (name, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=AMOUNT, got '{}'", raw))?;
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid amount", amount))?;
    Ok(Expense::new(name.trim(), amount))
}

fn parse_utility_type(raw: &str) -> std::result::Result<UtilityType, String> {
    raw.parse().map_err(|e: studio_pricing::PricingError| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let needs_config = !matches!(
        cli.command,
        Commands::Quote {
            unconfigured: true,
            ..
        }
    );

    let config = if needs_config {
        Some(load_config(cli.config.as_ref()).await?)
    } else {
        None
    };

    let logging: LoggingConfig = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    init_logging(&logging)?;
    info!("pricing-tool {}", studio_pricing::VERSION);

    let currency = config
        .as_ref()
        .map(|c| c.tenant.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    match cli.command {
        Commands::Quote {
            cost,
            expenses,
            utility_type,
            sale_price,
            unconfigured,
        } => {
            let expenses_total = sum_expenses(&expenses)?;
            let breakdown = match &config {
                Some(config) if !unconfigured => {
                    let pricing = config.pricing()?;
                    compute_service_price(cost, expenses_total, utility_type, &pricing)?
                }
                _ => compute_unconfigured_price(cost, expenses_total, utility_type)?,
            };

            let analysis = match (sale_price, &config) {
                (Some(sale_price), Some(config)) if !unconfigured => Some(
                    reconcile_manual_price(&breakdown, sale_price, &config.pricing()?)?,
                ),
                (Some(_), _) => bail!("--sale-price needs a tenant configuration"),
                (None, _) => None,
            };

            match cli.format {
                OutputFormat::Json => print_json(&QuoteOutput {
                    breakdown: &breakdown,
                    analysis: analysis.as_ref(),
                })?,
                OutputFormat::Text => {
                    print_breakdown(&breakdown, &currency);
                    if let Some(analysis) = &analysis {
                        print_analysis(analysis, &currency);
                    }
                }
            }
        }

        Commands::Package { file, sale_price } => {
            let config = config.context("package pricing needs a tenant configuration")?;
            let pricing = config.pricing()?;

            let content = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read package file {:?}", file))?;
            let package: PackageFile = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse package file {:?}", file))?;
            debug!(package = %package.name, items = package.items.len(), "Loaded package");

            let totals = aggregate_package(&package.items, &pricing)?;
            let analysis = sale_price
                .map(|sale_price| reconcile_package(&totals, sale_price, &pricing))
                .transpose()?;

            match cli.format {
                OutputFormat::Json => print_json(&PackageOutput {
                    name: &package.name,
                    totals: &totals,
                    analysis: analysis.as_ref(),
                })?,
                OutputFormat::Text => {
                    print_package(&package.name, &totals, &currency);
                    if let Some(analysis) = &analysis {
                        print_analysis(analysis, &currency);
                    }
                }
            }
        }

        Commands::CheckConfig => {
            let config = config.context("no configuration loaded")?;
            let pricing = config.pricing()?;

            match cli.format {
                OutputFormat::Json => print_json(&CheckOutput {
                    tenant_id: &config.tenant.tenant_id,
                    currency: &config.tenant.currency,
                    pricing: &pricing,
                })?,
                OutputFormat::Text => {
                    println!("Tenant: {}", config.tenant.tenant_id);
                    if let Some(name) = &config.tenant.name {
                        println!("Name: {}", name);
                    }
                    println!("Currency: {}", config.tenant.currency);
                    println!("Utility (services): {}", pricing.utility_service_percent);
                    println!("Utility (products): {}", pricing.utility_product_percent);
                    println!("Commission: {}", pricing.commission_percent);
                    println!("Markup: {}", pricing.markup_percent);
                    println!("Configuration OK");
                }
            }
        }
    }

    Ok(())
}

async fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to load configuration from {:?}", path))?,
        None => Config::from_env().context("Failed to load configuration from environment")?,
    };
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_breakdown(breakdown: &PriceBreakdown, currency: &str) {
    if breakdown.is_degraded() {
        println!("WARNING: no pricing configuration, showing cost plus expenses only");
    }
    println!("Type:          {}", breakdown.utility_type);
    println!("Cost:          {}", format_amount(breakdown.cost, currency));
    println!("Expenses:      {}", format_amount(breakdown.expenses, currency));
    println!("Utility:       {}", format_amount(breakdown.base_utility, currency));
    println!("Subtotal:      {}", format_amount(breakdown.subtotal, currency));
    println!("Markup:        {}", format_amount(breakdown.markup_amount, currency));
    println!("System price:  {}", format_amount(breakdown.system_price, currency));
    println!("Commission:    {}", format_amount(breakdown.commission_amount, currency));
}

fn print_analysis(analysis: &ProfitAnalysis, currency: &str) {
    println!();
    println!("Sale price:    {}", format_amount(analysis.sale_price, currency));
    println!("Commission:    {}", format_amount(analysis.real_commission, currency));
    println!("Real profit:   {}", format_amount(analysis.real_profit, currency));
    println!("Margin:        {:.2}%", analysis.margin_percent);
    println!("Expected:      {}", format_amount(analysis.expected_utility, currency));
    println!(
        "Deviation:     {} ({:.2}%)",
        format_amount(analysis.deviation, currency),
        analysis.deviation_percent
    );
    println!("Health:        {}", analysis.health_status);
}

fn print_package(name: &str, totals: &PackageTotals, currency: &str) {
    println!("Package: {}", name);
    for line in &totals.lines {
        println!(
            "  {:<24} x{:<3} {} ({} each)",
            line.name,
            line.quantity,
            format_amount(line.line_system_price, currency),
            format_amount(line.breakdown.system_price, currency)
        );
    }
    println!("Cost:              {}", format_amount(totals.total_cost, currency));
    println!("Expenses:          {}", format_amount(totals.total_expenses, currency));
    println!(
        "Utility services:  {}",
        format_amount(totals.total_utility_services, currency)
    );
    println!(
        "Utility products:  {}",
        format_amount(totals.total_utility_products, currency)
    );
    println!("Utility total:     {}", format_amount(totals.total_utility, currency));
    println!(
        "System price:      {}",
        format_amount(totals.package_system_price, currency)
    );
}
