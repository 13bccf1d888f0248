use clap::Parser;
use miette::{IntoDiagnostic, Result};
use order_pricing::application::quote::QuoteService;
use order_pricing::config::{SurchargeArgs, SurchargeSchedule};
use order_pricing::domain::ports::CatalogStoreBox;
use order_pricing::infrastructure::in_memory::InMemoryCatalogStore;
use order_pricing::interfaces::csv::catalog_reader::CatalogReader;
use order_pricing::interfaces::json::breakdown_writer::BreakdownWriter;
use order_pricing::interfaces::json::order_reader::OrderReader;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders as JSON lines. Reads stdin when omitted.
    orders: Option<PathBuf>,

    /// Directory holding the catalog CSV files
    #[arg(long, env = "PRICING_CATALOG_DIR")]
    catalog: PathBuf,

    #[command(flatten)]
    surcharges: SurchargeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let schedule = SurchargeSchedule::try_from(&cli.surcharges).into_diagnostic()?;
    let catalog = CatalogReader::new(schedule)
        .load_dir(&cli.catalog)
        .into_diagnostic()?;
    let store: CatalogStoreBox = Box::new(InMemoryCatalogStore::from_catalog(catalog));
    let service = QuoteService::new(store);

    let input: Box<dyn BufRead> = match cli.orders {
        Some(path) => Box::new(BufReader::new(File::open(path).into_diagnostic()?)),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut writer = BreakdownWriter::new(stdout.lock());

    for (line, order) in OrderReader::new(input).orders() {
        match order {
            Ok(order) => match service.quote(&order).await {
                Ok(breakdown) => writer.write(line, &breakdown).into_diagnostic()?,
                Err(e) => error!("Error pricing order {line}: {e}"),
            },
            Err(e) => error!("Error reading order {line}: {e}"),
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
