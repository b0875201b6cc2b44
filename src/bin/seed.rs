use clap::Parser;

use motorbike_universe::db::CatalogDb;
use motorbike_universe::result::Result;
use motorbike_universe::seed::seed_catalog;

#[derive(Parser)]
#[command(about = "Populate the motorcycle catalog database")]
struct Args {
    /// Path to the catalog database
    #[arg(long, default_value = "catalog.db")]
    db: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let db = CatalogDb::open(&args.db)?;
    seed_catalog(&db)?;

    Ok(())
}
