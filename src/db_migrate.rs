use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use caresync_db::{DEFAULT_MAX_CONNECTIONS, create_pool, schema::initialize_database};
use tracing::{Level, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    caresync_api::init_tracing(Level::INFO)?;

    let database_url = std::env::var("DATABASE_URL")
        .wrap_err("DATABASE_URL environment variable must be set")?;

    info!("Connecting to database...");
    let db_pool = create_pool(&database_url, DEFAULT_MAX_CONNECTIONS).await?;

    initialize_database(&db_pool).await?;
    info!("Schema is up to date.");

    Ok(())
}
