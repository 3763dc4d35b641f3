use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use interview_api::config::ApiConfig;
use interview_db::{
    InMemoryUserStore, PgUserStore, UserStore, create_pool, schema::initialize_database,
};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    interview_api::init_tracing(config.log_level)?;

    // Pick the store
    let store: Arc<dyn UserStore> = match &config.database_url {
        Some(database_url) => {
            let db_pool = create_pool(database_url, config.database_max_connections).await?;
            initialize_database(&db_pool).await?;
            Arc::new(PgUserStore::new(db_pool))
        }
        None => {
            warn!("DATABASE_URL is not set, users are kept in memory and lost on exit");
            Arc::new(InMemoryUserStore::new())
        }
    };

    // Start API server
    interview_api::start_server(config, store).await?;

    Ok(())
}
