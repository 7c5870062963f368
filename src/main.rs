use contracting_firm::{config, errors::Result, shell};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!("Using database {}", app_config.database_url);

    // 4. Open the database and make sure the schema exists; both are fatal on failure
    let db = config::connect(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to open database: {}", e))?;
    config::ensure_schema(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Hand over to the terminal front end
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    shell::run(&db, &app_config, &mut input, &mut output).await?;

    db.close().await?;
    Ok(())
}
