use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::env;
use std::sync::OnceLock;
use tokio::sync::OnceCell;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static DOTENV_INIT: OnceLock<()> = OnceLock::new();
static TRACING_INIT: OnceLock<()> = OnceLock::new();
static DB_CONNECTION: OnceCell<DatabaseConnection> = OnceCell::const_new();

/// Load environment variables from .env exactly once
pub fn load_dotenv() {
    DOTENV_INIT.get_or_init(|| {
        dotenv::dotenv().ok();
    });
}

/// Initialize tracing exactly once: JSON output in production, pretty
/// output everywhere else
pub fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,sea_orm=warn"));

        let is_production =
            env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()) == "production";

        if is_production {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    });
}

/// Connect to the database and run migrations exactly once, returning a
/// cheap clone thereafter
pub async fn connect_and_migrate_from_env() -> DatabaseConnection {
    DB_CONNECTION
        .get_or_init(|| async {
            let database_url =
                env::var("DATABASE_URL").expect("DATABASE_URL must be set before starting");

            let db: DatabaseConnection = Database::connect(&database_url)
                .await
                .expect("Failed to connect to database");

            info!("Connected to database");

            Migrator::up(&db, None)
                .await
                .expect("Failed to run migrations");

            info!("Database migrations completed");

            db
        })
        .await
        .clone()
}
