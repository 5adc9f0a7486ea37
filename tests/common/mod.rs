use jsonwebtoken::{encode, EncodingKey, Header};
use migration::{Migrator, MigratorTrait};
use raspisnoy_backend::auth::Claims;
use sea_orm::{Database, DatabaseConnection};
use std::env;
use std::sync::Once;
use tokio::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();
static DB_CONNECTION: OnceCell<DatabaseConnection> = OnceCell::const_new();

pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,sea_orm=warn"));
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    });
}

/// Test-only JWT helper that issues a signed token using the same
/// secret, algorithm, and claims as production
pub fn test_issue_token(sub: &str, username: &str, ttl_seconds: i64) -> String {
    let now = chrono::Utc::now();
    let iat = now.timestamp() as usize;
    let exp = (now.timestamp() + ttl_seconds) as usize;

    let claims = Claims {
        sub: sub.to_string(),
        username: username.to_string(),
        iat,
        exp,
    };

    let secret = jwt_secret();
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .expect("Failed to encode JWT token for test")
}

fn jwt_secret() -> String {
    env::var("AUTH_SECRET").unwrap_or_else(|_| "change-me".to_string())
}

/// Test bootstrap: loads .env, refuses non-test databases, initializes
/// tracing, then connects and migrates once
pub async fn test_bootstrap() -> DatabaseConnection {
    let _ = dotenv::dotenv();
    ensure_test_db();
    init_tracing_for_tests();
    connect_and_migrate_from_env().await
}

fn ensure_test_db() {
    let url = env::var("DATABASE_URL").expect("DATABASE_URL is required for tests");
    assert!(
        url.contains("_test"),
        "Refusing to run unless DATABASE_URL points to a *_test database. Current: {url}"
    );
}

async fn connect_and_migrate_from_env() -> DatabaseConnection {
    DB_CONNECTION
        .get_or_init(|| async {
            let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

            let db: DatabaseConnection = Database::connect(&database_url)
                .await
                .expect("DB connect failed");

            Migrator::up(&db, None).await.expect("Migrator::up failed");

            db
        })
        .await
        .clone()
}
