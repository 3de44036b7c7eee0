use std::sync::Arc;

use anyhow::Error;
use auth::Authenticator;
use book_service::config::Config;
use book_service::domain::book::service::BookService;
use book_service::domain::loan::service::LoanService;
use book_service::inbound::http::create_router;
use book_service::outbound::repositories::PostgresBookRepository;
use book_service::outbound::repositories::PostgresLoanLedger;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "book-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));

    let book_repository = Arc::new(PostgresBookRepository::new(pg_pool.clone()));
    let loan_ledger = Arc::new(PostgresLoanLedger::new(pg_pool));

    let book_service = Arc::new(BookService::new(book_repository));
    let loan_service = Arc::new(LoanService::new(loan_ledger));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(book_service, loan_service, authenticator);
    axum::serve(listener, application).await?;

    Ok(())
}
