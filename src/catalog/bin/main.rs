use axum::Server;
use tokio::net::lookup_host;
use tracing::info;
use bookshelf::books::factory::create_book_repository;
use bookshelf::catalog::controller::routes;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::core::library::LibraryError;
use bookshelf::utils::logs::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::load()?;
    setup_tracing(&config);

    let addr = lookup_host((config.host.as_str(), config.port)).await?
        .next()
        .ok_or_else(|| LibraryError::internal(format!("cannot resolve {}", config.host).as_str()))?;

    let books = create_book_repository();
    let app = routes(AppState::new(config, books));

    info!(%addr, "bookshelf catalog listening");
    Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
