use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::EnvFilter;

use splitbills::{ids::UuidSupplier, ledger::Ledger, routes::configure_routes, settings::Settings};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = Settings::new()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "splitbills={level},actix_web={level}",
            level = settings.log.level
        ))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ledger = web::Data::new(RwLock::new(Ledger::new(Arc::new(UuidSupplier))));
    info!("Listening on {}:{}", settings.server.host, settings.server.port);

    HttpServer::new(move || {
        App::new()
            .app_data(ledger.clone())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind((settings.server.host.as_str(), settings.server.port))?
    .run()
    .await
}
