use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use creative_match::config::Settings;
use creative_match::core::Matcher;
use creative_match::routes::{self, matches::AppState};
use creative_match::services::RosterStore;
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_tracing(&settings.logging.level, &settings.logging.format);

    info!("Starting Creative Match service...");

    let roster = Arc::new(RosterStore::from_file(
        &settings.roster.path,
        settings.roster.cache_ttl_secs,
    ));

    // Preload so a bad roster path fails at startup
    match roster.load().await {
        Ok(creatives) => info!(
            "Roster loaded from {} ({} creatives, cache TTL: {}s)",
            settings.roster.path,
            creatives.len(),
            settings.roster.cache_ttl_secs
        ),
        Err(e) => {
            error!("Failed to load roster from {}: {}", settings.roster.path, e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    }

    let matcher = Matcher::with_top_n(settings.matching.top_n);

    info!("Matcher initialized (top {})", matcher.top_n());

    let app_state = AppState { roster, matcher };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
