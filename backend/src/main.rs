mod config;
mod engine;
mod error;
mod routes;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use config::AppConfig;
use engine::ComparisonEngine;
use routes::{configure_api, ImageStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let engine = ComparisonEngine::new(config.engine_url.clone(), config.engine_timeout)
        .map_err(|e| {
            log::error!("Failed to build HTTP client: {}", e);
            std::io::Error::other(e.to_string())
        })?;

    if !config.images_dir.is_dir() {
        log::warn!(
            "Image directory {} does not exist yet; image requests will 404",
            config.images_dir.display()
        );
    }

    log::info!("Comparison engine: {}", engine.url());
    log::info!("Serving images from {}", config.images_dir.display());
    log::info!("Serving frontend from {}", config.frontend_dir.display());

    let bind_address = config.socket_address();
    log::info!("Starting server on {}", bind_address);

    let images = ImageStore {
        dir: config.images_dir.clone(),
    };
    let frontend_dir = config.frontend_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(engine.clone()))
            .app_data(web::Data::new(images.clone()))
            .configure(configure_api)
            .service(Files::new("/", frontend_dir.clone()).index_file("index.html"))
    })
    .bind(&bind_address)?
    .run()
    .await
}
