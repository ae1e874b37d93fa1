use actix_web::{App, HttpServer, middleware, web};
use std::sync::Arc;
use tracing::{error, info};

use pastelink::api::{self, AppStartTime};
use pastelink::config::get_config;
use pastelink::services::ResourceService;
use pastelink::storage::StorageFactory;
use pastelink::system::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    dotenvy::dotenv().ok();

    let config = get_config();
    init_logging(config);

    let storage = match StorageFactory::create().await {
        Ok(storage) => storage,
        Err(e) => {
            error!("Failed to initialize storage: {}", e.format_colored());
            std::process::exit(1);
        }
    };
    info!("Using storage backend: {}", storage.backend_name());

    let service = Arc::new(ResourceService::from_config(storage.clone()));

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .wrap(middleware::Compress::default())
            .configure(api::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
