use actix_web::{App, HttpServer, middleware, web};
use std::sync::Arc;

use sheetforms::config::AppConfig;
use sheetforms::handlers;
use sheetforms::sheets::{GoogleSheetsClient, SheetAppender};
use sheetforms::site;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env is optional; real deployments set the variables directly
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    log::info!("Google Sheets configuration:");
    log::info!("  Spreadsheet ID: {}", config.sheets.spreadsheet_id);
    log::info!("  Client email: {}", config.sheets.client_email);
    log::info!("  Private key length: {}", config.sheets.private_key.len());

    let client = GoogleSheetsClient::new(&config.sheets).map_err(|e| {
        log::error!("Failed to initialize Google Sheets client: {e}");
        std::io::Error::other(e)
    })?;
    let sheets: Arc<dyn SheetAppender> = Arc::new(client);
    let sheets = web::Data::from(sheets);
    let options = web::Data::new(config.forms);
    let static_dir = config.static_dir.clone();

    if let Some(dir) = &static_dir {
        log::info!("Serving static site from {}", dir.display());
    }
    log::info!("Starting server at http://{}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(handlers::cors_headers())
            .wrap(middleware::Logger::default())
            .app_data(sheets.clone())
            .app_data(options.clone())
            .configure(handlers::configure)
            // Static site last: it claims every remaining path
            .configure(|cfg| {
                if let Some(dir) = &static_dir {
                    site::configure(cfg, dir);
                }
            })
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await
}
