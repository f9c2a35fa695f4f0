mod log;
mod models;
mod routes;

use actix_web::{web, App, HttpServer};
use clap::Parser;

use crate::log::{Store, DEFAULT_LOG_FILE};

/// Captures every inbound HTTP request and serves the saved log on `/check`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Port to run the server on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let store = web::Data::new(Store::new(DEFAULT_LOG_FILE));

    let addr = ("0.0.0.0", args.port);
    let server = HttpServer::new(move || App::new().app_data(store.clone()).configure(routes::configure));
    let server = match server.bind(addr) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, port = args.port, "failed to start server");
            std::process::exit(1);
        }
    };

    tracing::info!(port = args.port, file = DEFAULT_LOG_FILE, "server listening");
    server.run().await
}
