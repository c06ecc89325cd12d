//! Timetable API Server binary

use clap::Parser;
use prayer_timetable::api::{run_api_server, server::ApiConfig};

#[derive(Parser, Debug)]
#[command(name = "timetable-server")]
#[command(version)]
#[command(about = "Timetable API Server - HTTP API for spreadsheet prayer timetable conversion")]
#[command(long_about = r#"
Timetable API Server

Endpoints:
  - POST /api/v1/convert   - Convert a spreadsheet (request body) to JSON
  - GET  /health           - Health check
  - GET  /version          - Server version info
  - GET  /                 - API documentation

Features:
  - CORS enabled for browser uploads
  - Graceful shutdown on SIGINT/SIGTERM
  - JSON response envelope with request IDs
  - Structured request logging (RUST_LOG)

Example usage:
  timetable-server                           # Start on localhost:8080
  timetable-server --host 0.0.0.0 --port 3000

  curl -X POST "http://localhost:8080/api/v1/convert?start_date=2024-03-11" \
    --data-binary @ramadan.xlsx
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "TIMETABLE_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "TIMETABLE_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
    };

    run_api_server(config).await
}
