//! Career Recommender Backend - Main Entry Point
//!
//! Starts the web API server for the AI Career Recommender.

use career_recommender::api::run_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("╔════════════════════════════════════════════════╗");
    println!("║   AI Career Recommender - Backend API          ║");
    println!("║   Skills → Match → Recommend                   ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    // Start server
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);
    let data_dir = std::env::var("CAREER_DATA_DIR").unwrap_or_else(|_| "user_data".to_string());

    run_server(&host, port, &data_dir).await
}
