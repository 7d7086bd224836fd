use crate::config::InstituteConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::StudentRepository;
use axum::Router;
use dotenv;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::Sqlite;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub mod config;
mod database;
mod domain;
mod error;
mod features;


#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn StudentRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = InstituteConfig::from_env();

    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        println!(
            "Unable to connect to database at {}, creating...",
            config.database_url
        );
        match Sqlite::create_database(&config.database_url).await {
            Ok(_) => println!("Successfully created database at {}.", &config.database_url),
            Err(e) => panic!(
                "Unable to create database at {}. Error details: {}",
                &config.database_url, e
            ),
        };
    }

    // connect to our db
    let pool = match SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            panic!("Failed to create pool on {}: {}", config.database_url, e);
        }
    };

    // run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations.");

    let app_state = AppState {
        repo: Arc::new(SqliteRepository::new(pool)),
    };

    println!("Starting server...");

    // api router, where features are composed
    // the browser pages may be served from another origin during development,
    // so the api carries permissive CORS headers
    let api_router = features::students::students_router().layer(CorsLayer::permissive());

    let app = Router::new()
        .nest("/api", api_router)
        .fallback_service(ServeDir::new(&config.frontend_path))
        .with_state(app_state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
