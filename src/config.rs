use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct InstituteConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub frontend_path: PathBuf,
    pub port: u16,
}

impl InstituteConfig {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .expect("Failed to determine DATABASE_URL from environment variables");

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        let frontend_path = PathBuf::from(
            std::env::var("FRONTEND_DIST_PATH")
                .expect("Failed to determine FRONTEND_DIST_PATH from environment variables"),
        );

        let port = std::env::var("PORT")
            .ok()
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(3001);

        Self {
            database_url,
            max_connections,
            frontend_path,
            port,
        }
    }
}
