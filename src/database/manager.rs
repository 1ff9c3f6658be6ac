use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::MongoConfig;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Timed out connecting to MongoDB after {0:?}")]
    ConnectTimeout(Duration),

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

/// Owns the process-lifetime MongoDB client.
///
/// Built once at startup and handed to repositories explicitly. `Client` is
/// internally reference counted, so clones share one connection pool.
#[derive(Clone, Debug)]
pub struct DatabaseManager {
    client: Client,
    database_name: String,
}

impl DatabaseManager {
    /// Upper bound on connecting and the initial ping
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    const APP_NAME: &'static str = "menu-api";

    /// Connect using `config` and ping the primary to verify the connection.
    pub async fn connect(config: &MongoConfig) -> Result<Self, DatabaseError> {
        if config.uri.is_empty() {
            return Err(DatabaseError::ConfigMissing("MONGO_URI"));
        }
        if config.database.is_empty() {
            return Err(DatabaseError::ConfigMissing("MONGO_DB"));
        }

        let connect = async {
            let mut options = ClientOptions::parse(&config.uri).await?;
            options.app_name = Some(Self::APP_NAME.to_string());
            options.connect_timeout = Some(Self::CONNECT_TIMEOUT);
            options.server_selection_timeout = Some(Self::CONNECT_TIMEOUT);

            let client = Client::with_options(options)?;
            let manager = Self {
                client,
                database_name: config.database.clone(),
            };
            manager.ping().await?;
            Ok::<_, DatabaseError>(manager)
        };

        let manager = tokio::time::timeout(Self::CONNECT_TIMEOUT, connect)
            .await
            .map_err(|_| DatabaseError::ConnectTimeout(Self::CONNECT_TIMEOUT))??;

        info!(
            "Connected to MongoDB at {} (database: {})",
            redact_uri(&config.uri),
            config.database
        );
        Ok(manager)
    }

    pub fn database(&self) -> Database {
        self.client.database(&self.database_name)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        self.database().run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    /// Close the client's connections (e.g., on shutdown)
    pub async fn close(self) {
        self.client.shutdown().await;
        info!("Closed MongoDB client for database: {}", self.database_name);
    }
}

/// Render a connection string without credentials, for logs.
pub fn redact_uri(uri: &str) -> String {
    match url::Url::parse(uri) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        // Seed lists ("host1,host2") do not parse as URLs; keep only the scheme
        Err(_) => match uri.split_once("://") {
            Some((scheme, _)) => format!("{scheme}://***"),
            None => "***".to_string(),
        },
    }
}
