use std::path::Path;

use database::{routes_db::RoutesDB, StoreError};
use processors::{UploadPipeline, UploadReport};
use util::{confirm::StdinConfirmation, logging, secrets::Secrets};

pub mod data_types;
pub mod database;
pub mod loader;
pub mod util;

pub mod processors;

pub struct App {
    routes_db: RoutesDB,
}

impl App {
    /// Connects to the store up front. A bad connection string or bad
    /// credentials mean no run at all.
    pub async fn connect(secrets: &Secrets) -> Result<Self, StoreError> {
        logging::set_global_level(logging::LogLevel::Verbose);

        Ok(Self {
            routes_db: RoutesDB::new(&secrets.db_url).await?,
        })
    }

    pub async fn upload_routes(&self, source: &Path) -> UploadReport {
        let mut confirmation = StdinConfirmation;

        UploadPipeline::new(&self.routes_db, &mut confirmation)
            .run(source)
            .await
    }
}
