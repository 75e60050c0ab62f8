use ::mongodb::{bson::doc, options::ReplaceOptions, Client, Collection, Database};
use serde::{de::DeserializeOwned, Serialize};

use super::StoreError;

#[derive(Debug, Clone)]
pub struct MongoConnection {
    database: Database,
}

impl MongoConnection {
    /// Connects and pings once so credential or connectivity problems surface
    /// before any document is touched.
    pub async fn new(db_url: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(db_url).await?;
        let database = client.database(db_name);

        database.run_command(doc! {"ping": 1}, None).await?;

        Ok(Self { database })
    }

    pub fn typed_collection<T>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    // Inserts doc_id if it doesn't exist, otherwise it replaces it
    pub async fn upsert_one<T: DeserializeOwned + Unpin + Send + Sync + Serialize>(
        &self,
        collection: &Collection<T>,
        doc_id: &str,
        document: &T,
    ) -> Result<(), StoreError> {
        collection
            .replace_one(
                doc! {"_id": doc_id},
                document,
                ReplaceOptions::builder().upsert(true).build(),
            )
            .await?;

        Ok(())
    }
}
