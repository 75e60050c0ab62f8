use ::mongodb::Collection;

use crate::data_types::{common::DocumentId, route::RouteDocument};

use super::{mongodb::MongoConnection, RouteStore, StoreError};

/// The `approved_routes` collection: one document per route record, keyed by
/// the record's id.
pub struct RoutesDB {
    db_conn: MongoConnection,
}

impl RoutesDB {
    const DB_NAME: &str = "campus_transit";
    const COLL_NAME: &str = "approved_routes";

    pub async fn new(db_url: &str) -> Result<Self, StoreError> {
        Ok(Self {
            db_conn: MongoConnection::new(db_url, RoutesDB::DB_NAME).await?,
        })
    }

    fn typed_collection(&self) -> Collection<RouteDocument> {
        self.db_conn.typed_collection(RoutesDB::COLL_NAME)
    }
}

impl RouteStore for RoutesDB {
    async fn upsert_route(
        &self,
        route_id: &DocumentId,
        document: &RouteDocument,
    ) -> Result<(), StoreError> {
        self.db_conn
            .upsert_one(&self.typed_collection(), route_id, document)
            .await
    }
}
