use thiserror::Error;

use crate::data_types::{common::DocumentId, route::RouteDocument};

pub mod mongodb;
pub mod routes_db;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("write rejected: {0}")]
    WriteRejected(String),
}

impl From<::mongodb::error::Error> for StoreError {
    fn from(err: ::mongodb::error::Error) -> Self {
        use ::mongodb::error::ErrorKind;

        // Connectivity and credential failures kill the whole run; anything
        // the server dislikes about a single document does not.
        let unavailable = matches!(
            &*err.kind,
            ErrorKind::ServerSelection { .. }
                | ErrorKind::Authentication { .. }
                | ErrorKind::Io(_)
                | ErrorKind::ConnectionPoolCleared { .. }
        );

        if unavailable {
            StoreError::Unavailable(err.to_string())
        } else {
            StoreError::WriteRejected(err.to_string())
        }
    }
}

/// Write seam of the pipeline. The MongoDB implementation lives in
/// [`routes_db`]; tests substitute an in-memory one.
#[allow(async_fn_in_trait)]
pub trait RouteStore {
    /// Full-document overwrite of `route_id`; creates the document when it
    /// does not exist yet.
    async fn upsert_route(
        &self,
        route_id: &DocumentId,
        document: &RouteDocument,
    ) -> Result<(), StoreError>;
}
