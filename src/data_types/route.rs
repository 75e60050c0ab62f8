use serde_derive::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::data_types::common::{DocumentId, Identifiable};

/// Route record as curated in the JSON source file. The schema is open:
/// anything besides the named fields lands in `extra` and is written to the
/// store verbatim. Polyline pairs stay untyped here so that a malformed pair
/// fails normalization of its own record instead of the whole load.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RouteRecord {
    pub id: DocumentId,

    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(rename = "approvedRoutes", skip_serializing_if = "Option::is_none")]
    pub approved_routes: Option<Vec<ApprovedRoute>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RouteRecord {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.id)
    }
}

impl Identifiable for RouteRecord {
    fn document_id(&self) -> &DocumentId {
        &self.id
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApprovedRoute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polyline: Option<Vec<Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Document shape persisted in the `approved_routes` collection. Identical to
/// the source record except that every polyline is in the store's keyed
/// coordinate representation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RouteDocument {
    pub id: DocumentId,

    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(rename = "approvedRoutes", skip_serializing_if = "Option::is_none")]
    pub approved_routes: Option<Vec<ApprovedRouteDocument>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identifiable for RouteDocument {
    fn document_id(&self) -> &DocumentId {
        &self.id
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApprovedRouteDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polyline: Option<Vec<Coordinate>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}
