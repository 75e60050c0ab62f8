use serde_json::Value;
use thiserror::Error;

use crate::data_types::{
    common::DocumentId,
    route::{ApprovedRoute, ApprovedRouteDocument, Coordinate, RouteDocument, RouteRecord},
};

#[derive(Debug, Error, PartialEq)]
pub enum InvalidCoordinate {
    #[error("polyline entry is not an array: {0}")]
    NotAPair(String),
    #[error("coordinate pair has {0} elements, expected 2")]
    WrongArity(usize),
    #[error("coordinate element is not numeric: {0}")]
    NotNumeric(String),
}

#[derive(Debug, Error)]
#[error("route {route_id} failed normalization: {source}")]
pub struct RouteNormalizationFailed {
    pub route_id: DocumentId,
    #[source]
    pub source: InvalidCoordinate,
}

/// `[lat, lon]` pair to the store's keyed representation. Integer and float
/// elements are both accepted; anything else fails the pair.
pub fn normalize_pair(value: &Value) -> Result<Coordinate, InvalidCoordinate> {
    let pair = value
        .as_array()
        .ok_or_else(|| InvalidCoordinate::NotAPair(value.to_string()))?;

    if pair.len() != 2 {
        return Err(InvalidCoordinate::WrongArity(pair.len()));
    }

    let as_float = |element: &Value| {
        element
            .as_f64()
            .ok_or_else(|| InvalidCoordinate::NotNumeric(element.to_string()))
    };

    Ok(Coordinate {
        lat: as_float(&pair[0])?,
        lon: as_float(&pair[1])?,
    })
}

fn normalize_approved_route(
    route: &ApprovedRoute,
) -> Result<ApprovedRouteDocument, InvalidCoordinate> {
    let polyline = match &route.polyline {
        Some(pairs) => Some(
            pairs
                .iter()
                .map(normalize_pair)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        None => None,
    };

    Ok(ApprovedRouteDocument {
        polyline,
        extra: route.extra.clone(),
    })
}

/// Builds the store payload for one record: every field passes through
/// verbatim except the polylines inside `approvedRoutes`. The input record is
/// never touched, and a single bad pair fails the whole record.
pub fn normalize_route(record: &RouteRecord) -> Result<RouteDocument, RouteNormalizationFailed> {
    let approved_routes = match &record.approved_routes {
        Some(routes) => Some(
            routes
                .iter()
                .map(normalize_approved_route)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|cause| RouteNormalizationFailed {
                    route_id: record.id.clone(),
                    source: cause,
                })?,
        ),
        // An absent approvedRoutes stays absent; no empty list is emitted.
        None => None,
    };

    Ok(RouteDocument {
        id: record.id.clone(),
        full_name: record.full_name.clone(),
        approved_routes,
        extra: record.extra.clone(),
    })
}
