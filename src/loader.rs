use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data_types::route::RouteRecord;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("route file not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("unable to read route file: {0}")]
    Unreadable(#[source] std::io::Error),
    #[error("route file could not be parsed: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error("route at position {0} has an empty id")]
    EmptyId(usize),
    #[error("duplicate route id: {0}")]
    DuplicateId(String),
}

/// Reads the curated route set from `path`, preserving file order. Every
/// record must carry a non-empty id, unique across the file.
pub fn load_routes(path: &Path) -> Result<Vec<RouteRecord>, LoadError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(LoadError::SourceNotFound(path.to_path_buf()))
        }
        Err(err) => return Err(LoadError::Unreadable(err)),
    };

    parse_routes(&content)
}

fn parse_routes(content: &str) -> Result<Vec<RouteRecord>, LoadError> {
    let routes: Vec<RouteRecord> = serde_json::from_str(content)?;

    let mut seen: HashSet<&str> = HashSet::new();
    for (position, route) in routes.iter().enumerate() {
        if route.id.is_empty() {
            return Err(LoadError::EmptyId(position));
        }
        if !seen.insert(&route.id) {
            return Err(LoadError::DuplicateId(route.id.clone()));
        }
    }

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_file_order_and_unknown_fields() {
        let routes = parse_routes(
            r##"[
                {"id": "loop-a", "fullName": "Loop A", "color": "#ff0000"},
                {"id": "loop-b"}
            ]"##,
        )
        .unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].id, "loop-a");
        assert_eq!(routes[0].full_name.as_deref(), Some("Loop A"));
        assert_eq!(routes[0].extra.get("color"), Some(&json!("#ff0000")));
        assert_eq!(routes[1].id, "loop-b");
        assert!(routes[1].full_name.is_none());
    }

    #[test]
    fn record_without_id_fails_the_load() {
        let err = parse_routes(r#"[{"fullName": "No id"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput(_)));
    }

    #[test]
    fn empty_id_fails_the_load() {
        let err = parse_routes(r#"[{"id": "r1"}, {"id": ""}]"#).unwrap_err();
        assert!(matches!(err, LoadError::EmptyId(1)));
    }

    #[test]
    fn duplicate_id_fails_the_load() {
        let err = parse_routes(r#"[{"id": "r1"}, {"id": "r1"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(id) if id == "r1"));
    }

    #[test]
    fn non_json_content_fails_the_load() {
        let err = parse_routes("routes: none").unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput(_)));
    }

    #[test]
    fn missing_file_is_source_not_found() {
        let err = load_routes(Path::new("/nonexistent/all_routes.json")).unwrap_err();
        assert!(matches!(err, LoadError::SourceNotFound(_)));
    }
}
