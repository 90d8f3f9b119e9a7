use anyhow::{anyhow, Result};
use serde_json::Value;

use super::{
    FormatRequest, FormatResponse, FormatService, SearchHit, SearchMatch, SearchRequest,
    SearchResponse, SearchService,
};

/// In-process backend for both endpoints: pretty-printing and a
/// case-insensitive substring walk over the parsed JSON value.
pub struct JsonBackend;

impl FormatService for JsonBackend {
    fn format(&self, request: &FormatRequest) -> Result<FormatResponse> {
        let value: Value =
            serde_json::from_str(&request.data).map_err(|_| anyhow!("Invalid JSON"))?;
        Ok(FormatResponse {
            formatted: serde_json::to_string_pretty(&value)?,
        })
    }
}

impl SearchService for JsonBackend {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let value: Value =
            serde_json::from_str(&request.data).map_err(|_| anyhow!("Invalid JSON"))?;
        let term = request.search_term.to_lowercase();
        let mut response = SearchResponse::default();
        walk(&value, &term, &mut Vec::new(), &mut response);
        Ok(response)
    }
}

/// Render a scalar the way it appears in pretty-printed output, so every
/// match value occurs literally in the document.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn push_hit(response: &mut SearchResponse, value: String, path: &[String]) {
    response.results.push(SearchHit {
        value: value.clone(),
        path: Some(path.join("->")),
    });
    response.matches.push(SearchMatch { value });
}

/// Depth-first walk. Object keys are quoted in paths, array indices are
/// bare, segments joined with `->`. Containers recurse; scalars match on
/// their lowered string rendering.
fn walk(value: &Value, term: &str, path: &mut Vec<String>, response: &mut SearchResponse) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                path.push(format!("'{}'", key));
                if key.to_lowercase().contains(term) {
                    push_hit(response, key.clone(), path);
                }
                match val {
                    Value::Object(_) | Value::Array(_) => walk(val, term, path, response),
                    scalar => {
                        let text = scalar_text(scalar);
                        if text.to_lowercase().contains(term) {
                            push_hit(response, text, path);
                        }
                    }
                }
                path.pop();
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                path.push(i.to_string());
                match item {
                    Value::Object(_) | Value::Array(_) => walk(item, term, path, response),
                    scalar => {
                        let text = scalar_text(scalar);
                        if text.to_lowercase().contains(term) {
                            push_hit(response, text, path);
                        }
                    }
                }
                path.pop();
            }
        }
        // A bare top-level scalar has no addressable children.
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(data: &str, term: &str) -> SearchResponse {
        JsonBackend
            .search(&SearchRequest {
                data: data.to_string(),
                search_term: term.to_string(),
            })
            .unwrap()
    }

    #[test]
    fn test_format_pretty_prints_two_spaces() {
        let response = JsonBackend
            .format(&FormatRequest {
                data: r#"{"a":[1,2]}"#.to_string(),
            })
            .unwrap();
        assert_eq!(response.formatted, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn test_format_rejects_invalid_json() {
        let err = JsonBackend
            .format(&FormatRequest {
                data: "{not json".to_string(),
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON");
    }

    #[test]
    fn test_search_matches_keys_and_values() {
        let response = search(r#"{"name": "alice", "nickname": "al"}"#, "name");
        let values: Vec<_> = response.matches.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["name", "nickname"]);
        assert_eq!(response.results[0].path.as_deref(), Some("'name'"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let response = search(r#"{"City": "Berlin"}"#, "berlin");
        assert_eq!(response.matches.len(), 1);
        assert_eq!(response.matches[0].value, "Berlin");
    }

    #[test]
    fn test_search_builds_nested_paths() {
        let response = search(r#"{"users": [{"id": 7}, {"id": 42}]}"#, "42");
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].path.as_deref(), Some("'users'->1->'id'"));
        assert_eq!(response.matches[0].value, "42");
    }

    #[test]
    fn test_search_renders_non_string_scalars() {
        let response = search(r#"{"active": true, "score": 3.5}"#, "true");
        assert_eq!(response.matches.len(), 1);
        assert_eq!(response.matches[0].value, "true");
    }

    #[test]
    fn test_search_no_matches_is_empty() {
        let response = search(r#"{"a": 1}"#, "zebra");
        assert!(response.results.is_empty());
        assert!(response.matches.is_empty());
    }

    #[test]
    fn test_search_rejects_invalid_json() {
        let err = JsonBackend
            .search(&SearchRequest {
                data: "[".to_string(),
                search_term: "x".to_string(),
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON");
    }
}
