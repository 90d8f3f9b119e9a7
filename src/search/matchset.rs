use crate::services::SearchResponse;

/// One literal value the search service judged to match, plus the
/// structural locator of the corresponding results entry when one lines up
/// positionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDescriptor {
    pub value: String,
    pub path: Option<String>,
}

/// Ordered sequence of match descriptors. Service order is preserved and
/// duplicates are kept: each descriptor gets its own highlight pass.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    descriptors: Vec<MatchDescriptor>,
}

impl MatchSet {
    pub fn from_response(response: &SearchResponse) -> Self {
        let descriptors = response
            .matches
            .iter()
            .enumerate()
            .map(|(i, m)| MatchDescriptor {
                value: m.value.clone(),
                path: response.results.get(i).and_then(|hit| hit.path.clone()),
            })
            .collect();
        Self { descriptors }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{SearchHit, SearchMatch};

    fn response(values: &[&str]) -> SearchResponse {
        SearchResponse {
            results: values
                .iter()
                .map(|v| SearchHit {
                    value: v.to_string(),
                    path: Some(format!("'{}'", v)),
                })
                .collect(),
            matches: values
                .iter()
                .map(|v| SearchMatch {
                    value: v.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_order_preserved_and_duplicates_kept() {
        let set = MatchSet::from_response(&response(&["b", "a", "b"]));
        let values: Vec<_> = set.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(values, vec!["b", "a", "b"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_paths_paired_positionally() {
        let set = MatchSet::from_response(&response(&["x"]));
        assert_eq!(set.iter().next().unwrap().path.as_deref(), Some("'x'"));
    }

    #[test]
    fn test_missing_results_entry_leaves_path_empty() {
        let mut resp = response(&["x"]);
        resp.results.clear();
        let set = MatchSet::from_response(&resp);
        assert_eq!(set.iter().next().unwrap().path, None);
    }

    #[test]
    fn test_empty_response_is_empty_set() {
        let set = MatchSet::from_response(&SearchResponse::default());
        assert!(set.is_empty());
    }
}
