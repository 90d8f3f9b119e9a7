use regex::Regex;

use super::MatchSet;

/// A run of overlay text: either plain document text or one highlighted
/// occurrence carrying its marker id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub marker: Option<usize>,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            marker: None,
        }
    }
}

/// Read-only rendering of the document with every matched occurrence
/// wrapped in a sequentially numbered marker. Regenerated in full from the
/// buffer and match set on every new search, never patched incrementally.
///
/// Invariant: concatenating all segment text reproduces the buffer the
/// overlay was built from, byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    segments: Vec<Segment>,
    marker_count: usize,
}

impl Overlay {
    /// One pass per descriptor, in match-set order. Each pass escapes the
    /// descriptor value for literal matching and wraps every occurrence in
    /// still-unmarked text, assigning ids left to right as encountered.
    /// Marked spans are never re-matched, so one value overlapping another
    /// cannot produce nested markers; descriptor order decides the winner.
    pub fn build(buffer: &str, matches: &MatchSet) -> Self {
        let mut segments = vec![Segment::plain(buffer)];
        let mut next_id = 0;

        for descriptor in matches.iter() {
            if descriptor.value.is_empty() {
                continue;
            }
            let pattern = match Regex::new(&regex::escape(&descriptor.value)) {
                Ok(re) => re,
                // An escaped literal always compiles; skip rather than fail.
                Err(_) => continue,
            };

            let mut rewritten = Vec::with_capacity(segments.len());
            for segment in segments {
                if segment.marker.is_some() {
                    rewritten.push(segment);
                    continue;
                }
                let mut consumed = 0;
                for found in pattern.find_iter(&segment.text) {
                    if found.start() > consumed {
                        rewritten.push(Segment::plain(&segment.text[consumed..found.start()]));
                    }
                    rewritten.push(Segment {
                        text: segment.text[found.range()].to_string(),
                        marker: Some(next_id),
                    });
                    next_id += 1;
                    consumed = found.end();
                }
                if consumed == 0 {
                    rewritten.push(segment);
                } else if consumed < segment.text.len() {
                    rewritten.push(Segment::plain(&segment.text[consumed..]));
                }
            }
            segments = rewritten;
        }

        Self {
            segments,
            marker_count: next_id,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    /// The overlay with markers stripped: the original document text.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Zero-based line on which the given marker starts, for scrolling the
    /// focused match into view.
    pub fn marker_line(&self, marker: usize) -> Option<usize> {
        let mut line = 0;
        for segment in &self.segments {
            if segment.marker == Some(marker) {
                return Some(line);
            }
            line += segment.text.matches('\n').count();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{SearchMatch, SearchResponse};

    fn match_set(values: &[&str]) -> MatchSet {
        MatchSet::from_response(&SearchResponse {
            results: Vec::new(),
            matches: values
                .iter()
                .map(|v| SearchMatch {
                    value: v.to_string(),
                })
                .collect(),
        })
    }

    fn marker_values(overlay: &Overlay) -> Vec<(usize, String)> {
        overlay
            .segments()
            .iter()
            .filter_map(|s| s.marker.map(|id| (id, s.text.clone())))
            .collect()
    }

    #[test]
    fn test_every_occurrence_gets_a_sequential_marker() {
        let overlay = Overlay::build("aa bb aa", &match_set(&["aa"]));
        assert_eq!(overlay.marker_count(), 2);
        assert_eq!(
            marker_values(&overlay),
            vec![(0, "aa".to_string()), (1, "aa".to_string())]
        );
        assert_eq!(overlay.plain_text(), "aa bb aa");
    }

    #[test]
    fn test_no_matches_yields_unmarked_buffer() {
        let overlay = Overlay::build("plain text", &match_set(&[]));
        assert_eq!(overlay.marker_count(), 0);
        assert_eq!(overlay.plain_text(), "plain text");
    }

    #[test]
    fn test_metacharacters_match_literally() {
        let overlay = Overlay::build("a.c abc a.c", &match_set(&["a.c"]));
        assert_eq!(overlay.marker_count(), 2);
        assert_eq!(overlay.plain_text(), "a.c abc a.c");
    }

    #[test]
    fn test_ids_follow_pass_order_across_descriptors() {
        // "b" is processed first, so it takes id 0 even though it sits
        // after "a" in the document.
        let overlay = Overlay::build("a b", &match_set(&["b", "a"]));
        assert_eq!(
            marker_values(&overlay),
            vec![(1, "a".to_string()), (0, "b".to_string())]
        );
    }

    #[test]
    fn test_overlapping_values_never_nest() {
        let overlay = Overlay::build("ab a", &match_set(&["ab", "a"]));
        assert_eq!(
            marker_values(&overlay),
            vec![(0, "ab".to_string()), (1, "a".to_string())]
        );
        assert_eq!(overlay.plain_text(), "ab a");
    }

    #[test]
    fn test_duplicate_descriptors_do_not_rewrap() {
        // The second "aa" pass finds nothing left to mark.
        let overlay = Overlay::build("aa bb aa", &match_set(&["aa", "aa"]));
        assert_eq!(overlay.marker_count(), 2);
    }

    #[test]
    fn test_empty_value_is_skipped() {
        let overlay = Overlay::build("abc", &match_set(&["", "b"]));
        assert_eq!(overlay.marker_count(), 1);
        assert_eq!(overlay.plain_text(), "abc");
    }

    #[test]
    fn test_marker_line_tracks_newlines() {
        let overlay = Overlay::build("x\nyy\nx", &match_set(&["x"]));
        assert_eq!(overlay.marker_line(0), Some(0));
        assert_eq!(overlay.marker_line(1), Some(2));
        assert_eq!(overlay.marker_line(2), None);
    }

    #[test]
    fn test_strip_identity_on_multiline_json() {
        let buffer = "{\n  \"name\": \"alice\",\n  \"city\": \"alice springs\"\n}";
        let overlay = Overlay::build(buffer, &match_set(&["alice", "alice springs"]));
        // The first pass already claimed the "alice" inside the longer
        // value; the second pass marks nothing new inside marked spans.
        assert_eq!(overlay.plain_text(), buffer);
        assert_eq!(overlay.marker_count(), 2);
    }
}
