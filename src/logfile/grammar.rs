//! Declarative grammar for marker-delimited log lines.
//!
//! A grammar is an ordered list of `(marker, field)` pairs. Each marker is
//! located by its first occurrence in the line; a field's text runs from the
//! end of its marker to the start of the next marker in the line. The field
//! that appears last ends at the grammar's terminator marker, or, when the
//! grammar has none, at the end of the first whitespace-delimited token.
//!
//! Example (rehash profile):
//! unordered_map i: 3 time: 1 size: 13
//!               ^^^    ^^^^^   ^^^^^^

use thiserror::Error;

/// One numeric field and the literal marker that precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub marker: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct LineGrammar {
    pub fields: &'static [FieldSpec],
    /// Marker closing the last field, e.g. the `us` unit suffix.
    pub terminator: Option<&'static str>,
}

/// Why a line produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineRejected {
    #[error("marker {marker:?} not found")]
    MissingMarker { marker: &'static str },
    #[error("field {field} is not a number: {text:?}")]
    NotANumber { field: &'static str, text: String },
    #[error("field {field} does not fit an integer: {text:?}")]
    OutOfRange { field: &'static str, text: String },
}

/// `unordered_map i: 0 time: 1 size: 1`
pub const REHASH_PROFILE: LineGrammar = LineGrammar {
    fields: &[
        FieldSpec {
            marker: "i: ",
            name: "element_index",
        },
        FieldSpec {
            marker: "time: ",
            name: "time_us",
        },
        FieldSpec {
            marker: "size: ",
            name: "bucket_count",
        },
    ],
    terminator: None,
};

/// `unordered_map insert() cpu time for 1000 elements: 61 us`
pub const TEST_RESULTS: LineGrammar = LineGrammar {
    fields: &[
        FieldSpec {
            marker: "cpu time for",
            name: "element_count",
        },
        FieldSpec {
            marker: "elements:",
            name: "time_us",
        },
    ],
    terminator: Some("us"),
};

struct Located {
    field: usize,
    marker_at: usize,
    value_at: usize,
}

impl LineGrammar {
    /// Extract every field of the grammar from `line`.
    ///
    /// Values come back in the grammar's field order. Any missing marker or
    /// unconvertible field rejects the whole line.
    pub fn extract(&self, line: &str) -> Result<Vec<i64>, LineRejected> {
        let mut located = Vec::with_capacity(self.fields.len());
        for (field, spec) in self.fields.iter().enumerate() {
            let marker_at = line.find(spec.marker).ok_or(LineRejected::MissingMarker {
                marker: spec.marker,
            })?;
            located.push(Located {
                field,
                marker_at,
                value_at: marker_at + spec.marker.len(),
            });
        }
        located.sort_by_key(|l| l.marker_at);

        let mut values = vec![0i64; self.fields.len()];
        for (pos, loc) in located.iter().enumerate() {
            let text = match located.get(pos + 1) {
                // Overlapping markers leave an empty (hence rejected) field.
                Some(next) => line.get(loc.value_at..next.marker_at).unwrap_or(""),
                None => self.tail(line, loc.value_at)?,
            };
            let spec = &self.fields[loc.field];
            values[loc.field] = to_integer(spec.name, text)?;
        }
        Ok(values)
    }

    fn tail<'a>(&self, line: &'a str, from: usize) -> Result<&'a str, LineRejected> {
        let rest = &line[from..];
        match self.terminator {
            Some(marker) => rest
                .find(marker)
                .map(|end| &rest[..end])
                .ok_or(LineRejected::MissingMarker { marker }),
            None => Ok(rest.split_whitespace().next().unwrap_or("")),
        }
    }
}

/// Parse as floating point, then truncate toward zero.
fn to_integer(field: &'static str, text: &str) -> Result<i64, LineRejected> {
    let text = text.trim();
    let value: f64 = text.parse().map_err(|_| LineRejected::NotANumber {
        field,
        text: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(LineRejected::NotANumber {
            field,
            text: text.to_string(),
        });
    }

    // 2^63 is exactly representable; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let truncated = value.trunc();
    if truncated >= LIMIT || truncated < -LIMIT {
        return Err(LineRejected::OutOfRange {
            field,
            text: text.to_string(),
        });
    }
    Ok(truncated as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncates_fractional_values() {
        let values = REHASH_PROFILE
            .extract("i: 12.9 time: 3.4 size: 7\n")
            .unwrap();
        assert_eq!(values, vec![12, 3, 7]);
    }

    #[test]
    fn never_rounds_negative_values_away_from_zero() {
        let values = REHASH_PROFILE.extract("i: -1.9 time: 0 size: 2").unwrap();
        assert_eq!(values, vec![-1, 0, 2]);
    }

    #[test]
    fn trailing_label_does_not_leak_into_last_field() {
        let values = REHASH_PROFILE
            .extract("i: 0 time: 5 size: 16 hash_table\n")
            .unwrap();
        assert_eq!(values, vec![0, 5, 16]);
    }

    #[test]
    fn leading_label_is_ignored() {
        let values = REHASH_PROFILE
            .extract("unordered_map i: 42 time: 2 size: 97")
            .unwrap();
        assert_eq!(values, vec![42, 2, 97]);
    }

    #[test]
    fn markers_may_appear_in_any_order() {
        let values = REHASH_PROFILE.extract("size: 8 i: 3 time: 1").unwrap();
        assert_eq!(values, vec![3, 1, 8]);
    }

    #[test]
    fn missing_marker_rejects_line() {
        let err = REHASH_PROFILE.extract("i: 1 time: 2 buckets: 3").unwrap_err();
        assert_eq!(err, LineRejected::MissingMarker { marker: "size: " });
    }

    #[test]
    fn non_numeric_field_rejects_line() {
        let err = REHASH_PROFILE.extract("i: one time: 2 size: 3").unwrap_err();
        assert_eq!(
            err,
            LineRejected::NotANumber {
                field: "element_index",
                text: "one".to_string(),
            }
        );
    }

    #[test]
    fn infinite_values_are_rejected() {
        let err = REHASH_PROFILE.extract("i: inf time: 2 size: 3").unwrap_err();
        assert!(matches!(err, LineRejected::NotANumber { .. }));
    }

    #[test]
    fn huge_values_are_out_of_range() {
        let err = REHASH_PROFILE.extract("i: 1e30 time: 2 size: 3").unwrap_err();
        assert!(matches!(err, LineRejected::OutOfRange { field: "element_index", .. }));
    }

    #[test]
    fn test_results_line_stops_at_unit_suffix() {
        let values = TEST_RESULTS
            .extract("cpu time for 1000 elements: 250.7 us insert() unordered_map\n")
            .unwrap();
        assert_eq!(values, vec![1000, 250]);
    }

    #[test]
    fn producer_layout_parses() {
        let values = TEST_RESULTS
            .extract("HashTable erase() cpu time for 100000 elements: 3117 us")
            .unwrap();
        assert_eq!(values, vec![100000, 3117]);
    }

    #[test]
    fn missing_unit_suffix_rejects_line() {
        let err = TEST_RESULTS.extract("cpu time for 10 elements: 3").unwrap_err();
        assert_eq!(err, LineRejected::MissingMarker { marker: "us" });
    }

    #[test]
    fn empty_line_is_rejected() {
        let err = TEST_RESULTS.extract("").unwrap_err();
        assert_eq!(
            err,
            LineRejected::MissingMarker {
                marker: "cpu time for"
            }
        );
    }
}
