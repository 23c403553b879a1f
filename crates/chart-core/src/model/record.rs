//! Decoding chart records from JSON values.
//!
//! Records derive `Deserialize`, which does the type checking. Before serde
//! runs, the object is checked for every key the record lists in
//! [`Record::FIELDS`], so an absent key is reported as `MissingField` and a
//! wrongly typed one as `InvalidField`.

use serde::de::{self, DeserializeOwned};
use serde_json::Value;

use crate::error::{Error, Result};

/// A chart record decoded from one JSON object.
///
/// # Example
///
/// ```
/// use chart_core::model::Record;
/// use chart_core::{ErrorKind, Tempo};
///
/// let tempo = Tempo::from_value(&serde_json::json!({ "tick": 480, "value": 500000 })).unwrap();
/// assert_eq!(tempo.tick, 480);
///
/// let err = Tempo::from_value(&serde_json::json!({ "tick": 480 })).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MissingField);
/// ```
pub trait Record: DeserializeOwned {
    /// Record name used when decoding a standalone value.
    const RECORD: &'static str;

    /// JSON keys the record requires, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Decodes a standalone JSON value as this record.
    fn from_value(value: &Value) -> Result<Self> {
        decode(Self::RECORD, value)
    }
}

/// Decodes `value` as `T`, naming it `record` in errors (e.g. `page_list[3]`).
pub fn decode<T: Record>(record: impl Into<String>, value: &Value) -> Result<T> {
    let record = record.into();
    // serde would also accept a positional array for a struct
    let Some(map) = value.as_object() else {
        return Err(Error::InvalidField {
            record,
            source: de::Error::custom("expected a JSON object"),
        });
    };
    if let Some(field) = T::FIELDS.iter().copied().find(|field| !map.contains_key(*field)) {
        return Err(Error::MissingField { record, field });
    }
    T::deserialize(value).map_err(|source| Error::InvalidField { record, source })
}

/// Decodes every element of `list` as `T`, preserving order.
///
/// Elements are named `name[index]` in errors.
pub fn decode_list<T: Record>(name: &str, list: &[Value]) -> Result<Vec<T>> {
    list.iter()
        .enumerate()
        .map(|(index, element)| decode(format!("{}[{}]", name, index), element))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        whole: i64,
        ratio: f64,
        flag: bool,
    }

    impl Record for Sample {
        const RECORD: &'static str = "sample";
        const FIELDS: &'static [&'static str] = &["whole", "ratio", "flag"];
    }

    #[test]
    fn test_int_rejects_real() {
        for whole in [json!(1.5), json!(2.0), json!("3")] {
            let value = json!({ "whole": whole, "ratio": 0.5, "flag": true });
            let err = Sample::from_value(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidField);
        }
    }

    #[test]
    fn test_real_accepts_integer() {
        let value = json!({ "whole": 1, "ratio": 1, "flag": false });
        let sample = Sample::from_value(&value).unwrap();

        assert_eq!(sample.whole, 1);
        assert_eq!(sample.ratio, 1.0);
        assert!(!sample.flag);
    }

    #[test]
    fn test_missing_field_names_record() {
        let value = json!({ "ratio": 0.5, "flag": true });

        match decode::<Sample>("sample_list[4]", &value).unwrap_err() {
            Error::MissingField { record, field } => {
                assert_eq!(record, "sample_list[4]");
                assert_eq!(field, "whole");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_wins_over_invalid() {
        // `whole` has the wrong type but `flag` is absent
        let value = json!({ "whole": "1", "ratio": 0.5 });
        let err = Sample::from_value(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn test_non_object_is_rejected() {
        // a positional array with matching types is still not a record
        for value in [json!([1, 0.5, true]), json!(3), json!(null)] {
            let err = Sample::from_value(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidField);
        }
    }

    #[test]
    fn test_bool_rejects_integer() {
        let value = json!({ "whole": 1, "ratio": 0.5, "flag": 1 });
        match Sample::from_value(&value).unwrap_err() {
            Error::InvalidField { record, .. } => assert_eq!(record, "sample"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_list_names_elements() {
        let list = [
            json!({ "whole": 1, "ratio": 0.5, "flag": true }),
            json!({ "whole": 2, "ratio": 0.5 }),
        ];

        match decode_list::<Sample>("samples", &list).unwrap_err() {
            Error::MissingField { record, field } => {
                assert_eq!(record, "samples[1]");
                assert_eq!(field, "flag");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(decode_list::<Sample>("samples", &list[..1]).unwrap().len(), 1);
    }
}
