//! Wire sentinels and the serde adapters that translate them.
//!
//! Inside the crate an unset number is always `None`. Collaborators that
//! exchange JSON with us still use reserved numbers for "unset", so the
//! translation lives here and nowhere else.

use std::num::{NonZeroU32, NonZeroUsize};

use serde::{Deserialize, Deserializer, Serializer};

/// The numeric "unset" marker used on the wire for optional bounds.
///
/// Any negative number is read back as unset, so payloads produced with a
/// different negative marker still decode.
pub const NO_VALUE: i64 = i32::MIN as i64;

/// The wire value of a rank that has not been assigned.
pub const RANK_OPTIONS_ANSWER_NOT_SUBMITTED: u32 = 0;

/// `Option<usize>` encoded as [`NO_VALUE`] when absent.
pub(crate) mod no_value {
    use super::*;
    use serde::de::Error as _;

    pub fn serialize<S: Serializer>(
        value: &Option<usize>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_u64(*v as u64),
            None => serializer.serialize_i64(NO_VALUE),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<usize>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        if raw < 0 {
            return Ok(None);
        }
        usize::try_from(raw).map(Some).map_err(D::Error::custom)
    }
}

/// `Option<NonZeroUsize>` encoded as `0` when absent.
pub(crate) mod zero_unset {
    use super::*;
    use serde::de::Error as _;

    pub fn serialize<S: Serializer>(
        value: &Option<NonZeroUsize>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.map_or(0, NonZeroUsize::get) as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NonZeroUsize>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        if raw <= 0 {
            return Ok(None);
        }
        usize::try_from(raw)
            .map(NonZeroUsize::new)
            .map_err(D::Error::custom)
    }
}

/// Rank answers encoded with [`RANK_OPTIONS_ANSWER_NOT_SUBMITTED`] for gaps.
pub(crate) mod rank_answers {
    use super::*;
    use serde::de::Error as _;

    pub fn serialize<S: Serializer>(
        answers: &[Option<NonZeroU32>],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            answers
                .iter()
                .map(|rank| rank.map_or(RANK_OPTIONS_ANSWER_NOT_SUBMITTED, NonZeroU32::get)),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Option<NonZeroU32>>, D::Error> {
        let raw = Vec::<i64>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|value| {
                if value <= 0 {
                    return Ok(None);
                }
                u32::try_from(value)
                    .map(NonZeroU32::new)
                    .map_err(D::Error::custom)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Bounds {
        #[serde(with = "no_value")]
        max: Option<usize>,
        #[serde(with = "zero_unset")]
        min: Option<NonZeroUsize>,
        #[serde(with = "rank_answers")]
        ranks: Vec<Option<NonZeroU32>>,
    }

    #[test]
    fn absent_values_use_wire_sentinels() {
        let bounds = Bounds {
            max: None,
            min: None,
            ranks: vec![None, NonZeroU32::new(2)],
        };
        let json = serde_json::to_value(&bounds).unwrap();
        assert_eq!(json["max"], NO_VALUE);
        assert_eq!(json["min"], 0);
        assert_eq!(json["ranks"], serde_json::json!([0, 2]));
    }

    #[test]
    fn any_negative_number_reads_as_unset() {
        let bounds: Bounds =
            serde_json::from_str(r#"{"max": -9007199254740991, "min": -1, "ranks": [-5, 0, 3]}"#)
                .unwrap();
        assert_eq!(bounds.max, None);
        assert_eq!(bounds.min, None);
        assert_eq!(bounds.ranks, vec![None, None, NonZeroU32::new(3)]);
    }

    #[test]
    fn zero_bound_reads_as_unset() {
        let bounds: Bounds =
            serde_json::from_str(r#"{"max": 0, "min": 0, "ranks": []}"#).unwrap();
        assert_eq!(bounds.max, Some(0));
        assert_eq!(bounds.min, None);

        let bounds: Bounds =
            serde_json::from_str(r#"{"max": 0, "min": 4, "ranks": []}"#).unwrap();
        assert_eq!(bounds.min, NonZeroUsize::new(4));
    }

    #[test]
    fn rank_too_large_is_rejected() {
        let json = r#"{"max": 1, "min": 1, "ranks": [4294967296]}"#;
        assert!(serde_json::from_str::<Bounds>(json).is_err());
    }
}
