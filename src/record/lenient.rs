//! Loosely-typed field decoding for persisted state.
//!
//! State written by the browser application stores weights either as numbers
//! or as the raw text of an input box (`"8.8"`, `""`). Optional values coerce
//! to absent when empty or unparseable; required values must parse.

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::metrics::parse_weight;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

pub(super) fn required_weight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(value) if value.is_finite() => Ok(value),
        RawNumber::Number(value) => Err(D::Error::custom(format!("non-finite weight {value}"))),
        RawNumber::Text(text) => parse_weight(&text)
            .ok_or_else(|| D::Error::custom(format!("weight {text:?} is not a number"))),
    }
}

pub(super) fn optional_weight<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Number(value)) => Some(value).filter(|v| v.is_finite()),
        Some(RawNumber::Text(text)) => parse_weight(&text),
        None => None,
    })
}

pub(super) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) if !text.trim().is_empty() => super::parse_date(&text)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("date {text:?} is not YYYY-MM-DD"))),
        _ => Ok(None),
    }
}

pub(super) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|text| !text.is_empty()))
}
