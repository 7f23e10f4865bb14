//! Typed access to raw string values.
//!
//! [`StoreExt::get`](crate::StoreExt::get) returns a [`Value`]: the key it
//! was fetched under plus the raw string, if any. Conversions parse on
//! demand and report failures with the key and the offending raw text, so
//! a bad setting is diagnosable without knowing which store supplied it.

use std::path::PathBuf;

use crate::error::{StoreError, StoreResult};

/// A raw value fetched from a store, with typed conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    key: String,
    raw: Option<String>,
}

impl Value {
    pub(crate) fn new(key: &str, raw: Option<String>) -> Self {
        Self {
            key: key.to_string(),
            raw,
        }
    }

    /// The key this value was fetched under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the key had a value.
    pub fn is_present(&self) -> bool {
        self.raw.is_some()
    }

    /// The raw string, if present.
    pub fn as_str(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// The raw string, or an error naming the key if absent.
    pub fn required(&self) -> StoreResult<&str> {
        self.raw.as_deref().ok_or_else(|| StoreError::Missing {
            key: self.key.clone(),
        })
    }

    /// The raw string, or `default` if absent.
    pub fn or<'a>(&'a self, default: &'a str) -> &'a str {
        self.raw.as_deref().unwrap_or(default)
    }

    /// Consume into the raw string, if present.
    pub fn into_string(self) -> Option<String> {
        self.raw
    }

    /// Parse as a boolean. Accepts `true`/`false`, `yes`/`no`, `on`/`off`,
    /// `1`/`0`, ASCII case-insensitive.
    pub fn as_bool(&self) -> StoreResult<Option<bool>> {
        let Some(raw) = self.raw.as_deref() else {
            return Ok(None);
        };
        let truthy = ["true", "yes", "on", "1"];
        let falsy = ["false", "no", "off", "0"];
        if truthy.iter().any(|t| raw.eq_ignore_ascii_case(t)) {
            Ok(Some(true))
        } else if falsy.iter().any(|f| raw.eq_ignore_ascii_case(f)) {
            Ok(Some(false))
        } else {
            Err(self.mismatch("bool"))
        }
    }

    /// Parse as a signed integer.
    pub fn as_i64(&self) -> StoreResult<Option<i64>> {
        self.parse("i64")
    }

    /// Parse as an unsigned integer.
    pub fn as_u64(&self) -> StoreResult<Option<u64>> {
        self.parse("u64")
    }

    /// Parse as a floating-point number.
    pub fn as_f64(&self) -> StoreResult<Option<f64>> {
        self.parse("f64")
    }

    /// Interpret as a filesystem path. Any present string qualifies.
    pub fn as_path(&self) -> Option<PathBuf> {
        self.raw.as_deref().map(PathBuf::from)
    }

    fn parse<T: std::str::FromStr>(&self, wanted: &'static str) -> StoreResult<Option<T>> {
        match self.raw.as_deref() {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| self.mismatch(wanted)),
        }
    }

    fn mismatch(&self, wanted: &'static str) -> StoreError {
        StoreError::TypeMismatch {
            key: self.key.clone(),
            wanted,
            value: self.raw.clone().unwrap_or_default(),
        }
    }
}
