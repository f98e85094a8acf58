//! Per-call codec options.
//!
//! An [`OptionBag`] is a string-keyed map of dynamically typed values, read
//! by exactly one codec per call. Every codec applies the same decision
//! procedure to the keys it declares: absent → codec default, present with
//! the expected type → applied, present with a mismatched type →
//! [`CodecError::InvalidArgument`] before any encode/decode work begins.

use std::collections::BTreeMap;

use crate::error::CodecError;
use crate::resample::ResizeFilter;

/// Option key constants, shared across codecs.
pub mod keys {
    pub const QUALITY: &str = "quality";
    pub const COMPRESSION_LEVEL: &str = "compressionLevel";
    pub const COMPRESSION_TYPE: &str = "compressionType";
    pub const NUM_COLORS: &str = "numColors";
    pub const QUANTIZER: &str = "quantizer";
    pub const DRAWER: &str = "drawer";
    pub const DIMENSION: &str = "dimension";
    pub const USE_EXTENDED_FORMAT: &str = "useExtendedFormat";
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
    pub const INTERPOLATION_FUNCTION: &str = "interpolationFunction";
}

/// A dynamically typed option value.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    Int(i64),
    Bool(bool),
    Str(String),
    /// Resampling kernel capability, consumed by codecs that resize.
    Filter(ResizeFilter),
}

impl OptionValue {
    fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Int(_) => "integer",
            OptionValue::Bool(_) => "boolean",
            OptionValue::Str(_) => "string",
            OptionValue::Filter(_) => "filter",
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<ResizeFilter> for OptionValue {
    fn from(value: ResizeFilter) -> Self {
        OptionValue::Filter(value)
    }
}

/// A per-call, string-keyed option map. Insertion order is irrelevant, and
/// the bag carries no state across calls.
#[derive(Clone, Debug, Default)]
pub struct OptionBag {
    values: BTreeMap<String, OptionValue>,
}

impl OptionBag {
    /// An empty bag: every codec falls back to its documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Integer option: absent → `Ok(None)`, mismatched type → `InvalidArgument`.
    pub fn get_int(&self, key: &'static str) -> Result<Option<i64>, CodecError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(OptionValue::Int(value)) => Ok(Some(*value)),
            Some(other) => Err(Self::mismatch(key, "an integer", other)),
        }
    }

    /// Boolean option: absent → `Ok(None)`, mismatched type → `InvalidArgument`.
    pub fn get_bool(&self, key: &'static str) -> Result<Option<bool>, CodecError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(OptionValue::Bool(value)) => Ok(Some(*value)),
            Some(other) => Err(Self::mismatch(key, "a boolean", other)),
        }
    }

    /// String option: absent → `Ok(None)`, mismatched type → `InvalidArgument`.
    pub fn get_str(&self, key: &'static str) -> Result<Option<&str>, CodecError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(OptionValue::Str(value)) => Ok(Some(value.as_str())),
            Some(other) => Err(Self::mismatch(key, "a string", other)),
        }
    }

    /// Filter capability option: absent → `Ok(None)`, mismatched type →
    /// `InvalidArgument`.
    pub fn get_filter(&self, key: &'static str) -> Result<Option<ResizeFilter>, CodecError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(OptionValue::Filter(value)) => Ok(Some(*value)),
            Some(other) => Err(Self::mismatch(key, "a resampling filter", other)),
        }
    }

    fn mismatch(key: &'static str, expected: &str, got: &OptionValue) -> CodecError {
        CodecError::InvalidArgument {
            key,
            detail: format!("expected {expected}, got {} {:?}", got.type_name(), got),
        }
    }
}
