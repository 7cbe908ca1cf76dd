// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serde support for option and value types.
//!
//! Options map onto plain JSON-like data: scalars as themselves, records as
//! maps, multi-select values as sequences, and an empty single-select value as
//! null. Deserialized records keep their keys in sorted order.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::choice::{Choice, Record, Scalar};
use crate::value::SelectValue;

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarRepr {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<ScalarRepr> for Scalar {
    fn from(repr: ScalarRepr) -> Self {
        match repr {
            ScalarRepr::Null => Self::Null,
            ScalarRepr::Bool(b) => Self::Bool(b),
            ScalarRepr::Int(i) => Self::Int(i),
            ScalarRepr::Float(f) => Self::Float(f),
            ScalarRepr::Text(s) => Self::Text(s),
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ScalarRepr::deserialize(deserializer).map(Self::from)
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        BTreeMap::<String, Scalar>::deserialize(deserializer).map(|map| map.into_iter().collect())
    }
}

impl Serialize for Choice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Primitive(scalar) => scalar.serialize(serializer),
            Self::Record(record) => record.serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChoiceRepr {
    Primitive(Scalar),
    Record(Record),
}

impl<'de> Deserialize<'de> for Choice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match ChoiceRepr::deserialize(deserializer)? {
            ChoiceRepr::Primitive(scalar) => Self::Primitive(scalar),
            ChoiceRepr::Record(record) => Self::Record(record),
        })
    }
}

impl Serialize for SelectValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Single(None) => serializer.serialize_none(),
            Self::Single(Some(choice)) => choice.serialize(serializer),
            Self::Multiple(choices) => serializer.collect_seq(choices),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ValueRepr {
    Multiple(Vec<Choice>),
    Single(Option<Choice>),
}

impl<'de> Deserialize<'de> for SelectValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match ValueRepr::deserialize(deserializer)? {
            ValueRepr::Multiple(choices) => Self::Multiple(choices),
            ValueRepr::Single(choice) => Self::Single(choice),
        })
    }
}
