//! `Tensor::values`的JSON编解码。
//!
//! JSON没有NaN与无穷大，serde_json会把它们写成`null`。这里沿用proto3 JSON的约定：
//! 非有限值编码为字符串`"NaN"`、`"Infinity"`、`"-Infinity"`，其余照常编码为数字；
//! 解码时数字与上述字符串均可接受（数字形式的字符串如`"1.5"`亦可）。

use std::fmt;

use serde::de::{self, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

pub(super) fn serialize<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for &value in values {
        seq.serialize_element(&Float(value))?;
    }
    seq.end()
}

pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Float>::deserialize(deserializer)?;
    Ok(values.into_iter().map(|Float(value)| value).collect())
}

struct Float(f64);

impl Serialize for Float {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if value == f64::INFINITY {
            serializer.serialize_str(INFINITY)
        } else if value == f64::NEG_INFINITY {
            serializer.serialize_str(NEG_INFINITY)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

impl<'de> Deserialize<'de> for Float {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FloatVisitor)
    }
}

struct FloatVisitor;

impl Visitor<'_> for FloatVisitor {
    type Value = Float;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a number or one of \"{NAN}\", \"{INFINITY}\", \"{NEG_INFINITY}\"")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Float, E> {
        Ok(Float(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Float, E> {
        Ok(Float(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Float, E> {
        Ok(Float(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Float, E> {
        match value {
            NAN => Ok(Float(f64::NAN)),
            INFINITY => Ok(Float(f64::INFINITY)),
            NEG_INFINITY => Ok(Float(f64::NEG_INFINITY)),
            // `"inf"`、`"nan"`之类不接受
            _ => value
                .parse::<f64>()
                .ok()
                .filter(|parsed| parsed.is_finite())
                .map(Float)
                .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self)),
        }
    }
}
