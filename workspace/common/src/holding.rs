//! Holding records and the wire shapes they arrive in.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use utoipa::openapi::schema::{ArrayBuilder, ObjectBuilder, OneOfBuilder, Schema, SchemaType};
use utoipa::openapi::RefOr;

/// A holding exactly as it arrives over the wire.
///
/// Data sources send either `["AAPL", 25]` pairs or
/// `{"symbol": "AAPL", "weight": 25}` records. The weight is kept as raw JSON
/// until [`Weight::parse`] turns it into a number, so a malformed weight never
/// rejects the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoldingInput {
    /// Two-element `[symbol, weight]` pair.
    Pair(String, Option<Value>),
    /// Object form. A missing weight stays missing when serialized, an
    /// explicit `null` stays `null`.
    Record {
        symbol: String,
        #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
        weight: Option<Value>,
    },
}

/// Keeps an explicit `null` as `Some(Value::Null)` so it survives a round trip.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl<'s> ToSchema<'s> for HoldingInput {
    fn schema() -> (&'s str, RefOr<Schema>) {
        let any = || ObjectBuilder::new().schema_type(SchemaType::Value);
        let pair = ArrayBuilder::new()
            .items(any())
            .min_items(Some(2))
            .max_items(Some(2))
            .description(Some("[symbol, weight] pair"));
        let record = ObjectBuilder::new()
            .property("symbol", ObjectBuilder::new().schema_type(SchemaType::String))
            .required("symbol")
            .property(
                "weight",
                any().description(Some("Number, numeric string or anything else (counts as 0)")),
            );

        (
            "HoldingInput",
            OneOfBuilder::new()
                .item(pair)
                .item(record)
                .description(Some("Holding as a [symbol, weight] pair or a {symbol, weight} object"))
                .into(),
        )
    }
}

impl HoldingInput {
    pub fn symbol(&self) -> &str {
        match self {
            HoldingInput::Pair(symbol, _) => symbol,
            HoldingInput::Record { symbol, .. } => symbol,
        }
    }

    pub fn raw_weight(&self) -> Option<&Value> {
        match self {
            HoldingInput::Pair(_, weight) => weight.as_ref(),
            HoldingInput::Record { weight, .. } => weight.as_ref(),
        }
    }
}

/// A weight after coercion. Always finite and never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, ToSchema)]
#[serde(transparent)]
pub struct Weight(f64);

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Weight::new)
    }
}

impl Weight {
    /// Value used for anything that is not a usable number.
    pub const DEFAULT: Weight = Weight(0.0);

    /// Parse a raw JSON weight.
    ///
    /// * numbers are taken as-is
    /// * strings are trimmed and parsed, the empty string counts as zero
    /// * booleans map to 1 and 0
    /// * missing, `null`, arrays, objects and unparsable strings give [`Weight::DEFAULT`]
    ///
    /// Non-finite and negative results are also replaced by the default.
    pub fn parse(raw: Option<&Value>) -> Weight {
        let value = match raw {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => {
                let s = s.trim();
                if s.is_empty() { Some(0.0) } else { s.parse::<f64>().ok() }
            }
            Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
            Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) | None => None,
        };

        match value {
            Some(v) if v.is_finite() && v > 0.0 => Weight(v),
            _ => Weight::DEFAULT,
        }
    }

    pub fn new(value: f64) -> Weight {
        if value.is_finite() && value > 0.0 {
            Weight(value)
        } else {
            Weight::DEFAULT
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// A holding with its weight coerced to a definite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Holding {
    pub symbol: String,
    pub weight: Weight,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, weight: f64) -> Self {
        Self {
            symbol: symbol.into(),
            weight: Weight::new(weight),
        }
    }
}

impl From<HoldingInput> for Holding {
    fn from(input: HoldingInput) -> Self {
        let weight = Weight::parse(input.raw_weight());
        let symbol = match input {
            HoldingInput::Pair(symbol, _) => symbol,
            HoldingInput::Record { symbol, .. } => symbol,
        };
        Holding { symbol, weight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pair_and_record_shapes_deserialize() {
        let inputs: Vec<HoldingInput> =
            serde_json::from_value(json!([["AAPL", 25], {"symbol": "MSFT", "weight": 18}]))
                .expect("mixed shapes should deserialize");

        assert_eq!(inputs[0], HoldingInput::Pair("AAPL".to_string(), Some(json!(25))));
        assert_eq!(inputs[1].symbol(), "MSFT");
        assert_eq!(inputs[1].raw_weight(), Some(&json!(18)));
    }

    #[test]
    fn test_record_without_weight_deserializes() {
        let input: HoldingInput = serde_json::from_value(json!({"symbol": "GOOG"})).unwrap();
        assert_eq!(input.raw_weight(), None);
        assert_eq!(Holding::from(input).weight, Weight::DEFAULT);
    }

    #[test]
    fn test_pair_keeps_its_shape_when_serialized() {
        let input = HoldingInput::Pair("TSLA".to_string(), Some(json!(8)));
        assert_eq!(serde_json::to_value(&input).unwrap(), json!(["TSLA", 8]));
    }

    #[test]
    fn test_record_weight_presence_survives_round_trip() {
        let raw = json!([{"symbol": "A"}, {"symbol": "B", "weight": null}, {"symbol": "C", "weight": "x"}]);
        let inputs: Vec<HoldingInput> = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(inputs[1].raw_weight(), Some(&Value::Null));
        assert_eq!(serde_json::to_value(&inputs).unwrap(), raw);
    }

    #[test]
    fn test_deserialized_holding_weight_is_coerced() {
        let holdings: Vec<Holding> = serde_json::from_value(json!([
            {"symbol": "A", "weight": -5.0},
            {"symbol": "B", "weight": 10.0},
        ]))
        .unwrap();

        assert_eq!(holdings[0].weight, Weight::DEFAULT);
        assert_eq!(holdings[1].weight.value(), 10.0);
    }

    #[test]
    fn test_weight_parse_numbers_and_strings() {
        assert_eq!(Weight::parse(Some(&json!(12.5))).value(), 12.5);
        assert_eq!(Weight::parse(Some(&json!("7"))).value(), 7.0);
        assert_eq!(Weight::parse(Some(&json!(" 3.5 "))).value(), 3.5);
        assert_eq!(Weight::parse(Some(&json!(true))).value(), 1.0);
    }

    #[test]
    fn test_weight_parse_falls_back_to_default() {
        for raw in [json!(null), json!("abc"), json!(""), json!([1]), json!({"v": 1}), json!(-4)] {
            assert_eq!(Weight::parse(Some(&raw)), Weight::DEFAULT, "raw weight {raw}");
        }
        assert_eq!(Weight::parse(None), Weight::DEFAULT);
        assert_eq!(Weight::new(f64::NAN), Weight::DEFAULT);
        assert_eq!(Weight::new(f64::INFINITY), Weight::DEFAULT);
    }

    #[test]
    fn test_pair_and_record_convert_to_same_holding() {
        let pair = HoldingInput::Pair("V".to_string(), Some(json!(7)));
        let record = HoldingInput::Record {
            symbol: "V".to_string(),
            weight: Some(json!(7)),
        };
        assert_eq!(Holding::from(pair), Holding::from(record));
    }
}
