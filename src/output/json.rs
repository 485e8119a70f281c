use base64::Engine;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::Result;

use super::{ByteEncoding, OutputDict, OutputValue, RenderOptions};

/// Serializes a value with a chosen byte encoding.
struct Encoded<'a> {
    value: &'a OutputValue,
    bytes: ByteEncoding,
}

/// Serializes a dictionary, keys in insertion order.
struct EncodedDict<'a> {
    dict: &'a OutputDict,
    bytes: ByteEncoding,
}

struct ByteArray<'a>(&'a [u8]);

impl Serialize for ByteArray<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for b in self.0 {
            seq.serialize_element(b)?;
        }
        seq.end()
    }
}

impl Serialize for Encoded<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.value {
            OutputValue::Int(n) => serializer.serialize_i64(*n),
            OutputValue::Str(s) => serializer.serialize_str(s),
            OutputValue::Null => serializer.serialize_unit(),
            OutputValue::Bytes(b) => match self.bytes {
                ByteEncoding::Array => ByteArray(b).serialize(serializer),
                ByteEncoding::Hex => serializer.serialize_str(&hex::encode(b)),
                ByteEncoding::Base64 => {
                    let encoded = base64::engine::general_purpose::STANDARD.encode(b);
                    serializer.serialize_str(&encoded)
                }
            },
            OutputValue::Dict(dict) => EncodedDict {
                dict,
                bytes: self.bytes,
            }
            .serialize(serializer),
        }
    }
}

impl Serialize for EncodedDict<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.dict.len()))?;
        for (key, value) in self.dict.iter() {
            map.serialize_entry(
                key,
                &Encoded {
                    value,
                    bytes: self.bytes,
                },
            )?;
        }
        map.end()
    }
}

impl Serialize for OutputValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Encoded {
            value: self,
            bytes: ByteEncoding::default(),
        }
        .serialize(serializer)
    }
}

impl Serialize for OutputDict {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        EncodedDict {
            dict: self,
            bytes: ByteEncoding::default(),
        }
        .serialize(serializer)
    }
}

/// Render a projected value as JSON.
pub fn render(value: &OutputValue, options: &RenderOptions) -> Result<String> {
    let encoded = Encoded {
        value,
        bytes: options.bytes,
    };
    let json = if options.pretty {
        serde_json::to_string_pretty(&encoded)?
    } else {
        serde_json::to_string(&encoded)?
    };
    Ok(json)
}

/// Render a projected dictionary as a JSON object.
pub fn render_dict(dict: &OutputDict, options: &RenderOptions) -> Result<String> {
    let encoded = EncodedDict {
        dict,
        bytes: options.bytes,
    };
    let json = if options.pretty {
        serde_json::to_string_pretty(&encoded)?
    } else {
        serde_json::to_string(&encoded)?
    };
    Ok(json)
}
