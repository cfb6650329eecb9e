use crate::types::{Key, Segment, Table, Value};
use core::fmt;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Table(t) => t.serialize(serializer),
            Value::Function(_) => Err(ser::Error::custom("function values cannot be serialized")),
        }
    }
}

/// A table that is all array part is written as a sequence; anything else as
/// a map, where index keys become integer-looking strings in text formats.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.sequence_len() == self.len() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.sequence() {
                seq.serialize_element(value)?;
            }
            return seq.end();
        }
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Index(i) => serializer.serialize_i64(*i),
            Key::Name(name) => serializer.serialize_str(name),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, number, string, sequence or map")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut table = Table::new();
        let mut index: i64 = 0;
        while let Some(item) = seq.next_element::<Option<Value>>()? {
            // A null element leaves a hole, ending the array part there.
            if let Some(value) = item {
                table.insert(index, value);
            }
            index += 1;
        }
        Ok(Value::Table(table))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut table = Table::new();
        while let Some(TableKey(key)) = map.next_key()? {
            if let Some(value) = map.next_value::<Option<Value>>()? {
                table.insert(key, value);
            }
        }
        Ok(Value::Table(table))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct KeyVisitor;

impl<'de> Visitor<'de> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer index or a string name")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
        Ok(Key::Index(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
        i64::try_from(v).map(Key::Index).map_err(|_| E::custom("index out of range"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
        Ok(Key::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
        Ok(Key::Name(v))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

/// A map key inside a serialized table. Strings in canonical integer form
/// (`"0"`, `"-3"`, not `"01"` or `"+1"`) are read back as indices.
struct TableKey(Key);

fn parse_index(name: &str) -> Option<i64> {
    let index: i64 = name.parse().ok()?;
    (index.to_string() == name).then_some(index)
}

struct TableKeyVisitor;

impl<'de> Visitor<'de> for TableKeyVisitor {
    type Value = TableKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a table key")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TableKey, E> {
        KeyVisitor.visit_i64(v).map(TableKey)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TableKey, E> {
        KeyVisitor.visit_u64(v).map(TableKey)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TableKey, E> {
        Ok(TableKey(match parse_index(v) {
            Some(index) => Key::Index(index),
            None => Key::from(v),
        }))
    }
}

impl<'de> Deserialize<'de> for TableKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TableKeyVisitor)
    }
}

const SEGMENT_VALUE_TAG: &str = "value";

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Segment::Key(key) => key.serialize(serializer),
            Segment::Value(value) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(SEGMENT_VALUE_TAG, value)?;
                map.end()
            }
        }
    }
}

struct SegmentVisitor;

impl<'de> Visitor<'de> for SegmentVisitor {
    type Value = Segment;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an index, a name or a {\"value\": ...} map")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Segment, E> {
        KeyVisitor.visit_i64(v).map(Segment::Key)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Segment, E> {
        KeyVisitor.visit_u64(v).map(Segment::Key)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Segment, E> {
        Ok(Segment::Key(Key::from(v)))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Segment, E> {
        Ok(Segment::Key(Key::Name(v)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Segment, A::Error> {
        let Some(tag) = map.next_key::<String>()? else {
            return Err(de::Error::missing_field(SEGMENT_VALUE_TAG));
        };
        if tag != SEGMENT_VALUE_TAG {
            return Err(de::Error::unknown_field(&tag, &[SEGMENT_VALUE_TAG]));
        }
        let value = map.next_value()?;
        if map.next_key::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::custom("value segment holds exactly one entry"));
        }
        Ok(Segment::Value(value))
    }
}

impl<'de> Deserialize<'de> for Segment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SegmentVisitor)
    }
}
