//! Hex-string serde helpers for `#[serde(with = "...")]` fields.

pub mod integer {
    use crate::traits::Converter;
    use crate::Integer;
    use serde::{de, ser};
    use std::fmt;

    pub fn serialize<S: ser::Serializer>(x: &Integer, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&x.to_hex())
    }

    pub fn deserialize<'de, D: de::Deserializer<'de>>(deserializer: D) -> Result<Integer, D::Error> {
        struct IntegerVisitor;

        impl<'de> de::Visitor<'de> for IntegerVisitor {
            type Value = Integer;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("hex integer")
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Integer, E> {
                Integer::from_hex(s).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(IntegerVisitor)
    }
}

pub mod vec_integer {
    use crate::traits::Converter;
    use crate::Integer;
    use serde::de::SeqAccess;
    use serde::ser::SerializeSeq;
    use serde::{de, ser};
    use std::fmt;

    pub fn serialize<S: ser::Serializer>(x: &[Integer], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(x.len()))?;
        for e in x {
            seq.serialize_element(&e.to_hex())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: de::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Integer>, D::Error> {
        struct VecIntegerVisitor;

        impl<'de> de::Visitor<'de> for VecIntegerVisitor {
            type Value = Vec<Integer>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("vector of hex integers")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Vec<Integer>, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut values: Vec<Integer> = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(value) = seq.next_element::<String>()? {
                    values.push(Integer::from_hex(&value).map_err(de::Error::custom)?);
                }

                Ok(values)
            }
        }

        deserializer.deserialize_seq(VecIntegerVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::Integer;
    use serde_derive::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Commitment {
        #[serde(with = "crate::serialize::integer")]
        value: Integer,
        #[serde(with = "crate::serialize::vec_integer")]
        proofs: Vec<Integer>,
    }

    #[test]
    fn hex_round_trip() {
        let c = Commitment {
            value: Integer::from(-0xbeef),
            proofs: vec![Integer::from(1), Integer::from(u128::MAX), Integer::new()],
        };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(
            json,
            r#"{"value":"-beef","proofs":["1","ffffffffffffffffffffffffffffffff","0"]}"#
        );
        assert_eq!(serde_json::from_str::<Commitment>(&json).unwrap(), c);
    }

    #[test]
    fn rejects_bad_hex() {
        let json = r#"{"value":"xyz","proofs":[]}"#;
        assert!(serde_json::from_str::<Commitment>(json).is_err());
        let json = r#"{"value":"1","proofs":["g"]}"#;
        assert!(serde_json::from_str::<Commitment>(json).is_err());
    }
}
