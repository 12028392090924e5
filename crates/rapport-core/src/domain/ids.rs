use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! id_type {
    ($name:ident) => {
        /// Opaque identifier. Generated ids are UUID v4 strings, but any
        /// string is accepted so fixed sample ids like `"1"` round-trip.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_type!(ContactId);
id_type!(InteractionId);

#[cfg(test)]
mod tests {
    use super::{ContactId, InteractionId};
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_distinct() {
        let ids: HashSet<ContactId> = (0..256).map(|_| ContactId::new()).collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn fixed_ids_keep_their_text() {
        let id = InteractionId::from("1");
        assert_eq!(id.as_str(), "1");
        assert_eq!(id.to_string(), "1");
        assert_eq!(" 2 ".parse::<ContactId>().unwrap(), ContactId::from("2"));
    }
}
