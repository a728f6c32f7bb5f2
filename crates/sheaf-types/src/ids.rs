//! Opaque string identifiers.
//!
//! The storage layer uses bigint keys stringified at the API boundary, so
//! every id here is an opaque string: compared, ordered, and hashed, never
//! parsed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new<S: AsRef<str>>(s: S) -> Self {
                Self(s.as_ref().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

id_newtype!(
    /// A viewer (account) id.
    ViewerId
);
id_newtype!(
    /// A facet id, unique within its message.
    FacetId
);
id_newtype!(
    /// A message id.
    MessageId
);
id_newtype!(
    /// A conversation/thread id.
    ThreadId
);
id_newtype!(
    /// An audience list id.
    ListId
);
