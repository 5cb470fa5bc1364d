//! Identifiers for states and events.
//!
//! Both are thin string newtypes. They serialize as plain strings so a
//! configuration reads naturally as JSON.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! name_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a name from anything string-like.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Borrow the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl From<&$name> for $name {
            fn from(name: &$name) -> Self {
                name.clone()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

name_type! {
    /// Name of a state in a [`Config`](super::Config).
    ///
    /// # Example
    ///
    /// ```rust
    /// use pocket_fsm::core::StateName;
    ///
    /// let idle = StateName::from("idle");
    /// assert_eq!(idle, "idle");
    /// assert_eq!(idle.to_string(), "idle");
    /// ```
    StateName
}

name_type! {
    /// Name of an event that may drive a transition.
    EventName
}
