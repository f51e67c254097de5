//! Strongly typed identifier wrappers around schedule-element names.
//!
//! Transit feeds identify everything by string — lines, routes, stops, and
//! individual departures — and synthetic identifiers are derived from existing
//! ones by prefixing.  Wrapping the strings in distinct newtypes keeps a
//! `RouteId` from ever being used where a `DepartureId` is expected, at zero
//! runtime cost beyond the `String` itself.
//!
//! All IDs are `Ord + Hash` so they can serve as `BTreeMap`/`HashMap` keys
//! without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around an owned string.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the underlying identifier text.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_id! {
    /// Identifier of a transit line ("red", "U6", ...).
    pub struct LineId;
}

typed_id! {
    /// Identifier of one stop pattern within a line.
    pub struct RouteId;
}

typed_id! {
    /// Identifier of a stop facility referenced from a route's stop sequence.
    pub struct StopId;
}

typed_id! {
    /// Identifier of one scheduled run of a route, unique within its route.
    pub struct DepartureId;
}

impl DepartureId {
    /// Derive a synthetic identifier by prepending `prefix` to this one.
    ///
    /// Used for duplicated departures: the prefix encodes the shift direction
    /// and the remainder traces back to the source departure.
    pub fn with_prefix(&self, prefix: &str) -> DepartureId {
        DepartureId(format!("{prefix}{}", self.0))
    }

    /// Plain case-sensitive substring match against the identifier text.
    #[inline]
    pub fn contains(&self, marker: &str) -> bool {
        self.0.contains(marker)
    }
}
