//! Catalog enums stored as SMALLINT discriminants.
//!
//! The discriminants are persisted, so they must never be renumbered.
//! JSON uses the variant name (`"Weapon"`, `"Completed"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Discriminant type matching the SMALLINT columns.
pub type EnumId = i16;

macro_rules! define_catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Every variant in discriminant order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Return the persisted discriminant.
            pub fn id(self) -> EnumId {
                self as EnumId
            }

            /// Variant name as used in JSON and query strings.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl From<$name> for EnumId {
            fn from(value: $name) -> Self {
                value as EnumId
            }
        }

        impl TryFrom<EnumId> for $name {
            type Error = CoreError;

            fn try_from(value: EnumId) -> Result<Self, Self::Error> {
                match value {
                    $( v if v == $val => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} id {other}",
                        $label
                    ))),
                }
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            /// Case-insensitive match on the variant name.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| {
                        let names: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        CoreError::Validation(format!(
                            "Invalid {} '{trimmed}'. Must be one of: {}",
                            $label,
                            names.join(", ")
                        ))
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_catalog_enum! {
    /// Item category.
    ItemType ("item type") {
        Clothing = 1,
        Weapon = 2,
        Tool = 3,
        Special = 4,
    }
}

define_catalog_enum! {
    /// Vehicle category.
    VehicleType ("vehicle type") {
        Horse = 1,
        Boat = 2,
        Minecart = 3,
    }
}

define_catalog_enum! {
    /// Progress of a player on a quest.
    QuestStatus ("quest status") {
        InProgress = 1,
        Completed = 2,
    }
}
