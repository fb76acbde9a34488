//! Enumerations backed by SMALLINT lookup tables.
//!
//! Each variant's discriminant matches the seed order (1-based) and each
//! `name()` matches the seeded `name` column of the corresponding table in
//! `20261018000002_create_lookup_tables.sql`. Rows reference these tables by
//! foreign key, so the store rejects any id outside the declared set.

use std::fmt;
use std::str::FromStr;

use cheese_core::error::CoreError;
pub use cheese_core::types::LookupId;

macro_rules! define_lookup_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Every variant in seed order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Return the lookup table ID.
            pub fn id(self) -> LookupId {
                self as LookupId
            }

            /// Return the seeded `name` column value.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl From<$name> for LookupId {
            fn from(value: $name) -> Self {
                value as LookupId
            }
        }

        impl TryFrom<LookupId> for $name {
            type Error = CoreError;

            fn try_from(id: LookupId) -> Result<Self, Self::Error> {
                match id {
                    $( $val => Ok($name::$variant), )+
                    _ => Err(CoreError::UnknownLookupId { lookup: $label, id }),
                }
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "'{other}' is not a valid {}",
                        $label
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_lookup_enum! {
    /// Account role stored in `user_roles`.
    UserRole ("user role") {
        Player = 1 => "PLAYER",
        Admin = 2 => "ADMIN",
        ContentCreator = 3 => "CONTENT_CREATOR",
    }
}

define_lookup_enum! {
    /// Engagement state of a character on a quest, stored in `participation_statuses`.
    ParticipationStatus ("participation status") {
        Pending = 1 => "PENDING",
        Active = 2 => "ACTIVE",
        Completed = 3 => "COMPLETED",
    }
}

define_lookup_enum! {
    /// Item category stored in `item_types`.
    ItemType ("item type") {
        Consumable = 1 => "CONSUMABLE",
        Equipment = 2 => "EQUIPMENT",
        Material = 3 => "MATERIAL",
    }
}
