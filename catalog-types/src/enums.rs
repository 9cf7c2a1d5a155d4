//! Enumerations shared between entity attributes and relationship metadata.

use crate::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    other => Err(TypeError::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Lifecycle status of an entity.
    EntityStatus => "entity status" {
        Active = "ACTIVE",
        Deleted = "DELETED",
        /// Hard-deleted; only seen in audit responses.
        Purged = "PURGED",
    }
}

wire_enum! {
    /// Certification state of an asset.
    CertificateStatus => "certificate status" {
        Draft = "DRAFT",
        Verified = "VERIFIED",
        Deprecated = "DEPRECATED",
    }
}

wire_enum! {
    /// Status carried on term-to-term and term-to-category relationships.
    TermRelationshipStatus => "term relationship status" {
        Draft = "DRAFT",
        Active = "ACTIVE",
        Deprecated = "DEPRECATED",
        Obsolete = "OBSOLETE",
        Other = "OTHER",
    }
}

wire_enum! {
    /// Status of a term assigned to an asset.
    TermAssignmentStatus => "term assignment status" {
        Discovered = "DISCOVERED",
        Proposed = "PROPOSED",
        Imported = "IMPORTED",
        Validated = "VALIDATED",
        Deprecated = "DEPRECATED",
        Obsolete = "OBSOLETE",
        Other = "OTHER",
    }
}
