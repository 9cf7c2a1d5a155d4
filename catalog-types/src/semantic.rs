use crate::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Write intent attached to a single relationship reference.
///
/// The tag decides which relationship bucket of the nested wire entity the
/// reference is written to. It is never itself sent to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SemanticTag {
    /// Overwrite the full relationship set at persist time.
    #[default]
    Replace,
    /// Add without removing existing references.
    Append,
    /// Detach this specific reference.
    Remove,
}

impl SemanticTag {
    /// All tags in merge priority order (highest first).
    pub const PRIORITY: [SemanticTag; 3] =
        [SemanticTag::Replace, SemanticTag::Append, SemanticTag::Remove];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SemanticTag::Replace => "REPLACE",
            SemanticTag::Append => "APPEND",
            SemanticTag::Remove => "REMOVE",
        }
    }

    #[must_use]
    pub fn is_replace(&self) -> bool {
        *self == SemanticTag::Replace
    }

    /// Key of the nested-entity bucket this tag routes to.
    #[must_use]
    pub const fn bucket_key(&self) -> &'static str {
        match self {
            SemanticTag::Replace => "relationshipAttributes",
            SemanticTag::Append => "appendRelationshipAttributes",
            SemanticTag::Remove => "removeRelationshipAttributes",
        }
    }
}

impl fmt::Display for SemanticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticTag {
    type Err = TypeError;

    /// Parses the exact wire spelling. Anything else is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REPLACE" => Ok(SemanticTag::Replace),
            "APPEND" => Ok(SemanticTag::Append),
            "REMOVE" => Ok(SemanticTag::Remove),
            other => Err(TypeError::UnknownSemantic(other.to_string())),
        }
    }
}
