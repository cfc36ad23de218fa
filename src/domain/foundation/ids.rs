//! Strongly-typed identifier value objects.
//!
//! Identifiers are opaque strings minted through the `IdMinter` port so
//! tests can substitute deterministic generators. They are globally unique
//! within an environment and never reused: duplicating a logic item,
//! condition node, or action always mints fresh ids.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an already-minted identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id!(
    /// Unique identifier for a logic item on a question.
    LogicItemId
);
string_id!(
    /// Unique identifier for a condition node (leaf or group).
    ConditionId
);
string_id!(
    /// Unique identifier for an action within a logic item.
    ActionId
);
string_id!(
    /// Unique identifier for an audience segment.
    SegmentId
);
string_id!(
    /// Unique identifier for a survey.
    SurveyId
);
string_id!(
    /// Unique identifier for a question within a survey.
    QuestionId
);
string_id!(
    /// Unique identifier for a survey variable.
    VariableId
);
string_id!(
    /// Unique identifier for a survey ending card.
    EndingId
);
string_id!(
    /// Destination of a jump/require action: a question or ending id.
    /// Empty while the user has not picked a destination yet.
    TargetId
);
string_id!(
    /// Unique identifier for an environment (workspace owning surveys and segments).
    EnvironmentId
);
