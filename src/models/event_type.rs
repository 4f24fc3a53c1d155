use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a punch: entering or leaving service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    In,
    Out,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::In => "in",
            EventKind::Out => "out",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(EventKind::In),
            "out" => Some(EventKind::Out),
            _ => None,
        }
    }

    /// Human label used by the screens ("Entry" / "Exit").
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::In => "Entry",
            EventKind::Out => "Exit",
        }
    }

    /// The kind a clock action produces after a punch of this kind.
    pub fn toggled(&self) -> Self {
        match self {
            EventKind::In => EventKind::Out,
            EventKind::Out => EventKind::In,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventKind::In)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
