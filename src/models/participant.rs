//! Participant: a real entrant or a placeholder padding the field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tournament entrant, identified by its name.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    /// Synthetic entrant added to reach a power-of-two field; cannot legitimately finish on the podium.
    pub placeholder: bool,
}

impl Participant {
    /// A real participant with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: false,
        }
    }

    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: true,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
