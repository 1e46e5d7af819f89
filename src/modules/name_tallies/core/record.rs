use serde::{Deserialize, Serialize};

/// One `{name, tally}` pair. Names are free-form and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTally {
    pub name: String,
    pub tally: i64,
}

impl NameTally {
    pub fn new(name: impl Into<String>, tally: i64) -> Self {
        Self {
            name: name.into(),
            tally,
        }
    }

    /// The record every store starts with.
    pub fn placeholder() -> Self {
        Self::new("", 0)
    }
}
