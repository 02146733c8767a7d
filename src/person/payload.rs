//! Request body for creating or updating a person.

use serde_json::Value;

/// Fields a client may send for a person
///
/// Built leniently from whatever JSON arrived: a field counts as present
/// only when it is a non-empty string. Missing, null, empty and
/// non-string values all read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPayload {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl PersonPayload {
    pub fn new(name: Option<&str>, number: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            number: number.map(str::to_string),
        }
        .normalized()
    }

    /// Extract a payload from an optional JSON body
    pub fn from_json(body: Option<&Value>) -> Self {
        let field = |key: &str| {
            body.and_then(|b| b.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            name: field("name"),
            number: field("number"),
        }
        .normalized()
    }

    fn normalized(self) -> Self {
        Self {
            name: self.name.filter(|s| !s.is_empty()),
            number: self.number.filter(|s| !s.is_empty()),
        }
    }
}
