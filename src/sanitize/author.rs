use super::is_truthy;
use serde_json::Value;

// Some websites have author names be URLs
const CONTRIBUTORS_SEGMENT: &str = "/contributors/";

/// The shapes an author field shows up in.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorRef {
    Null,
    Name(String),
    /// An object carrying a `name` key, whatever its value.
    Named(Box<AuthorRef>),
    Sequence(Vec<AuthorRef>),
    Unknown(Value),
}

impl AuthorRef {
    pub fn resolve(self) -> Option<String> {
        if self.is_falsy() {
            return None;
        }

        let mut author = self;

        if let AuthorRef::Sequence(items) = author {
            author = items.into_iter().next()?;
        }

        if let AuthorRef::Named(name) = author {
            author = *name;
        }

        match author {
            AuthorRef::Name(name) => {
                let name = name.replacen(CONTRIBUTORS_SEGMENT, "", 1);
                (!name.is_empty()).then_some(name)
            }
            _ => None,
        }
    }

    fn is_falsy(&self) -> bool {
        match self {
            AuthorRef::Null => true,
            AuthorRef::Name(name) => name.is_empty(),
            AuthorRef::Unknown(value) => !is_truthy(value),
            _ => false,
        }
    }
}

impl From<&Value> for AuthorRef {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => AuthorRef::Null,
            Value::String(name) => AuthorRef::Name(name.clone()),
            Value::Array(items) => AuthorRef::Sequence(items.iter().map(AuthorRef::from).collect()),
            Value::Object(map) => match map.get("name") {
                Some(name) => AuthorRef::Named(Box::new(AuthorRef::from(name))),
                None => AuthorRef::Unknown(value.clone()),
            },
            other => AuthorRef::Unknown(other.clone()),
        }
    }
}

/// Reduce an author field to a single display name.
pub fn author(raw: &Value) -> Option<String> {
    AuthorRef::from(raw).resolve()
}
