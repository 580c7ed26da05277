use super::is_truthy;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// The shapes an image field shows up in.
///
/// Object shapes keep the object they were read from, so a value that is
/// passed through comes back with all of its keys.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef {
    Null,
    /// A bare URL or identifier.
    Url(String),
    /// `{"url": ...}`
    ObjectWithUrl { url: Box<ImageRef>, raw: Value },
    /// `{"@list": [...]}`
    ListWrapper { list: Box<ImageRef>, raw: Value },
    Sequence(Vec<ImageRef>),
    /// Anything else, passed through untouched.
    Unknown(Value),
}

impl ImageRef {
    /// Unwrap list wrappers, sequences and url objects down to one entry.
    pub fn resolve(self) -> Option<ImageRef> {
        if self.is_falsy() {
            return None;
        }

        let mut image = self;

        if let ImageRef::ListWrapper { list, .. } = image {
            image = *list;
        }

        if let ImageRef::Sequence(items) = image {
            image = items.into_iter().next()?;
        }

        if let Some(url) = image.url_member() {
            image = url;
        }

        match image {
            ImageRef::Null => None,
            image => Some(image),
        }
    }

    pub fn as_url(&self) -> Option<&str> {
        match self {
            ImageRef::Url(url) => Some(url.as_str()),
            _ => None,
        }
    }

    // A truthy `url` member, which a list wrapper may carry as well
    fn url_member(&self) -> Option<ImageRef> {
        match self {
            ImageRef::ObjectWithUrl { url, .. } => Some(url.as_ref().clone()),
            ImageRef::ListWrapper { raw, .. } => raw
                .get("url")
                .filter(|url| is_truthy(url))
                .map(ImageRef::from),
            _ => None,
        }
    }

    fn is_falsy(&self) -> bool {
        match self {
            ImageRef::Null => true,
            ImageRef::Url(url) => url.is_empty(),
            ImageRef::Unknown(value) => !is_truthy(value),
            _ => false,
        }
    }
}

impl From<&Value> for ImageRef {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => ImageRef::Null,
            Value::String(url) => ImageRef::Url(url.clone()),
            Value::Array(items) => ImageRef::Sequence(items.iter().map(ImageRef::from).collect()),
            Value::Object(map) => match (map.get("@list"), map.get("url")) {
                (Some(list), _) if is_truthy(list) => ImageRef::ListWrapper {
                    list: Box::new(ImageRef::from(list)),
                    raw: value.clone(),
                },
                (_, Some(url)) if is_truthy(url) => ImageRef::ObjectWithUrl {
                    url: Box::new(ImageRef::from(url)),
                    raw: value.clone(),
                },
                _ => ImageRef::Unknown(value.clone()),
            },
            other => ImageRef::Unknown(other.clone()),
        }
    }
}

impl From<ImageRef> for Value {
    fn from(image: ImageRef) -> Self {
        match image {
            ImageRef::Null => Value::Null,
            ImageRef::Url(url) => Value::String(url),
            ImageRef::ObjectWithUrl { raw, .. } | ImageRef::ListWrapper { raw, .. } => raw,
            ImageRef::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            ImageRef::Unknown(value) => value,
        }
    }
}

impl Serialize for ImageRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::from(self.clone()).serialize(serializer)
    }
}

/// Reduce an image field to a single entry, normally a URL.
pub fn image(raw: &Value) -> Option<ImageRef> {
    ImageRef::from(raw).resolve()
}
