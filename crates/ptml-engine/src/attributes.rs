use std::borrow::Cow;

pub const ID: &str = "id";
pub const CLASS: &str = "class";
/// Caller-facing shorthand for [`CLASS`], normalized away on insertion.
pub const CLASS_ALIAS: &str = "cls";

/// An attribute value: one token, or an ordered list of tokens that renders
/// space-joined (e.g. several CSS classes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Token(String),
    Tokens(Vec<String>),
}

impl AttrValue {
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            AttrValue::Token(token) => Cow::Borrowed(token),
            AttrValue::Tokens(tokens) => Cow::Owned(tokens.join(" ")),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AttrValue::Token(token) => token.is_empty(),
            AttrValue::Tokens(tokens) => tokens.iter().all(|t| t.is_empty()),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Token(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Token(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(values: Vec<String>) -> Self {
        AttrValue::Tokens(values)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(values: Vec<&str>) -> Self {
        AttrValue::Tokens(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for AttrValue {
    fn from(values: &[&str]) -> Self {
        AttrValue::Tokens(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for AttrValue {
    fn from(values: [&str; N]) -> Self {
        AttrValue::Tokens(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Attribute map with unique keys.
///
/// Keys keep the position of their first insertion; re-setting a key replaces
/// its value in place. The [`CLASS_ALIAS`] key is stored as [`CLASS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = canonical_key(key.into());
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        let key = if key == CLASS_ALIAS { CLASS } else { key };
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn id(&self) -> Option<&AttrValue> {
        self.get(ID)
    }

    pub fn class(&self) -> Option<&AttrValue> {
        self.get(CLASS)
    }

    /// Everything except `id` and `class`, in insertion order.
    pub fn others(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.iter().filter(|(k, _)| *k != ID && *k != CLASS)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Layer `overrides` on top of `self`. A key present in `overrides`
    /// replaces the value from `self` outright; values are never combined.
    pub fn overlay(&self, overrides: Attributes) -> Attributes {
        let mut merged = self.clone();
        for (key, value) in overrides.0 {
            merged.set(key, value);
        }
        merged
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.set(key, value);
        }
        attributes
    }
}

fn canonical_key(key: String) -> String {
    if key == CLASS_ALIAS {
        CLASS.to_string()
    } else {
        key
    }
}
