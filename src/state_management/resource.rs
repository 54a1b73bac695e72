use serde::Deserialize;
use serde_json::{Map, Value};

use crate::utils::CCStr;

/// An output definition as served by the feedpushr API
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OutputResource {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: CCStr,
    #[serde(default)]
    pub desc: CCStr,
    #[serde(default)]
    pub props: Option<OutputProperties>,
    #[serde(default)]
    pub tags: Vec<CCStr>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Key/value properties of a [OutputResource], in the order the server sent them
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct OutputProperties(Map<String, Value>);

impl OutputProperties {
    /// The `(label, content)` pairs to display, one per property
    pub fn rows(&self) -> impl Iterator<Item = (&str, CCStr)> + '_ {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), display_value(value)))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for OutputProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn display_value(value: &Value) -> CCStr {
    match value {
        Value::Null => CCStr::default(),
        Value::String(s) => CCStr::from(s),
        other => CCStr::from(other.to_string()),
    }
}
