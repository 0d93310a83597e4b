use serde::{Deserialize, Deserializer, Serialize};

/// A source/text pair attributed to an answer by the query service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

/// Body of `GET /query`, rendered as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub query: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub response: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
