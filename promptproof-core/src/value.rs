pub type Value = serde_json::Value;

/// Open string-keyed metadata carried by responses and snapshots.
pub type Metadata = serde_json::Map<String, Value>;
