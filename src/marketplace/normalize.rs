use serde_json::Value;

/// Unwrap a response envelope into a flat list of result records
///
/// `envelope` is the key path under which the endpoint nests its payload
/// (e.g. `["result", "products"]`). An array at the key becomes one record
/// per element in original order; any other value becomes a single record.
/// If the key path is missing the whole body is passed through as a single
/// record - the upstream shape is not owned by this crate and has changed
/// before.
pub fn normalize_records(envelope: &[&str], mut body: Value) -> Vec<Value> {
    let pointer: String = envelope.iter().map(|key| format!("/{}", key)).collect();

    match body.pointer_mut(&pointer) {
        Some(payload) => match payload.take() {
            Value::Array(items) => items,
            single => vec![single],
        },
        None => vec![body],
    }
}
