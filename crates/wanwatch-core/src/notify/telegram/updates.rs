use serde_json::Value;

/// A text message pulled from `getUpdates`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub update_id: i64,
    /// Chat id as a string, so group ids (negative) and user ids compare alike
    pub chat_id: Option<String>,
    pub text: Option<String>,
}

/// One `getUpdates` result, decoded leniently.
///
/// A single malformed update never fails the whole batch: entries without a
/// numeric `update_id` are counted in `skipped`, everything else is kept so
/// the cursor can move past it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBatch {
    pub messages: Vec<IncomingMessage>,
    pub max_update_id: Option<i64>,
    pub skipped: usize,
}

impl UpdateBatch {
    pub fn from_value(result: &Value) -> Self {
        let mut batch = Self::default();
        let Some(entries) = result.as_array() else {
            if !result.is_null() {
                batch.skipped = 1;
            }
            return batch;
        };

        for entry in entries {
            let Some(update_id) = entry.get("update_id").and_then(Value::as_i64) else {
                batch.skipped += 1;
                continue;
            };
            batch.max_update_id = Some(batch.max_update_id.map_or(update_id, |m| m.max(update_id)));

            let message = entry.get("message");
            let chat_id = message
                .and_then(|m| m.get("chat"))
                .and_then(|c| c.get("id"))
                .and_then(|id| match id {
                    Value::Number(n) => Some(n.to_string()),
                    Value::String(s) => Some(s.clone()),
                    _ => None,
                });
            let text = message.and_then(|m| m.get("text")).and_then(Value::as_str).map(String::from);

            batch.messages.push(IncomingMessage { update_id, chat_id, text });
        }
        batch
    }
}
