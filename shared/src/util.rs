/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// New resource id (hyphenated UUIDv4)
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
