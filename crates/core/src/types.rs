/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Prompt identifiers are opaque strings, assigned once at creation
/// (UUID v4) and immutable afterwards.
pub type PromptId = String;
