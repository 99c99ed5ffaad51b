/// All database primary keys are PostgreSQL BIGSERIAL. The in-memory
/// catalog assigns ids from the same space via a monotonic counter.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
