/// All entity primary keys are UUID v7, generated by the service.
pub type EntityId = uuid::Uuid;

/// Owner ids are opaque strings supplied by the caller.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh, time-ordered entity id.
pub fn new_id() -> EntityId {
    uuid::Uuid::now_v7()
}
