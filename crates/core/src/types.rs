/// Primary keys are ULID strings (26 chars, Crockford base32, time-ordered).
pub type DbId = String;

/// Owner of terms and categories.
pub type UserId = DbId;

pub type TermId = DbId;

pub type CategoryId = DbId;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
