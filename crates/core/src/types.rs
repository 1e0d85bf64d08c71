/// Store-assigned identifiers are positive, monotonically increasing integers.
pub type DbId = i64;

/// Calendar dates carried by rentals and purchases (`YYYY-MM-DD` on the wire).
pub type Date = chrono::NaiveDate;
