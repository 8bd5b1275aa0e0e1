//! UUIDv7 surrogate identifiers for portfolio records.
//!
//! Projects and experience entries are identified by a UUIDv7 assigned at
//! creation time, never by list position. UUIDv7 embeds a millisecond
//! timestamp in the first 48 bits, so ids sort in creation order, which is
//! handy when reconstructing editorial ordering after a merge by hand.

use uuid::Uuid;

/// Generate a new time-ordered record identifier.
#[inline]
pub fn new_record_id() -> Uuid {
    Uuid::now_v7()
}

/// True if the id is a UUIDv7 (the only version folio generates).
///
/// Documents imported from older exports may carry v4 ids; those are valid
/// identities too, this is purely diagnostic.
pub fn is_v7(id: &Uuid) -> bool {
    id.get_version_num() == 7
}
