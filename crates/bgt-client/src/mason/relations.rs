//! Relation names used by the BoardGameTracker API.
//!
//! Relation names identify the semantic role of a hypermedia control.
//! IANA-registered relations are bare; application-specific ones carry the
//! `BGT:` namespace prefix.

/// The representation's own URL.
pub const SELF: &str = "self";

/// The collection an item belongs to.
pub const COLLECTION: &str = "collection";

/// Edit the representation (PUT with the item schema).
pub const EDIT: &str = "edit";

/// Add a player to the collection (POST with the player schema).
pub const ADD_PLAYER: &str = "BGT:add-player";

/// Delete the player.
pub const DELETE: &str = "BGT:delete";
