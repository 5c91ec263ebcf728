//! Mason hypermedia wire types.
//!
//! The server speaks `application/vnd.mason+json`: plain JSON enriched with
//! `@controls` (affordances), `@namespaces`, and `@error`. This module holds
//! the typed shapes; the transport lives in [`crate::http`].

mod control;
pub mod relations;
mod representations;

pub use control::{Control, Controls, Property, Schema};
pub use representations::{
    ErrorBody, ErrorDetail, Namespace, Player, PlayerCollection, PlayerSummary,
};
