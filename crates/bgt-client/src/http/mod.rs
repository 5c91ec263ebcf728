//! HTTP transport for Mason exchanges.

mod client;

pub use client::{MASON_JSON, MasonClient, PLAIN_JSON, Submission};
