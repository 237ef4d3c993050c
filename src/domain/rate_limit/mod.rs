//! Rate limiting domain - token buckets and client identities.

mod client_identity;
mod token_bucket;

pub use client_identity::{ClientIdentity, IdentityPolicy};
pub use token_bucket::{BucketSettings, TokenBucket};
