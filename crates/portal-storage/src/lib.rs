//! # portal-storage
//!
//! Local filesystem implementation of the `ObjectStore` port. Uploaded
//! documents land under a configured root directory keyed by the
//! store-relative path `{user_id}/{millis}_{file_name}`.

mod local;

pub use local::LocalObjectStore;
