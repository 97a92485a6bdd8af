//! # portal-sms
//!
//! HTTP client for the external SMS relay. The relay accepts
//! `{phone, message, type}` and answers `{success, sms_id}`; callers treat
//! delivery as best-effort and never fail the triggering operation on a
//! relay error.

mod relay;

pub use relay::{HttpSmsRelay, NoopSmsRelay};
