//! Entity <-> model mappers
//!
//! `From` impls converting raw database rows into domain entities. String
//! columns holding enumerations are parsed lossily: unknown values fall back
//! to the safest variant instead of failing the whole listing.

mod announcement;
mod audit_log;
mod document;
mod message;
mod notification;
mod support_ticket;
mod user;
