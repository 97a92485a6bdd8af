//! Data transfer objects for the API surface

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
