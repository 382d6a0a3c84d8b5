//! # Studio Shared
//!
//! Wire types shared by the server and its clients: response envelopes,
//! RFC 7807 problem details and query-string DTOs.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse, PagedResponse};
