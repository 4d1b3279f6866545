//! Models module

mod request;
mod response;

pub use request::{AnagramsQuery, WordsRequest};
pub use response::{AnagramsResponse, CheckAnagramsResponse};
