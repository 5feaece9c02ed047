mod error;
mod call;
pub use error::{Error, Result};
pub use call::{HashRequest, HashResponse, Rpc};
