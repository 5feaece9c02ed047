//! Same password, three digests: the unsalted SHA-256 never changes while each
//! bcrypt run draws a fresh salt.

pub use bcrypt::DEFAULT_COST;
use eyre::WrapErr;
use tracing::trace;

use crate::rainbow::sha256_hex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub unsalted: String,
    pub bcrypt1: String,
    pub bcrypt2: String,
}

pub fn compare(password: &str) -> eyre::Result<Comparison> {
    compare_with_cost(password, DEFAULT_COST)
}

pub fn compare_with_cost(password: &str, cost: u32) -> eyre::Result<Comparison> {
    trace!(cost, "hashing password twice with bcrypt");
    Ok(Comparison {
        unsalted: sha256_hex(password),
        bcrypt1: bcrypt::hash(password, cost).wrap_err("bcrypt hashing failed")?,
        bcrypt2: bcrypt::hash(password, cost).wrap_err("bcrypt hashing failed")?,
    })
}
