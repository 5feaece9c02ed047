//! Offline lookup showing why unsalted digests fall to precomputed tables while
//! bcrypt hashes only match when the exact same hash was recorded.

use std::{collections::HashMap, fs, io, path::Path};

use eyre::WrapErr;
use sha2::{Digest, Sha256};
use tracing::{debug, trace};

const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Always searchable by SHA-256, whatever table was loaded.
pub const COMMON_PASSWORDS: [&str; 6] = ["password", "123456", "qwerty", "letmein", "12345678", "abc123"];

/// Plaintexts written to a fresh demo table, each with its bcrypt hash.
pub const DEMO_ROWS: [&str; 2] = ["password", "123456"];

pub fn sha256_hex(plaintext: &str) -> String {
    data_encoding::HEXLOWER.encode(&Sha256::digest(plaintext.as_bytes()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub plaintext: String,
    pub bcrypt: String,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    Bcrypt {
        target: String,
        found: Option<String>,
    },
    Plaintext {
        plaintext: String,
        sha256: String,
        sha_cracked: Option<String>,
    },
}

#[derive(Debug, Default, Clone)]
pub struct RainbowTable {
    rows: Vec<Row>,
}

impl RainbowTable {
    /// Reads `plaintext | bcrypt_hash` lines, skipping anything else.
    pub fn parse(text: &str) -> Self {
        let rows = text
            .lines()
            .map(str::trim)
            .filter_map(|line| {
                let (plain, bcrypt) = line.split_once('|')?;
                let plaintext = plain.trim().to_owned();
                Some(Row {
                    sha256: sha256_hex(&plaintext),
                    bcrypt: bcrypt.trim().to_owned(),
                    plaintext,
                })
            })
            .collect();
        Self { rows }
    }

    /// A missing file is an empty table.
    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => {
                let table = Self::parse(&text);
                debug!(rows = table.len(), path = %path.display(), "loaded rainbow table");
                Ok(table)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no rainbow table, using built-ins only");
                Ok(Self::default())
            }
            Err(e) => Err(e).wrap_err_with(|| format!("failed to read rainbow table {}", path.display())),
        }
    }

    /// Writes a demo table at `path` unless something is already there.
    /// Returns whether a file was created.
    pub fn seed_demo(path: impl AsRef<Path>, bcrypt_cost: u32) -> eyre::Result<bool> {
        let path = path.as_ref();
        if path.exists() {
            return Ok(false);
        }

        let mut text = String::new();
        for plain in DEMO_ROWS.iter() {
            let hash = bcrypt::hash(plain, bcrypt_cost).wrap_err("bcrypt hashing failed")?;
            text.push_str(&format!("{} | {}\n", plain, hash));
        }
        fs::write(path, text).wrap_err_with(|| format!("failed to write rainbow table {}", path.display()))?;
        debug!(path = %path.display(), "seeded demo rainbow table");
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn sha_map(&self) -> HashMap<String, String> {
        COMMON_PASSWORDS
            .iter()
            .map(|p| (sha256_hex(p), (*p).to_owned()))
            .chain(self.rows.iter().map(|r| (r.sha256.clone(), r.plaintext.clone())))
            .collect()
    }

    pub fn probe(&self, target: &str) -> Probe {
        let target = target.trim();

        if BCRYPT_PREFIXES.iter().any(|p| target.starts_with(p)) {
            trace!("probing a bcrypt hash");
            let found = self
                .rows
                .iter()
                .find(|r| r.bcrypt == target)
                .map(|r| r.plaintext.clone());
            return Probe::Bcrypt { target: target.to_owned(), found };
        }

        let sha256 = sha256_hex(target);
        let sha_cracked = self.sha_map().remove(&sha256);
        Probe::Plaintext {
            plaintext: target.to_owned(),
            sha256,
            sha_cracked,
        }
    }
}
