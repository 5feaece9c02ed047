use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub trait Rpc: Serialize {
    type Ret: DeserializeOwned; // responses are decoded into self owned structs so they can be handed back from calls
    const PATH: &'static str; // appended to the server's base url
}

// Hash
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HashRequest {
    pub password: String,
}
impl Rpc for HashRequest {
    type Ret = HashResponse;
    const PATH: &'static str = crate::consts::HASH_PATH;
}

// never print the password, not even at trace level
impl std::fmt::Debug for HashRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashRequest")
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HashResponse {
    pub salt: String,
    pub hash: String,
}
