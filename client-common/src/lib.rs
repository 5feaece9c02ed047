pub mod strength;
pub mod hash_client;
pub mod rpc_client;
pub mod rainbow;
pub mod compare;
pub mod config;

pub use hash_client::{HashRequestClient, HashTransport, Hashed, Output, OutputSink};
pub use compare::{compare, Comparison};
pub use rpc_client::RpcClient;
pub use strength::{classify, evaluate, score, Accent, Classification, Tier};
