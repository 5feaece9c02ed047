pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000"; // where the demo hashing server listens by default
pub const HASH_PATH: &str = "/hash";
pub const CONFIG_PATH: &str = "armor.toml";
pub const EMPTY_PASSWORD_PROMPT: &str = "Please enter a password";
