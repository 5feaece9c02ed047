use async_trait::async_trait;
use common::api::{self, HashRequest, HashResponse, Rpc};
use eyre::WrapErr;
use tracing::trace;

use crate::hash_client::HashTransport;

#[derive(Clone, Debug)]
pub struct RpcClient {
    reqwest_client: reqwest::Client,
    url: String // maybe use Url type directly
}

impl RpcClient {
    pub fn new(url: &str) -> Self {
        Self {
            reqwest_client: reqwest::Client::new(),
            url: url.trim_end_matches('/').to_owned()
        }
    }

    pub fn endpoint<T: Rpc>(&self) -> String {
        format!("{}{}", self.url, T::PATH)
    }

    /// Posts `c` as JSON and decodes the JSON reply. Single attempt, status codes are not inspected.
    pub async fn call<T: Rpc>(&self, c: &T) -> api::Result<T::Ret> {
        let url = self.endpoint::<T>();
        trace!(%url, "rpc call");

        let res = self.reqwest_client.post(&url)
            .json(c)
            .send()
            .await
            .wrap_err("Reqwest error")?;

        let body = res.bytes().await.wrap_err("Body error")?;
        let ret = serde_json::from_slice(&body).wrap_err("Deserialization error")?;
        Ok(ret)
    }
}

#[async_trait(?Send)]
impl HashTransport for RpcClient {
    async fn hash(&self, request: &HashRequest) -> api::Result<HashResponse> {
        self.call(request).await
    }
}
