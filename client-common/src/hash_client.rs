use std::{cell::Cell, fmt};

use async_trait::async_trait;
use common::api::{self, HashRequest, HashResponse};
use derivative::Derivative;
use tracing::{debug, trace, warn};

/// Carries a hash request to whoever computes it.
// ?Send: the same client runs on a current-thread runtime and in the browser
#[async_trait(?Send)]
pub trait HashTransport {
    async fn hash(&self, request: &HashRequest) -> api::Result<HashResponse>;
}

/// Where outcomes are displayed. Each call overwrites whatever was shown before.
pub trait OutputSink {
    fn render(&self, output: Output);
}

#[derive(Derivative, Clone, PartialEq, Eq)]
#[derivative(Debug)]
pub struct Hashed {
    #[derivative(Debug="ignore")]
    pub password: String,
    pub salt: String,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Nothing was sent, the user must type a password first.
    Prompt,
    Hashed(Hashed),
    /// Already formatted as `Error: <reason>`.
    Failed(String),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Prompt => write!(f, "{}", api::Error::EmptyPassword),
            Output::Hashed(h) => write!(
                f,
                "Entered Password: {}\nGenerated Salt: {}\nSalted Hash: {}",
                h.password, h.salt, h.hash
            ),
            Output::Failed(e) => f.write_str(e),
        }
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct HashRequestClient<T, S> {
    #[derivative(Debug="ignore")]
    transport: T,
    #[derivative(Debug="ignore")]
    sink: S,
    latest_ticket: Cell<u64>,
}

impl<T: HashTransport, S: OutputSink> HashRequestClient<T, S> {
    pub fn new(transport: T, sink: S) -> Self {
        Self {
            transport,
            sink,
            latest_ticket: Cell::new(0),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `password` once and renders the outcome.
    ///
    /// Never fails: errors are rendered, not returned. When another submission
    /// starts before this one resolves, this one's outcome is dropped.
    pub async fn submit(&self, password: &str) {
        if password.is_empty() {
            debug!("empty password, nothing sent");
            self.sink.render(Output::Prompt);
            return;
        }

        let ticket = self.latest_ticket.get() + 1;
        self.latest_ticket.set(ticket);
        trace!(ticket, "sending hash request");

        let request = HashRequest { password: password.to_owned() };
        let output = match self.transport.hash(&request).await {
            Ok(HashResponse { salt, hash }) => {
                trace!(ticket, "hash request succeeded");
                Output::Hashed(Hashed {
                    password: request.password,
                    salt,
                    hash,
                })
            }
            Err(e) => {
                warn!(ticket, "hash request failed: {}", e);
                Output::Failed(format!("Error: {}", e))
            }
        };

        if self.latest_ticket.get() != ticket {
            debug!(ticket, "superseded by a later submission, dropping outcome");
            return;
        }

        self.sink.render(output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use std::cell::RefCell;
    use tokio::sync::Notify;

    mock! {
        pub Transport {}
        #[async_trait(?Send)]
        impl HashTransport for Transport {
            async fn hash(&self, request: &HashRequest) -> api::Result<HashResponse>;
        }
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Output>>);

    impl OutputSink for Recorder {
        fn render(&self, output: Output) {
            self.0.borrow_mut().push(output);
        }
    }

    impl Recorder {
        fn rendered(&self) -> Vec<Output> {
            self.0.borrow().clone()
        }
    }

    #[tokio::test]
    async fn empty_password_never_reaches_transport() {
        let mut transport = MockTransport::new();
        transport.expect_hash().times(0);

        let client = HashRequestClient::new(transport, Recorder::default());
        client.submit("").await;

        assert_eq!(client.sink().rendered(), vec![Output::Prompt]);
        assert_eq!(client.sink().rendered()[0].to_string(), "Please enter a password");
    }

    #[tokio::test]
    async fn success_renders_password_salt_and_hash() {
        let mut transport = MockTransport::new();
        transport
            .expect_hash()
            .withf(|req: &HashRequest| req.password == "x")
            .times(1)
            .returning(|_| Ok(HashResponse { salt: "s".into(), hash: "h".into() }));

        let client = HashRequestClient::new(transport, Recorder::default());
        client.submit("x").await;

        let rendered = client.sink().rendered();
        assert_eq!(rendered.len(), 1);
        let text = rendered[0].to_string();
        assert_eq!(text, "Entered Password: x\nGenerated Salt: s\nSalted Hash: h");
        assert_eq!(
            rendered[0],
            Output::Hashed(Hashed { password: "x".into(), salt: "s".into(), hash: "h".into() })
        );
    }

    #[tokio::test]
    async fn failure_renders_error_string() {
        let mut transport = MockTransport::new();
        transport
            .expect_hash()
            .times(1)
            .returning(|_| Err(eyre::eyre!("connection refused").into()));

        let client = HashRequestClient::new(transport, Recorder::default());
        client.submit("x").await;

        let rendered = client.sink().rendered();
        assert_eq!(rendered, vec![Output::Failed("Error: connection refused".into())]);
    }

    #[tokio::test]
    async fn one_request_per_submission() {
        let mut transport = MockTransport::new();
        transport
            .expect_hash()
            .times(2)
            .returning(|req| Ok(HashResponse { salt: "s".into(), hash: format!("h-{}", req.password) }));

        let client = HashRequestClient::new(transport, Recorder::default());
        client.submit("a").await;
        client.submit("b").await;

        let rendered: Vec<_> = client.sink().rendered().iter().map(|o| o.to_string()).collect();
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].ends_with("h-a"));
        assert!(rendered[1].ends_with("h-b"));
    }

    #[tokio::test]
    async fn only_sent_requests_take_a_ticket() {
        let mut transport = MockTransport::new();
        transport
            .expect_hash()
            .times(2)
            .returning(|_| Ok(HashResponse { salt: "s".into(), hash: "h".into() }));

        let client = HashRequestClient::new(transport, Recorder::default());
        client.submit("a").await;
        client.submit("").await;
        client.submit("b").await;

        assert_eq!(client.latest_ticket.get(), 2);
        assert_eq!(client.sink().rendered().len(), 3);
    }

    #[test]
    fn debug_hides_password() {
        let out = Output::Hashed(Hashed { password: "hunter2".into(), salt: "s".into(), hash: "h".into() });
        assert!(!format!("{:?}", out).contains("hunter2"));
    }

    // "slow" parks until another request goes through
    struct Gate(Notify);

    #[async_trait(?Send)]
    impl HashTransport for Gate {
        async fn hash(&self, request: &HashRequest) -> api::Result<HashResponse> {
            if request.password == "slow" {
                self.0.notified().await;
            } else {
                self.0.notify_one();
            }
            Ok(HashResponse { salt: "s".into(), hash: format!("h-{}", request.password) })
        }
    }

    #[tokio::test]
    async fn superseded_response_is_dropped() {
        let client = HashRequestClient::new(Gate(Notify::new()), Recorder::default());

        tokio::join!(client.submit("slow"), client.submit("fast"));

        let rendered = client.sink().rendered();
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].to_string().contains("h-fast"));
    }
}
