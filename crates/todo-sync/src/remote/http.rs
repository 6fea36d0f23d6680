//! HTTP Remote
//!
//! Talks to the to-do server over its REST contract.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Response};
use tracing::debug;

use super::TodoRemote;
use crate::config::RemoteConfig;
use crate::error::{SyncError, SyncResult};
use crate::model::{CompletedPatch, NewTodo, RemoteTodo, Todo};

/// Characters escaped when an id becomes a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: Client,
    config: RemoteConfig,
}

impl HttpRemote {
    pub fn new(config: RemoteConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use a preconfigured client (proxies, timeouts, headers)
    pub fn with_client(client: Client, config: RemoteConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn collection_url(&self) -> String {
        self.config.endpoint("todo")
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), utf8_percent_encode(id, PATH_SEGMENT))
    }
}

/// Mutations only count when the store answers exactly 200
fn require_ok(operation: &'static str, response: &Response) -> SyncResult<()> {
    let status = response.status().as_u16();
    if status == 200 {
        Ok(())
    } else {
        Err(SyncError::Status { operation, status })
    }
}

#[async_trait(?Send)]
impl TodoRemote for HttpRemote {
    async fn fetch(&self, filter: Option<&str>) -> SyncResult<Vec<Todo>> {
        let mut request = self.client.get(self.collection_url());
        if let Some(keyword) = filter {
            request = request.query(&[("filterKeyword", keyword)]);
        }
        debug!(?filter, "GET /todo");

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status {
                operation: "fetch",
                status: status.as_u16(),
            });
        }

        let records: Vec<RemoteTodo> = response.json().await?;
        Ok(records.into_iter().map(Todo::from).collect())
    }

    async fn create(&self, todo: &NewTodo) -> SyncResult<()> {
        debug!(text = %todo.todo, "POST /todo");
        let response = self.client.post(self.collection_url()).json(todo).send().await?;
        require_ok("create", &response)
    }

    async fn set_completed(&self, id: &str, completed: bool) -> SyncResult<()> {
        debug!(id, completed, "PUT /todo/{{id}}");
        let response = self
            .client
            .put(self.item_url(id))
            .json(&CompletedPatch { completed })
            .send()
            .await?;
        require_ok("set_completed", &response)
    }

    async fn delete(&self, id: &str) -> SyncResult<()> {
        debug!(id, "DELETE /todo/{{id}}");
        let response = self.client.delete(self.item_url(id)).send().await?;
        require_ok("delete", &response)
    }

    async fn clear_completed(&self) -> SyncResult<()> {
        debug!("DELETE /todo");
        let response = self.client.delete(self.collection_url()).send().await?;
        require_ok("clear_completed", &response)
    }
}
