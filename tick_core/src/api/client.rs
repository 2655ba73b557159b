use super::error::{self, Error};
use super::{categories, create, delete, login, todos, toggle};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

/// Client for the todo API
#[derive(Debug, Clone)]
pub struct Client {
    /// The server to connect to. Should only be the protocol and domain,
    /// e.g. `https://tick.your-domain.com`. In the browser this is the page's
    /// own origin.
    pub server: String,
}

impl Client {
    /// Construct a new client
    pub fn new(server: String) -> Self {
        Self { server }
    }

    /// List the user's todos.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn todos(&self, client: &reqwest::Client) -> error::Result<todos::Resp> {
        let url = self.url(todos::PATH)?;

        Self::handle_response(client.get(url)).await
    }

    /// List the user's categories.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn categories(&self, client: &reqwest::Client) -> error::Result<categories::Resp> {
        let url = self.url(categories::PATH)?;

        Self::handle_response(client.get(url)).await
    }

    /// Create a todo, getting back the ID the server assigned.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn create(
        &self,
        client: &reqwest::Client,
        req: &create::Req,
    ) -> error::Result<create::Resp> {
        let url = self.url(create::PATH)?;

        Self::handle_response(client.post(url).json(req)).await
    }

    /// Set a todo's done flag. Every other field is preserved server-side.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_status`.
    pub async fn toggle(&self, client: &reqwest::Client, id: i64, done: bool) -> error::Result<()> {
        let url = self.url(&toggle::path(id))?;

        Self::handle_status(client.patch(url).query(&[("done", done)])).await
    }

    /// Delete a todo.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_status`.
    pub async fn delete(&self, client: &reqwest::Client, id: i64) -> error::Result<()> {
        let url = self.url(&delete::path(id))?;

        Self::handle_status(client.delete(url)).await
    }

    /// Log into the server. Auth for later requests rides on the cookie the
    /// server sets in its response.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_status`.
    pub async fn login(&self, client: &reqwest::Client, req: &login::Req) -> error::Result<()> {
        let url = self.url(login::PATH)?;

        Self::handle_status(client.post(url).header(AUTHORIZATION, req.basic_auth())).await
    }

    /// Join a path onto the base server URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(Url::parse(&self.server)?.join(path)?)
    }

    /// Convert an HTTP response into a result, interpreting errors in a
    /// standard way.
    ///
    /// ## Errors
    ///
    /// - `Ok(..)` if the server returned a success (2xx)
    /// - `Error::Unauthorized` if the server returned a 401
    /// - `Error::Unexpected` for any other status
    async fn handle_response<T>(req: reqwest::RequestBuilder) -> error::Result<T>
    where
        T: DeserializeOwned,
    {
        let resp = req.send().await?;

        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else if status == StatusCode::UNAUTHORIZED {
            Err(Error::Unauthorized)
        } else {
            Err(Error::Unexpected(status))
        }
    }

    /// Like `handle_response`, for endpoints whose success body is empty (or
    /// that we don't care to read.)
    async fn handle_status(req: reqwest::RequestBuilder) -> error::Result<()> {
        let resp = req.send().await?;

        let status = resp.status();

        if status.is_success() {
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED {
            Err(Error::Unauthorized)
        } else {
            Err(Error::Unexpected(status))
        }
    }
}
