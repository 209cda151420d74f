use crate::{ClientError, Result};
use paperless_core::*;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, ClientBuilder, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Paperless-ngx REST API Client
///
/// Holds only the base URL and a configured HTTP client, so it can be cloned
/// and shared across tasks freely.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    client: HttpClient,
}

/// List endpoints answer either with a bare array or with the paginated
/// envelope. Only the first page is ever returned.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListResponse<R> {
    Bare(Vec<R>),
    Page { results: Vec<R> },
}

impl<R> ListResponse<R> {
    fn into_records(self) -> Vec<R> {
        match self {
            ListResponse::Bare(records) | ListResponse::Page { results: records } => records,
        }
    }
}

const NO_BODY: Option<&()> = None;

/// Status text as sent on the wire; falls back to the canonical phrase when
/// the response carried none (HTTP/2, or a phrase identical to the standard one)
fn reason_phrase(response: &Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Generates the named CRUD methods for one resource kind
macro_rules! resource_methods {
    ($kind:ty, $label:literal, $list:ident, $get:ident, $create:ident, $update:ident, $delete:ident) => {
        #[doc = concat!("List ", $label, " (`GET api/<collection>/`)")]
        pub async fn $list(&self) -> Result<Vec<$kind>> {
            self.list::<$kind>().await
        }

        #[doc = concat!("Get one of the ", $label, " by ID")]
        pub async fn $get(&self, id: u64) -> Result<$kind> {
            self.get::<$kind>(id).await
        }

        #[doc = concat!("Create one of the ", $label)]
        pub async fn $create(&self, request: &<$kind as Resource>::Request) -> Result<$kind> {
            self.create::<$kind>(request).await
        }

        #[doc = concat!("Partially update one of the ", $label)]
        pub async fn $update(
            &self,
            id: u64,
            request: &<$kind as Resource>::Request,
        ) -> Result<$kind> {
            self.update::<$kind>(id, request).await
        }

        #[doc = concat!("Delete one of the ", $label)]
        pub async fn $delete(&self, id: u64) -> Result<()> {
            self.delete::<$kind>(id).await
        }
    };
}

impl Client {
    /// Create a new client for the server at `base_url`, authenticating with
    /// an API token
    pub fn new(base_url: impl AsRef<str>, token: impl AsRef<str>) -> Result<Self> {
        Self::build(base_url.as_ref(), token.as_ref(), HttpClient::builder())
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let builder =
            HttpClient::builder().danger_accept_invalid_certs(config.insecure_skip_verify);
        Self::build(&config.base_url, &config.token, builder)
    }

    fn build(base_url: &str, token: &str, builder: ClientBuilder) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join drops the last path segment unless it ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut auth = HeaderValue::from_str(&format!("Token {}", token))?;
        auth.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, auth);
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = builder.default_headers(default_headers).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send one request and parse the whole success body as JSON into `T`.
    ///
    /// Every operation goes through here. `path` is relative to the base URL,
    /// e.g. `api/tags/3/`. Use `T = serde_json::Value` to receive the body
    /// untouched.
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, body).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    #[tracing::instrument(skip(self, body))]
    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        tracing::debug!("Sending request");
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received response");

        if !status.is_success() {
            let status_text = reason_phrase(&response);
            tracing::warn!(status = status.as_u16(), %status_text, "Request failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                status_text,
            });
        }

        Ok(response)
    }

    /// List every record of a resource kind returned in one response
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let page: ListResponse<R> = self
            .request(Method::GET, &R::collection_path(), NO_BODY)
            .await?;
        Ok(page.into_records())
    }

    pub async fn get<R: Resource>(&self, id: u64) -> Result<R> {
        self.request(Method::GET, &R::item_path(id), NO_BODY).await
    }

    /// Create a record; the server answers with the full record including
    /// its assigned ID
    pub async fn create<R: Resource>(&self, request: &R::Request) -> Result<R> {
        self.request(Method::POST, &R::collection_path(), Some(request))
            .await
    }

    /// PATCH the fields set in `request`, returning the updated record
    pub async fn update<R: Resource>(&self, id: u64, request: &R::Request) -> Result<R> {
        self.request(Method::PATCH, &R::item_path(id), Some(request))
            .await
    }

    pub async fn delete<R: Resource>(&self, id: u64) -> Result<()> {
        self.send(Method::DELETE, &R::item_path(id), NO_BODY).await?;
        Ok(())
    }

    resource_methods!(
        Document,
        "documents",
        list_documents,
        get_document,
        create_document,
        update_document,
        delete_document
    );

    resource_methods!(Tag, "tags", list_tags, get_tag, create_tag, update_tag, delete_tag);

    resource_methods!(
        Correspondent,
        "correspondents",
        list_correspondents,
        get_correspondent,
        create_correspondent,
        update_correspondent,
        delete_correspondent
    );

    resource_methods!(
        DocumentType,
        "document types",
        list_document_types,
        get_document_type,
        create_document_type,
        update_document_type,
        delete_document_type
    );

    resource_methods!(
        CustomField,
        "custom fields",
        list_custom_fields,
        get_custom_field,
        create_custom_field,
        update_custom_field,
        delete_custom_field
    );

    resource_methods!(User, "users", list_users, get_user, create_user, update_user, delete_user);

    resource_methods!(
        Group,
        "groups",
        list_groups,
        get_group,
        create_group,
        update_group,
        delete_group
    );

    resource_methods!(
        ShareLink,
        "share links",
        list_share_links,
        get_share_link,
        create_share_link,
        update_share_link,
        delete_share_link
    );

    resource_methods!(
        StoragePath,
        "storage paths",
        list_storage_paths,
        get_storage_path,
        create_storage_path,
        update_storage_path,
        delete_storage_path
    );

    resource_methods!(
        Workflow,
        "workflows",
        list_workflows,
        get_workflow,
        create_workflow,
        update_workflow,
        delete_workflow
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = Client::new("http://localhost:8000/paperless", "t").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/paperless/");

        let url = client.base_url().join(&Tag::item_path(3)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/paperless/api/tags/3/");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Client::new("not a url", "t").unwrap_err();
        assert!(matches!(err, ClientError::Url(_)));
    }

    #[test]
    fn test_token_must_be_header_safe() {
        let err = Client::new("http://localhost:8000", "bad\ntoken").unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader(_)));
    }

    #[test]
    fn test_list_accepts_bare_array_and_page() {
        let bare: ListResponse<Tag> = serde_json::from_str(r#"[{"id": 1, "name": "a"}]"#).unwrap();
        assert_eq!(bare.into_records().len(), 1);

        let page: ListResponse<Tag> = serde_json::from_str(
            r#"{"count": 2, "next": "http://x/api/tags/?page=2", "previous": null,
                "results": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]}"#,
        )
        .unwrap();
        let tags = page.into_records();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1].name, "b");
    }
}
