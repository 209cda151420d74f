use serde::de::DeserializeOwned;
use serde::Serialize;

/// A resource kind exposed by the Paperless-ngx REST API.
///
/// Each kind lives under `api/<SEGMENT>/` with items at `api/<SEGMENT>/<id>/`.
/// `Request` is the partial record sent as the body of create and update
/// calls.
pub trait Resource: DeserializeOwned + Send + 'static {
    type Request: Serialize + Send + Sync;

    /// Path segment below `api/`, e.g. `"documents"`
    const SEGMENT: &'static str;

    /// Relative path of the collection, e.g. `api/tags/`
    fn collection_path() -> String {
        format!("api/{}/", Self::SEGMENT)
    }

    /// Relative path of a single item, e.g. `api/tags/3/`
    fn item_path(id: u64) -> String {
        format!("api/{}/{}/", Self::SEGMENT, id)
    }
}
