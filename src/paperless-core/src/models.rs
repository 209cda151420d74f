use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::matching::MatchingAlgorithm;
use crate::resource::Resource;

/// Document represents a stored document and its metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub id: u64,
    pub title: String,
    pub content: String, // OCR text
    pub correspondent: Option<u64>,
    pub document_type: Option<u64>,
    pub storage_path: Option<u64>,
    pub tags: Vec<u64>,
    pub created: Option<String>, // Date or datetime depending on server version
    pub modified: Option<DateTime<FixedOffset>>,
    pub added: Option<DateTime<FixedOffset>>,
    pub archive_serial_number: Option<u64>,
    pub original_file_name: Option<String>,
    pub archived_file_name: Option<String>,
    pub owner: Option<u64>,
    pub permissions: Option<Permissions>,
    pub user_can_change: Option<bool>,
    pub is_shared_by_requester: Option<bool>,
    pub notes: Vec<Note>,
    pub custom_fields: Vec<CustomFieldValue>,
    pub page_count: Option<u32>,
    pub mime_type: Option<String>,
}

/// Note attached to a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub id: u64,
    pub note: String,
    pub created: Option<DateTime<FixedOffset>>,
    pub user: Option<NoteUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteUser {
    pub id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// Object-level permissions, returned with `full_perms` and accepted as
/// `set_permissions` on writes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    pub view: PermissionSet,
    pub change: PermissionSet,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionSet {
    pub users: Vec<u64>,
    pub groups: Vec<u64>,
}

/// Value of a custom field on a document. The shape of `value` depends on
/// the field's data type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomFieldValue {
    pub field: u64,
    pub value: serde_json::Value,
}

/// DocumentRequest is the partial record sent when creating or updating a
/// document. `Some(None)` on a nullable relation clears it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correspondent: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_serial_number: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_permissions: Option<Permissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomFieldValue>>,
}

impl Resource for Document {
    type Request = DocumentRequest;
    const SEGMENT: &'static str = "documents";
}

/// Tag applied to documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub color: Option<String>,
    pub text_color: Option<String>,
    #[serde(rename = "match")]
    pub match_pattern: String,
    pub matching_algorithm: MatchingAlgorithm,
    pub is_insensitive: bool,
    pub is_inbox_tag: bool,
    pub document_count: u64,
    pub owner: Option<u64>,
    pub user_can_change: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TagRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_algorithm: Option<MatchingAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_insensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_inbox_tag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_permissions: Option<Permissions>,
}

impl Resource for Tag {
    type Request = TagRequest;
    const SEGMENT: &'static str = "tags";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Correspondent {
    pub id: u64,
    pub slug: String,
    pub name: String,
    #[serde(rename = "match")]
    pub match_pattern: String,
    pub matching_algorithm: MatchingAlgorithm,
    pub is_insensitive: bool,
    pub document_count: u64,
    pub last_correspondence: Option<String>,
    pub owner: Option<u64>,
    pub user_can_change: Option<bool>,
}

/// Partial record shared by the simple matchable kinds
/// (correspondents and document types)
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchableRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_algorithm: Option<MatchingAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_insensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_permissions: Option<Permissions>,
}

pub type CorrespondentRequest = MatchableRequest;
pub type DocumentTypeRequest = MatchableRequest;

impl Resource for Correspondent {
    type Request = CorrespondentRequest;
    const SEGMENT: &'static str = "correspondents";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentType {
    pub id: u64,
    pub slug: String,
    pub name: String,
    #[serde(rename = "match")]
    pub match_pattern: String,
    pub matching_algorithm: MatchingAlgorithm,
    pub is_insensitive: bool,
    pub document_count: u64,
    pub owner: Option<u64>,
    pub user_can_change: Option<bool>,
}

impl Resource for DocumentType {
    type Request = DocumentTypeRequest;
    const SEGMENT: &'static str = "document_types";
}

/// Storage path template deciding where archived files are placed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoragePath {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub path: String,
    #[serde(rename = "match")]
    pub match_pattern: String,
    pub matching_algorithm: MatchingAlgorithm,
    pub is_insensitive: bool,
    pub document_count: u64,
    pub owner: Option<u64>,
    pub user_can_change: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StoragePathRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_algorithm: Option<MatchingAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_insensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Option<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_permissions: Option<Permissions>,
}

impl Resource for StoragePath {
    type Request = StoragePathRequest;
    const SEGMENT: &'static str = "storage_paths";
}

/// CustomFieldDataType defines how a custom field's value is interpreted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CustomFieldDataType {
    #[default]
    String,
    Url,
    Date,
    Boolean,
    Integer,
    Float,
    Monetary,
    #[serde(rename = "documentlink")]
    DocumentLink,
    Select,
    #[serde(rename = "longtext")]
    LongText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomField {
    pub id: u64,
    pub name: String,
    pub data_type: CustomFieldDataType,
    pub extra_data: serde_json::Value, // e.g. select options, default currency
    pub document_count: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomFieldRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<CustomFieldDataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<serde_json::Value>,
}

impl Resource for CustomField {
    type Request = CustomFieldRequest;
    const SEGMENT: &'static str = "custom_fields";
}

/// Which rendition of the document a share link serves
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShareLinkFileVersion {
    #[default]
    Archive,
    Original,
}

/// Public link to a single document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareLink {
    pub id: u64,
    pub created: Option<DateTime<FixedOffset>>,
    pub expiration: Option<DateTime<FixedOffset>>,
    pub slug: String,
    pub document: u64,
    pub file_version: ShareLinkFileVersion,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ShareLinkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<Option<DateTime<FixedOffset>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_version: Option<ShareLinkFileVersion>,
}

impl Resource for ShareLink {
    type Request = ShareLinkRequest;
    const SEGMENT: &'static str = "share_links";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_document_deserializes() {
        let doc: Document = serde_json::from_value(json!({"id": 5, "title": "Invoice"})).unwrap();

        assert_eq!(doc.id, 5);
        assert_eq!(doc.title, "Invoice");
        assert!(doc.tags.is_empty());
        assert_eq!(doc.correspondent, None);
    }

    #[test]
    fn test_full_document_deserializes() {
        let doc: Document = serde_json::from_value(json!({
            "id": 12,
            "correspondent": 3,
            "document_type": null,
            "storage_path": 1,
            "title": "Electricity bill",
            "content": "Total due: 42.00",
            "tags": [1, 4],
            "created": "2024-03-01",
            "modified": "2024-03-02T10:15:00.123456+01:00",
            "added": "2024-03-01T09:00:00Z",
            "archive_serial_number": 100,
            "original_file_name": "bill.pdf",
            "archived_file_name": "2024-03-01 bill.pdf",
            "owner": 2,
            "user_can_change": true,
            "is_shared_by_requester": false,
            "notes": [{
                "id": 1,
                "note": "paid",
                "created": "2024-03-05T08:00:00Z",
                "user": {"id": 2, "username": "alice", "first_name": "", "last_name": ""}
            }],
            "custom_fields": [{"field": 7, "value": "EUR42.00"}],
            "page_count": 2,
            "mime_type": "application/pdf"
        }))
        .unwrap();

        assert_eq!(doc.correspondent, Some(3));
        assert_eq!(doc.document_type, None);
        assert_eq!(doc.tags, vec![1, 4]);
        assert_eq!(doc.created.as_deref(), Some("2024-03-01"));
        assert!(doc.modified.is_some());
        assert_eq!(doc.notes[0].user.as_ref().unwrap().username, "alice");
        assert_eq!(doc.custom_fields[0].value, json!("EUR42.00"));
    }

    #[test]
    fn test_document_request_skips_unset_fields() {
        let req = DocumentRequest {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };

        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"title": "Renamed"}));
    }

    #[test]
    fn test_document_request_clears_nullable_relation() {
        let req = DocumentRequest {
            correspondent: Some(None),
            tags: Some(vec![]),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"correspondent": null, "tags": []})
        );
    }

    #[test]
    fn test_tag_match_field_is_renamed() {
        let tag: Tag = serde_json::from_value(json!({
            "id": 3,
            "slug": "inbox",
            "name": "Inbox",
            "match": "invoice",
            "matching_algorithm": 1,
            "is_inbox_tag": true
        }))
        .unwrap();
        assert_eq!(tag.match_pattern, "invoice");
        assert_eq!(tag.matching_algorithm, MatchingAlgorithm::Any);

        let req = TagRequest {
            match_pattern: Some("bill".to_string()),
            matching_algorithm: Some(MatchingAlgorithm::Literal),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"match": "bill", "matching_algorithm": 3})
        );
    }

    #[test]
    fn test_custom_field_data_type_names() {
        let field: CustomField = serde_json::from_value(json!({
            "id": 1,
            "name": "Related",
            "data_type": "documentlink"
        }))
        .unwrap();
        assert_eq!(field.data_type, CustomFieldDataType::DocumentLink);
        assert_eq!(
            serde_json::to_value(CustomFieldDataType::LongText).unwrap(),
            json!("longtext")
        );
    }

    #[test]
    fn test_share_link_defaults_to_archive() {
        let link: ShareLink = serde_json::from_value(json!({
            "id": 9,
            "slug": "abc123",
            "document": 5,
            "expiration": null
        }))
        .unwrap();
        assert_eq!(link.file_version, ShareLinkFileVersion::Archive);
        assert_eq!(link.expiration, None);
    }
}
