use serde::{Deserialize, Serialize};

use crate::matching::MatchingAlgorithm;
use crate::resource::Resource;

/// Event that starts a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WorkflowTriggerType {
    #[default]
    Consumption = 1,
    DocumentAdded = 2,
    DocumentUpdated = 3,
    Scheduled = 4,
}

impl From<WorkflowTriggerType> for u8 {
    fn from(kind: WorkflowTriggerType) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for WorkflowTriggerType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Consumption),
            2 => Ok(Self::DocumentAdded),
            3 => Ok(Self::DocumentUpdated),
            4 => Ok(Self::Scheduled),
            other => Err(format!("unknown workflow trigger type {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WorkflowActionType {
    #[default]
    Assignment = 1,
    Removal = 2,
    Email = 3,
    Webhook = 4,
}

impl From<WorkflowActionType> for u8 {
    fn from(kind: WorkflowActionType) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for WorkflowActionType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Assignment),
            2 => Ok(Self::Removal),
            3 => Ok(Self::Email),
            4 => Ok(Self::Webhook),
            other => Err(format!("unknown workflow action type {}", other)),
        }
    }
}

/// Condition under which a workflow runs. The server lists these under
/// `triggers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>, // None for triggers not yet saved
    #[serde(rename = "type")]
    pub trigger_type: WorkflowTriggerType,
    pub sources: Vec<u8>, // Consume folder, API upload, mail fetch
    pub filter_filename: Option<String>,
    pub filter_path: Option<String>,
    pub filter_mailrule: Option<u64>,
    #[serde(rename = "match")]
    pub match_pattern: String,
    pub matching_algorithm: MatchingAlgorithm,
    pub is_insensitive: bool,
    pub filter_has_tags: Vec<u64>,
    pub filter_has_correspondent: Option<u64>,
    pub filter_has_document_type: Option<u64>,
}

/// Step executed when a workflow runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub action_type: WorkflowActionType,
    pub assign_title: Option<String>,
    pub assign_tags: Vec<u64>,
    pub assign_correspondent: Option<u64>,
    pub assign_document_type: Option<u64>,
    pub assign_storage_path: Option<u64>,
    pub assign_owner: Option<u64>,
    pub assign_view_users: Vec<u64>,
    pub assign_view_groups: Vec<u64>,
    pub assign_change_users: Vec<u64>,
    pub assign_change_groups: Vec<u64>,
    pub assign_custom_fields: Vec<u64>,
    pub remove_tags: Vec<u64>,
    pub remove_all_tags: bool,
    pub remove_correspondents: Vec<u64>,
    pub remove_all_correspondents: bool,
    pub remove_document_types: Vec<u64>,
    pub remove_all_document_types: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workflow {
    pub id: u64,
    pub name: String,
    pub order: i32,
    pub enabled: bool,
    pub triggers: Vec<WorkflowTrigger>,
    pub actions: Vec<WorkflowAction>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkflowRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Vec<WorkflowTrigger>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<WorkflowAction>>,
}

impl Resource for Workflow {
    type Request = WorkflowRequest;
    const SEGMENT: &'static str = "workflows";
}
