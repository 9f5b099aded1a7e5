//! Workflow payload types.
//!
//! A `WorkflowDefinition` mirrors the JSON shape the automation platform
//! accepts for workflow creation: a name, a description and an ordered list
//! of nodes. The types are purely descriptive; nothing here validates or
//! transmits them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Workflow Definition
// ---------------------------------------------------------------------------

/// A named, ordered pipeline of nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    /// Human-readable workflow name.
    pub name: String,
    /// Longer description shown in the platform UI.
    pub description: String,
    /// Nodes in declaration order.
    pub nodes: Vec<WorkflowNode>,
}

impl WorkflowDefinition {
    /// Look up a node by its display name.
    pub fn node(&self, name: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A single step descriptor within a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Display name, unique within the workflow by convention.
    pub name: String,
    /// The kind of node.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Free-form parameters (HTTP method, path, inline code, ...).
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,
    /// Canvas position.
    pub position: Position,
}

impl WorkflowNode {
    pub fn new(name: impl Into<String>, node_type: NodeType, position: Position) -> Self {
        Self {
            name: name.into(),
            node_type,
            parameters: BTreeMap::new(),
            position,
        }
    }

    /// Add a parameter, builder style.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

/// Node type tag as understood by the automation platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    Webhook,
    Function,
    HttpRequest,
    Code,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Webhook => write!(f, "webhook"),
            NodeType::Function => write!(f, "function"),
            NodeType::HttpRequest => write!(f, "httpRequest"),
            NodeType::Code => write!(f, "code"),
        }
    }
}

/// Canvas position, serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position(pub i32, pub i32);

impl Position {
    pub fn x(&self) -> i32 {
        self.0
    }

    pub fn y(&self) -> i32 {
        self.1
    }
}
