//! Workflow payload construction.
//!
//! Builds the content-pipeline workflow that the platform would receive on
//! deployment. Nothing here talks to the platform; the CLI exposes the
//! result through `flowprobe payload` so it can be inspected or handed to a
//! deployment step.

use flowprobe_types::workflow::{WorkflowNode, NodeType, Position, WorkflowDefinition};

pub const PIPELINE_NAME: &str = "MCP Enhanced Content Pipeline";
pub const PIPELINE_DESCRIPTION: &str = "Content processing with MCP enhancements";

pub const WEBHOOK_NODE: &str = "Content Webhook";
pub const ANALYSIS_NODE: &str = "MCP Analysis";

/// Function-node body, carried verbatim as an opaque string.
const ANALYSIS_CODE: &str = r#"
const data = $json.body || $json;
return {
  asset_id: data.id,
  content_type: data.content_type || 'single_image',
  owner: data.owner,
  mcp_processed: true,
  quality_score: Math.floor(Math.random() * 100),
  processed_at: new Date().toISOString()
};
"#;

/// Build the two-node content pipeline: a POST webhook trigger followed by
/// an analysis function node.
pub fn build_content_pipeline() -> WorkflowDefinition {
    WorkflowDefinition {
        name: PIPELINE_NAME.to_string(),
        description: PIPELINE_DESCRIPTION.to_string(),
        nodes: vec![
            WorkflowNode::new(WEBHOOK_NODE, NodeType::Webhook, Position(240, 300))
                .with_param("httpMethod", "POST")
                .with_param("path", "content-pipeline"),
            WorkflowNode::new(ANALYSIS_NODE, NodeType::Function, Position(460, 300))
                .with_param("code", ANALYSIS_CODE),
        ],
    }
}
