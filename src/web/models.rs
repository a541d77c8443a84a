use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Represents an edge in the graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    /// Defaults to 1.0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Represents a complete graph for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    #[serde(default)]
    pub directed: bool,
    /// Node labels; their order fixes the iteration order of results
    pub nodes: Vec<String>,
    #[serde(default)]
    pub links: Vec<WebEdge>,
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    pub graph_type: String,
    pub node_count: usize,
    #[serde(default = "default_edges_per_node")]
    pub edges_per_node: usize,
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub grid_dimensions: Option<(usize, usize)>,
}

fn default_edges_per_node() -> usize { 3 }

/// Parameters for an all-pairs run
#[derive(Debug, Default, Deserialize)]
pub struct AllPairsRequest {
    #[serde(default)]
    pub parallel: bool,
}

/// All-pairs result in presentation form, keyed by node label.
/// Infinite distances are `null`.
#[derive(Debug, Clone, Serialize)]
pub struct AllPairsResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub parallel: bool,
    pub execution_time_ms: f64,
    pub nodes: Vec<String>,
    pub distance: BTreeMap<String, BTreeMap<String, Option<f64>>>,
    pub next_node: BTreeMap<String, BTreeMap<String, Option<String>>>,
    pub shortest_paths: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    pub infinite_pairs: Vec<(String, String)>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing graph data and the latest result
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    pub last_result: Option<AllPairsResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: WebGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            last_result: None,
            created_at: Utc::now(),
        }
    }
}
