use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{debug, warn};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::algorithm::{AllPairsAlgorithm, AllPairsResult};
use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::graph::generators::{generate_barabasi_albert, generate_grid, generate_random, GeneratedGraph};
use crate::graph::{Direction, Graph, MutableGraph, WeightedGraph};
use crate::web::models::*;

/// Upper bound on generated graph size; the computation is cubic in it
pub const MAX_GENERATED_NODES: usize = 2_000;

/// Graph type the web layer computes on
pub type LabeledGraph = WeightedGraph<String, OrderedFloat<f64>>;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
    pub session_timeout: chrono::Duration,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_limits(1000, 60)
    }

    pub fn with_limits(max_sessions: usize, session_timeout_minutes: u64) -> Self {
        let minutes = i64::try_from(session_timeout_minutes).unwrap_or(i64::MAX / 60_000);
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
            session_timeout: chrono::Duration::minutes(minutes),
        }
    }

    fn lock_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_store_poisoned",
                "Session store is unavailable",
            )
        })
    }

    /// Evicts expired sessions, then stores a new one if there is room
    fn store_session(&self, graph: WebGraph) -> Result<Session, ApiError> {
        let mut sessions = self.lock_sessions()?;

        if let Some(cutoff) = Utc::now().checked_sub_signed(self.session_timeout) {
            sessions.retain(|_, session| session.created_at >= cutoff);
        }

        if sessions.len() >= self.max_sessions {
            warn!("Rejecting new session: {} sessions active", sessions.len());
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} sessions may be active", self.max_sessions),
            ));
        }

        let session = Session::new(graph);
        sessions.insert(session.id, session.clone());
        debug!("Created session {}", session.id);
        Ok(session)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn api_error(status: StatusCode, error: &str, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        details: None,
    }))
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found")
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/all-pairs/:session_id", post(run_all_pairs))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Store a submitted graph in a new session
pub async fn create_graph(
    State(state): State<AppState>,
    Json(graph): Json<WebGraph>,
) -> Result<Json<Session>, ApiError> {
    if let Err(message) = convert_web_graph_to_rust(&graph) {
        warn!("Rejected submitted graph: {}", message);
        return Err(api_error(StatusCode::BAD_REQUEST, "invalid_graph", message));
    }

    Ok(Json(state.store_session(graph)?))
}

/// Generate a new graph
///
/// `edges_per_node` is bounded by `node_count` for random and scale-free graphs.
/// The default grid is the largest square that fits in `node_count`.
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<Json<Session>, ApiError> {
    if request.node_count > MAX_GENERATED_NODES {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "graph_too_large",
            format!("node_count must be at most {}", MAX_GENERATED_NODES),
        ));
    }

    let grid = match request.graph_type.as_str() {
        "random" | "scale-free" => {
            if request.edges_per_node > request.node_count {
                return Err(api_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_parameters",
                    format!(
                        "edges_per_node ({}) must be at most node_count ({})",
                        request.edges_per_node, request.node_count
                    ),
                ));
            }
            None
        }
        "grid" => {
            let (width, height) = request.grid_dimensions.unwrap_or_else(|| {
                let side = (request.node_count as f64).sqrt().floor() as usize;
                (side, side)
            });
            match width.checked_mul(height) {
                Some(size) if size <= MAX_GENERATED_NODES => Some((width, height)),
                _ => {
                    return Err(api_error(
                        StatusCode::BAD_REQUEST,
                        "graph_too_large",
                        format!("grid must have at most {} nodes", MAX_GENERATED_NODES),
                    ));
                }
            }
        }
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_graph_type",
                format!("Unknown graph type: {}", request.graph_type),
            ));
        }
    };

    let direction = if request.directed { Direction::Directed } else { Direction::Undirected };

    let generated = tokio::task::spawn_blocking(move || {
        let mut rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        match grid {
            Some((width, height)) => generate_grid(width, height, direction),
            None if request.graph_type == "scale-free" => {
                generate_barabasi_albert(&mut rng, request.node_count, request.edges_per_node, direction)
            }
            None => Ok(generate_random(
                &mut rng,
                request.node_count,
                request.edges_per_node as f64,
                direction,
            )),
        }
    })
    .await
    .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, "generation_task_failed", e.to_string()))?;

    let rust_graph =
        generated.map_err(|e| api_error(StatusCode::BAD_REQUEST, "invalid_parameters", e.to_string()))?;

    Ok(Json(state.store_session(convert_graph_to_web(&rust_graph))?))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = state.lock_sessions()?;

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.graph.clone())),
        None => Err(session_not_found()),
    }
}

/// Run the all-pairs computation on a session's graph
pub async fn run_all_pairs(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AllPairsRequest>,
) -> Result<Json<AllPairsResponse>, ApiError> {
    let graph = {
        let sessions = state.lock_sessions()?;
        match sessions.get(&session_id) {
            Some(session) => session.graph.clone(),
            None => return Err(session_not_found()),
        }
    };

    let rust_graph = convert_web_graph_to_rust(&graph)
        .map_err(|message| api_error(StatusCode::INTERNAL_SERVER_ERROR, "graph_conversion_failed", message))?;

    // cubic work: keep it off the async workers
    let algorithm = FloydWarshall::new().with_parallel(request.parallel);
    let outcome = tokio::task::spawn_blocking(move || {
        let start_time = Instant::now();
        algorithm
            .compute_all_pairs(&rust_graph)
            .map(|result| (result, start_time.elapsed()))
    })
    .await
    .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, "algorithm_task_failed", e.to_string()))?;

    let (result, execution_time) = outcome.map_err(|e| {
        warn!("All-pairs computation failed for session {}: {}", session_id, e);
        api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "algorithm_execution_failed",
            format!("Algorithm execution failed: {}", e),
        )
    })?;

    let response = build_response(&result, request.parallel, execution_time);

    {
        let mut sessions = state.lock_sessions()?;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_result = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = state.lock_sessions()?;
    let session_ids: Vec<Uuid> = sessions.keys().cloned().collect();
    Ok(Json(session_ids))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = state.lock_sessions()?;

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.clone())),
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

/// Converts a generated graph to web form; undirected edges are listed once
pub fn convert_graph_to_web(graph: &GeneratedGraph) -> WebGraph {
    let nodes = graph.nodes().iter().map(|node| node.to_string()).collect();

    let mut links = Vec::new();
    for u in 0..graph.vertex_count() {
        for (v, weight) in graph.outgoing_edges(u) {
            if graph.is_directed() || u <= v {
                links.push(WebEdge {
                    source: graph.nodes()[u].to_string(),
                    target: graph.nodes()[v].to_string(),
                    weight: Some(weight.into_inner()),
                });
            }
        }
    }

    WebGraph {
        directed: graph.is_directed(),
        nodes,
        links,
    }
}

/// Builds the computation graph; every edge endpoint must be a listed node
pub fn convert_web_graph_to_rust(web_graph: &WebGraph) -> Result<LabeledGraph, String> {
    let direction = if web_graph.directed { Direction::Directed } else { Direction::Undirected };
    let mut graph = WeightedGraph::with_capacity(direction, web_graph.nodes.len());

    let mut seen = HashSet::with_capacity(web_graph.nodes.len());
    for node in &web_graph.nodes {
        if !seen.insert(node.as_str()) {
            return Err(format!("Duplicate node: {}", node));
        }
        graph.add_node(node.clone());
    }

    for edge in &web_graph.links {
        if !seen.contains(edge.source.as_str()) || !seen.contains(edge.target.as_str()) {
            return Err(format!("Edge references invalid node: {} -> {}", edge.source, edge.target));
        }
        let weight = edge.weight.unwrap_or(1.0);
        if !weight.is_finite() {
            return Err(format!("Edge {} -> {} has non-finite weight", edge.source, edge.target));
        }
        graph.add_edge(edge.source.clone(), edge.target.clone(), OrderedFloat(weight));
    }

    Ok(graph)
}

/// Renders a result keyed by node label; infinite distances become `None`
pub fn build_response(
    result: &AllPairsResult<String, OrderedFloat<f64>>,
    parallel: bool,
    execution_time: Duration,
) -> AllPairsResponse {
    let nodes = result.nodes().to_vec();

    let mut distance = BTreeMap::new();
    let mut next_node = BTreeMap::new();
    let mut shortest_paths = BTreeMap::new();

    for (u, from) in nodes.iter().enumerate() {
        let mut distance_row = BTreeMap::new();
        let mut next_row = BTreeMap::new();
        let mut path_row = BTreeMap::new();

        for (v, to) in nodes.iter().enumerate() {
            let d = result.distance_matrix()[(u, v)].into_inner();
            distance_row.insert(to.clone(), if d.is_infinite() { None } else { Some(d) });
            next_row.insert(to.clone(), result.next_node_matrix()[(u, v)].map(|hop| nodes[hop].clone()));
            path_row.insert(
                to.clone(),
                result.path_matrix()[(u, v)].iter().map(|&x| nodes[x].clone()).collect(),
            );
        }

        distance.insert(from.clone(), distance_row);
        next_node.insert(from.clone(), next_row);
        shortest_paths.insert(from.clone(), path_row);
    }

    AllPairsResponse {
        execution_id: Uuid::new_v4(),
        algorithm: "floyd-warshall".to_string(),
        parallel,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        nodes,
        distance,
        next_node,
        shortest_paths,
        infinite_pairs: result
            .infinite_pairs()
            .map(|(u, v)| (u.clone(), v.clone()))
            .collect(),
    }
}
