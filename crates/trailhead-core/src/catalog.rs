//! Read-only route catalog.
//!
//! Routes are static reference data bundled with the crate as JSON. The wizard
//! only ever reads from the catalog: the route step lists routes for the
//! chosen activity, and the submission gateway looks a route up by id to fill
//! in the derived event fields.

use std::path::Path;

use log::debug;

use crate::{
    error::{Result, TrailheadError},
    models::{Route, RouteFilter},
};

const BUNDLED_ROUTES: &str = include_str!("../assets/routes.json");

/// In-memory route catalog.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    routes: Vec<Route>,
}

impl RouteCatalog {
    /// Creates a catalog from the given routes.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Loads the catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_ROUTES)
    }

    /// Parses a catalog from a JSON array of routes.
    pub fn from_json(json: &str) -> Result<Self> {
        let routes: Vec<Route> = serde_json::from_str(json)?;
        debug!("Loaded route catalog with {} routes", routes.len());
        Ok(Self::new(routes))
    }

    /// Reads a catalog from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TrailheadError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Looks a route up by id.
    pub fn get(&self, id: u64) -> Option<&Route> {
        self.routes.iter().find(|route| route.id == id)
    }

    /// Looks a route up by id, failing with `RouteNotFound`.
    pub fn require(&self, id: u64) -> Result<&Route> {
        self.get(id).ok_or(TrailheadError::RouteNotFound { id })
    }

    /// Lists the routes matching `filter`, ordered by its sort criterion.
    pub fn list(&self, filter: &RouteFilter) -> Vec<Route> {
        let mut routes: Vec<Route> = self
            .routes
            .iter()
            .filter(|route| filter.matches(route))
            .cloned()
            .collect();
        routes.sort_by(|a, b| filter.compare(a, b));
        routes
    }

    /// Number of routes in the catalog.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the catalog holds no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
