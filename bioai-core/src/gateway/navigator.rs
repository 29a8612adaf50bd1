use crate::routes;

/// Client-side navigation as seen by the gateway.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;

    fn navigate(&self, path: &str);

    /// Whether `path` may be shown without a session. Routers with their own
    /// table override this.
    fn is_public_route(&self, path: &str) -> bool {
        routes::is_public_route(path)
    }
}
