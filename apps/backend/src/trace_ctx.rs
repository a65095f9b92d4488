//! Task-local trace id for the request being served.
//!
//! `RequestTrace` opens the scope; anything running inside the handler
//! future (error rendering, db error mapping) can read the id back.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, or "unknown" outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trace_id_defaults_outside_scope() {
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn trace_id_visible_inside_scope_only() {
        let seen = with_trace_id("round-submit-1".to_string(), async { trace_id() }).await;
        assert_eq!(seen, "round-submit-1");
        assert_eq!(trace_id(), "unknown");
    }
}
