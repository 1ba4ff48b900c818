//! Span context helpers for the process and for individual requests.

use tracing::{Span, span::Entered};

use crate::init::build_sha;

/// Guard that keeps the application-level span entered for the lifetime of the process.
pub struct GlobalContextGuard {
    _guard: Entered<'static>,
}

impl GlobalContextGuard {
    /// Enter the application-level tracing span for the lifetime of the guard.
    #[must_use]
    pub fn new(component: impl Into<String>) -> Self {
        let component = component.into();
        let span: &'static Span = Box::leak(Box::new(tracing::info_span!(
            "app",
            component = %component,
            build_sha = %build_sha()
        )));
        let guard = span.enter();
        Self { _guard: guard }
    }
}

/// Record the request identifier and route on a request span.
///
/// The span must declare `request_id` and `route` fields.
pub fn set_request_context(span: &Span, request_id: &str, route: &str) {
    span.record("request_id", tracing::field::display(request_id));
    span.record("route", tracing::field::display(route));
}
