//! Capability through which the tracker finds its collaborators.
//!
//! Both collaborators are optional: analytics scripts load late (or never,
//! outside production), so a port is asked again on every emission instead
//! of once at construction.

use std::rc::Rc;

use super::config::PageConfig;
use super::context::PageContext;
use super::sink::{AnalyticsSink, LogSink};

pub trait AnalyticsPort {
    /// The collector, if one is loaded and ready.
    fn sink(&self) -> Option<Rc<dyn AnalyticsSink>>;

    /// Descriptor of the page currently displayed, if known.
    fn page_context(&self) -> Option<PageContext>;
}

/// Port with fixed, explicitly supplied collaborators.
#[derive(Clone, Default)]
pub struct StaticPort {
    sink: Option<Rc<dyn AnalyticsSink>>,
    context: Option<PageContext>,
}

impl StaticPort {
    pub fn new(sink: Option<Rc<dyn AnalyticsSink>>, context: Option<PageContext>) -> Self {
        Self { sink, context }
    }

    /// Port with neither sink nor context; every emission is dropped.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Desktop port: events go to the log, context comes from config.
    pub fn local(page: &PageConfig) -> Self {
        let context = PageContext::for_product(
            &page.product,
            &page.analytics_category,
            page.url.clone(),
            page.path.clone(),
        );
        Self::new(Some(Rc::new(LogSink)), Some(context))
    }
}

impl AnalyticsPort for StaticPort {
    fn sink(&self) -> Option<Rc<dyn AnalyticsSink>> {
        self.sink.clone()
    }

    fn page_context(&self) -> Option<PageContext> {
        self.context.clone()
    }
}

impl std::fmt::Debug for StaticPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticPort")
            .field("sink", &self.sink.is_some())
            .field("context", &self.context)
            .finish()
    }
}
