//! Middleware that keeps the page title in sync with document-head actions.

use calypso_site::Site;
use tracing::{debug, info};

use crate::actions::HeadAction;
use crate::config::HeadConfig;
use crate::sink::TitleSink;
use crate::state::StateReader;
use crate::store::Middleware;
use crate::title::format_title;

/// Recomposes the title on title, unread-count, and site-selection actions.
///
/// | Action | Title | Unread count | Site |
/// |--------|-------|--------------|------|
/// | `TitleSet` | action | state | selected site, in site-specific groups only |
/// | `UnreadCountSet` | state | action | selected site, in site-specific groups only |
/// | `SelectedSiteSet` | state | state | site with the action's id |
///
/// The sink is written only when the composed title differs from what it
/// already holds. Other actions are ignored.
pub struct DocumentTitleMiddleware<S: TitleSink> {
    sink: S,
    config: HeadConfig,
}

impl<S: TitleSink> DocumentTitleMiddleware<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, HeadConfig::default())
    }

    pub fn with_config(sink: S, config: HeadConfig) -> Self {
        Self { sink, config }
    }

    pub fn config(&self) -> &HeadConfig {
        &self.config
    }

    /// The selected site, if the active group shows it in the title.
    fn group_site<'a>(&self, state: &'a dyn StateReader) -> Option<&'a Site> {
        if self.config.is_site_specific(state.group_name()) {
            state.selected_site()
        } else {
            None
        }
    }

    /// Title for `action` against `state`, or `None` if the action does not
    /// affect the title.
    pub fn compose(&self, state: &dyn StateReader, action: &HeadAction) -> Option<String> {
        let product = self.config.product_name.as_str();
        let title = match action {
            HeadAction::TitleSet { title } => format_title(
                title,
                state.unread_count(),
                self.group_site(state),
                product,
            ),
            HeadAction::UnreadCountSet { count } => format_title(
                state.title(),
                Some(*count),
                self.group_site(state),
                product,
            ),
            HeadAction::SelectedSiteSet { site_id } => format_title(
                state.title(),
                state.unread_count(),
                site_id.and_then(|id| state.site(id)),
                product,
            ),
            HeadAction::GroupSet { .. } | HeadAction::SitesReceived { .. } => return None,
        };
        Some(title)
    }

    fn apply(&self, title: &str) {
        if self.sink.get() == title {
            debug!(title, "title unchanged, skipping write");
            return;
        }
        info!(title, "document title updated");
        self.sink.set(title);
    }
}

impl<S: TitleSink> Middleware for DocumentTitleMiddleware<S> {
    fn on_action(&self, state: &dyn StateReader, action: &HeadAction) {
        if let Some(title) = self.compose(state, action) {
            self.apply(&title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemoryTitleSink;
    use crate::state::HeadState;

    fn foo_site() -> Site {
        Site {
            id: Some(1),
            name: Some("Foo".into()),
            ..Default::default()
        }
    }

    fn sites_state() -> HeadState {
        HeadState {
            title: "Reader".into(),
            unread_count: Some(3),
            selected_site_id: Some(1),
            group_name: Some("sites".into()),
            sites: vec![foo_site()],
        }
    }

    #[test]
    fn title_set_in_site_group_appends_site() {
        let sink = MemoryTitleSink::new();
        let middleware = DocumentTitleMiddleware::new(sink.clone());
        middleware.on_action(&sites_state(), &HeadAction::title_set("Reader"));
        assert_eq!(sink.get(), "(3) Reader \u{2039} Foo \u{2014} WordPress.com");
    }

    #[test]
    fn title_set_outside_site_group_omits_site() {
        let sink = MemoryTitleSink::new();
        let middleware = DocumentTitleMiddleware::new(sink.clone());
        let state = HeadState {
            group_name: Some("reader".into()),
            ..sites_state()
        };
        middleware.on_action(&state, &HeadAction::title_set("Discover"));
        assert_eq!(sink.get(), "(3) Discover \u{2014} WordPress.com");
    }

    #[test]
    fn unread_count_uses_action_count_and_state_title() {
        let sink = MemoryTitleSink::new();
        let middleware = DocumentTitleMiddleware::new(sink.clone());
        middleware.on_action(&sites_state(), &HeadAction::unread_count_set(0));
        assert_eq!(sink.get(), "Reader \u{2039} Foo \u{2014} WordPress.com");
    }

    #[test]
    fn selected_site_looked_up_by_action_id_regardless_of_group() {
        let sink = MemoryTitleSink::new();
        let middleware = DocumentTitleMiddleware::new(sink.clone());
        let state = HeadState {
            group_name: Some("reader".into()),
            selected_site_id: None,
            sites: vec![
                foo_site(),
                Site {
                    id: Some(2),
                    domain: Some("bar.blog".into()),
                    ..Default::default()
                },
            ],
            ..sites_state()
        };
        middleware.on_action(&state, &HeadAction::selected_site_set(2));
        assert_eq!(sink.get(), "(3) Reader \u{2039} bar.blog \u{2014} WordPress.com");

        middleware.on_action(&state, &HeadAction::SelectedSiteSet { site_id: None });
        assert_eq!(sink.get(), "(3) Reader \u{2014} WordPress.com");
    }

    #[test]
    fn empty_state_yields_product_name() {
        let sink = MemoryTitleSink::new();
        let middleware = DocumentTitleMiddleware::new(sink.clone());
        middleware.on_action(&HeadState::default(), &HeadAction::title_set(""));
        assert_eq!(sink.get(), "WordPress.com");
    }

    #[test]
    fn identical_title_written_once() {
        let sink = MemoryTitleSink::new();
        let middleware = DocumentTitleMiddleware::new(sink.clone());
        let state = sites_state();
        middleware.on_action(&state, &HeadAction::title_set("Reader"));
        middleware.on_action(&state, &HeadAction::title_set("Reader"));
        assert_eq!(sink.writes(), 1);
    }

    #[test]
    fn matching_initial_title_is_not_rewritten() {
        let sink = MemoryTitleSink::with_title("WordPress.com");
        let middleware = DocumentTitleMiddleware::new(sink.clone());
        middleware.on_action(&HeadState::default(), &HeadAction::title_set(""));
        assert_eq!(sink.writes(), 0);
    }

    #[test]
    fn unrelated_actions_ignored() {
        let sink = MemoryTitleSink::new();
        let middleware = DocumentTitleMiddleware::new(sink.clone());
        middleware.on_action(&sites_state(), &HeadAction::group_set("me"));
        middleware.on_action(&sites_state(), &HeadAction::SitesReceived { sites: vec![] });
        assert_eq!(sink.writes(), 0);
    }

    #[test]
    fn custom_product_name() {
        let sink = MemoryTitleSink::new();
        let config = HeadConfig {
            product_name: "Calypso".into(),
            ..Default::default()
        };
        let middleware = DocumentTitleMiddleware::with_config(sink.clone(), config);
        middleware.on_action(&HeadState::default(), &HeadAction::title_set("Me"));
        assert_eq!(sink.get(), "Me \u{2014} Calypso");
    }
}
