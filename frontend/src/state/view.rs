//! Top-level view and feature tab selection.
//!
//! Navigation that targets the feature section from the registration view
//! happens in two phases: the first transition only switches back to home and
//! parks the requested tab in `pending_tab`. Once home has rendered, the app
//! calls [`ViewState::complete_pending`], which applies the tab and asks for
//! the scroll. The controller itself never touches the DOM; scrolling is
//! requested through [`ScrollRequest`] and performed by whoever renders.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Registration,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeatureTab {
    #[default]
    Modules,
    Security,
}

/// In-page scroll targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Top,
    SystemModules,
}

impl Anchor {
    /// Element id for anchors that point at an element.
    pub fn element_id(self) -> Option<&'static str> {
        match self {
            Anchor::Top => None,
            Anchor::SystemModules => Some("system-modules"),
        }
    }
}

/// A scroll the renderer still has to perform. `seq` grows with every request
/// so two identical requests in a row are still told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub seq: u64,
    pub anchor: Anchor,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    view: View,
    tab: FeatureTab,
    pending_tab: Option<FeatureTab>,
    scroll: Option<ScrollRequest>,
}

impl ViewState {
    pub fn view(&self) -> View {
        self.view
    }

    pub fn tab(&self) -> FeatureTab {
        self.tab
    }

    pub fn pending_tab(&self) -> Option<FeatureTab> {
        self.pending_tab
    }

    pub fn scroll_request(&self) -> Option<ScrollRequest> {
        self.scroll
    }

    fn request_scroll(&mut self, anchor: Anchor) {
        let seq = self.scroll.map_or(1, |s| s.seq + 1);
        self.scroll = Some(ScrollRequest { seq, anchor });
    }

    /// Back to home with the tab untouched, scrolled to the top.
    pub fn go_home(&mut self) {
        self.view = View::Home;
        self.pending_tab = None;
        self.request_scroll(Anchor::Top);
    }

    pub fn go_to_tab(&mut self, tab: FeatureTab) {
        match self.view {
            View::Home => {
                self.tab = tab;
                self.pending_tab = None;
                self.request_scroll(Anchor::SystemModules);
            }
            View::Registration => {
                self.view = View::Home;
                self.pending_tab = Some(tab);
            }
        }
    }

    pub fn go_to_modules(&mut self) {
        self.go_to_tab(FeatureTab::Modules);
    }

    pub fn go_to_security(&mut self) {
        self.go_to_tab(FeatureTab::Security);
    }

    /// Second phase of [`go_to_tab`](Self::go_to_tab). A no-op when nothing
    /// is pending or the view has since moved away from home.
    pub fn complete_pending(&mut self) {
        if self.view != View::Home {
            return;
        }
        if let Some(tab) = self.pending_tab.take() {
            self.tab = tab;
            self.request_scroll(Anchor::SystemModules);
        }
    }

    pub fn open_registration(&mut self) {
        self.view = View::Registration;
        self.pending_tab = None;
        self.request_scroll(Anchor::Top);
    }

    /// Tab switch from the tab strip itself; no scrolling involved.
    pub fn select_tab(&mut self, tab: FeatureTab) {
        self.tab = tab;
        self.pending_tab = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAction {
    GoHome,
    GoToModules,
    GoToSecurity,
    CompletePending,
    OpenRegistration,
    SelectTab(FeatureTab),
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewAction::GoHome => next.go_home(),
            ViewAction::GoToModules => next.go_to_modules(),
            ViewAction::GoToSecurity => next.go_to_security(),
            ViewAction::CompletePending => next.complete_pending(),
            ViewAction::OpenRegistration => next.open_registration(),
            ViewAction::SelectTab(tab) => next.select_tab(tab),
        }
        if next == *self {
            return self;
        }
        log::debug!(
            "{:?}: {:?}/{:?} -> {:?}/{:?}",
            action,
            self.view,
            self.tab,
            next.view,
            next.tab
        );
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at_registration() -> ViewState {
        let mut state = ViewState::default();
        state.open_registration();
        state
    }

    #[test]
    fn starts_at_home_on_modules() {
        let state = ViewState::default();
        assert_eq!(state.view(), View::Home);
        assert_eq!(state.tab(), FeatureTab::Modules);
        assert_eq!(state.scroll_request(), None);
    }

    #[test]
    fn go_to_security_from_registration_is_two_phase() {
        let mut state = at_registration();
        state.go_to_security();
        assert_eq!(state.view(), View::Home);
        assert_eq!(state.tab(), FeatureTab::Modules);
        assert_eq!(state.pending_tab(), Some(FeatureTab::Security));

        let before = state.scroll_request();
        state.complete_pending();
        assert_eq!(state.tab(), FeatureTab::Security);
        assert_eq!(state.pending_tab(), None);
        let after = state.scroll_request().expect("scroll requested");
        assert_eq!(after.anchor, Anchor::SystemModules);
        assert_ne!(Some(after), before);
    }

    #[test]
    fn go_to_tab_at_home_applies_immediately() {
        let mut state = ViewState::default();
        state.go_to_security();
        assert_eq!(state.tab(), FeatureTab::Security);
        assert_eq!(state.pending_tab(), None);
        assert_eq!(
            state.scroll_request().map(|s| s.anchor),
            Some(Anchor::SystemModules)
        );
    }

    #[test]
    fn repeated_navigation_issues_distinct_scroll_requests() {
        let mut state = ViewState::default();
        state.go_to_modules();
        let first = state.scroll_request();
        state.go_to_modules();
        assert_ne!(state.scroll_request(), first);
    }

    #[test]
    fn go_home_keeps_tab_and_scrolls_to_top() {
        let mut state = ViewState::default();
        state.select_tab(FeatureTab::Security);
        state.open_registration();
        state.go_home();
        assert_eq!(state.view(), View::Home);
        assert_eq!(state.tab(), FeatureTab::Security);
        assert_eq!(state.scroll_request().map(|s| s.anchor), Some(Anchor::Top));
    }

    #[test]
    fn leaving_home_before_completion_drops_the_pending_tab() {
        let mut state = at_registration();
        state.go_to_security();
        state.open_registration();
        state.complete_pending();
        assert_eq!(state.view(), View::Registration);
        assert_eq!(state.tab(), FeatureTab::Modules);
        assert_eq!(state.pending_tab(), None);
    }

    #[test]
    fn later_navigation_overrides_the_parked_tab() {
        let mut state = at_registration();
        state.go_to_security();
        state.go_to_modules();
        state.complete_pending();
        assert_eq!(state.view(), View::Home);
        assert_eq!(state.tab(), FeatureTab::Modules);
        assert_eq!(state.pending_tab(), None);
    }

    #[test]
    fn tab_strip_choice_survives_the_settle_delay() {
        let mut state = at_registration();
        state.go_to_modules();
        state.select_tab(FeatureTab::Security);
        state.complete_pending();
        assert_eq!(state.tab(), FeatureTab::Security);
    }

    #[test]
    fn select_tab_does_not_scroll() {
        let mut state = ViewState::default();
        state.select_tab(FeatureTab::Security);
        assert_eq!(state.scroll_request(), None);
    }

    #[test]
    fn reducer_returns_same_rc_when_nothing_changes() {
        let state = Rc::new(ViewState::default());
        let next = state.clone().reduce(ViewAction::CompletePending);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
