//! View router — single source of truth for what is currently shown,
//! synchronized bidirectionally with the fragment encoding and the
//! history stack.
//!
//! Transitions are a pure function `(state, event, repository) ->
//! (new_state, effects)`. History pushes/replaces are applied by the
//! `Router` itself; the remaining effects (content loads, scroll reset)
//! are returned for the app loop to execute.

pub mod fragment;
pub mod history;

use tracing::debug;

use crate::content::Portfolio;
use crate::model::{ProjectId, View, DEFAULT_VIEW};

pub use fragment::{format_fragment, parse_fragment};
pub use history::{HistoryEntry, HistoryPayload, HistoryStack};

// ---------------------------------------------------------------------------
// NavigationState
// ---------------------------------------------------------------------------

/// The only mutable state in the system. `selected_project` is `Some` iff
/// `view == ProjectDetail`, and always names a member of the content set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub view: View,
    pub selected_project: Option<ProjectId>,
}

impl NavigationState {
    pub fn view(view: View) -> Self {
        Self {
            view,
            selected_project: None,
        }
    }

    pub fn detail(id: ProjectId) -> Self {
        Self {
            view: View::ProjectDetail,
            selected_project: Some(id),
        }
    }

    /// The history payload equivalent of this state.
    pub fn to_payload(&self) -> HistoryPayload {
        HistoryPayload {
            view: self.view,
            project_id: self.selected_project.clone(),
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::view(DEFAULT_VIEW)
    }
}

// ---------------------------------------------------------------------------
// NavEvent / Effect
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// User picked a top-level view from the nav bar.
    NavigateTo(View),
    /// User selected a project from the registry.
    SelectProject(ProjectId),
    /// Back/forward restored a history entry (or ran off the end of the
    /// stack, in which case the payload is `None`).
    HistoryRestored(Option<HistoryPayload>),
    /// Cold start: resolve the initial fragment.
    Initialize(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PushHistory(HistoryPayload),
    ReplaceHistory(HistoryPayload),
    /// Kick off an asynchronous detail load for this project.
    LoadDetail(ProjectId),
    /// Reset the detail viewport to the top.
    ScrollToTop,
}

// ---------------------------------------------------------------------------
// transition — the pure state machine
// ---------------------------------------------------------------------------

/// Map an event onto a new state plus a side-channel effect list. Pure:
/// no history, no IO, no scrolling happens here.
pub fn transition(
    state: &NavigationState,
    event: &NavEvent,
    portfolio: &Portfolio,
) -> (NavigationState, Vec<Effect>) {
    match event {
        NavEvent::NavigateTo(View::ProjectDetail) => {
            // Detail is entered through SelectProject; a bare NavigateTo
            // has no id to show.
            debug!("ignoring NavigateTo(ProjectDetail)");
            (state.clone(), Vec::new())
        }

        NavEvent::NavigateTo(view) => {
            let next = NavigationState::view(*view);
            let effects = vec![Effect::PushHistory(next.to_payload())];
            (next, effects)
        }

        NavEvent::SelectProject(id) => {
            if portfolio.project(id).is_none() {
                debug!(project_id = id.as_str(), "selected project not in content set");
                return (NavigationState::default(), Vec::new());
            }
            let next = NavigationState::detail(id.clone());
            let effects = vec![
                Effect::PushHistory(next.to_payload()),
                Effect::ScrollToTop,
                Effect::LoadDetail(id.clone()),
            ];
            (next, effects)
        }

        NavEvent::HistoryRestored(payload) => restore(payload.as_ref(), portfolio),

        NavEvent::Initialize(fragment) => {
            let (next, mut effects) = restore(parse_fragment(fragment).as_ref(), portfolio);
            // Replace, not push: the back button must not re-show the
            // deep link as a separate entry.
            effects.insert(0, Effect::ReplaceHistory(next.to_payload()));
            (next, effects)
        }
    }
}

/// Resolve a history payload (or its absence) into a state. Unknown ids
/// and unrecognized payloads degrade to the default view.
fn restore(
    payload: Option<&HistoryPayload>,
    portfolio: &Portfolio,
) -> (NavigationState, Vec<Effect>) {
    match payload {
        Some(HistoryPayload {
            view: View::ProjectDetail,
            project_id: Some(id),
        }) => {
            if portfolio.project(id).is_some() {
                let next = NavigationState::detail(id.clone());
                let effects = vec![Effect::LoadDetail(id.clone())];
                (next, effects)
            } else {
                debug!(project_id = id.as_str(), "stale project id, falling back");
                (NavigationState::default(), Vec::new())
            }
        }
        // A detail payload without an id is malformed.
        Some(HistoryPayload {
            view: View::ProjectDetail,
            project_id: None,
        }) => (NavigationState::default(), Vec::new()),
        Some(payload) => (NavigationState::view(payload.view), Vec::new()),
        None => (NavigationState::default(), Vec::new()),
    }
}

// ---------------------------------------------------------------------------
// Router — state + history, effects handed to the app
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Router {
    state: NavigationState,
    history: HistoryStack,
}

impl Router {
    pub fn new(initial_fragment: impl Into<String>) -> Self {
        Self {
            state: NavigationState::default(),
            history: HistoryStack::new(initial_fragment),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    pub fn selected_project(&self) -> Option<&ProjectId> {
        self.state.selected_project.as_ref()
    }

    /// The fragment currently encoded in the history entry — the TUI
    /// counterpart of the visible URL.
    pub fn current_fragment(&self) -> &str {
        &self.history.current().fragment
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// Run once at startup with the fragment the process was launched
    /// with. Replaces (does not push) the initial history entry.
    pub fn initialize_from_fragment(
        &mut self,
        fragment: &str,
        portfolio: &Portfolio,
    ) -> Vec<Effect> {
        self.dispatch(NavEvent::Initialize(fragment.to_string()), portfolio)
    }

    /// Valid for any view other than ProjectDetail (which is ignored).
    pub fn navigate_to(&mut self, view: View, portfolio: &Portfolio) -> Vec<Effect> {
        self.dispatch(NavEvent::NavigateTo(view), portfolio)
    }

    pub fn select_project(&mut self, id: ProjectId, portfolio: &Portfolio) -> Vec<Effect> {
        self.dispatch(NavEvent::SelectProject(id), portfolio)
    }

    /// Back/forward read the restored entry's structured payload, which is
    /// authoritative — the fragment string is not re-parsed. Returns `None`
    /// when the stack edge was hit and nothing changed.
    pub fn history_back(&mut self, portfolio: &Portfolio) -> Option<Vec<Effect>> {
        let payload = self.history.back()?.payload.clone();
        Some(self.dispatch(NavEvent::HistoryRestored(payload), portfolio))
    }

    pub fn history_forward(&mut self, portfolio: &Portfolio) -> Option<Vec<Effect>> {
        let payload = self.history.forward()?.payload.clone();
        Some(self.dispatch(NavEvent::HistoryRestored(payload), portfolio))
    }

    /// Apply the pure transition, absorb history effects into the stack,
    /// and return the rest for the app to execute.
    fn dispatch(&mut self, event: NavEvent, portfolio: &Portfolio) -> Vec<Effect> {
        let (next, effects) = transition(&self.state, &event, portfolio);
        self.state = next;

        let mut remaining = Vec::new();
        for effect in effects {
            match effect {
                Effect::PushHistory(payload) => {
                    let fragment = format_fragment(&payload);
                    self.history.push(payload, fragment);
                }
                Effect::ReplaceHistory(payload) => {
                    let fragment = format_fragment(&payload);
                    self.history.replace(payload, fragment);
                }
                other => remaining.push(other),
            }
        }
        remaining
    }

    #[cfg(test)]
    pub(crate) fn history(&self) -> &HistoryStack {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;
    use crate::model::Project;

    fn test_portfolio() -> Portfolio {
        let project: Project = serde_json::from_str(
            r#"{"id":"alpha","title":"Alpha","category":"Firmware",
                "description":"Alpha desc","markdownFile":"alpha.md"}"#,
        )
        .unwrap();
        Portfolio::from_projects(vec![project])
    }

    #[test]
    fn test_navigate_pushes_and_sets_fragment() {
        let portfolio = test_portfolio();
        let mut router = Router::new("");
        router.initialize_from_fragment("", &portfolio);
        router.navigate_to(View::Jobs, &portfolio);

        assert_eq!(router.view(), View::Jobs);
        assert_eq!(router.current_fragment(), "#jobs");
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn test_navigate_to_detail_is_ignored() {
        let portfolio = test_portfolio();
        let mut router = Router::new("");
        router.initialize_from_fragment("#projects", &portfolio);
        let effects = router.navigate_to(View::ProjectDetail, &portfolio);

        assert!(effects.is_empty());
        assert_eq!(router.view(), View::Projects);
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn test_select_project_effects() {
        let portfolio = test_portfolio();
        let mut router = Router::new("");
        router.initialize_from_fragment("", &portfolio);
        let effects = router.select_project(ProjectId::new("alpha"), &portfolio);

        assert_eq!(router.view(), View::ProjectDetail);
        assert_eq!(router.selected_project().unwrap().as_str(), "alpha");
        assert_eq!(router.current_fragment(), "#project-alpha");
        assert_eq!(
            effects,
            vec![
                Effect::ScrollToTop,
                Effect::LoadDetail(ProjectId::new("alpha")),
            ]
        );
    }

    #[test]
    fn test_back_restores_previous_state() {
        let portfolio = test_portfolio();
        let mut router = Router::new("");
        router.initialize_from_fragment("", &portfolio);
        router.navigate_to(View::Projects, &portfolio);
        router.select_project(ProjectId::new("alpha"), &portfolio);

        let effects = router.history_back(&portfolio).unwrap();
        assert_eq!(router.view(), View::Projects);
        assert!(router.selected_project().is_none());
        assert!(effects.is_empty());

        let effects = router.history_forward(&portfolio).unwrap();
        assert_eq!(router.view(), View::ProjectDetail);
        assert_eq!(
            effects,
            vec![Effect::LoadDetail(ProjectId::new("alpha"))]
        );
    }

    #[test]
    fn test_back_at_root_is_none() {
        let portfolio = test_portfolio();
        let mut router = Router::new("#jobs");
        router.initialize_from_fragment("#jobs", &portfolio);
        assert!(router.history_back(&portfolio).is_none());
        assert_eq!(router.view(), View::Jobs);
    }
}
