//! History stack — the terminal counterpart of the browser history.
//!
//! Each entry carries a structured payload (the authoritative state on
//! back/forward) and the fragment string that was visible when the entry
//! was created. The initial entry has no payload, modelling the history
//! entry that exists before the app pushes anything.

use serde::{Deserialize, Serialize};

use crate::model::{ProjectId, View};

// ---------------------------------------------------------------------------
// HistoryPayload — the structured state attached to each entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPayload {
    pub view: View,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
}

impl HistoryPayload {
    pub fn view(view: View) -> Self {
        Self {
            view,
            project_id: None,
        }
    }

    pub fn project(id: ProjectId) -> Self {
        Self {
            view: View::ProjectDetail,
            project_id: Some(id),
        }
    }
}

// ---------------------------------------------------------------------------
// HistoryEntry / HistoryStack
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub payload: Option<HistoryPayload>,
    pub fragment: String,
}

#[derive(Debug)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl HistoryStack {
    /// A fresh stack holds one payload-less entry carrying the fragment the
    /// app was started with.
    pub fn new(initial_fragment: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry {
                payload: None,
                fragment: initial_fragment.into(),
            }],
            cursor: 0,
        }
    }

    /// Replace the current entry in place. Used once at startup so the
    /// first back press does not re-show the deep link.
    pub fn replace(&mut self, payload: HistoryPayload, fragment: impl Into<String>) {
        self.entries[self.cursor] = HistoryEntry {
            payload: Some(payload),
            fragment: fragment.into(),
        };
    }

    /// Push a new entry, discarding any forward tail.
    pub fn push(&mut self, payload: HistoryPayload, fragment: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            payload: Some(payload),
            fragment: fragment.into(),
        });
        self.cursor = self.entries.len() - 1;
    }

    /// Step back. `None` means the cursor is already on the oldest entry —
    /// in a browser this press would leave the app.
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward. `None` means there is no forward tail.
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_has_single_payloadless_entry() {
        let stack = HistoryStack::new("#jobs");
        assert_eq!(stack.len(), 1);
        assert!(stack.current().payload.is_none());
        assert_eq!(stack.current().fragment, "#jobs");
        assert!(!stack.can_go_back());
        assert!(!stack.can_go_forward());
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut stack = HistoryStack::new("");
        stack.replace(HistoryPayload::view(View::Jobs), "#jobs");
        assert_eq!(stack.len(), 1);
        assert_eq!(
            stack.current().payload.as_ref().unwrap().view,
            View::Jobs
        );
        // One back press from a replaced root leaves the app's history.
        assert!(stack.back().is_none());
    }

    #[test]
    fn test_push_and_back_and_forward() {
        let mut stack = HistoryStack::new("");
        stack.replace(HistoryPayload::view(View::Projects), "#projects");
        stack.push(HistoryPayload::project(ProjectId::new("alpha")), "#project-alpha");

        let entry = stack.back().expect("one entry behind");
        assert_eq!(entry.payload.as_ref().unwrap().view, View::Projects);

        let entry = stack.forward().expect("one entry ahead");
        assert_eq!(
            entry.payload.as_ref().unwrap().project_id.as_ref().unwrap().as_str(),
            "alpha"
        );
        assert!(stack.forward().is_none());
    }

    #[test]
    fn test_push_truncates_forward_tail() {
        let mut stack = HistoryStack::new("");
        stack.replace(HistoryPayload::view(View::Projects), "#projects");
        stack.push(HistoryPayload::view(View::Jobs), "#jobs");
        stack.push(HistoryPayload::view(View::Contact), "#contact");
        stack.back();
        stack.back();
        stack.push(HistoryPayload::view(View::Education), "#education");

        assert_eq!(stack.len(), 2);
        assert!(!stack.can_go_forward());
        assert_eq!(
            stack.current().payload.as_ref().unwrap().view,
            View::Education
        );
    }

    #[test]
    fn test_payload_json_round_trip() {
        let payload = HistoryPayload::project(ProjectId::new("alpha"));
        let json = serde_json::to_string(&payload).unwrap();
        let back: HistoryPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);

        let payload = HistoryPayload::view(View::Education);
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("projectId"));
        let back: HistoryPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
