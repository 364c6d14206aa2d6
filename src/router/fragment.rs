//! Fragment codec — the `#view` / `#project-<id>` encoding used for
//! deep links at startup and carried on every history entry.

use crate::model::{ProjectId, View};
use crate::router::history::HistoryPayload;

/// Parse a fragment into the payload it denotes. The empty fragment and
/// `#home` map to Home per the encoding table; anything unrecognized
/// returns `None` and the caller falls back to the default view. Project
/// fragments are parsed without consulting the content set — id resolution
/// is the router's job.
pub fn parse_fragment(fragment: &str) -> Option<HistoryPayload> {
    let token = fragment.trim().trim_start_matches('#');

    if let Some(id) = token.strip_prefix("project-") {
        if id.is_empty() {
            return None;
        }
        return Some(HistoryPayload::project(ProjectId::new(id)));
    }

    View::from_token(token).map(HistoryPayload::view)
}

/// Render a payload back to its fragment form.
pub fn format_fragment(payload: &HistoryPayload) -> String {
    match (&payload.view, &payload.project_id) {
        (View::ProjectDetail, Some(id)) => format!("#project-{id}"),
        (view, _) => format!("#{}", view.fragment_token()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_is_home() {
        assert_eq!(parse_fragment(""), Some(HistoryPayload::view(View::Home)));
        assert_eq!(parse_fragment("#"), Some(HistoryPayload::view(View::Home)));
        assert_eq!(
            parse_fragment("#home"),
            Some(HistoryPayload::view(View::Home))
        );
    }

    #[test]
    fn test_parse_named_views() {
        assert_eq!(
            parse_fragment("#projects"),
            Some(HistoryPayload::view(View::Projects))
        );
        assert_eq!(parse_fragment("#jobs"), Some(HistoryPayload::view(View::Jobs)));
        assert_eq!(
            parse_fragment("#education"),
            Some(HistoryPayload::view(View::Education))
        );
        assert_eq!(
            parse_fragment("#contact"),
            Some(HistoryPayload::view(View::Contact))
        );
    }

    #[test]
    fn test_parse_project_fragment() {
        let payload = parse_fragment("#project-aurora-telemetry").unwrap();
        assert_eq!(payload.view, View::ProjectDetail);
        assert_eq!(
            payload.project_id.unwrap().as_str(),
            "aurora-telemetry"
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse_fragment("#blog"), None);
        assert_eq!(parse_fragment("#project-"), None);
    }

    #[test]
    fn test_round_trip_all_views() {
        for view in View::NAV_ORDER {
            let payload = HistoryPayload::view(view);
            assert_eq!(parse_fragment(&format_fragment(&payload)), Some(payload));
        }
        let payload = HistoryPayload::project(ProjectId::new("alpha"));
        assert_eq!(format_fragment(&payload), "#project-alpha");
        assert_eq!(parse_fragment(&format_fragment(&payload)), Some(payload));
    }
}
