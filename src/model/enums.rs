use std::fmt;

// ---------------------------------------------------------------------------
// View — the fixed set of top-level application states
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    #[default]
    Projects,
    Jobs,
    Education,
    ProjectDetail,
    Contact,
}

/// Fallback for unrecognized fragments, unrecognized history payloads and
/// unresolvable project ids. The listing view, so a broken deep link lands
/// the user somewhere they can navigate from.
pub const DEFAULT_VIEW: View = View::Projects;

impl View {
    /// Nav-bar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::Jobs => "Experience",
            Self::Education => "Education",
            Self::ProjectDetail => "Project",
            Self::Contact => "Contact",
        }
    }

    /// Section heading shown above the view body.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Overview",
            Self::Projects => "System Registry",
            Self::Jobs => "Service Record",
            Self::Education => "Education & Credentials",
            Self::ProjectDetail => "Project Detail",
            Self::Contact => "Contact",
        }
    }

    /// Fragment token for this view (without the leading `#`). ProjectDetail
    /// fragments additionally carry an id; see `router::fragment`.
    pub fn fragment_token(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Jobs => "jobs",
            Self::Education => "education",
            Self::ProjectDetail => "project",
            Self::Contact => "contact",
        }
    }

    /// Parse a bare view token leniently. `project-<id>` fragments are
    /// handled a level up; this only covers the id-less views.
    pub fn from_token(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "home" => Some(Self::Home),
            "projects" => Some(Self::Projects),
            "jobs" | "experience" => Some(Self::Jobs),
            "education" => Some(Self::Education),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// Views reachable from the nav bar, in display order. ProjectDetail is
    /// entered by selecting a project, never navigated to directly.
    pub const NAV_ORDER: [View; 5] = [
        View::Home,
        View::Projects,
        View::Jobs,
        View::Education,
        View::Contact,
    ];
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_known_views() {
        assert_eq!(View::from_token("home"), Some(View::Home));
        assert_eq!(View::from_token(""), Some(View::Home));
        assert_eq!(View::from_token("projects"), Some(View::Projects));
        assert_eq!(View::from_token("jobs"), Some(View::Jobs));
        assert_eq!(View::from_token("Experience"), Some(View::Jobs));
        assert_eq!(View::from_token("education"), Some(View::Education));
        assert_eq!(View::from_token("contact"), Some(View::Contact));
    }

    #[test]
    fn test_from_token_unknown() {
        assert_eq!(View::from_token("blog"), None);
        assert_eq!(View::from_token("project"), None);
    }

    #[test]
    fn test_nav_order_excludes_detail() {
        assert!(!View::NAV_ORDER.contains(&View::ProjectDetail));
    }
}
