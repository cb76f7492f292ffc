//! Dashboard layout shell
//!
//! Pure derivation of the sidebar and header from the operator role plus the
//! preview-route exception. The role is always passed in explicitly; nothing
//! here reads ambient session state.

use coursekit_core::Role;
use serde::Serialize;

/// One sidebar navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label
    pub label: &'static str,
    /// Link target
    pub href: &'static str,
    /// Icon name rendered by the template
    pub icon: &'static str,
}

/// Header model for the shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderModel {
    /// Greeting line
    pub greeting: &'static str,
    /// Role badge text
    pub badge: &'static str,
}

/// Complete shell model for a page render
#[derive(Debug, Clone, Serialize)]
pub struct ShellModel {
    /// Operator role the shell was derived for
    pub role: Role,
    /// Whether the shell chrome should render at all
    pub render_shell: bool,
    /// Sidebar entries
    pub sidebar: Vec<NavItem>,
    /// Header model
    pub header: HeaderModel,
}

/// Sidebar entries for a role
#[must_use]
pub fn sidebar_for(role: Role) -> Vec<NavItem> {
    match role {
        Role::Manager => vec![
            NavItem {
                label: "Overview",
                href: "/",
                icon: "home",
            },
            NavItem {
                label: "Courses",
                href: "/manager/courses",
                icon: "book",
            },
            NavItem {
                label: "Students",
                href: "/manager/students",
                icon: "users",
            },
        ],
        Role::Student => vec![
            NavItem {
                label: "Overview",
                href: "/",
                icon: "home",
            },
            NavItem {
                label: "My Courses",
                href: "/student/courses",
                icon: "book",
            },
        ],
    }
}

/// Header model for a role
#[must_use]
pub const fn header_for(role: Role) -> HeaderModel {
    match role {
        Role::Manager => HeaderModel {
            greeting: "Manage your courses",
            badge: "Manager",
        },
        Role::Student => HeaderModel {
            greeting: "Keep learning",
            badge: "Student",
        },
    }
}

/// Preview pages render full-bleed, without the sidebar and header.
///
/// Matches `/manager/courses/:id/preview` and `/student/detail-course/:id`.
#[must_use]
pub fn is_preview_route(path: &str) -> bool {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match segments.as_slice() {
        ["manager", "courses", id, "preview"] => !id.is_empty(),
        ["student", "detail-course", id] => !id.is_empty(),
        _ => false,
    }
}

/// Derive the complete shell model for a role and request path
#[must_use]
pub fn shell_for(role: Role, path: &str) -> ShellModel {
    ShellModel {
        role,
        render_shell: !is_preview_route(path),
        sidebar: sidebar_for(role),
        header: header_for(role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_manager_sidebar_has_course_management() {
        let sidebar = sidebar_for(Role::Manager);

        assert!(sidebar.iter().any(|item| item.href == "/manager/courses"));
        assert!(sidebar.iter().any(|item| item.label == "Students"));
    }

    #[test]
    fn test_student_sidebar_has_no_manager_entries() {
        let sidebar = sidebar_for(Role::Student);

        assert!(sidebar.iter().all(|item| !item.href.starts_with("/manager")));
    }

    #[test]
    fn test_header_badges() {
        assert_eq!(header_for(Role::Manager).badge, "Manager");
        assert_eq!(header_for(Role::Student).badge, "Student");
    }

    #[test]
    fn test_preview_routes_detected() {
        assert!(is_preview_route("/manager/courses/42/preview"));
        assert!(is_preview_route("/student/detail-course/42"));

        assert!(!is_preview_route("/manager/courses/42"));
        assert!(!is_preview_route("/manager/courses"));
        assert!(!is_preview_route("/"));
        assert!(!is_preview_route("/student/detail-course/"));
    }

    #[test]
    fn test_shell_model_suppresses_chrome_on_preview() {
        let shell = shell_for(Role::Manager, "/manager/courses/42/preview");
        assert!(!shell.render_shell);

        let shell = shell_for(Role::Manager, "/manager/courses/42");
        assert!(shell.render_shell);
        assert_eq!(shell.header.badge, "Manager");
    }
}
