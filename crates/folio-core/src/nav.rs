//! Mobile navigation drawer state.

/// Body class present while the drawer is open.
pub const NAV_OPEN_CLASS: &str = "nav-open";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    /// Read the state from the toggle's `aria-expanded` value. Anything other
    /// than `"true"` is closed.
    #[must_use]
    pub fn from_aria_expanded(value: Option<&str>) -> Self {
        if value == Some("true") {
            Self::Open
        } else {
            Self::Closed
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// DOM reflection of this state.
    #[must_use]
    pub const fn attributes(self) -> NavAttributes {
        match self {
            Self::Closed => NavAttributes {
                aria_expanded: "false",
                collapsed: "true",
                body_open_class: false,
            },
            Self::Open => NavAttributes {
                aria_expanded: "true",
                collapsed: "false",
                body_open_class: true,
            },
        }
    }
}

/// What the host writes for a [`NavState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavAttributes {
    /// `aria-expanded` on the toggle.
    pub aria_expanded: &'static str,
    /// `data-collapsed` on the panel.
    pub collapsed: &'static str,
    /// Whether [`NAV_OPEN_CLASS`] is on the body.
    pub body_open_class: bool,
}

/// Whether a `keydown` with this `key` closes the drawer. Escape closes it
/// whatever the current state.
#[must_use]
pub fn is_close_key(key: &str) -> bool {
    key == "Escape"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_alternates() {
        let s = NavState::from_aria_expanded(None);
        assert_eq!(s, NavState::Closed);
        assert_eq!(s.toggled(), NavState::Open);
        assert_eq!(s.toggled().toggled(), NavState::Closed);
    }

    #[test]
    fn aria_value_must_be_exactly_true() {
        assert_eq!(NavState::from_aria_expanded(Some("true")), NavState::Open);
        assert_eq!(NavState::from_aria_expanded(Some("TRUE")), NavState::Closed);
        assert_eq!(NavState::from_aria_expanded(Some("false")), NavState::Closed);
    }

    #[test]
    fn only_escape_closes() {
        assert!(is_close_key("Escape"));
        assert!(!is_close_key("Esc"));
        assert!(!is_close_key("Enter"));
    }

    #[test]
    fn attributes_mirror_state() {
        assert_eq!(
            NavState::Open.attributes(),
            NavAttributes {
                aria_expanded: "true",
                collapsed: "false",
                body_open_class: true,
            }
        );
        assert_eq!(
            NavState::Closed.attributes(),
            NavAttributes {
                aria_expanded: "false",
                collapsed: "true",
                body_open_class: false,
            }
        );
    }
}
