//! Pure functions of the vertical scroll position.
//!
//! None of these keep state: the same position always yields the same
//! visual state, so there is no hysteresis around the thresholds.

/// Navbar switches to its opaque look strictly above this offset.
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 100.0;
/// Back-to-top button shows strictly above this offset.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
/// A section counts as current this many pixels before it reaches the top.
pub const SECTION_LOOKAHEAD: f64 = 200.0;
pub const PARALLAX_FACTOR: f64 = -0.3;

/// Throttle interval for per-frame visual effects.
pub const EFFECTS_THROTTLE_MS: u32 = 16;
/// Throttle interval for nav highlighting and the back-to-top button.
pub const TRACKING_THROTTLE_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    Top,
    Scrolled,
}

impl NavbarStyle {
    pub fn at(scroll_y: f64) -> Self {
        if scroll_y > NAVBAR_SCROLLED_THRESHOLD {
            NavbarStyle::Scrolled
        } else {
            NavbarStyle::Top
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarStyle::Top => "rgba(15, 15, 35, 0.95)",
            NavbarStyle::Scrolled => "rgba(15, 15, 35, 0.98)",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            NavbarStyle::Top => "none",
            NavbarStyle::Scrolled => "0 2px 20px rgba(0, 0, 0, 0.3)",
        }
    }
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Vertical hero offset in px.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

/// A page section and its distance from the document top.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// The last section (in document order) whose lookahead-adjusted top is at
/// or above `scroll_y`; `None` when the page is above every section.
pub fn active_section(sections: &[SectionOffset], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - SECTION_LOOKAHEAD)
        .last()
        .map(|s| s.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_threshold_is_strict() {
        assert_eq!(NavbarStyle::at(0.0), NavbarStyle::Top);
        assert_eq!(NavbarStyle::at(100.0), NavbarStyle::Top);
        assert_eq!(NavbarStyle::at(100.5), NavbarStyle::Scrolled);
        assert_eq!(NavbarStyle::at(5000.0), NavbarStyle::Scrolled);
        assert_eq!(NavbarStyle::at(50.0).box_shadow(), "none");
    }

    #[test]
    fn test_back_to_top_threshold_is_strict() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }

    #[test]
    fn test_parallax_moves_against_scroll() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(100.0), -30.0);
    }

    #[test]
    fn test_active_section_uses_lookahead() {
        let sections = vec![
            SectionOffset::new("home", 0.0),
            SectionOffset::new("products", 800.0),
            SectionOffset::new("contact", 1600.0),
        ];
        assert_eq!(active_section(&sections, 0.0), Some("home"));
        assert_eq!(active_section(&sections, 599.0), Some("home"));
        assert_eq!(active_section(&sections, 600.0), Some("products"));
        assert_eq!(active_section(&sections, 1400.0), Some("contact"));
        assert_eq!(active_section(&sections, 99999.0), Some("contact"));
    }

    #[test]
    fn test_no_section_reached() {
        let sections = vec![SectionOffset::new("products", 900.0)];
        assert_eq!(active_section(&sections, 100.0), None);
        assert_eq!(active_section(&[], 100.0), None);
    }
}
