//! View states of the small page widgets.

/// Viewports wider than this always show the desktop menu.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Hamburger and nav panel share one state, so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    /// State after the viewport was resized to `width`.
    pub fn after_resize(self, width: f64) -> Self {
        if width > MOBILE_BREAKPOINT {
            MenuState::Closed
        } else {
            self
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// CSS `animation-play-state` of the carousel track. Hover and visibility
/// both write it; whichever fired last wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Running,
    Paused,
}

impl PlayState {
    pub fn on_hover(hovering: bool) -> Self {
        if hovering {
            PlayState::Paused
        } else {
            PlayState::Running
        }
    }

    pub fn on_visibility(visible: bool) -> Self {
        if visible {
            PlayState::Running
        } else {
            PlayState::Paused
        }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            PlayState::Running => "running",
            PlayState::Paused => "paused",
        }
    }
}

/// One-shot fade-in for cards and headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unseen,
    Seen,
}

impl RevealState {
    /// Feed an intersection change; returns `true` only on the first sighting.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && *self == RevealState::Unseen {
            *self = RevealState::Seen;
            true
        } else {
            false
        }
    }

    pub fn is_seen(&self) -> bool {
        matches!(self, RevealState::Seen)
    }
}

/// Source an `img` should display once it scrolls into view: the deferred
/// source when one is set, otherwise whatever it already shows.
pub fn lazy_source<'a>(current: &'a str, deferred: Option<&'a str>) -> &'a str {
    match deferred {
        Some(src) if !src.is_empty() => src,
        _ => current,
    }
}

pub const PRELOADER_HOLD_MS: u32 = 1000;
pub const PRELOADER_FADE_MS: u32 = 500;
pub const PRELOADER_TEXT: &str = "Carregando D.A.W.LOAD...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreloaderPhase {
    #[default]
    Shown,
    FadingOut,
    Detached,
}

impl PreloaderPhase {
    pub fn advance(self) -> Self {
        match self {
            PreloaderPhase::Shown => PreloaderPhase::FadingOut,
            PreloaderPhase::FadingOut | PreloaderPhase::Detached => PreloaderPhase::Detached,
        }
    }

    pub fn opacity(&self) -> &'static str {
        match self {
            PreloaderPhase::Shown => "1",
            PreloaderPhase::FadingOut | PreloaderPhase::Detached => "0",
        }
    }
}

/// How long a settled button keeps its feedback before restoring itself.
pub const BUTTON_RESTORE_MS: u32 = 3000;
pub const DOWNLOAD_STARTED_MESSAGE: &str =
    "Download iniciado! Verifique sua pasta de downloads.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    Purchase,
    Download,
}

impl ProductAction {
    /// Simulated work before the button settles.
    pub fn pending_ms(&self) -> u32 {
        match self {
            ProductAction::Purchase => 1000,
            ProductAction::Download => 2000,
        }
    }

    pub fn pending_label(&self) -> &'static str {
        match self {
            ProductAction::Purchase => "Redirecionando...",
            ProductAction::Download => "Preparando...",
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            ProductAction::Purchase => Outcome::Redirected,
            ProductAction::Download => Outcome::Downloaded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Redirected,
    Downloaded,
}

/// Per-button lifecycle: `Idle → Pending → Settled → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonPhase {
    #[default]
    Idle,
    Pending,
    Settled(Outcome),
}

impl ButtonPhase {
    /// Returns `false` if the button is busy; a disabled button can't be
    /// clicked in the browser, this just keeps the state honest.
    pub fn start(&mut self) -> bool {
        if *self == ButtonPhase::Idle {
            *self = ButtonPhase::Pending;
            true
        } else {
            false
        }
    }

    pub fn settle(&mut self, outcome: Outcome) {
        if *self == ButtonPhase::Pending {
            *self = ButtonPhase::Settled(outcome);
        }
    }

    pub fn restore(&mut self) {
        *self = ButtonPhase::Idle;
    }

    pub fn is_disabled(&self) -> bool {
        *self != ButtonPhase::Idle
    }

    /// Temporary label, or `None` to show the button's own label.
    pub fn label(&self, action: ProductAction) -> Option<&'static str> {
        match self {
            ButtonPhase::Idle => None,
            ButtonPhase::Pending | ButtonPhase::Settled(Outcome::Redirected) => {
                Some(action.pending_label())
            }
            ButtonPhase::Settled(Outcome::Downloaded) => Some("Baixado!"),
        }
    }

    pub fn shows_spinner(&self) -> bool {
        matches!(
            self,
            ButtonPhase::Pending | ButtonPhase::Settled(Outcome::Redirected)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_and_collapse() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        let menu = menu.toggled();
        assert!(menu.is_open());
        assert_eq!(menu.after_resize(768.0), MenuState::Open);
        assert_eq!(menu.after_resize(769.0), MenuState::Closed);
        assert_eq!(MenuState::Closed.after_resize(320.0), MenuState::Closed);
        assert_eq!(menu.toggled().toggled(), MenuState::Open);
    }

    #[test]
    fn test_resize_burst_across_breakpoint_closes_menu() {
        // Each resize event is applied, so a brief pass over the
        // breakpoint still collapses the panel.
        let menu = [1024.0, 600.0]
            .into_iter()
            .fold(MenuState::Open, MenuState::after_resize);
        assert_eq!(menu, MenuState::Closed);

        let menu = [320.0, 500.0, 768.0]
            .into_iter()
            .fold(MenuState::Open, MenuState::after_resize);
        assert_eq!(menu, MenuState::Open);
    }

    #[test]
    fn test_carousel_last_writer_wins() {
        let mut play = PlayState::on_hover(true);
        assert_eq!(play.as_css(), "paused");
        play = PlayState::on_visibility(true);
        assert_eq!(play, PlayState::Running);
        play = PlayState::on_visibility(false);
        assert_eq!(play, PlayState::Paused);
        play = PlayState::on_hover(false);
        assert_eq!(play.as_css(), "running");
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut reveal = RevealState::default();
        assert!(!reveal.observe(false));
        assert!(reveal.observe(true));
        assert!(!reveal.observe(true));
        assert!(!reveal.observe(false));
        assert!(reveal.is_seen());
    }

    #[test]
    fn test_lazy_source() {
        assert_eq!(lazy_source("blur.jpg", Some("full.jpg")), "full.jpg");
        assert_eq!(lazy_source("blur.jpg", Some("")), "blur.jpg");
        assert_eq!(lazy_source("blur.jpg", None), "blur.jpg");
    }

    #[test]
    fn test_preloader_runs_forward_only() {
        let phase = PreloaderPhase::default();
        assert_eq!(phase.opacity(), "1");
        let phase = phase.advance();
        assert_eq!(phase, PreloaderPhase::FadingOut);
        assert_eq!(phase.opacity(), "0");
        assert_eq!(phase.advance().advance(), PreloaderPhase::Detached);
    }

    #[test]
    fn test_purchase_button_cycle() {
        let action = ProductAction::Purchase;
        let mut phase = ButtonPhase::default();
        assert_eq!(phase.label(action), None);
        assert!(phase.start());
        assert!(phase.is_disabled());
        assert!(!phase.start());
        assert_eq!(phase.label(action), Some("Redirecionando..."));

        phase.settle(action.outcome());
        assert_eq!(phase, ButtonPhase::Settled(Outcome::Redirected));
        assert!(phase.shows_spinner());
        assert_eq!(phase.label(action), Some("Redirecionando..."));

        phase.restore();
        assert!(!phase.is_disabled());
        assert_eq!(phase.label(action), None);
    }

    #[test]
    fn test_download_button_cycle() {
        let action = ProductAction::Download;
        let mut phase = ButtonPhase::default();
        phase.start();
        assert_eq!(phase.label(action), Some("Preparando..."));
        phase.settle(action.outcome());
        assert_eq!(phase.label(action), Some("Baixado!"));
        assert!(!phase.shows_spinner());
        assert!(phase.is_disabled());
        phase.restore();
        assert_eq!(phase, ButtonPhase::Idle);
    }

    #[test]
    fn test_settle_requires_pending() {
        let mut phase = ButtonPhase::Idle;
        phase.settle(Outcome::Downloaded);
        assert_eq!(phase, ButtonPhase::Idle);
    }
}
