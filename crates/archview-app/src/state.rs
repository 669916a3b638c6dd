//! Application state (Model in TEA pattern)

use archview_core::{ComponentId, Diagram, RegionId};

use crate::config::Settings;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Detail panel state machine.
///
/// `Idle --Select(id)--> Showing(id)`, `Showing(x) --Select(id)--> Showing(id)`
/// and `Showing(x) --Dismiss--> Idle`. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Showing(ComponentId),
}

impl Selection {
    pub fn component(self) -> Option<ComponentId> {
        match self {
            Selection::Idle => None,
            Selection::Showing(id) => Some(id),
        }
    }

    pub fn is_showing(self) -> bool {
        matches!(self, Selection::Showing(_))
    }
}

/// Complete application state (Model in TEA pattern)
#[derive(Debug)]
pub struct AppState {
    /// The diagram being shown; fixed for the lifetime of the app
    pub diagram: Diagram,

    /// Which component's details are shown. Only `update()` writes this.
    pub selection: Selection,

    /// Clickable region holding keyboard focus
    pub focus: Option<RegionId>,

    /// Region under the mouse pointer
    pub hover: Option<RegionId>,

    pub phase: AppPhase,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::with_diagram(Diagram::aws_multi_tier(), settings)
    }

    pub fn with_diagram(diagram: Diagram, settings: Settings) -> Self {
        Self {
            diagram,
            selection: Selection::Idle,
            focus: None,
            hover: None,
            phase: AppPhase::Running,
            settings,
        }
    }

    pub fn selected(&self) -> Option<ComponentId> {
        self.selection.component()
    }

    /// Overwrite the selection. Re-selecting the current id keeps the panel open.
    pub fn select(&mut self, id: ComponentId) {
        self.selection = Selection::Showing(id);
    }

    pub fn dismiss(&mut self) {
        self.selection = Selection::Idle;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_focused(&self, region: RegionId) -> bool {
        self.focus == Some(region)
    }

    pub fn is_hovered(&self, region: RegionId) -> bool {
        self.hover == Some(region)
    }
}
