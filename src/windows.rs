use tracing::{debug, warn};

use crate::objects::ObjectCategory;
use crate::session::StepError;
use crate::strings;

/// Identity of each auxiliary editor window. At most one window per class is
/// ever open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowClass {
    ObjectSelection,
    Map,
    InventionList,
    ScenarioOptions,
    ObjectiveOptions,
    RideConstruction,
    SaveScenario,
}

/// Contents of the error dialog raised when a stage transition is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub detail: String,
}

/// Tracks which editor windows are open plus the bits of cross-window state
/// the stage transitions manipulate: the focused object-selection tab and the
/// filename the save dialog starts with.
pub struct WindowShelf {
    open: Vec<WindowClass>,
    pub focused_object_tab: ObjectCategory,
    pub save_filename: String,
    pub error: Option<ErrorDialog>,
}

impl Default for WindowShelf {
    fn default() -> Self {
        Self {
            open: Vec::new(),
            focused_object_tab: ObjectCategory::Rides,
            save_filename: String::new(),
            error: None,
        }
    }
}

impl WindowShelf {
    pub fn open(&mut self, class: WindowClass) {
        if !self.is_open(class) {
            debug!(?class, "opening window");
            self.open.push(class);
        }
    }

    pub fn close(&mut self, class: WindowClass) {
        self.open.retain(|c| *c != class);
    }

    /// Closes every window. The error dialog is separate and survives; a
    /// transition may close all windows and then report why it went no
    /// further.
    pub fn close_all(&mut self) {
        self.open.clear();
    }

    pub fn is_open(&self, class: WindowClass) -> bool {
        self.open.contains(&class)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Raises (or re-opens) the object-selection window with the given
    /// category tab focused. Used to point the user at the tab whose
    /// selection failed validation.
    pub fn focus_object_tab(&mut self, category: ObjectCategory) {
        self.open(WindowClass::ObjectSelection);
        self.focused_object_tab = category;
    }

    pub fn show_error(&mut self, error: &StepError) {
        warn!(%error, "stage transition refused");
        self.error = Some(ErrorDialog {
            title: strings::text(error.title_id()).to_string(),
            detail: error.to_string(),
        });
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
