use tracing::info;

use crate::objects::{ObjectCategory, ObjectSelection};
use crate::scenario::ScenarioDetails;
use crate::stage::EditorStage;
use crate::strings::TextId;

/// Total sprite slots in a park. A park whose free list is full has never
/// been populated.
pub const MAX_SPRITES: usize = 10_000;

/// Which editor the application was launched as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    ScenarioEditor,
    TrackDesigner,
    TrackManager,
}

impl EditorMode {
    pub fn parse(value: &str) -> Option<EditorMode> {
        match value.trim().to_ascii_lowercase().as_str() {
            "scenario" | "editor" => Some(EditorMode::ScenarioEditor),
            "designer" | "track-designer" => Some(EditorMode::TrackDesigner),
            "manager" | "track-manager" => Some(EditorMode::TrackManager),
            _ => None,
        }
    }

    /// Stage the editor opens in for this mode.
    pub fn initial_stage(self) -> EditorStage {
        match self {
            EditorMode::ScenarioEditor | EditorMode::TrackDesigner => EditorStage::ObjectSelection,
            EditorMode::TrackManager => EditorStage::TrackDesignsManager,
        }
    }
}

/// Park-level facts the stage guards consult. In the full game these come
/// from the simulation; the editor only reads them.
#[derive(Debug, Clone)]
pub struct ParkState {
    pub free_sprite_slots: usize,
    pub sprites_initialised: bool,
    pub available_rides: usize,
    pub has_park_entrance: bool,
    pub has_guest_spawn: bool,
}

impl Default for ParkState {
    fn default() -> Self {
        Self {
            free_sprite_slots: MAX_SPRITES,
            sprites_initialised: false,
            available_rides: 0,
            has_park_entrance: false,
            has_guest_spawn: false,
        }
    }
}

/// Why a forward transition was refused. The display text is the body of the
/// error dialog; [`StepError::title_id`] supplies its caption.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("At least {} {} object(s) must be selected", .minimum, .category.label())]
    MissingObjects {
        category: ObjectCategory,
        minimum: usize,
    },
    #[error("At least one ride must be available")]
    NoRideAvailable,
    #[error("Park entrance position not set")]
    NoParkEntrance,
    #[error("Guest entry point not set")]
    NoGuestSpawn,
    #[error("Scenario name has not been entered")]
    ScenarioNameEmpty,
    #[error("Scenario objective has not been selected")]
    NoObjectiveSet,
}

impl StepError {
    pub fn title_id(&self) -> TextId {
        match self {
            StepError::MissingObjects { .. } => TextId::InvalidObjectSelection,
            StepError::NoRideAvailable | StepError::NoParkEntrance | StepError::NoGuestSpawn => {
                TextId::CannotAdvanceToNextStage
            }
            StepError::ScenarioNameEmpty | StepError::NoObjectiveSet => {
                TextId::UnableToSaveScenarioFile
            }
        }
    }
}

/// All mutable editor state, threaded explicitly through the UI instead of
/// living in process-wide globals.
pub struct EditorSession {
    stage: EditorStage,
    pub mode: EditorMode,
    pub park: ParkState,
    pub objects: ObjectSelection,
    pub scenario: ScenarioDetails,
    pub all_scenery_invented: bool,
    pub scenery_placement_default: bool,
}

impl EditorSession {
    pub fn new(mode: EditorMode) -> Self {
        Self {
            stage: mode.initial_stage(),
            mode,
            park: ParkState::default(),
            objects: ObjectSelection::default(),
            scenario: ScenarioDetails::default(),
            all_scenery_invented: true,
            scenery_placement_default: true,
        }
    }

    pub fn stage(&self) -> EditorStage {
        self.stage
    }

    pub fn set_stage(&mut self, stage: EditorStage) {
        if stage != self.stage {
            info!(from = ?self.stage, to = ?stage, "editor stage changed");
        }
        self.stage = stage;
    }

    /// True while the park has never been populated: every sprite slot free
    /// and the initialised flag unset. Backward navigation out of the
    /// landscape stages is only allowed on a pristine map.
    pub fn map_is_pristine(&self) -> bool {
        self.park.free_sprite_slots == MAX_SPRITES && !self.park.sprites_initialised
    }

    /// Guard for leaving the ObjectSelection stage.
    pub fn check_object_selection(&self) -> Result<(), StepError> {
        match self.objects.first_missing() {
            Some(category) => Err(StepError::MissingObjects {
                category,
                minimum: category.required_minimum(),
            }),
            None => Ok(()),
        }
    }

    /// Guard for advancing from LandscapeEditor to InventionsListSetUp.
    pub fn check_park(&self) -> Result<(), StepError> {
        if self.park.available_rides == 0 {
            return Err(StepError::NoRideAvailable);
        }
        if !self.park.has_park_entrance {
            return Err(StepError::NoParkEntrance);
        }
        if !self.park.has_guest_spawn {
            return Err(StepError::NoGuestSpawn);
        }
        Ok(())
    }

    /// Guard for opening the save dialog from ObjectiveSelection.
    pub fn prepare_for_save(&self) -> Result<(), StepError> {
        if self.scenario.name.trim().is_empty() {
            return Err(StepError::ScenarioNameEmpty);
        }
        if self.scenario.objective.is_none() {
            return Err(StepError::NoObjectiveSet);
        }
        Ok(())
    }

    /// Commits the object selection and moves the editor on: to the
    /// landscape, or straight to the designer in track-designer mode.
    pub fn finish_object_selection(&mut self) {
        self.objects.finalize();
        let next = if self.mode == EditorMode::TrackDesigner {
            EditorStage::RollercoasterDesigner
        } else {
            EditorStage::LandscapeEditor
        };
        self.set_stage(next);
    }

    pub fn set_all_scenery_invented(&mut self) {
        self.all_scenery_invented = true;
    }

    pub fn reset_scenery_placement(&mut self) {
        self.scenery_placement_default = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{EditorMode, EditorSession, MAX_SPRITES, StepError};
    use crate::objects::ObjectCategory;
    use crate::scenario::Objective;
    use crate::stage::EditorStage;
    use crate::strings::TextId;

    fn session_with_complete_selection() -> EditorSession {
        let mut session = EditorSession::new(EditorMode::ScenarioEditor);
        for category in ObjectCategory::ALL {
            session
                .objects
                .set_count(category, category.required_minimum());
        }
        session
    }

    #[test]
    fn parse_recognises_all_modes() {
        assert_eq!(EditorMode::parse("scenario"), Some(EditorMode::ScenarioEditor));
        assert_eq!(EditorMode::parse("Designer"), Some(EditorMode::TrackDesigner));
        assert_eq!(
            EditorMode::parse("track-manager"),
            Some(EditorMode::TrackManager)
        );
        assert_eq!(EditorMode::parse("bogus"), None);
    }

    #[test]
    fn track_manager_opens_in_its_terminal_stage() {
        let session = EditorSession::new(EditorMode::TrackManager);
        assert_eq!(session.stage(), EditorStage::TrackDesignsManager);
    }

    #[test]
    fn fresh_map_is_pristine_until_sprites_appear() {
        let mut session = EditorSession::new(EditorMode::ScenarioEditor);
        assert!(session.map_is_pristine());
        session.park.free_sprite_slots = MAX_SPRITES - 1;
        assert!(!session.map_is_pristine());
        session.park.free_sprite_slots = MAX_SPRITES;
        session.park.sprites_initialised = true;
        assert!(!session.map_is_pristine());
    }

    #[test]
    fn incomplete_object_selection_reports_missing_category() {
        let session = EditorSession::new(EditorMode::ScenarioEditor);
        let err = session.check_object_selection().unwrap_err();
        assert_eq!(
            err,
            StepError::MissingObjects {
                category: ObjectCategory::Rides,
                minimum: 1,
            }
        );
        assert_eq!(err.title_id(), TextId::InvalidObjectSelection);
    }

    #[test]
    fn park_check_requires_rides_entrance_and_spawn() {
        let mut session = EditorSession::new(EditorMode::ScenarioEditor);
        assert_eq!(session.check_park(), Err(StepError::NoRideAvailable));
        session.park.available_rides = 3;
        assert_eq!(session.check_park(), Err(StepError::NoParkEntrance));
        session.park.has_park_entrance = true;
        assert_eq!(session.check_park(), Err(StepError::NoGuestSpawn));
        session.park.has_guest_spawn = true;
        assert_eq!(session.check_park(), Ok(()));
    }

    #[test]
    fn save_preparation_requires_name_and_objective() {
        let mut session = EditorSession::new(EditorMode::ScenarioEditor);
        assert_eq!(session.prepare_for_save(), Err(StepError::ScenarioNameEmpty));
        session.scenario.name = "Forest Frontiers".to_string();
        assert_eq!(session.prepare_for_save(), Err(StepError::NoObjectiveSet));
        session.scenario.objective = Some(Objective::HaveFunGuests);
        assert_eq!(session.prepare_for_save(), Ok(()));
    }

    #[test]
    fn finishing_object_selection_advances_to_landscape() {
        let mut session = session_with_complete_selection();
        session.finish_object_selection();
        assert_eq!(session.stage(), EditorStage::LandscapeEditor);
        assert!(session.objects.is_finalized());
    }
}
