use crate::strings::TextId;

/// One step in the fixed scenario-editing workflow.
///
/// The first six stages form a linear sequence. The last two are terminal
/// stages reached only in the track-designer and track-manager modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorStage {
    ObjectSelection,
    LandscapeEditor,
    InventionsListSetUp,
    OptionsSelection,
    ObjectiveSelection,
    SaveScenario,
    RollercoasterDesigner,
    TrackDesignsManager,
}

impl EditorStage {
    pub const ALL: [EditorStage; 8] = [
        EditorStage::ObjectSelection,
        EditorStage::LandscapeEditor,
        EditorStage::InventionsListSetUp,
        EditorStage::OptionsSelection,
        EditorStage::ObjectiveSelection,
        EditorStage::SaveScenario,
        EditorStage::RollercoasterDesigner,
        EditorStage::TrackDesignsManager,
    ];

    /// The stage immediately before this one in the linear sequence.
    pub fn previous(self) -> Option<EditorStage> {
        match self {
            EditorStage::LandscapeEditor => Some(EditorStage::ObjectSelection),
            EditorStage::InventionsListSetUp => Some(EditorStage::LandscapeEditor),
            EditorStage::OptionsSelection => Some(EditorStage::InventionsListSetUp),
            EditorStage::ObjectiveSelection => Some(EditorStage::OptionsSelection),
            EditorStage::SaveScenario => Some(EditorStage::ObjectiveSelection),
            _ => None,
        }
    }

    /// The stage immediately after this one in the linear sequence.
    pub fn next(self) -> Option<EditorStage> {
        match self {
            EditorStage::ObjectSelection => Some(EditorStage::LandscapeEditor),
            EditorStage::LandscapeEditor => Some(EditorStage::InventionsListSetUp),
            EditorStage::InventionsListSetUp => Some(EditorStage::OptionsSelection),
            EditorStage::OptionsSelection => Some(EditorStage::ObjectiveSelection),
            EditorStage::ObjectiveSelection => Some(EditorStage::SaveScenario),
            _ => None,
        }
    }

    /// Localized display-name id for this stage.
    pub fn name_id(self) -> TextId {
        match self {
            EditorStage::ObjectSelection => TextId::StageObjectSelection,
            EditorStage::LandscapeEditor => TextId::StageLandscapeEditor,
            EditorStage::InventionsListSetUp => TextId::StageInventionsListSetUp,
            EditorStage::OptionsSelection => TextId::StageOptionsSelection,
            EditorStage::ObjectiveSelection => TextId::StageObjectiveSelection,
            EditorStage::SaveScenario => TextId::StageSaveScenario,
            EditorStage::RollercoasterDesigner => TextId::StageRollercoasterDesigner,
            EditorStage::TrackDesignsManager => TextId::StageTrackDesignsManager,
        }
    }

    pub fn label(self) -> &'static str {
        crate::strings::text(self.name_id())
    }
}
