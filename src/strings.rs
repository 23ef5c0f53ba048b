/// Identifier for a user-visible string.
///
/// All text shown by the editor UI goes through [`text`] so a translation
/// table can replace it wholesale later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextId {
    StageObjectSelection,
    StageLandscapeEditor,
    StageInventionsListSetUp,
    StageOptionsSelection,
    StageObjectiveSelection,
    StageSaveScenario,
    StageRollercoasterDesigner,
    StageTrackDesignsManager,
    BackToPreviousStep,
    ForwardToNextStep,
    InvalidObjectSelection,
    CannotAdvanceToNextStage,
    UnableToSaveScenarioFile,
}

pub fn text(id: TextId) -> &'static str {
    match id {
        TextId::StageObjectSelection => "Object Selection",
        TextId::StageLandscapeEditor => "Landscape Editor",
        TextId::StageInventionsListSetUp => "Inventions List Set Up",
        TextId::StageOptionsSelection => "Options Selection",
        TextId::StageObjectiveSelection => "Objective Selection",
        TextId::StageSaveScenario => "Save Scenario",
        TextId::StageRollercoasterDesigner => "Rollercoaster Designer",
        TextId::StageTrackDesignsManager => "Track Designs Manager",
        TextId::BackToPreviousStep => "Back to previous step:",
        TextId::ForwardToNextStep => "Forward to next step:",
        TextId::InvalidObjectSelection => "Invalid selection of objects",
        TextId::CannotAdvanceToNextStage => "Can't advance to next editor stage",
        TextId::UnableToSaveScenarioFile => "Unable to save scenario file",
    }
}
