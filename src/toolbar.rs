use crate::session::{EditorMode, EditorSession, StepError};
use crate::stage::EditorStage;
use crate::strings::{self, TextId};
use crate::windows::{WindowClass, WindowShelf};

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 30.0;
const TOOLBAR_HEIGHT: f32 = 34.0;
const ARROW_WIDTH: f32 = 24.0;

const TEXT_COLOR: egui::Color32 = egui::Color32::from_gray(220);
const HOVER_TEXT_COLOR: egui::Color32 = egui::Color32::WHITE;
const BACKING_FILL: egui::Color32 = egui::Color32::from_black_alpha(140);
const BUTTON_FILL: egui::Color32 = egui::Color32::from_black_alpha(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Back,
    Forward,
}

/// Which of the two step buttons render this frame, derived from the session
/// alone so it can be checked without a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonVisibility {
    pub previous: bool,
    pub next: bool,
}

impl ButtonVisibility {
    pub fn compute(session: &EditorSession) -> Self {
        if session.mode == EditorMode::TrackManager {
            return Self {
                previous: false,
                next: false,
            };
        }
        // A button with no registered action is not shown. Backward movement
        // is additionally gated on a pristine map outside track-designer
        // mode.
        let previous = back_destination(session).is_some()
            && (session.mode == EditorMode::TrackDesigner || session.map_is_pristine());
        let next = forward_destination(session).is_some();
        Self { previous, next }
    }
}

/// Stage the previous button leads to, if any. Track-designer mode always
/// backs out to object selection.
pub fn back_destination(session: &EditorSession) -> Option<EditorStage> {
    match session.stage() {
        EditorStage::SaveScenario | EditorStage::TrackDesignsManager => None,
        EditorStage::RollercoasterDesigner => Some(EditorStage::ObjectSelection),
        stage if session.mode == EditorMode::TrackDesigner => {
            (stage != EditorStage::ObjectSelection).then_some(EditorStage::ObjectSelection)
        }
        stage => stage.previous(),
    }
}

/// Stage the next button leads to, if any.
pub fn forward_destination(session: &EditorSession) -> Option<EditorStage> {
    if session.mode == EditorMode::TrackDesigner {
        return (session.stage() == EditorStage::ObjectSelection)
            .then_some(EditorStage::RollercoasterDesigner);
    }
    match session.stage() {
        EditorStage::SaveScenario => None,
        stage => stage.next(),
    }
}

/// Looks up and runs the transition registered for the current stage and
/// direction; stages without one no-op.
pub fn step(session: &mut EditorSession, windows: &mut WindowShelf, direction: StepDirection) {
    match direction {
        StepDirection::Back => step_back(session, windows),
        StepDirection::Forward => step_forward(session, windows),
    }
}

fn step_back(session: &mut EditorSession, windows: &mut WindowShelf) {
    // Going backwards would discard a populated map, so outside the track
    // designer it is only honored while the map is pristine.
    if session.mode != EditorMode::TrackDesigner && !session.map_is_pristine() {
        return;
    }
    match session.stage() {
        EditorStage::LandscapeEditor | EditorStage::RollercoasterDesigner => {
            back_to_object_selection(session, windows);
        }
        EditorStage::InventionsListSetUp => back_to_landscape_editor(session, windows),
        EditorStage::OptionsSelection => back_to_invention_list(session, windows),
        EditorStage::ObjectiveSelection => back_to_options_selection(session, windows),
        _ => {}
    }
}

fn step_forward(session: &mut EditorSession, windows: &mut WindowShelf) {
    match session.stage() {
        EditorStage::ObjectSelection => forward_from_object_selection(session, windows),
        EditorStage::LandscapeEditor => forward_to_invention_list(session, windows),
        EditorStage::InventionsListSetUp => forward_to_options_selection(session, windows),
        EditorStage::OptionsSelection => forward_to_objective_selection(session, windows),
        EditorStage::ObjectiveSelection => forward_to_save_scenario(session, windows),
        _ => {}
    }
}

fn back_to_object_selection(session: &mut EditorSession, windows: &mut WindowShelf) {
    windows.close_all();
    session.set_stage(EditorStage::ObjectSelection);
    windows.open(WindowClass::ObjectSelection);
}

fn back_to_landscape_editor(session: &mut EditorSession, windows: &mut WindowShelf) {
    windows.close_all();
    session.set_all_scenery_invented();
    session.reset_scenery_placement();
    session.set_stage(EditorStage::LandscapeEditor);
    windows.open(WindowClass::Map);
}

fn back_to_invention_list(session: &mut EditorSession, windows: &mut WindowShelf) {
    windows.close_all();
    windows.open(WindowClass::InventionList);
    session.set_stage(EditorStage::InventionsListSetUp);
}

fn back_to_options_selection(session: &mut EditorSession, windows: &mut WindowShelf) {
    windows.close_all();
    windows.open(WindowClass::ScenarioOptions);
    session.set_stage(EditorStage::OptionsSelection);
}

fn forward_from_object_selection(session: &mut EditorSession, windows: &mut WindowShelf) {
    if let Err(err) = session.check_object_selection() {
        windows.show_error(&err);
        if let StepError::MissingObjects { category, .. } = err {
            windows.focus_object_tab(category);
        }
        return;
    }
    windows.close(WindowClass::ObjectSelection);
    session.finish_object_selection();
    if session.mode == EditorMode::TrackDesigner {
        windows.open(WindowClass::RideConstruction);
    } else {
        windows.open(WindowClass::Map);
    }
}

fn forward_to_invention_list(session: &mut EditorSession, windows: &mut WindowShelf) {
    match session.check_park() {
        Ok(()) => {
            windows.close_all();
            windows.open(WindowClass::InventionList);
            session.set_stage(EditorStage::InventionsListSetUp);
        }
        Err(err) => windows.show_error(&err),
    }
}

fn forward_to_options_selection(session: &mut EditorSession, windows: &mut WindowShelf) {
    windows.close_all();
    windows.open(WindowClass::ScenarioOptions);
    session.set_stage(EditorStage::OptionsSelection);
}

fn forward_to_objective_selection(session: &mut EditorSession, windows: &mut WindowShelf) {
    windows.close_all();
    windows.open(WindowClass::ObjectiveOptions);
    session.set_stage(EditorStage::ObjectiveSelection);
}

fn forward_to_save_scenario(session: &mut EditorSession, windows: &mut WindowShelf) {
    if let Err(err) = session.prepare_for_save() {
        windows.show_error(&err);
        return;
    }
    windows.close_all();
    windows.save_filename = session.scenario.suggested_filename();
    windows.open(WindowClass::SaveScenario);
    session.set_stage(EditorStage::SaveScenario);
}

/// Hover only recolors the label text; it never dispatches.
fn label_color(hovered: bool) -> egui::Color32 {
    if hovered { HOVER_TEXT_COLOR } else { TEXT_COLOR }
}

/// Paints the bottom toolbar panel and dispatches step clicks.
pub fn show(ctx: &egui::Context, session: &mut EditorSession, windows: &mut WindowShelf) {
    egui::TopBottomPanel::bottom("editor_stage_toolbar")
        .exact_height(TOOLBAR_HEIGHT)
        .show(ctx, |ui| {
            let visibility = ButtonVisibility::compute(session);
            let panel_rect = ui.max_rect();

            if session.mode != EditorMode::TrackManager {
                ui.painter().text(
                    panel_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    session.stage().label(),
                    egui::FontId::proportional(13.0),
                    TEXT_COLOR,
                );
            }

            let mut clicked: Option<StepDirection> = None;

            if visibility.previous {
                let rect = egui::Rect::from_min_size(
                    panel_rect.left_top() + egui::vec2(2.0, 2.0),
                    egui::vec2(BUTTON_WIDTH, BUTTON_HEIGHT),
                );
                if let Some(destination) = back_destination(session) {
                    if draw_step_button(ui, rect, StepDirection::Back, destination) {
                        clicked = Some(StepDirection::Back);
                    }
                }
            }

            if visibility.next {
                let rect = egui::Rect::from_min_size(
                    egui::pos2(
                        panel_rect.right() - BUTTON_WIDTH - 2.0,
                        panel_rect.top() + 2.0,
                    ),
                    egui::vec2(BUTTON_WIDTH, BUTTON_HEIGHT),
                );
                if let Some(destination) = forward_destination(session) {
                    if draw_step_button(ui, rect, StepDirection::Forward, destination) {
                        clicked = Some(StepDirection::Forward);
                    }
                }
            }

            if let Some(direction) = clicked {
                step(session, windows, direction);
            }
        });
}

/// Draws one step button: translucent backing, inset body, directional arrow
/// and two centred caption lines. Returns true on click.
fn draw_step_button(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    direction: StepDirection,
    destination: EditorStage,
) -> bool {
    let id = ui.id().with(match direction {
        StepDirection::Back => "previous_step",
        StepDirection::Forward => "next_step",
    });
    let resp = ui.interact(rect, id, egui::Sense::click());
    let painter = ui.painter();

    painter.rect_filled(rect, 2.0, BACKING_FILL);
    painter.rect_filled(rect.shrink(2.0), 2.0, BUTTON_FILL);

    let color = label_color(resp.hovered());
    let (arrow, arrow_x, text_center_x) = match direction {
        StepDirection::Back => (
            "◀",
            rect.left() + ARROW_WIDTH / 2.0 + 4.0,
            rect.center().x + ARROW_WIDTH / 2.0,
        ),
        StepDirection::Forward => (
            "▶",
            rect.right() - ARROW_WIDTH / 2.0 - 4.0,
            rect.center().x - ARROW_WIDTH / 2.0,
        ),
    };

    painter.text(
        egui::pos2(arrow_x, rect.center().y),
        egui::Align2::CENTER_CENTER,
        arrow,
        egui::FontId::proportional(18.0),
        color,
    );

    let caption_id = match direction {
        StepDirection::Back => TextId::BackToPreviousStep,
        StepDirection::Forward => TextId::ForwardToNextStep,
    };
    painter.text(
        egui::pos2(text_center_x, rect.top() + 9.0),
        egui::Align2::CENTER_CENTER,
        strings::text(caption_id),
        egui::FontId::proportional(11.0),
        color,
    );
    painter.text(
        egui::pos2(text_center_x, rect.top() + 20.0),
        egui::Align2::CENTER_CENTER,
        destination.label(),
        egui::FontId::proportional(11.0),
        color,
    );

    resp.clicked()
}

#[cfg(test)]
mod tests {
    use super::{
        ButtonVisibility, StepDirection, back_destination, forward_destination, label_color, step,
    };
    use crate::objects::ObjectCategory;
    use crate::scenario::Objective;
    use crate::session::{EditorMode, EditorSession};
    use crate::stage::EditorStage;
    use crate::windows::{WindowClass, WindowShelf};

    fn editor_session(mode: EditorMode) -> EditorSession {
        let mut session = EditorSession::new(mode);
        for category in ObjectCategory::ALL {
            session
                .objects
                .set_count(category, category.required_minimum());
        }
        session.park.available_rides = 5;
        session.park.has_park_entrance = true;
        session.park.has_guest_spawn = true;
        session.scenario.name = "Forest Frontiers".to_string();
        session.scenario.objective = Some(Objective::HaveFunGuests);
        session
    }

    fn at_stage(stage: EditorStage) -> EditorSession {
        let mut session = editor_session(EditorMode::ScenarioEditor);
        session.set_stage(stage);
        session
    }

    #[test]
    fn back_reaches_the_immediately_preceding_stage() {
        let cases = [
            (EditorStage::LandscapeEditor, EditorStage::ObjectSelection),
            (EditorStage::InventionsListSetUp, EditorStage::LandscapeEditor),
            (EditorStage::OptionsSelection, EditorStage::InventionsListSetUp),
            (EditorStage::ObjectiveSelection, EditorStage::OptionsSelection),
        ];
        for (from, to) in cases {
            let mut session = at_stage(from);
            let mut windows = WindowShelf::default();
            step(&mut session, &mut windows, StepDirection::Back);
            assert_eq!(session.stage(), to, "back from {from:?}");
        }
    }

    #[test]
    fn track_designer_always_backs_to_object_selection() {
        let mut session = editor_session(EditorMode::TrackDesigner);
        session.set_stage(EditorStage::RollercoasterDesigner);
        let mut windows = WindowShelf::default();
        step(&mut session, &mut windows, StepDirection::Back);
        assert_eq!(session.stage(), EditorStage::ObjectSelection);
        assert!(windows.is_open(WindowClass::ObjectSelection));
    }

    #[test]
    fn back_is_ignored_once_the_map_has_sprites() {
        let mut session = at_stage(EditorStage::InventionsListSetUp);
        session.park.sprites_initialised = true;
        let mut windows = WindowShelf::default();
        step(&mut session, &mut windows, StepDirection::Back);
        assert_eq!(session.stage(), EditorStage::InventionsListSetUp);
        assert_eq!(windows.open_count(), 0);
    }

    #[test]
    fn back_to_landscape_reinvents_scenery_and_opens_the_map() {
        let mut session = at_stage(EditorStage::InventionsListSetUp);
        session.all_scenery_invented = false;
        session.scenery_placement_default = false;
        let mut windows = WindowShelf::default();
        windows.open(WindowClass::InventionList);
        step(&mut session, &mut windows, StepDirection::Back);
        assert_eq!(session.stage(), EditorStage::LandscapeEditor);
        assert!(session.all_scenery_invented);
        assert!(session.scenery_placement_default);
        assert!(windows.is_open(WindowClass::Map));
        assert!(!windows.is_open(WindowClass::InventionList));
    }

    #[test]
    fn forward_advances_through_the_linear_stages() {
        let cases = [
            (EditorStage::LandscapeEditor, EditorStage::InventionsListSetUp),
            (EditorStage::InventionsListSetUp, EditorStage::OptionsSelection),
            (EditorStage::OptionsSelection, EditorStage::ObjectiveSelection),
            (EditorStage::ObjectiveSelection, EditorStage::SaveScenario),
        ];
        for (from, to) in cases {
            let mut session = at_stage(from);
            let mut windows = WindowShelf::default();
            step(&mut session, &mut windows, StepDirection::Forward);
            assert_eq!(session.stage(), to, "forward from {from:?}");
            assert!(windows.error.is_none());
        }
    }

    #[test]
    fn forward_from_object_selection_opens_the_map() {
        let mut session = editor_session(EditorMode::ScenarioEditor);
        let mut windows = WindowShelf::default();
        windows.open(WindowClass::ObjectSelection);
        step(&mut session, &mut windows, StepDirection::Forward);
        assert_eq!(session.stage(), EditorStage::LandscapeEditor);
        assert!(session.objects.is_finalized());
        assert!(windows.is_open(WindowClass::Map));
        assert!(!windows.is_open(WindowClass::ObjectSelection));
    }

    #[test]
    fn forward_from_object_selection_in_designer_mode_opens_ride_construction() {
        let mut session = editor_session(EditorMode::TrackDesigner);
        let mut windows = WindowShelf::default();
        step(&mut session, &mut windows, StepDirection::Forward);
        assert_eq!(session.stage(), EditorStage::RollercoasterDesigner);
        assert!(windows.is_open(WindowClass::RideConstruction));
    }

    #[test]
    fn incomplete_selection_aborts_and_refocuses_the_offending_tab() {
        let mut session = editor_session(EditorMode::ScenarioEditor);
        session.objects.set_count(ObjectCategory::Water, 0);
        let mut windows = WindowShelf::default();
        windows.open(WindowClass::ObjectSelection);
        step(&mut session, &mut windows, StepDirection::Forward);
        assert_eq!(session.stage(), EditorStage::ObjectSelection);
        assert!(windows.error.is_some());
        assert!(windows.is_open(WindowClass::ObjectSelection));
        assert_eq!(windows.focused_object_tab, ObjectCategory::Water);
    }

    #[test]
    fn failed_park_check_leaves_everything_in_place() {
        let mut session = at_stage(EditorStage::LandscapeEditor);
        session.park.available_rides = 0;
        let mut windows = WindowShelf::default();
        windows.open(WindowClass::Map);
        step(&mut session, &mut windows, StepDirection::Forward);
        assert_eq!(session.stage(), EditorStage::LandscapeEditor);
        assert!(windows.is_open(WindowClass::Map));
        assert!(!windows.is_open(WindowClass::InventionList));
        assert!(windows.error.is_some());
    }

    #[test]
    fn successful_save_preparation_opens_a_prefilled_save_dialog() {
        let mut session = at_stage(EditorStage::ObjectiveSelection);
        let mut windows = WindowShelf::default();
        step(&mut session, &mut windows, StepDirection::Forward);
        assert_eq!(session.stage(), EditorStage::SaveScenario);
        assert!(windows.is_open(WindowClass::SaveScenario));
        assert_eq!(windows.save_filename, "Forest Frontiers.park.json");
    }

    #[test]
    fn failed_save_preparation_opens_no_dialog() {
        let mut session = at_stage(EditorStage::ObjectiveSelection);
        session.scenario.objective = None;
        let mut windows = WindowShelf::default();
        step(&mut session, &mut windows, StepDirection::Forward);
        assert_eq!(session.stage(), EditorStage::ObjectiveSelection);
        assert!(!windows.is_open(WindowClass::SaveScenario));
        assert!(windows.error.is_some());
    }

    #[test]
    fn track_manager_never_shows_either_button() {
        let mut session = editor_session(EditorMode::TrackManager);
        for stage in EditorStage::ALL {
            session.set_stage(stage);
            let visibility = ButtonVisibility::compute(&session);
            assert!(!visibility.previous, "previous shown at {stage:?}");
            assert!(!visibility.next, "next shown at {stage:?}");
        }
    }

    #[test]
    fn next_button_is_hidden_at_the_rollercoaster_designer_stage() {
        let mut session = editor_session(EditorMode::TrackDesigner);
        session.set_stage(EditorStage::RollercoasterDesigner);
        let visibility = ButtonVisibility::compute(&session);
        assert!(!visibility.next);
        assert!(visibility.previous);
    }

    #[test]
    fn previous_button_is_hidden_at_the_first_stage() {
        let session = editor_session(EditorMode::ScenarioEditor);
        let visibility = ButtonVisibility::compute(&session);
        assert!(!visibility.previous);
        assert!(visibility.next);
    }

    #[test]
    fn previous_button_disappears_once_the_map_has_sprites() {
        let mut session = at_stage(EditorStage::OptionsSelection);
        assert!(ButtonVisibility::compute(&session).previous);
        session.park.free_sprite_slots -= 1;
        assert!(!ButtonVisibility::compute(&session).previous);
    }

    #[test]
    fn destinations_follow_the_mode_overrides() {
        let designer = editor_session(EditorMode::TrackDesigner);
        assert_eq!(
            forward_destination(&designer),
            Some(EditorStage::RollercoasterDesigner)
        );
        let mut designer_end = editor_session(EditorMode::TrackDesigner);
        designer_end.set_stage(EditorStage::RollercoasterDesigner);
        assert_eq!(
            back_destination(&designer_end),
            Some(EditorStage::ObjectSelection)
        );

        let scenario = at_stage(EditorStage::OptionsSelection);
        assert_eq!(
            back_destination(&scenario),
            Some(EditorStage::InventionsListSetUp)
        );
        assert_eq!(
            forward_destination(&scenario),
            Some(EditorStage::ObjectiveSelection)
        );
    }

    #[test]
    fn hover_only_changes_the_text_color() {
        assert_ne!(label_color(true), label_color(false));
        assert_eq!(label_color(true), egui::Color32::WHITE);
    }
}
