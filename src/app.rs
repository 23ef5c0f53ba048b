use std::path::PathBuf;

use tracing::info;

use crate::config::AppConfig;
use crate::objects::ObjectCategory;
use crate::scenario::{self, Objective};
use crate::session::{EditorMode, EditorSession};
use crate::stage::EditorStage;
use crate::toolbar;
use crate::windows::{WindowClass, WindowShelf};

pub struct EditorApp {
    session: EditorSession,
    windows: WindowShelf,
    config: AppConfig,
    save_dir: String,
    save_status: String,
}

impl EditorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, mode: EditorMode) -> Self {
        let session = EditorSession::new(mode);
        let mut windows = WindowShelf::default();
        if session.stage() == EditorStage::ObjectSelection {
            windows.open(WindowClass::ObjectSelection);
        }
        let save_dir = config
            .last_save_dir
            .clone()
            .unwrap_or_else(scenario::default_save_dir)
            .display()
            .to_string();
        Self {
            session,
            windows,
            config,
            save_dir,
            save_status: String::new(),
        }
    }

    fn open_window_classes(&self) -> Vec<WindowClass> {
        [
            WindowClass::ObjectSelection,
            WindowClass::Map,
            WindowClass::InventionList,
            WindowClass::ScenarioOptions,
            WindowClass::ObjectiveOptions,
            WindowClass::RideConstruction,
            WindowClass::SaveScenario,
        ]
        .into_iter()
        .filter(|c| self.windows.is_open(*c))
        .collect()
    }

    fn show_window(&mut self, ctx: &egui::Context, class: WindowClass) {
        let mut open = true;
        egui::Window::new(window_title(class))
            .id(egui::Id::new(window_title(class)))
            .open(&mut open)
            .default_size(window_default_size(class))
            .show(ctx, |ui| match class {
                WindowClass::ObjectSelection => self.show_object_selection(ui),
                WindowClass::Map => self.show_map(ui),
                WindowClass::InventionList => self.show_invention_list(ui),
                WindowClass::ScenarioOptions => self.show_scenario_options(ui),
                WindowClass::ObjectiveOptions => self.show_objective_options(ui),
                WindowClass::RideConstruction => self.show_ride_construction(ui),
                WindowClass::SaveScenario => self.show_save_dialog(ui),
            });
        if !open {
            self.windows.close(class);
        }
    }

    fn show_object_selection(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for category in ObjectCategory::ALL {
                let selected = self.windows.focused_object_tab == category;
                if ui.selectable_label(selected, category.label()).clicked() {
                    self.windows.focused_object_tab = category;
                }
            }
        });
        ui.separator();

        let category = self.windows.focused_object_tab;
        let minimum = category.required_minimum();
        if minimum > 0 {
            ui.label(format!(
                "At least {} {} object(s) must be selected",
                minimum,
                category.label()
            ));
        } else {
            ui.label(egui::RichText::new("Optional category").weak());
        }

        let mut count = self.session.objects.count(category);
        ui.horizontal(|ui| {
            ui.label("Selected objects");
            ui.add(egui::DragValue::new(&mut count).range(0_usize..=128_usize));
        });
        self.session.objects.set_count(category, count);
    }

    fn show_map(&mut self, ui: &mut egui::Ui) {
        ui.label("Landscape overview");
        ui.separator();
        ui.checkbox(
            &mut self.session.park.has_park_entrance,
            "Park entrance placed",
        );
        ui.checkbox(
            &mut self.session.park.has_guest_spawn,
            "Guest entry point placed",
        );
    }

    fn show_invention_list(&mut self, ui: &mut egui::Ui) {
        ui.label("Rides researched at scenario start");
        ui.horizontal(|ui| {
            ui.label("Available rides");
            ui.add(egui::DragValue::new(&mut self.session.park.available_rides).range(0_usize..=64_usize));
        });
        ui.checkbox(
            &mut self.session.all_scenery_invented,
            "All scenery invented",
        );
    }

    fn show_scenario_options(&mut self, ui: &mut egui::Ui) {
        ui.label("Park name");
        ui.text_edit_singleline(&mut self.session.scenario.park_name);
        ui.add_space(4.0);
        ui.label("Description");
        ui.text_edit_multiline(&mut self.session.scenario.description);
    }

    fn show_objective_options(&mut self, ui: &mut egui::Ui) {
        ui.label("Scenario name");
        ui.text_edit_singleline(&mut self.session.scenario.name);
        ui.add_space(4.0);
        let selected_text = self
            .session
            .scenario
            .objective
            .map(Objective::label)
            .unwrap_or("(none)");
        egui::ComboBox::from_label("Objective")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for objective in Objective::ALL {
                    ui.selectable_value(
                        &mut self.session.scenario.objective,
                        Some(objective),
                        objective.label(),
                    );
                }
            });
    }

    fn show_ride_construction(&mut self, ui: &mut egui::Ui) {
        ui.label("Track layout");
        ui.label(egui::RichText::new("Place track pieces on the map to design the ride").weak());
    }

    fn show_save_dialog(&mut self, ui: &mut egui::Ui) {
        ui.label("Directory");
        ui.add(
            egui::TextEdit::singleline(&mut self.save_dir)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Monospace),
        );
        ui.add_space(4.0);
        ui.label("File name");
        ui.text_edit_singleline(&mut self.windows.save_filename);

        ui.add_space(8.0);
        if ui.button("Save scenario").clicked() {
            let path = expand_home_prefix(&self.save_dir).join(&self.windows.save_filename);
            match self.session.scenario.save(&path) {
                Ok(()) => {
                    info!(path = %path.display(), "scenario saved");
                    self.save_status = format!("Saved to {}", path.display());
                }
                Err(err) => {
                    self.save_status = format!("Save failed: {}", err);
                }
            }
        }

        if !self.save_status.is_empty() {
            ui.add_space(4.0);
            ui.separator();
            ui.label(&self.save_status);
        }
    }

    fn show_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.windows.error.clone() else {
            return;
        };
        let mut dismiss = false;
        egui::Window::new(&dialog.title)
            .id(egui::Id::new("step_error_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&dialog.detail);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismiss = true;
                }
            });
        if dismiss {
            self.windows.dismiss_error();
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window size for saving on exit
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.window_width = Some(rect.width());
            self.config.window_height = Some(rect.height());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            ui.painter()
                .rect_filled(rect, 0.0, egui::Color32::from_rgb(44, 66, 44));
            if self.session.mode == EditorMode::TrackManager {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Select a track design to rename or delete",
                    egui::FontId::proportional(14.0),
                    egui::Color32::from_gray(200),
                );
            }
        });

        for class in self.open_window_classes() {
            self.show_window(ctx, class);
        }
        self.show_error_dialog(ctx);

        toolbar::show(ctx, &mut self.session, &mut self.windows);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.last_save_dir = Some(expand_home_prefix(&self.save_dir));
        self.config.save();
    }
}

fn window_title(class: WindowClass) -> &'static str {
    match class {
        WindowClass::ObjectSelection => "Object Selection",
        WindowClass::Map => "Map",
        WindowClass::InventionList => "Inventions List",
        WindowClass::ScenarioOptions => "Scenario Options",
        WindowClass::ObjectiveOptions => "Objective Selection",
        WindowClass::RideConstruction => "Ride Construction",
        WindowClass::SaveScenario => "Save Scenario",
    }
}

fn window_default_size(class: WindowClass) -> [f32; 2] {
    match class {
        WindowClass::ObjectSelection => [560.0, 320.0],
        WindowClass::Map => [360.0, 240.0],
        WindowClass::SaveScenario => [480.0, 200.0],
        _ => [400.0, 260.0],
    }
}

fn expand_home_prefix(raw: &str) -> PathBuf {
    if raw == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
