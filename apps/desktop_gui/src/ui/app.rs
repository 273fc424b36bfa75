use std::path::PathBuf;

use eframe::egui;
use windrose_core::WindroseController;

use crate::controller::events::{AppViewState, UiAction};
use crate::controller::orchestration::dispatch_ui_action;
use crate::platform::{RfdFileChooser, RfdNotifier};
use crate::ui::chart_view::{show_polar_chart, EguiChartRenderer};

pub type GuiController = WindroseController<EguiChartRenderer, RfdFileChooser, RfdNotifier>;

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Opens the windrose page directly with this file selected.
    pub input_file: Option<PathBuf>,
}

pub struct WindroseGuiApp {
    controller: GuiController,
    view_state: AppViewState,
    /// Set once the user confirmed quitting so the next close request goes through.
    close_confirmed: bool,
}

impl WindroseGuiApp {
    pub fn new(startup: StartupConfig) -> Self {
        let mut controller = WindroseController::new(
            EguiChartRenderer::default(),
            RfdFileChooser,
            RfdNotifier::default(),
        );
        let view_state = match startup.input_file {
            Some(path) => {
                // Errors were already shown to the user by the controller.
                let _ = controller.preselect_file(path);
                AppViewState::Windrose
            }
            None => AppViewState::ToolSelection,
        };

        Self {
            controller,
            view_state,
            close_confirmed: false,
        }
    }

    fn show_tool_selection(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading(egui::RichText::new("Select a Tool").size(16.0));
                ui.add_space(20.0);
                if ui.button("Windrose Generator").clicked() {
                    actions.push(UiAction::OpenWindrose);
                }
                ui.add_space(10.0);
                if ui.button("Other Tool").clicked() {
                    actions.push(UiAction::OpenOtherTool);
                }
            });
        });
    }

    fn show_windrose_page(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let session = self.controller.session();
        let controls = session.controls();

        egui::TopBottomPanel::top("windrose_actions").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("⬅").on_hover_text("Back to tool selection").clicked() {
                    actions.push(UiAction::BackToToolSelection);
                }
                ui.separator();
                if ui
                    .add_enabled(controls.select, egui::Button::new("Select JSON File"))
                    .clicked()
                {
                    actions.push(UiAction::SelectFile);
                }
                if ui
                    .add_enabled(controls.generate, egui::Button::new("Generate Graphs"))
                    .clicked()
                {
                    actions.push(UiAction::GenerateCharts);
                }
                if ui
                    .add_enabled(controls.clear, egui::Button::new("Clear"))
                    .clicked()
                {
                    actions.push(UiAction::Clear);
                }
            });
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("windrose_navigation").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(controls.previous, egui::Button::new("< Previous"))
                    .clicked()
                {
                    actions.push(UiAction::ShowPrevious);
                }

                let position = match session.current_index() {
                    Some(index) => format!("Chart {} of {}", index + 1, session.charts().len()),
                    None => "No charts".to_string(),
                };
                let file = session
                    .selected_file()
                    .and_then(|path| path.file_name())
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "no file selected".to_string());
                ui.label(format!("{position} · {file}"));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(controls.next, egui::Button::new("Next >"))
                        .clicked()
                    {
                        actions.push(UiAction::ShowNext);
                    }
                    if let Some(notice) = self.controller.notifier().last() {
                        ui.weak(notice.text.as_str());
                    }
                });
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match session.current() {
            Some(rendered) => {
                ui.push_id(rendered.handle.id(), |ui| {
                    show_polar_chart(ui, &rendered.handle);
                });
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.weak("Select a windrose JSON file and generate graphs to view them here.");
                });
            }
        });
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) || self.close_confirmed {
            return;
        }
        if self.controller.request_shutdown() {
            tracing::debug!(
                live_handles = self.controller.session().renderer().live_handles(),
                "closing window"
            );
            self.close_confirmed = true;
        } else {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }
    }
}

impl eframe::App for WindroseGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_close_request(ctx);

        let mut actions = Vec::new();
        match self.view_state {
            AppViewState::ToolSelection => self.show_tool_selection(ctx, &mut actions),
            AppViewState::Windrose => self.show_windrose_page(ctx, &mut actions),
        }

        let dispatched = !actions.is_empty();
        for action in actions {
            dispatch_ui_action(&mut self.controller, &mut self.view_state, action);
        }
        // The frame above was drawn from the pre-action state.
        if dispatched {
            ctx.request_repaint();
        }
    }
}
