//! Dispatch from UI actions to the windrose controller.

use windrose_core::{ChartRenderer, FileChooser, Notice, Notifier, WindroseController};

use crate::controller::events::{AppViewState, UiAction};

pub fn dispatch_ui_action<R, F, N>(
    controller: &mut WindroseController<R, F, N>,
    view: &mut AppViewState,
    action: UiAction,
) where
    R: ChartRenderer,
    F: FileChooser,
    N: Notifier,
{
    tracing::debug!(action = action.name(), "dispatching ui action");

    let outcome = match action {
        UiAction::OpenWindrose => {
            *view = AppViewState::Windrose;
            Ok(())
        }
        UiAction::OpenOtherTool => {
            controller.notifier_mut().notify(&Notice::info(
                "Other Tool",
                "This tool is currently under development.",
            ));
            Ok(())
        }
        UiAction::BackToToolSelection => {
            controller.reset();
            *view = AppViewState::ToolSelection;
            Ok(())
        }
        UiAction::SelectFile => controller.select_file(),
        UiAction::GenerateCharts => controller.generate_charts().map(|_| ()),
        UiAction::ShowPrevious => {
            controller.show_previous();
            Ok(())
        }
        UiAction::ShowNext => {
            controller.show_next();
            Ok(())
        }
        UiAction::Clear => {
            controller.clear();
            Ok(())
        }
    };

    if let Err(err) = outcome {
        tracing::debug!(action = action.name(), error = %err, "ui action reported an error");
    }
}
