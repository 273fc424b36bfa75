//! UI actions and the view-level state they move between.

/// Which page the window is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppViewState {
    ToolSelection,
    Windrose,
}

/// Something the user clicked. Collected while drawing a frame and
/// dispatched once the frame's UI closures have returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    OpenWindrose,
    OpenOtherTool,
    BackToToolSelection,
    SelectFile,
    GenerateCharts,
    ShowPrevious,
    ShowNext,
    Clear,
}

impl UiAction {
    pub fn name(self) -> &'static str {
        match self {
            UiAction::OpenWindrose => "open_windrose",
            UiAction::OpenOtherTool => "open_other_tool",
            UiAction::BackToToolSelection => "back_to_tool_selection",
            UiAction::SelectFile => "select_file",
            UiAction::GenerateCharts => "generate_charts",
            UiAction::ShowPrevious => "show_previous",
            UiAction::ShowNext => "show_next",
            UiAction::Clear => "clear",
        }
    }
}
