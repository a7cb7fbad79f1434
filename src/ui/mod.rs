// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (form rows, legend)
// - render: Main orchestration function that coordinates all rendering
// - form: Renders the file name input, level dropdowns and text inputs
// - legend: Renders hotkey legend for the focused field
// - toast: Renders toast notifications (brief pop-up messages)

pub mod form;
pub mod layout;
pub mod legend;
pub mod render;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
