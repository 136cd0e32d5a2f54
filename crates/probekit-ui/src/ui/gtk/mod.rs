//! GTK widget implementations

pub mod auto_tool_zero;
pub mod prompt;
pub mod tool_zero_panel;

pub use auto_tool_zero::AutoToolZeroWindow;
pub use prompt::PromptWindow;
pub use tool_zero_panel::ToolZeroPanel;
