pub mod file_browser_ui;
pub mod logger_ui;
pub mod panel_trait;
pub mod plot_ui;

pub use file_browser_ui::FileBrowserPanel;
pub use logger_ui::LoggerPanel;
pub use panel_trait::Panel;
pub use plot_ui::PlotPanel;
