use egui::Ui;

use crate::app::AppState;
use crate::events::CommandQueue;

/// One titled section of the main window.
///
/// A panel reads the application state and reports user actions into the
/// command queue; it never changes the state itself.
pub trait Panel {
    fn title(&self) -> &'static str;
    fn icon(&self) -> &'static str;

    fn title_and_icon(&self) -> String {
        format!("{} {}", self.icon(), self.title())
    }

    fn render(&mut self, ui: &mut Ui, state: &AppState, commands: &mut CommandQueue);

    /// Draw the panel inside a group frame with its heading.
    fn show(&mut self, ui: &mut Ui, state: &AppState, commands: &mut CommandQueue) {
        ui.strong(self.title_and_icon());
        ui.separator();
        self.render(ui, state, commands);
    }
}
