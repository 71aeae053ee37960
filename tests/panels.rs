use std::path::Path;

use teacup_viz::events::{AppCommand, CommandQueue};
use teacup_viz::panels::*;
use teacup_viz::PlotLabels;

#[test]
fn panel_titles_match_window_sections() {
    assert_eq!(FileBrowserPanel::default().title(), "Select Folder");
    assert_eq!(PlotPanel::new(PlotLabels::default()).title(), "Data Visualizer");
    assert_eq!(LoggerPanel::default().title(), "Data Logger");
}

#[test]
fn heading_contains_icon_and_title() {
    let p = LoggerPanel::default();
    let label = p.title_and_icon();
    assert!(label.contains(p.title()));
    assert!(label.contains(p.icon()));
}

#[test]
fn logger_prompts_are_stable() {
    assert_eq!(
        LoggerPanel::FILE_NAME_PROMPT,
        "Enter file name. Leave Empty to use default"
    );
    assert_eq!(LoggerPanel::TEMPERATURE_PROMPT, "Enter the temperature (in deg. C)");
    assert_eq!(LoggerPanel::SAVE_LABEL, "Save Data");
    assert_eq!(PlotPanel::CLEAR_LABEL, "Clear Plot");
}

#[test]
fn default_plot_labels() {
    let labels = PlotLabels::default();
    assert_eq!(labels.title, "Temperature Decay Curve");
    assert_eq!(labels.x_axis, "Time (minutes)");
}

#[test]
fn command_queue_drains_in_order() {
    let mut queue = CommandQueue::default();
    queue.push(AppCommand::ClearPlot);
    queue.push(AppCommand::BrowseDataFolder);
    let drained: Vec<AppCommand> = queue.drain().collect();
    assert_eq!(drained, vec![AppCommand::ClearPlot, AppCommand::BrowseDataFolder]);
    assert!(queue.is_empty());
}

#[test]
fn browser_highlight_resets_when_folder_changes() {
    let mut browser = FileBrowserPanel::default();
    browser.follow_folder(Path::new("/data/monday"));
    browser.select("cup.csv");
    browser.follow_folder(Path::new("/data/monday"));
    assert_eq!(browser.selected(), Some("cup.csv"));

    browser.follow_folder(Path::new("/data/tuesday"));
    assert_eq!(browser.selected(), None);
}
