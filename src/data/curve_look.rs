//! CurveLook: visual styling for plotted temperature curves.

use eframe::egui;
use egui_plot::{LineStyle, MarkerShape};

/// How a curve is drawn: a line through the samples with a marker on each one.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveLook {
    pub color: egui::Color32,
    pub width: f32,
    pub style: LineStyle,
    pub show_points: bool,
    pub point_size: f32,
    pub marker: MarkerShape,
}

impl Default for CurveLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            width: 1.5,
            style: LineStyle::Solid,
            show_points: true,
            point_size: 3.0,
            marker: MarkerShape::Circle,
        }
    }
}

impl CurveLook {
    /// Create a look with a colour allocated from the curve index.
    pub fn new(index: usize) -> Self {
        Self {
            color: Self::alloc_color(index),
            ..Default::default()
        }
    }

    /// Allocate a distinct color for the given curve index.
    pub fn alloc_color(index: usize) -> egui::Color32 {
        const PALETTE: [egui::Color32; 10] = [
            egui::Color32::from_rgb(31, 119, 180),
            egui::Color32::from_rgb(255, 127, 14),
            egui::Color32::from_rgb(44, 160, 44),
            egui::Color32::from_rgb(214, 39, 40),
            egui::Color32::from_rgb(148, 103, 189),
            egui::Color32::from_rgb(140, 86, 75),
            egui::Color32::from_rgb(227, 119, 194),
            egui::Color32::from_rgb(127, 127, 127),
            egui::Color32::from_rgb(188, 189, 34),
            egui::Color32::from_rgb(23, 190, 207),
        ];
        PALETTE[index % PALETTE.len()]
    }
}
