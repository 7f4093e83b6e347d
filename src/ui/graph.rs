use eframe::epaint::{Color32, Rounding, Stroke};
use egui::{pos2, vec2};

/// Rolling line graph of axis triples. Values are expected in `[-1, 1]`.
pub fn graph(items: &[[f32; 3]], ui: &mut egui::Ui) -> egui::Response {
    let height = ui.spacing().interact_size.y * 10.0;

    let (rect, response) =
        ui.allocate_exact_size(vec2(ui.available_rect_before_wrap().width(), height), egui::Sense::hover());

    let rect = rect.shrink(ui.visuals().noninteractive().bg_stroke.width);
    let height = height - (ui.visuals().noninteractive().bg_stroke.width * 2.0);
    let adv = rect.width() / (items.len().max(2) - 1) as f32;

    ui.painter().rect_filled(response.rect, Rounding::ZERO, Color32::BLACK);
    ui.painter().line_segment([rect.left_center(), rect.right_center()], Stroke::new(2.0, Color32::GRAY));

    // positive values draw upwards
    let to_y = |value: f32| rect.min.y + ((1.0 - value) / 2.0) * height;
    let colors = [Color32::RED, Color32::GREEN, Color32::BLUE];

    let mut i: usize = 1;
    while i < items.len() {
        let left = rect.min.x + adv * ((i - 1) as f32);
        let right = rect.min.x + adv * (i as f32);

        for (axis, color) in colors.iter().enumerate() {
            ui.painter().line_segment(
                [pos2(left, to_y(items[i - 1][axis])), pos2(right, to_y(items[i][axis]))],
                Stroke::new(2.0, *color),
            );
        }

        i += 1;
    }

    ui.painter().rect(response.rect, Rounding::ZERO, Color32::TRANSPARENT, ui.visuals().noninteractive().bg_stroke);
    response
}
