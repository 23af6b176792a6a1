use std::collections::HashSet;

use crate::core::ViewPortHandler;
use crate::render::TextHAlign;

use super::{AxisDependency, YAxisLabelPosition};

/// Hides repeated label texts, keeping the occurrence nearest the top.
///
/// `labels` is ordered bottom entry first. The scan runs from the top entry
/// down; the top entry is always kept and any text already seen is hidden.
/// If that hides the bottom entry, the lowest entry still carrying a label
/// hands its text down to the bottom entry so the axis start stays labelled.
#[must_use]
pub fn suppress_duplicate_labels(labels: &[String]) -> Vec<Option<String>> {
    let count = labels.len();
    let mut kept: Vec<Option<String>> = vec![None; count];
    let mut seen: HashSet<&str> = HashSet::with_capacity(count);

    for index in (0..count).rev() {
        let label = labels[index].as_str();
        if index == count - 1 || !seen.contains(label) {
            seen.insert(label);
            if !label.is_empty() {
                kept[index] = Some(label.to_owned());
            }
        }
    }

    if matches!(kept.first(), Some(None)) {
        if let Some(lowest) = kept.iter().position(Option::is_some) {
            kept[0] = kept[lowest].take();
        }
    }

    kept
}

/// Fixed label x and alignment for the axis side and label position.
#[must_use]
pub fn fixed_label_anchor(
    view_port: &ViewPortHandler,
    dependency: AxisDependency,
    position: YAxisLabelPosition,
    x_offset: f64,
) -> (f64, TextHAlign) {
    match (dependency, position) {
        (AxisDependency::Left, YAxisLabelPosition::OutsideChart) => {
            (view_port.offset_left() - x_offset, TextHAlign::Right)
        }
        (AxisDependency::Left, YAxisLabelPosition::InsideChart) => {
            (view_port.offset_left() + x_offset, TextHAlign::Left)
        }
        (AxisDependency::Right, YAxisLabelPosition::OutsideChart) => {
            (view_port.content_right() + x_offset, TextHAlign::Left)
        }
        (AxisDependency::Right, YAxisLabelPosition::InsideChart) => {
            (view_port.content_right() - x_offset, TextHAlign::Right)
        }
    }
}

/// X that centers a `text_width` label in a `band_width` band ending at
/// `surface_width`. Labels that do not fit are pinned to x = 0.
#[must_use]
pub fn centered_in_band_x(text_width: f64, band_width: f64, surface_width: f64) -> f64 {
    if text_width > band_width {
        0.0
    } else {
        surface_width - band_width + (band_width - text_width) / 2.0
    }
}
