//! Normalisation of a numeric series into a fixed chart viewport.

/// Maps `values` into a `width` x `height` viewport.
///
/// Points are spread evenly along x. The y axis is inverted (screen
/// coordinates) so the maximum sits at the top edge and the minimum at the
/// bottom. A flat series, or a single value, sits on the vertical midline.
///
/// # Returns
///
/// One `[x, y]` point per value; empty for an empty series.
pub fn normalize(values: &[f64], width: f32, height: f32) -> Vec<[f32; 2]> {
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f32
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if values.len() > 1 {
                i as f32 * step
            } else {
                width / 2.0
            };
            let y = if range > 0.0 {
                height - ((value - min) / range) as f32 * height
            } else {
                height / 2.0
            };
            [x, y]
        })
        .collect()
}
