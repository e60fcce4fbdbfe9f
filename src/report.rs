//! Human-readable bend listings.
use crate::types::BendResult;

/// Label for the bend at output position `index`: `A`..`Z`, then `AA`, `AB`, ...
pub fn bend_label(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// One line per angle record, e.g. `Bend A at (120, 45): 33.7°`.
pub fn format_report(result: &BendResult) -> Vec<String> {
    result
        .angles
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            format!(
                "Bend {} at ({}, {}): {:.1}°",
                bend_label(i),
                rec.point.x,
                rec.point.y,
                rec.angle_deg
            )
        })
        .collect()
}
