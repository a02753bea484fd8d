//! Pie chart geometry for the category summary, drawn as inline SVG.

use std::f64::consts::PI;

use crate::store::CategoryTotal;

pub const PALETTE: [&str; 4] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0"];

pub const VIEW_SIZE: f64 = 200.0;
pub const RADIUS: f64 = 90.0;
const CENTER: f64 = VIEW_SIZE / 2.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub color: &'static str,
    /// SVG path data; empty when the slice is the whole pie.
    pub path: String,
}

impl PieSlice {
    pub fn is_full_circle(&self) -> bool {
        self.path.is_empty()
    }
}

/// Slices start at twelve o'clock and run clockwise. Non-positive totals
/// are left out.
pub fn pie_slices(totals: &[CategoryTotal]) -> Vec<PieSlice> {
    let positive: Vec<&CategoryTotal> = totals.iter().filter(|t| t.amount > 0.0).collect();
    let sum: f64 = positive.iter().map(|t| t.amount).sum();
    if sum <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    positive
        .into_iter()
        .enumerate()
        .map(|(idx, total)| {
            let fraction = total.amount / sum;
            let end = start + fraction;
            let path = if is_whole(fraction) {
                String::new()
            } else {
                arc_path(start, end)
            };
            start = end;

            PieSlice {
                label: total.category.clone(),
                value: total.amount,
                fraction,
                color: PALETTE[idx % PALETTE.len()],
                path,
            }
        })
        .collect()
}

fn is_whole(fraction: f64) -> bool {
    fraction >= 1.0 - 1e-9
}

fn point_at(turn: f64) -> (f64, f64) {
    let angle = turn * 2.0 * PI - PI / 2.0;
    (CENTER + RADIUS * angle.cos(), CENTER + RADIUS * angle.sin())
}

fn arc_path(start: f64, end: f64) -> String {
    let (x0, y0) = point_at(start);
    let (x1, y1) = point_at(end);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M {c:.3} {c:.3} L {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} Z",
        c = CENTER,
        r = RADIUS,
    )
}
