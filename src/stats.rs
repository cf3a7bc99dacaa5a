use crate::models::BoxScore;
use serde::Serialize;

/// Shooting percentage with one fractional digit, e.g. `"50.0"`.
///
/// Nothing attempted reads as `"0.0"`. Rounding works on the `f64` ratio, so
/// `23/80` (stored just under 28.75) gives `"28.7"`, while a ratio that lands
/// exactly on a half, like `1/16`, rounds up to `"6.3"`.
pub fn percentage(made: u32, attempted: u32) -> String {
    if attempted == 0 {
        return "0.0".to_string();
    }

    let pct = f64::from(made) / f64::from(attempted) * 100.0;
    // `{:.1}` sends exact halves to even; they go up here.
    let twentieths = (pct * 20.0).round();
    if pct.mul_add(20.0, -twentieths) == 0.0 && twentieths % 2.0 == 1.0 {
        let tenths = (twentieths as u64 + 1) / 2;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }
    format!("{pct:.1}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShootingLine {
    pub label: &'static str,
    pub made: u32,
    pub attempted: u32,
    pub pct: String,
}

impl ShootingLine {
    fn new(label: &'static str, made: u32, attempted: u32) -> Self {
        Self {
            label,
            made,
            attempted,
            pct: percentage(made, attempted),
        }
    }
}

pub fn shooting_lines(stats: &BoxScore) -> [ShootingLine; 3] {
    [
        ShootingLine::new(
            "Field Goals",
            stats.field_goals_made,
            stats.field_goals_attempted,
        ),
        ShootingLine::new(
            "Three Pointers",
            stats.three_pointers_made,
            stats.three_pointers_attempted,
        ),
        ShootingLine::new(
            "Free Throws",
            stats.free_throws_made,
            stats.free_throws_attempted,
        ),
    ]
}
