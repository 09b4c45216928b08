use serde::{Deserialize, Serialize};

const MIN_MAGNITUDE: f64 = 0.2;
const MAX_MAGNITUDE: f64 = 1.0;

/// Position of a card on the unit compass disc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompassPoint {
    pub x: f64,
    pub y: f64,
}

impl CompassPoint {
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Map a 0..=100 stat onto -1..=1
fn normalize(stat: u8) -> f64 {
    f64::from(stat.min(100)) / 50.0 - 1.0
}

/// Project virality/stonks/chaos stats onto the compass.
///
/// X grows with virality and shrinks with chaos, Y grows with stonks and is
/// pulled down by calm. The result keeps its direction but its length is
/// clamped to `0.2..=1.0`; a zero vector stays at the origin.
pub fn stat_vector(virality: u8, stonks: u8, chaos: u8) -> CompassPoint {
    let v = normalize(virality);
    let s = normalize(stonks);
    let c = normalize(chaos);

    let x = v - 0.6 * c;
    let y = s - 0.2 * (1.0 - c);

    let raw = x.hypot(y);
    if raw < f64::EPSILON {
        return CompassPoint { x: 0.0, y: 0.0 };
    }

    let scale = raw.clamp(MIN_MAGNITUDE, MAX_MAGNITUDE) / raw;
    CompassPoint {
        x: x * scale,
        y: y * scale,
    }
}
