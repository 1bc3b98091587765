use rand::seq::SliceRandom;
use rand::Rng;
use std::f64::consts::PI;

/// Motivational captions shown under the clock
pub const QUOTES: &[&str] = &[
    "One small step of focus. One giant leap for progress!",
    "Stars don't hurry, but they shine consistently.",
    "Do it for a minute. Then another. Build momentum.",
    "Focus now, celebrate later.",
];

/// Pick a caption uniformly at random. Empty list gives "".
pub fn pick_quote<'a, R: Rng + ?Sized>(rng: &mut R, quotes: &[&'a str]) -> &'a str {
    quotes.choose(rng).copied().unwrap_or("")
}

/// Points on a circle of `radius` around the origin, starting at 12 o'clock
/// and running clockwise for `percent` of the full turn.
pub fn arc_points(percent: f64, radius: f64, steps: usize) -> Vec<(f64, f64)> {
    let fraction = (percent / 100.0).clamp(0.0, 1.0);
    let count = (steps as f64 * fraction).round() as usize;
    (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / steps as f64;
            (radius * angle.sin(), radius * angle.cos())
        })
        .collect()
}
