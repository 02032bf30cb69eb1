use super::config::GameConfig;
use super::state::{Position, Target};
use rand::Rng;

/// Build a fresh board of `count` targets, indices `1..=count`, each placed
/// uniformly in `[0, area - diameter)` on both axes.
pub fn random_layout<R: Rng + ?Sized>(
    count: u32,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<Target> {
    let span = config.placement_span();
    (1..=count)
        .map(|index| {
            let x = rng.gen_range(0.0..span);
            let y = rng.gen_range(0.0..span);
            Target::new(index, Position::new(x, y))
        })
        .collect()
}

/// Index of the topmost target whose circle contains `(x, y)`.
///
/// Targets are painted in slice order, so the last match wins. Fading targets
/// are still hit.
pub fn target_at(targets: &[Target], x: f64, y: f64, diameter: f64) -> Option<u32> {
    let radius = diameter / 2.0;
    targets
        .iter()
        .rev()
        .find(|t| {
            let dx = x - (t.position.x + radius);
            let dy = y - (t.position.y + radius);
            dx * dx + dy * dy <= radius * radius
        })
        .map(|t| t.index)
}
