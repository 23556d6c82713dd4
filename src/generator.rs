// Random array generation

use rand::Rng;

/// Generate `count` integers, each uniform in `[min_value, max_value]`.
///
/// The range must be non-empty; [`VisualizerConfig::validate`] checks this
/// before any array is generated.
///
/// [`VisualizerConfig::validate`]: crate::config::VisualizerConfig::validate
pub fn generate<R: Rng>(
    rng: &mut R,
    count: usize,
    min_value: i64,
    max_value: i64,
) -> Vec<i64> {
    (0..count)
        .map(|_| rng.gen_range(min_value..=max_value))
        .collect()
}
