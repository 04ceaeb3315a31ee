use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rescalc::config::CalculatorKind;
use rescalc::resources::ResourceVector;

pub fn kinds() -> [CalculatorKind; 2] {
    [CalculatorKind::Default, CalculatorKind::Dominant]
}

/// Random vectors with `dimensions` slots, same for every run.
pub fn create_vectors(count: usize, dimensions: usize) -> Vec<ResourceVector> {
    let mut rng = SmallRng::seed_from_u64(0x2545_f491);
    (0..count)
        .map(|_| {
            let values: Vec<u64> = (0..dimensions)
                .map(|_| rng.random_range(0..16_384))
                .collect();
            ResourceVector::from_values(&values)
        })
        .collect()
}
