//! Statistical checks of vegetation coverage per terrain type

use wildfire_core::{FireSpreadEngine, Humidity, SimulationParameters, TerrainType};

/// Inert fraction right after configure, averaged over a few seeds
fn inert_fraction(terrain: TerrainType, size: usize) -> f64 {
    let seeds = 0..4u64;
    let total: f64 = seeds
        .clone()
        .map(|seed| {
            let mut engine = FireSpreadEngine::with_seed(size, size, seed).unwrap();
            engine.configure(SimulationParameters::new(Humidity::Normal, terrain));
            engine.statistics().fraction_inert
        })
        .sum();
    total / seeds.count() as f64
}

#[test]
fn test_scattered_terrain_is_about_half_inert() {
    let fraction = inert_fraction(TerrainType::Scattered, 200);
    assert!((fraction - 0.5).abs() < 0.01, "inert fraction {fraction}");
}

#[test]
fn test_scattered_estimate_tightens_with_grid_size() {
    // A single large grid must land much closer to 0.5 than the loose bound
    // a tiny grid is held to.
    let small = inert_fraction(TerrainType::Scattered, 12);
    let large = inert_fraction(TerrainType::Scattered, 300);
    assert!((small - 0.5).abs() < 0.2, "small grid {small}");
    assert!((large - 0.5).abs() < 0.01, "large grid {large}");
}

#[test]
fn test_coverage_per_terrain() {
    for terrain in TerrainType::ALL {
        let expected = 1.0 - *terrain.coverage();
        let fraction = inert_fraction(terrain, 150);
        assert!(
            (fraction - expected).abs() < 0.01,
            "{terrain}: expected ~{expected}, got {fraction}"
        );
    }
}

#[test]
fn test_continuous_terrain_has_no_inert_cells() {
    assert_eq!(inert_fraction(TerrainType::Continuous, 100), 0.0);
}
