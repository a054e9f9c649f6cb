//! Distribution tests for the sampling layer.
//!
//! Pearson's chi-square statistic is compared against a critical value far
//! above the p = 0.001 quantile, so a healthy CSPRNG essentially never fails
//! while a skewed sampler (off-by-one bound, modulo bias on a small alphabet)
//! does.
//!
//! | Categories | df | p = 0.001 quantile | Threshold |
//! |------------|----|--------------------|-----------|
//! | 10         | 9  | 27.9               | 45.0      |
//! | 7          | 6  | 22.5               | 38.0      |
//! | 88         | 87 | 131.4              | 160.0     |
//! | 4          | 3  | 16.3               | 30.0      |

use keysmith_core::{
    build_pool, generate_password, generate_password_guaranteed, secure_random_int,
    CharacterClass, GenerationOptions, OsRandom,
};

#[allow(clippy::cast_precision_loss)]
fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

fn sample_counts(max: usize, samples: usize) -> Vec<u64> {
    let mut counts = vec![0u64; max];
    let mut rng = OsRandom;
    for _ in 0..samples {
        counts[secure_random_int(&mut rng, max).unwrap()] += 1;
    }
    counts
}

#[test]
fn secure_random_int_uniform_over_ten() {
    let counts = sample_counts(10, 100_000);
    let stat = chi_square(&counts);
    assert!(stat < 45.0, "chi-square {stat:.2} too high for max=10: {counts:?}");
}

#[test]
fn secure_random_int_uniform_over_seven() {
    let counts = sample_counts(7, 70_000);
    let stat = chi_square(&counts);
    assert!(stat < 38.0, "chi-square {stat:.2} too high for max=7: {counts:?}");
}

/// With `max = 2^31 + 1`, plain `draw % max` would put ~75% of results in
/// the lower half. Rejection sampling must keep it at ~50%.
#[test]
#[allow(clippy::cast_precision_loss)]
fn no_modulo_bias_at_worst_case_bound() {
    let max: usize = (1usize << 31) + 1;
    let samples = 20_000;
    let mut rng = OsRandom;
    let lower = (0..samples)
        .filter(|_| secure_random_int(&mut rng, max).unwrap() < max / 2)
        .count();
    let fraction = lower as f64 / f64::from(samples);
    assert!(
        (0.47..0.53).contains(&fraction),
        "lower-half fraction {fraction:.4} indicates modulo bias"
    );
}

#[test]
fn generated_characters_cover_pool_uniformly() {
    let options = GenerationOptions {
        length: 1_000,
        ..GenerationOptions::default()
    };
    let pool = build_pool(&options);
    let mut counts = vec![0u64; pool.len()];
    for _ in 0..100 {
        let pw = generate_password(&options).unwrap();
        for b in pw.bytes() {
            let idx = pool.iter().position(|&p| p == b).unwrap();
            counts[idx] += 1;
        }
    }
    let stat = chi_square(&counts);
    assert!(stat < 160.0, "chi-square {stat:.2} too high over 88-char pool");
}

/// With `length` equal to the class count the password is nothing but the
/// seeded characters, so any positional bias left by the shuffle shows up
/// directly in where each class lands.
#[test]
fn guaranteed_path_spreads_classes_over_positions() {
    let options = GenerationOptions {
        length: 4,
        ..GenerationOptions::default()
    };
    let mut positions = [[0u64; 4]; 4];
    for _ in 0..20_000 {
        let pw = generate_password_guaranteed(&options).unwrap();
        for (pos, c) in pw.chars().enumerate() {
            let class = CharacterClass::ALL
                .iter()
                .position(|class| class.contains(c))
                .unwrap();
            positions[class][pos] += 1;
        }
    }
    for (class, counts) in CharacterClass::ALL.iter().zip(&positions) {
        assert_eq!(counts.iter().sum::<u64>(), 20_000, "{class:?} not seeded once");
        let stat = chi_square(counts);
        assert!(
            stat < 30.0,
            "chi-square {stat:.2} too high for {class:?} positions: {counts:?}"
        );
    }
}

#[test]
fn distinct_passwords_across_calls() {
    let options = GenerationOptions {
        length: 8,
        include_uppercase: false,
        include_numbers: false,
        include_symbols: false,
        ..GenerationOptions::default()
    };
    // 26^8 ≈ 2^37.6 outcomes; a collision here means the source is broken.
    let a = generate_password(&options).unwrap();
    let b = generate_password(&options).unwrap();
    assert_ne!(a, b);
}
