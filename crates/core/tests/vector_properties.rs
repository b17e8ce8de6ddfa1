//! Algebraic property checks over randomly sampled vectors
//!
//! Uses a fixed-seed RNG so failures are reproducible. Run with
//! `RUST_LOG=debug` to see the core's zero-vector diagnostics.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vector3d_core::{DomainError, Vector3D};

/// Number of random samples per property
const SAMPLES: usize = 500;

/// Component range for sampled vectors
const RANGE: f64 = 1.0e3;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_vector(rng: &mut StdRng) -> Vector3D {
    Vector3D::new(
        rng.random_range(-RANGE..RANGE),
        rng.random_range(-RANGE..RANGE),
        rng.random_range(-RANGE..RANGE),
    )
}

fn random_pairs(seed: u64) -> Vec<(Vector3D, Vector3D)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES)
        .map(|_| (random_vector(&mut rng), random_vector(&mut rng)))
        .collect()
}

#[test]
fn test_magnitude_is_non_negative() {
    for (a, b) in random_pairs(1) {
        assert!(a.magnitude() >= 0.0, "negative magnitude for {a}");
        assert!((a * -1.0e200).magnitude() >= 0.0);
        assert!((a + b).magnitude() >= 0.0);
    }
}

#[test]
fn test_normalized_vectors_have_unit_length() {
    for (a, _) in random_pairs(2) {
        let unit = a.normalize().expect("sampled vector should be non-zero");
        assert_relative_eq!(unit.magnitude(), 1.0, epsilon = 1e-12);
        // Same direction: the angle to the original is (close to) zero
        assert_relative_eq!(unit.dot_product(a), a.magnitude(), max_relative = 1e-12);
    }
}

#[test]
fn test_zero_vector_is_rejected() {
    assert_eq!(
        Vector3D::ZERO.normalize(),
        Err(DomainError::ZeroVector {
            operation: "normalize"
        })
    );
    for (a, _) in random_pairs(3).into_iter().take(20) {
        assert!(a.angle_between(Vector3D::ZERO).is_err());
        assert!(Vector3D::ZERO.angle_between(a).is_err());
    }
}

#[test]
fn test_addition_is_commutative() {
    for (a, b) in random_pairs(4) {
        assert_eq!(a + b, b + a);
    }
}

#[test]
fn test_scaling_by_zero_gives_zero_vector() {
    for (a, _) in random_pairs(5) {
        assert_eq!(a * 0.0, Vector3D::ZERO);
        assert_eq!(0.0 * a, Vector3D::ZERO);
    }
}

#[test]
fn test_dot_product_is_commutative() {
    for (a, b) in random_pairs(6) {
        assert_eq!(a.dot_product(b), b.dot_product(a));
    }
}

#[test]
fn test_cross_product_is_anticommutative() {
    for (a, b) in random_pairs(7) {
        let ab: Vector3<f64> = a.cross_product(b).into();
        let ba: Vector3<f64> = (-b.cross_product(a)).into();
        assert_relative_eq!(ab, ba, epsilon = 1e-9);
    }
}

#[test]
fn test_self_cross_product_is_zero() {
    for (a, _) in random_pairs(8) {
        let aa: Vector3<f64> = a.cross_product(a).into();
        assert_abs_diff_eq!(aa, Vector3::<f64>::zeros(), epsilon = 1e-9);
    }
}

#[test]
fn test_cross_product_is_orthogonal_to_inputs() {
    for (a, b) in random_pairs(9) {
        let c = a.cross_product(b);
        let scale = a.magnitude() * b.magnitude() * a.magnitude().max(b.magnitude());
        assert!(c.dot_product(a).abs() <= 1e-9 * scale);
        assert!(c.dot_product(b).abs() <= 1e-9 * scale);
    }
}

#[test]
fn test_matches_component_formulas() {
    for (a, b) in random_pairs(10) {
        let (x1, y1, z1) = (a.x(), a.y(), a.z());
        let (x2, y2, z2) = (b.x(), b.y(), b.z());

        assert_eq!(a.magnitude(), (x1 * x1 + y1 * y1 + z1 * z1).sqrt());
        assert_eq!(a.dot_product(b), x1 * x2 + y1 * y2 + z1 * z2);
        assert_eq!(a + b, Vector3D::new(x1 + x2, y1 + y2, z1 + z2));
        assert_eq!(a * 3.5, Vector3D::new(x1 * 3.5, y1 * 3.5, z1 * 3.5));
        assert_eq!(-a, Vector3D::new(-x1, -y1, -z1));
        assert_eq!(
            a.cross_product(b),
            Vector3D::new(y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2)
        );

        let m = a.magnitude();
        assert_eq!(a.normalize(), Ok(Vector3D::new(x1 / m, y1 / m, z1 / m)));
    }
}

#[test]
fn test_angle_is_within_range_or_nan() {
    for (a, b) in random_pairs(11) {
        let angle = *a.angle_between(b).expect("sampled vectors are non-zero");
        assert!(angle.is_nan() || (0.0..=180.0).contains(&angle), "{angle}");
    }
}

#[test]
fn test_shared_across_threads() {
    let v = Vector3D::new(1.0, 2.0, 3.0);
    let results: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4_u32)
            .map(|i| s.spawn(move || (v * f64::from(i)).magnitude()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    });
    assert_eq!(results[0], 0.0);
    assert_relative_eq!(results[2], 2.0 * v.magnitude(), max_relative = 1e-12);
    assert_eq!(v, Vector3D::new(1.0, 2.0, 3.0));
}
