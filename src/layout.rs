use crate::math::Vec3;
use rand::Rng;
use std::f64::consts::PI;

/// Distributes `n` points evenly over the unit sphere on a golden-angle
/// spiral. The result is deterministic for a given `n`.
///
/// A single point is placed at `(0, 0, 1)`, facing the viewer.
pub fn generate(n: usize) -> Vec<Vec3> {
    if n == 1 {
        return vec![[0.0, 0.0, 1.0]];
    }

    let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
    let step = 2.0 / n as f64;

    (0..n)
        .map(|i| {
            let y = step * i as f64 - 1.0 + step / 2.0;
            let r = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f64;
            [theta.cos() * r, y, theta.sin() * r]
        })
        .collect()
}

/// Picks a random drift axis in the x/y plane.
///
/// Both components are drawn from `[-range, range)`; the axis is left
/// unnormalized since rotation normalizes it. A range that is not a
/// positive finite number gives the zero axis, which rotation treats as a
/// no-op.
pub fn random_drift_axis<R: Rng + ?Sized>(rng: &mut R, range: f64) -> Vec3 {
    if !(range.is_finite() && range > 0.0) {
        log::warn!("drift range {} is empty, using the zero axis", range);
        return [0.0; 3];
    }
    let x = rng.gen_range(-range..range);
    let y = rng.gen_range(-range..range);
    [x, y, 0.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::length;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_counts_and_unit_length() {
        for n in 0..64 {
            let points = generate(n);
            assert_eq!(points.len(), n);
            for p in &points {
                assert!((length(p) - 1.0).abs() < 1e-9, "n={} p={:?}", n, p);
            }
        }
    }

    #[test]
    fn test_generate_empty() {
        assert!(generate(0).is_empty());
    }

    #[test]
    fn test_single_point_faces_viewer() {
        assert_eq!(generate(1), vec![[0.0, 0.0, 1.0]]);
    }

    #[test]
    fn test_latitudes_are_evenly_spaced() {
        let points = generate(4);
        let ys: Vec<f64> = points.iter().map(|p| p[1]).collect();
        let expected = [-0.75, -0.25, 0.25, 0.75];
        for (y, e) in ys.iter().zip(expected.iter()) {
            assert!((y - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate(17), generate(17));
    }

    #[test]
    fn test_drift_axis_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let axis = random_drift_axis(&mut rng, 5.0);
            assert!((-5.0..5.0).contains(&axis[0]));
            assert!((-5.0..5.0).contains(&axis[1]));
            assert_eq!(axis[2], 0.0);
        }
    }

    #[test]
    fn test_empty_drift_range_gives_zero_axis() {
        let mut rng = StdRng::seed_from_u64(7);
        for range in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert_eq!(random_drift_axis(&mut rng, range), [0.0; 3]);
        }
    }

    #[test]
    fn test_drift_axis_reproducible_with_seed() {
        let a = random_drift_axis(&mut StdRng::seed_from_u64(42), 5.0);
        let b = random_drift_axis(&mut StdRng::seed_from_u64(42), 5.0);
        assert_eq!(a, b);
    }
}
