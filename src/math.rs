/// A point or direction in 3D space
pub type Vec3 = [f64; 3];

/// A quaternion stored as `[w, x, y, z]`
pub type Quaternion = [f64; 4];

/// Euclidean length of a vector
pub fn length(v: &Vec3) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Returns `true` if every component is exactly zero
pub fn is_zero(v: &Vec3) -> bool {
    v[0] == 0.0 && v[1] == 0.0 && v[2] == 0.0
}

/// Normalizes a vector. The caller must rule out the zero vector first.
pub fn normalize(v: &Vec3) -> Vec3 {
    let len = length(v);
    [v[0] / len, v[1] / len, v[2] / len]
}

/// Multiplies a 3x3 matrix by a 3-dimensional vector
pub fn multiply_matrix_vector(matrix: &[[f64; 3]; 3], vector: &Vec3) -> Vec3 {
    let mut result = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Builds the unit quaternion `(cos(θ/2), sin(θ/2)·axis)` for a unit axis
pub fn quaternion_from_axis_angle(axis: &Vec3, angle: f64) -> Quaternion {
    let (sin_half, cos_half) = (angle / 2.0).sin_cos();
    [
        cos_half,
        sin_half * axis[0],
        sin_half * axis[1],
        sin_half * axis[2],
    ]
}

/// Converts a unit quaternion into the equivalent rotation matrix.
///
/// Applying the matrix to `v` gives the vector part of `q·v·q⁻¹`.
pub fn quaternion_to_matrix(q: &Quaternion) -> [[f64; 3]; 3] {
    let [w, x, y, z] = *q;
    [
        [
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y - w * z),
            2.0 * (x * z + w * y),
        ],
        [
            2.0 * (x * y + w * z),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z - w * x),
        ],
        [
            2.0 * (x * z - w * y),
            2.0 * (y * z + w * x),
            1.0 - 2.0 * (x * x + y * y),
        ],
    ]
}

/// Rotation matrix for `angle` radians about `axis`, or `None` when the
/// rotation is degenerate (zero axis or zero angle).
pub fn rotation_matrix(axis: &Vec3, angle: f64) -> Option<[[f64; 3]; 3]> {
    // Checked before normalizing: a zero axis would divide by zero.
    if is_zero(axis) || angle == 0.0 {
        return None;
    }
    let q = quaternion_from_axis_angle(&normalize(axis), angle);
    Some(quaternion_to_matrix(&q))
}

/// Rotates a single point about `axis` by `angle` radians
pub fn rotate_point(point: &Vec3, axis: &Vec3, angle: f64) -> Vec3 {
    match rotation_matrix(axis, angle) {
        Some(matrix) => multiply_matrix_vector(&matrix, point),
        None => *point,
    }
}

/// Rotates every point in place about `axis` by `angle` radians.
///
/// The matrix is built once per call and shared by all points. Degenerate
/// rotations leave the points untouched.
pub fn rotate_all(points: &mut [Vec3], axis: &Vec3, angle: f64) {
    let Some(matrix) = rotation_matrix(axis, angle) else {
        return;
    };
    for point in points.iter_mut() {
        *point = multiply_matrix_vector(&matrix, point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: &Vec3, b: &Vec3) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < EPS, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let quarter = std::f64::consts::FRAC_PI_2;
        let rotated = rotate_point(&[1.0, 0.0, 0.0], &[0.0, 0.0, 1.0], quarter);
        assert_close(&rotated, &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_axis_length_does_not_matter() {
        let p = [0.3, -0.4, 0.866];
        let a = rotate_point(&p, &[1.0, 2.0, 0.0], 0.7);
        let b = rotate_point(&p, &[10.0, 20.0, 0.0], 0.7);
        assert_close(&a, &b);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let mut points = vec![[1.0, 0.0, 0.0], [0.0, 0.6, 0.8], [-0.48, 0.6, -0.64]];
        for step in 0..200 {
            rotate_all(&mut points, &[3.0, -1.5, 0.25], 0.05 * step as f64);
        }
        for p in &points {
            assert!((length(p) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_rotation_is_invertible() {
        let original = vec![[0.0, 0.6, 0.8], [-0.48, 0.6, -0.64], [1.0, 0.0, 0.0]];
        let mut points = original.clone();
        let axis = [4.0, -2.0, 1.0];
        rotate_all(&mut points, &axis, 1.234);
        rotate_all(&mut points, &axis, -1.234);
        for (p, o) in points.iter().zip(&original) {
            assert_close(p, o);
        }
    }

    #[test]
    fn test_degenerate_rotations_are_identity() {
        let original = vec![[0.0, 0.6, 0.8], [1.0, 0.0, 0.0]];
        let mut points = original.clone();
        rotate_all(&mut points, &[1.0, 1.0, 0.0], 0.0);
        assert_eq!(points, original);
        rotate_all(&mut points, &[0.0, 0.0, 0.0], 2.0);
        assert_eq!(points, original);
        assert!(rotation_matrix(&[0.0; 3], 1.0).is_none());
    }

    #[test]
    fn test_rotation_matrix_is_orthonormal() {
        let m = rotation_matrix(&[1.0, -2.0, 0.5], 0.9).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let dot: f64 = (0..3).map(|k| m[i][k] * m[j][k]).sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((dot - expected).abs() < EPS);
            }
        }
    }
}
