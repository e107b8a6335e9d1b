use crate::math::Vec3;

/// A 2D screen location
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Length of the point taken as a vector from the origin
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Size of the container the cloud is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

/// On-screen attributes of one item, derived from its sphere coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Centre of the item in container coordinates
    pub position: Point,
    /// Visual size factor in `[1/3, 1]`
    pub scale: f64,
    /// Stacking order; larger is drawn on top
    pub z_order: f64,
    /// Fade by depth
    pub opacity: f64,
    /// Back-facing items do not take pointer input
    pub interactive: bool,
}

/// Maps a sphere coordinate to its on-screen attributes.
///
/// `[-1, 1]` is remapped linearly onto `[0, width]` and `[0, height]`. The
/// depth-derived scale `(z + 2) / 3` doubles as stacking order and opacity.
/// Interactivity is a hard cutoff on the far hemisphere.
pub fn project(coordinate: &Vec3, container: Size) -> Projection {
    let [x, y, z] = *coordinate;
    let scale = (z + 2.0) / 3.0;
    Projection {
        position: Point::new(
            (x + 1.0) * container.width / 2.0,
            (y + 1.0) * container.height / 2.0,
        ),
        scale,
        z_order: scale,
        opacity: scale,
        interactive: z >= 0.0,
    }
}

impl Projection {
    /// Returns `true` if `point` falls inside the item's box, where
    /// `half_extent` is the unscaled half size of the item.
    pub fn contains(&self, point: Point, half_extent: Size) -> bool {
        let half_w = half_extent.width * self.scale;
        let half_h = half_extent.height * self.scale;
        (point.x - self.position.x).abs() <= half_w && (point.y - self.position.y).abs() <= half_h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::generate;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_back_pole() {
        let p = project(&[0.0, 0.0, -1.0], Size::new(100.0, 100.0));
        assert!(!p.interactive);
        assert!((p.scale - 1.0 / 3.0).abs() < EPS);
        assert_eq!(p.scale, p.opacity);
        assert_eq!(p.scale, p.z_order);
    }

    #[test]
    fn test_front_pole() {
        let p = project(&[0.0, 0.0, 1.0], Size::new(100.0, 100.0));
        assert!(p.interactive);
        assert!((p.scale - 1.0).abs() < EPS);
        assert_eq!(p.position, Point::new(50.0, 50.0));
    }

    #[test]
    fn test_equator_is_interactive() {
        let p = project(&[1.0, 0.0, 0.0], Size::new(100.0, 100.0));
        assert!(p.interactive);
        assert!((p.scale - 2.0 / 3.0).abs() < EPS);
        assert_eq!(p.position, Point::new(100.0, 50.0));
    }

    #[test]
    fn test_interactivity_is_a_hard_cutoff() {
        let p = project(&[0.0, 0.99999, -0.0001], Size::new(10.0, 10.0));
        assert!(!p.interactive);
    }

    #[test]
    fn test_six_items_inside_container() {
        for c in generate(6) {
            let p = project(&c, Size::new(100.0, 100.0));
            assert!((0.0..=100.0).contains(&p.position.x));
            assert!((0.0..=100.0).contains(&p.position.y));
        }
    }

    #[test]
    fn test_contains_scales_with_depth() {
        let near = project(&[0.0, 0.0, 1.0], Size::new(100.0, 100.0));
        let far = project(&[0.0, 0.0, -1.0], Size::new(100.0, 100.0));
        let click = Point::new(58.0, 50.0);
        let extent = Size::new(10.0, 5.0);
        assert!(near.contains(click, extent));
        assert!(!far.contains(click, extent));
    }
}
