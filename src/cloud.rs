use crate::config::CloudConfig;
use crate::layout::{generate, random_drift_axis};
use crate::math::{length, rotate_all, Vec3};
use crate::projection::{project, Point, Projection, Size};
use crate::state::{DriveMode, Event};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Receives the projection of every item after each rotation step
pub trait ProjectionSink<T> {
    fn apply_projection(&mut self, index: usize, item: &T, projection: &Projection);
}

impl<T, F> ProjectionSink<T> for F
where
    F: FnMut(usize, &T, &Projection),
{
    fn apply_projection(&mut self, index: usize, item: &T, projection: &Projection) {
        self(index, item, projection)
    }
}

/// A set of items laid out on a unit sphere and rotated by gestures,
/// inertia and ambient spin.
pub struct TagCloud<T> {
    config: CloudConfig,
    container: Size,
    items: Vec<T>,
    coordinates: Vec<Vec3>,
    drift_axis: Vec3,
    mode: DriveMode,
    rng: StdRng,
}

impl<T> TagCloud<T> {
    pub fn new(config: CloudConfig, container: Size) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        TagCloud {
            config,
            container,
            items: Vec::new(),
            coordinates: Vec::new(),
            drift_axis: [0.0; 3],
            mode: DriveMode::Ambient,
            rng,
        }
    }

    /// Replaces the item set, lays it out on the sphere, picks a fresh drift
    /// axis and starts ambient spin.
    pub fn set_items<S: ProjectionSink<T>>(&mut self, items: Vec<T>, sink: &mut S) {
        self.items = items;
        self.relayout(sink);
    }

    /// Lays the current items out again from scratch
    pub fn relayout<S: ProjectionSink<T>>(&mut self, sink: &mut S) {
        self.coordinates = generate(self.items.len());
        self.drift_axis = random_drift_axis(&mut self.rng, self.config.drift_range);
        self.set_mode(DriveMode::Ambient);
        log::debug!(
            "laid out {} items, drift axis {:?}",
            self.items.len(),
            self.drift_axis
        );
        self.project_all(sink);
    }

    /// Handles one host event. Returns `true` if projections were emitted.
    pub fn step<S: ProjectionSink<T>>(&mut self, event: Event, sink: &mut S) -> bool {
        log::trace!("{:?} in {:?}", event, self.mode);
        match event {
            Event::AmbientTick => self.ambient_tick(sink),
            Event::InertiaTick { dt } => self.inertia_tick(dt, sink),
            Event::Frame { dt } => match self.mode {
                DriveMode::Ambient => self.ambient_tick(sink),
                DriveMode::Inertia { .. } => self.inertia_tick(dt, sink),
                DriveMode::Dragging { .. } | DriveMode::Held => false,
            },
            Event::DragBegin(point) => {
                self.set_mode(DriveMode::Dragging { last: point });
                false
            }
            Event::DragMove(point) => self.drag_move(point, sink),
            Event::DragEnd { velocity } => {
                if self.mode.is_dragging() {
                    self.set_mode(DriveMode::after_release(velocity.magnitude()));
                }
                false
            }
            Event::Resize(size) => {
                self.container = size;
                self.project_all(sink);
                true
            }
            Event::Hold => {
                if !self.mode.is_dragging() {
                    self.set_mode(DriveMode::Held);
                }
                false
            }
            Event::Release => {
                if self.mode == DriveMode::Held {
                    self.set_mode(DriveMode::Ambient);
                }
                false
            }
        }
    }

    fn ambient_tick<S: ProjectionSink<T>>(&mut self, sink: &mut S) -> bool {
        if !self.mode.is_ambient() {
            return false;
        }
        self.rotate(self.drift_axis, self.config.spin_angle, sink);
        true
    }

    fn inertia_tick<S: ProjectionSink<T>>(&mut self, dt: f64, sink: &mut S) -> bool {
        let DriveMode::Inertia { speed } = self.mode else {
            return false;
        };
        let speed = speed - self.config.inertia_decrement;
        if speed <= 0.0 {
            self.set_mode(DriveMode::Ambient);
            return false;
        }
        self.mode = DriveMode::Inertia { speed };
        let angle = if self.container.width > 0.0 {
            speed / self.container.width * 2.0 * dt
        } else {
            0.0
        };
        self.rotate(self.drift_axis, angle, sink);
        true
    }

    fn drag_move<S: ProjectionSink<T>>(&mut self, point: Point, sink: &mut S) -> bool {
        let DriveMode::Dragging { last } = self.mode else {
            log::debug!("drag move at {:?} without a drag in progress", point);
            return false;
        };
        // Vertical motion turns about x, horizontal about y.
        let delta = [last.y - point.y, point.x - last.x, 0.0];
        self.mode = DriveMode::Dragging { last: point };
        if delta == [0.0; 3] {
            return false;
        }
        let angle = if self.container.width > 0.0 {
            length(&delta) / (self.container.width / 2.0)
        } else {
            0.0
        };
        self.drift_axis = delta;
        self.rotate(delta, angle, sink);
        true
    }

    fn rotate<S: ProjectionSink<T>>(&mut self, axis: Vec3, angle: f64, sink: &mut S) {
        rotate_all(&mut self.coordinates, &axis, angle);
        self.project_all(sink);
    }

    /// Emits the current projection of every item without rotating
    pub fn project_all<S: ProjectionSink<T>>(&self, sink: &mut S) {
        let pairs = self.items.iter().zip(&self.coordinates);
        for (index, (item, coordinate)) in pairs.enumerate() {
            sink.apply_projection(index, item, &project(coordinate, self.container));
        }
    }

    /// Index of the nearest interactive item whose box contains `point`.
    ///
    /// `half_extent` gives the half size of each item at full scale.
    pub fn hit_test<F>(&self, point: Point, half_extent: F) -> Option<usize>
    where
        F: Fn(usize, &T) -> Size,
    {
        self.items
            .iter()
            .zip(&self.coordinates)
            .enumerate()
            .map(|(index, (item, c))| (index, item, project(c, self.container)))
            .filter(|(index, item, p)| {
                p.interactive && p.contains(point, half_extent(*index, *item))
            })
            .map(|(index, _, p)| (index, p))
            .max_by(|(_, a), (_, b)| a.z_order.total_cmp(&b.z_order))
            .map(|(index, _)| index)
    }

    fn set_mode(&mut self, mode: DriveMode) {
        if std::mem::discriminant(&self.mode) != std::mem::discriminant(&mode) {
            log::debug!("drive mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Current projection of the item at `index`. Panics if out of range.
    pub fn projection(&self, index: usize) -> Projection {
        project(&self.coordinates[index], self.container)
    }

    pub fn item(&self, index: usize) -> &T {
        &self.items[index]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn coordinates(&self) -> &[Vec3] {
        &self.coordinates
    }

    pub fn drift_axis(&self) -> Vec3 {
        self.drift_axis
    }

    pub fn mode(&self) -> DriveMode {
        self.mode
    }

    pub fn container(&self) -> Size {
        self.container
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
