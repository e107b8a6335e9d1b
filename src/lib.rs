//! A tag cloud on a rotating sphere.
//!
//! Items are spread over a unit sphere by [`layout::generate`], rotated by
//! [`cloud::TagCloud::step`] in response to drags, inertia and ambient spin,
//! and projected to screen attributes through a [`cloud::ProjectionSink`].

pub mod cloud;
pub mod config;
pub mod error;
pub mod layout;
pub mod math;
pub mod projection;
pub mod state;

pub use cloud::{ProjectionSink, TagCloud};
pub use config::CloudConfig;
pub use error::CloudError;
pub use projection::{project, Point, Projection, Size};
pub use state::{DriveMode, Event};
