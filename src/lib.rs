//! trailmap places progress onto a journey map.
//!
//! A journey map is a polyline drawn over artwork. Milestones (stages) are anchored on it and
//! participants move along it according to a scalar progress score.
//!
//! # Pipeline overview
//!
//! 1. **Path**: sparse [`CheckpointTable`] (`progress -> point`), immutable after construction
//! 2. **Interpolate**: [`InterpolationResolver::position_at`] clamps and lerps between checkpoints
//! 3. **Anchor**: [`MilestoneAnchors`] places milestones by threshold or by ordinal rank
//! 4. **Collide**: [`CollisionResolver`] nudges participants off milestone markers
//! 5. **Scale**: [`ViewportTransform`] maps design space to the live viewport
//!
//! [`TrailMap::layout`] runs steps 2-5 for one frame; [`TrailView`] wraps it so that a broken
//! checkpoint table renders as a placeholder instead of an error.
//!
//! Every per-frame operation is a pure, synchronous function of its inputs, the table and the
//! current viewport.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod collision;
mod foundation;
mod milestone;
mod path;
mod scene;
mod viewport;

pub use collision::resolver::{
    CollisionOutcome, CollisionResolver, DEFAULT_DIRECTIONS, DEFAULT_OFFSET_DISTANCE,
    DEFAULT_PROXIMITY_RADIUS,
};
pub use foundation::core::{Point, Size, Vec2, Viewport};
pub use foundation::error::{TrailError, TrailResult};
pub use milestone::anchor::{Milestone, MilestoneAnchor, MilestoneAnchors, PlacementMode};
pub use milestone::ordinal::{OrdinalLayout, OrdinalStop};
pub use path::checkpoint::{Checkpoint, CheckpointTable};
pub use path::ingest::{
    DuplicateLine, DuplicatePolicy, IngestOptions, IngestReport, load_checkpoints,
    parse_checkpoints,
};
pub use path::resolver::{InterpolationResolver, SegmentHit};
pub use scene::config::{DEFAULT_TRAILING_SPAN, TrailConfig};
pub use scene::entity::Entity;
pub use scene::frame::{FrameLayout, PlacedEntity, PlacedMilestone, TrailFrame, TrailMap, TrailView};
pub use viewport::transform::{DesignSpace, ScalePolicy, ViewportState, ViewportTransform};
