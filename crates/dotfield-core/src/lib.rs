pub mod compositor;
pub mod constants;
pub mod engine;
pub mod error;
pub mod focus;
pub mod math;
pub mod params;
pub mod pointer;
pub mod raster;
pub mod recorder;
pub mod ring;
pub mod snapshot;
pub mod speed;
pub mod theme;
pub mod uniforms;

pub static FIELD_WGSL: &str = include_str!("../shaders/dotfield.wgsl");

pub use compositor::{composite_cell, shade, CellField};
pub use constants::*;
pub use engine::FieldEngine;
pub use error::{FieldError, FieldResult};
pub use focus::{FocusRegion, PillTracker};
pub use params::FieldParams;
pub use pointer::{PointerKind, PointerState, Viewport};
pub use raster::{render_frame, render_rgba8};
pub use recorder::{ShockRecorder, ShockRing, TrailRecorder, TrailRing};
pub use ring::{TimedRing, TimedSample};
pub use snapshot::FieldSnapshot;
pub use speed::SpeedEstimator;
pub use theme::Theme;
pub use uniforms::FieldUniforms;
