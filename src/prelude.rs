//! Prelude module for convenient imports.
//!
//! ```ignore
//! use digitizer::prelude::*;
//! ```

// Core application types
pub use crate::app::App;

// Configuration
pub use crate::config::{CircleSettings, Config, GridSettings};

// Domain types
pub use crate::domain::{Circle, Grid, Point, Rect, Side};

// Geometry core
pub use crate::geometry::{collide_point, trace_circumference, SideCrossings, Trace};

// Errors
pub use crate::error::{ConfigError, DigitizerError, DigitizerResult, GeometryError};

// Events and analysis
pub use crate::analysis::AnalysisRequest;
pub use crate::events::PointerEvent;
