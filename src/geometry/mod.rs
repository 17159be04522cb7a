//! The geometry core: collision testing and circumference tracing.
//!
//! [`collision`] answers "which sides of this cell does the circle's
//! circumference pass through", and [`tracer`] walks those crossings
//! clockwise around the circle to produce the ordered trace. Both are pure
//! computations over the domain types; no I/O, no rendering.

pub mod collision;
pub mod tracer;

pub use collision::{collide_point, SideCrossings};
pub use tracer::{trace_circumference, Trace};
