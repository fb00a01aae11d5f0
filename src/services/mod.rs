//! View update coordination.
//!
//! Services orchestrate the filter engine, the rendering sinks, and the
//! notification surface.

mod coordinator;

pub use coordinator::UpdateCoordinator;
