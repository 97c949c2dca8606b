//! Spike brush: a double-cone voxel painting operation
//!
//! Given an anchor voxel and the viewpoint, paints a spike aimed along the
//! anchor-to-camera axis into the chunked block store. The host invokes one
//! operation per user action; everything here is ephemeral within that call.

pub mod options;
pub mod bounds;
pub mod mask;
pub mod iterate;
pub mod apply;

// Re-exports
pub use options::SpikeOptions;
pub use bounds::max_bounds;
pub use mask::{Mask, SpikeShape, spike_mask};
pub use iterate::mark_then_enumerate;
pub use apply::{apply_spike, dirty_region, paint_masked};
