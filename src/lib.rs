//! Spikebrush - a double-cone voxel brush for chunked block worlds

pub mod core;
pub mod math;
pub mod voxel;
