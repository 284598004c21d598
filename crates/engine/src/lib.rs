// Library crate: the headless regeneration/export pipeline for the fitting
// configurator. Rendering and the control panel live in the web frontend;
// this crate only sees parameter snapshots and mesh buffers.

pub mod fixtures;
pub mod kernel;
pub mod mesh;
pub mod session;
pub mod stl;
pub mod validation;
