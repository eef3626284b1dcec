//! Pixel particles that spiral in from off-screen and settle into a short
//! text label, drawn through a host-supplied [`Surface`].

pub mod color;
pub mod constants;
pub mod effect;
pub mod params;
pub mod particle;
pub mod recording;
pub mod surface;

pub use color::*;
pub use effect::*;
pub use params::*;
pub use particle::*;
pub use surface::*;
