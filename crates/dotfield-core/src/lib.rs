//! Pure simulation and draw-list logic for the dotfield background layers.
//!
//! Nothing in this crate touches platform APIs: positions, pointer
//! reactions, ripple timing, and link geometry are plain arithmetic over
//! in-memory state, parameterized by elapsed milliseconds and the current
//! viewport. The web frontend drives it from a requestAnimationFrame loop
//! and renders through the [`Surface`] trait; host-side tests drive it with
//! synthetic time and a recording surface.

pub mod constants;
pub mod field;
pub mod links;
pub mod palette;
pub mod particle;
pub mod state;
pub mod surface;

pub use constants::*;
pub use field::*;
pub use links::*;
pub use palette::*;
pub use particle::*;
pub use state::*;
pub use surface::*;
