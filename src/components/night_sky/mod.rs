//! Animated night sky backdrop.
//!
//! Paints a star field on an HTML canvas behind the page:
//! - Twinkling stars whose opacity oscillates over time
//! - Shooting stars crossing diagonally with fading trails, recycled once off screen
//! - Static decorative layers shifted by a pointer-driven parallax offset
//!
//! The population is rebuilt whenever the window resizes.
//!
//! # Example
//!
//! ```ignore
//! use night_sky::{NightSkyBackground, SkyConfig};
//!
//! view! { <NightSkyBackground config=SkyConfig::default() /> }
//! ```

mod component;
pub mod pointer;
pub mod population;
pub mod render;
pub mod scene;
pub mod scheduler;
pub mod state;
pub mod star;
pub mod surface;
pub mod theme;
pub mod update;
pub mod viewport;

pub use component::NightSkyBackground;
pub use pointer::ParallaxOffset;
pub use star::{Star, StarKind, Trail, TrailPoint};
pub use theme::{PaintPolicy, SkyConfig};
pub use viewport::Viewport;
