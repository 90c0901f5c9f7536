//! # LANTERN Render Surface
//!
//! Everything the simulation is allowed to ask of a drawing surface.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    DRAW PIPELINE                          │
//! ├──────────────────────────────────────────────────────────┤
//! │  Camera / Emitters → RenderTarget calls → Backend         │
//! │         ↓                  ↓                  ↓           │
//! │  transforms, alpha   primitive requests   canvas 2D or    │
//! │  blend mode                               CommandRecorder │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The core only ever writes to a target. It never reads pixels back.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod blend;
pub mod error;
pub mod render;
pub mod style;

pub use blend::BlendMode;
pub use error::{RenderError, RenderResult};
pub use render::{CommandRecorder, RenderCommand, RenderTarget};
pub use style::{Appearance, Color, ImageHandle};
