//! # LANTERN Camera
//!
//! A follow camera that can be asked to look somewhere else for a while.
//!
//! ```
//! use lantern_camera::Camera;
//! use lantern_shared::Vec2;
//!
//! let mut camera = Camera::new(0.5, 0.15).unwrap();
//! let player = Vec2::new(0.0, 0.0);
//!
//! camera.focus_on(2.0, 100.0, 50.0, 2.0);
//! camera.update(1.0, 1.0, &player);
//!
//! assert_eq!(camera.position(), Vec2::new(100.0, 50.0));
//! assert_eq!(camera.zoom(), 2.0);
//! assert!(!camera.is_on_target());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod camera;
pub mod config;
pub mod error;
pub mod focus;

pub use camera::{Camera, Followable};
pub use config::CameraConfig;
pub use error::{CameraError, CameraResult};
pub use focus::{focus_force, CameraFocus};
