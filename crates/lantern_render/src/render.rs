//! Render target abstraction.
//!
//! `RenderTarget` mirrors the subset of a 2D canvas context the game uses.
//! `CommandRecorder` implements it by recording commands, which is what tests
//! and the headless runner draw into.

use lantern_shared::{GAME_HEIGHT, GAME_WIDTH};

use crate::blend::BlendMode;
use crate::style::{Color, ImageHandle};

/// A 2D drawing surface with a transform stack.
///
/// Coordinates are in the current transform's space. `save`/`restore` push and
/// pop the transform together with alpha and blend mode, like a canvas context.
pub trait RenderTarget {
    /// Surface size in device pixels `(width, height)`.
    fn size(&self) -> (f32, f32);

    /// Pushes transform, alpha and blend mode.
    fn save(&mut self);

    /// Pops the state pushed by the matching `save`.
    fn restore(&mut self);

    /// Multiplies the current transform by a scale.
    fn scale(&mut self, sx: f32, sy: f32);

    /// Multiplies the current transform by a translation.
    fn translate(&mut self, x: f32, y: f32);

    /// Multiplies the current transform by a rotation (radians).
    fn rotate(&mut self, angle: f32);

    /// Replaces the current transform with identity.
    fn reset_transform(&mut self);

    /// Sets the alpha multiplier for subsequent draws.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Sets the compositing mode for subsequent draws.
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Clears the whole surface, ignoring the transform.
    fn clear(&mut self);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Draws text with its baseline starting at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);

    /// Blits an image with its top-left corner at `(x, y)`.
    fn draw_image(&mut self, image: ImageHandle, x: f32, y: f32);
}

/// A recorded draw request.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Push state.
    Save,
    /// Pop state.
    Restore,
    /// Scale transform.
    Scale {
        /// Horizontal factor.
        sx: f32,
        /// Vertical factor.
        sy: f32,
    },
    /// Translate transform.
    Translate {
        /// Horizontal offset.
        x: f32,
        /// Vertical offset.
        y: f32,
    },
    /// Rotate transform.
    Rotate {
        /// Angle in radians.
        angle: f32,
    },
    /// Identity transform.
    ResetTransform,
    /// Alpha multiplier.
    GlobalAlpha(f32),
    /// Compositing mode.
    Blend(BlendMode),
    /// Clear surface.
    Clear,
    /// Filled rectangle.
    FillRect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Fill color.
        color: Color,
    },
    /// Text.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
        /// Font size.
        size: f32,
        /// Text color.
        color: Color,
    },
    /// Image blit.
    Image {
        /// Image to draw.
        image: ImageHandle,
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
    },
}

/// Render target that records every request.
#[derive(Debug, Clone)]
pub struct CommandRecorder {
    width: f32,
    height: f32,
    /// All commands since the last `begin_frame`.
    commands: Vec<RenderCommand>,
    /// Current save depth; negative means unbalanced restores.
    depth: i32,
}

impl CommandRecorder {
    /// Creates a recorder pretending to be a surface of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(1024),
            depth: 0,
        }
    }

    /// Drops recorded commands.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.depth = 0;
    }

    /// Commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Current `save` nesting depth. Zero after a balanced frame.
    #[must_use]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// All filled rectangles in recording order.
    pub fn filled_rects(&self) -> impl Iterator<Item = &RenderCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::FillRect { .. }))
    }
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self::new(GAME_WIDTH as f32, GAME_HEIGHT as f32)
    }
}

impl RenderTarget for CommandRecorder {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(RenderCommand::Save);
    }

    fn restore(&mut self) {
        self.depth -= 1;
        self.commands.push(RenderCommand::Restore);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.commands.push(RenderCommand::Scale { sx, sy });
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(RenderCommand::Translate { x, y });
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(RenderCommand::Rotate { angle });
    }

    fn reset_transform(&mut self) {
        self.commands.push(RenderCommand::ResetTransform);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(RenderCommand::GlobalAlpha(alpha));
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.commands.push(RenderCommand::Blend(mode));
    }

    fn clear(&mut self) {
        self.commands.push(RenderCommand::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(RenderCommand::FillRect { x, y, width, height, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(RenderCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    fn draw_image(&mut self, image: ImageHandle, x: f32, y: f32) {
        self.commands.push(RenderCommand::Image { image, x, y });
    }
}
