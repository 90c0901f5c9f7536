//! The player body.
//!
//! Position is the middle of the feet in y-up world space. The body is
//! `PLAYER_WIDTH` wide and `PLAYER_HEIGHT` tall above that point.

use lantern_camera::Followable;
use lantern_render::{Color, RenderTarget};
use lantern_shared::{
    Vec2, GRAVITY, MAX_PLAYER_SPEED, PIXEL_PER_METER, PLAYER_ACCELERATION, PLAYER_JUMP_HEIGHT,
};

use crate::effects::{DustTrail, GroundContact};
use crate::game_loop::{GameObject, UpdateContext};
use crate::world::CollisionMap;

/// Body width in pixels.
pub const PLAYER_WIDTH: f32 = 0.5 * PIXEL_PER_METER;

/// Body height in pixels.
pub const PLAYER_HEIGHT: f32 = 1.85 * PIXEL_PER_METER;

const PLAYER_COLOR: Color = Color::hex(0xD9A0_66FF);

/// Held buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    /// Walk left
    pub left: bool,
    /// Walk right
    pub right: bool,
    /// Jump on the next grounded update. Consumed by it.
    pub jump: bool,
}

impl PlayerInput {
    fn axis(self) -> f32 {
        f32::from(u8::from(self.right)) - f32::from(u8::from(self.left))
    }
}

/// Player-controlled body.
#[derive(Debug, Clone)]
pub struct Player {
    /// Feet position
    position: Vec2,
    /// Pixels per second
    velocity: Vec2,
    /// Standing on ground after the last update
    grounded: bool,
    /// Facing, -1 or 1
    direction: f32,
    input: PlayerInput,
    dust: Option<DustTrail>,
}

impl Player {
    /// Creates an airborne player at `position`.
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            grounded: false,
            direction: 1.0,
            input: PlayerInput::default(),
            dust: None,
        }
    }

    /// Attaches a dust trail that follows the player's feet.
    #[must_use]
    pub fn with_dust(mut self, dust: DustTrail) -> Self {
        self.dust = Some(dust);
        self
    }

    /// Replaces the held buttons.
    pub fn set_input(&mut self, input: PlayerInput) {
        self.input = input;
    }

    /// Drops a pending jump, e.g. while a conversation is open.
    pub fn cancel_jump(&mut self) {
        self.input.jump = false;
    }

    /// Currently held buttons.
    #[must_use]
    pub fn input(&self) -> PlayerInput {
        self.input
    }

    /// Feet position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Velocity in pixels per second.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// `true` while standing on ground.
    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Facing: -1 left, 1 right.
    #[must_use]
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Dust trail, if attached.
    #[must_use]
    pub fn dust(&self) -> Option<&DustTrail> {
        self.dust.as_ref()
    }

    /// Ground state as seen by effects.
    #[must_use]
    pub fn contact(&self) -> GroundContact {
        GroundContact {
            position: self.position,
            velocity: self.velocity,
            grounded: self.grounded,
        }
    }

    fn steer(&mut self, dt: f32) {
        let axis = self.input.axis();
        let step = PLAYER_ACCELERATION * dt;
        if axis != 0.0 {
            self.direction = axis;
            self.velocity.x = (self.velocity.x + axis * step).clamp(-MAX_PLAYER_SPEED, MAX_PLAYER_SPEED);
        } else if self.velocity.x.abs() <= step {
            self.velocity.x = 0.0;
        } else {
            self.velocity.x -= self.velocity.x.signum() * step;
        }

        if self.input.jump && self.grounded {
            self.velocity.y = (2.0 * PLAYER_JUMP_HEIGHT * GRAVITY).sqrt();
            self.grounded = false;
        }
        self.input.jump = false;
    }

    /// Top of the ground under the current position.
    fn floor(&self, world: &CollisionMap) -> f32 {
        let ground = world.ground_below(self.position.x, self.position.y.round());
        if world.collides_with(self.position.x, ground) != 0 {
            ground + 1.0
        } else {
            ground
        }
    }

    fn integrate(&mut self, dt: f32, world: &CollisionMap) {
        let floor = self.floor(world);
        self.velocity.y -= GRAVITY * dt;

        let x = self.position.x + self.velocity.x * dt;
        if self.velocity.x != 0.0 {
            let edge = x + self.velocity.x.signum() * PLAYER_WIDTH / 2.0;
            let chest = self.position.y + PLAYER_HEIGHT * 0.75;
            if world.collides_with_vertical_line(edge, chest, PLAYER_HEIGHT / 2.0) != 0 {
                self.velocity.x = 0.0;
            } else {
                self.position.x = x;
            }
        }

        self.position.y += self.velocity.y * dt;
        if self.position.y <= floor {
            self.position.y = floor;
            self.velocity.y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }
}

impl GameObject for Player {
    fn update(&mut self, dt: f32, ctx: &mut UpdateContext<'_>) {
        if !ctx.input_enabled {
            self.input = PlayerInput::default();
        }
        if dt <= 0.0 {
            return;
        }

        self.steer(dt);
        self.integrate(dt, ctx.world);

        let contact = self.contact();
        if let Some(dust) = &mut self.dust {
            dust.step(ctx.particles, ctx.rng, dt, &contact);
        }
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.fill_rect(
            self.position.x - PLAYER_WIDTH / 2.0,
            -self.position.y - PLAYER_HEIGHT,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
            PLAYER_COLOR,
        );
    }
}

impl Followable for Player {
    fn position(&self) -> Vec2 {
        self.position
    }
}
