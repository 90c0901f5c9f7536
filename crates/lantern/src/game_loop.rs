//! # LANTERN Game Loop
//!
//! ```text
//! Frame N:
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ 1. CLOCK                                                            │
//! │    └─ real dt -> game dt (clamped to MAX_FRAME_STEP, 0 if paused)   │
//! │                                                                     │
//! │ 2. UPDATE (game dt)                                                 │
//! │    ├─ Particle system                                               │
//! │    ├─ Player (movement, ground, dust)                               │
//! │    ├─ NPCs, then other objects in registration order                │
//! │    └─ Camera (last: it reads where the player ended up)             │
//! │                                                                     │
//! │ 3. DRAW                                                             │
//! │    ├─ Clear, center, display scale, camera transform                │
//! │    ├─ Particles, player, NPCs, objects                              │
//! │    ├─ Cinematic bars (screen space)                                 │
//! │    └─ FPS counter                                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use lantern_camera::Camera;
use lantern_particles::{ParticleSystem, SimRng};
use lantern_render::{Color, RenderTarget};
use lantern_shared::{clamp, Vec2, MAX_FRAME_STEP};
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::dialog::Message;
use crate::effects::DustTrail;
use crate::error::GameResult;
use crate::npc::Npc;
use crate::player::{Player, PLAYER_WIDTH};
use crate::world::CollisionMap;

/// Hint drawn under the player next to someone to talk to.
pub const TALK_TIP: &str = "press 'Enter' to talk";

/// Shared state handed to objects during update.
pub struct UpdateContext<'a> {
    /// Level collision
    pub world: &'a CollisionMap,
    /// Scene particles
    pub particles: &'a mut ParticleSystem,
    /// Game RNG
    pub rng: &'a mut SimRng,
    /// Game time after this frame's step
    pub time: f64,
    /// `false` while the camera shows something else
    pub input_enabled: bool,
}

/// Anything that lives in the scene.
pub trait GameObject: Send {
    /// Advances by `dt` game seconds. `dt` is 0 while paused.
    fn update(&mut self, dt: f32, ctx: &mut UpdateContext<'_>);

    /// Draws in world space (y-up; flip y when drawing).
    fn draw(&self, target: &mut dyn RenderTarget);
}

/// Real time and game time.
///
/// Totals accumulate in `f64`; only the per-frame steps are `f32`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    /// Seconds since start, including pauses
    app_time: f64,
    /// Real seconds since the previous frame
    app_dt: f32,
    /// Seconds the game was running
    game_time: f64,
    /// Game step of the current frame
    dt: f32,
    /// Largest accepted step
    max_step: f32,
    paused: bool,
}

impl FrameClock {
    /// Creates a clock that clamps steps to `max_step` seconds.
    #[must_use]
    pub fn new(max_step: f32) -> Self {
        Self {
            app_time: 0.0,
            app_dt: 0.0,
            game_time: 0.0,
            dt: 0.0,
            max_step,
            paused: false,
        }
    }

    /// Records `real_dt` seconds of elapsed time and returns the game step.
    ///
    /// Negative or NaN input counts as 0.
    pub fn advance(&mut self, real_dt: f32) -> f32 {
        let real_dt = clamp(real_dt, 0.0, f32::INFINITY);
        self.app_dt = real_dt;
        self.app_time += f64::from(real_dt);

        if self.paused {
            self.dt = 0.0;
        } else {
            if real_dt > self.max_step {
                warn!(real_dt, max_step = self.max_step, "frame step clamped");
            }
            self.dt = real_dt.min(self.max_step);
            self.game_time += f64::from(self.dt);
        }
        self.dt
    }

    /// Freezes game time.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Unfreezes game time.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flips the pause state and returns the new one.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// `true` while paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Seconds since start, including pauses.
    #[must_use]
    pub fn app_time(&self) -> f64 {
        self.app_time
    }

    /// Real seconds of the last frame.
    #[must_use]
    pub fn app_dt(&self) -> f32 {
        self.app_dt
    }

    /// Seconds of unpaused play.
    #[must_use]
    pub fn game_time(&self) -> f64 {
        self.game_time
    }

    /// Game step of the last frame.
    #[must_use]
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_STEP)
    }
}

/// Frames-per-second counter, published once per real second.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f32,
    fps: u32,
}

impl FpsCounter {
    /// Counts one drawn frame that took `app_dt` real seconds.
    pub fn frame(&mut self, app_dt: f32) {
        self.frames += 1;
        self.elapsed += app_dt;
        if self.elapsed >= 1.0 {
            self.fps = self.frames;
            self.frames = 0;
            self.elapsed %= 1.0;
        }
    }

    /// Frames counted during the last full second.
    #[must_use]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// What happened in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Frame number
    pub frame: u64,
    /// Game step used
    pub dt: f32,
    /// Game time after the frame
    pub game_time: f64,
    /// Live particles
    pub particles: usize,
    /// Camera focus force
    pub focus_force: f32,
}

/// The whole game state, driven one frame at a time.
pub struct Game {
    clock: FrameClock,
    fps: FpsCounter,
    camera: Camera,
    particles: ParticleSystem,
    world: CollisionMap,
    player: Player,
    npcs: Vec<Npc>,
    objects: Vec<Box<dyn GameObject>>,
    rng: SimRng,
    show_fps: bool,
    display_scale: f32,
    frame: u64,
}

impl Game {
    /// Builds a game with the player standing at `spawn`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Camera` if the camera config is out of range.
    pub fn new(config: &GameConfig, world: CollisionMap, spawn: Vec2) -> GameResult<Self> {
        let camera = Camera::from_config(&config.camera)?;
        let mut rng = config
            .seed
            .map_or_else(SimRng::from_entropy, SimRng::seed_from_u64);
        let mut particles = ParticleSystem::new();
        let dust = DustTrail::new(&mut particles, &mut rng, spawn);

        info!(
            width = world.width(),
            height = world.height(),
            x = spawn.x,
            y = spawn.y,
            "game created"
        );

        Ok(Self {
            clock: FrameClock::new(config.max_frame_step),
            fps: FpsCounter::default(),
            camera,
            particles,
            world,
            player: Player::new(spawn).with_dust(dust),
            npcs: Vec::new(),
            objects: Vec::new(),
            rng,
            show_fps: config.show_fps,
            display_scale: config.display_scale,
            frame: 0,
        })
    }

    /// Adds an NPC.
    pub fn add_npc(&mut self, npc: Npc) {
        debug!(name = npc.name(), "npc added");
        self.npcs.push(npc);
    }

    /// Adds a scene object, updated and drawn after NPCs.
    pub fn add_object(&mut self, object: Box<dyn GameObject>) {
        self.objects.push(object);
    }

    /// Runs one full frame: update, then draw into `target`.
    pub fn frame(&mut self, real_dt: f32, target: &mut dyn RenderTarget) -> FrameStats {
        let stats = self.update(real_dt);
        self.draw(target);
        stats
    }

    /// Advances the simulation by one frame.
    pub fn update(&mut self, real_dt: f32) -> FrameStats {
        let dt = self.clock.advance(real_dt);
        let time = self.clock.game_time();

        if self.npcs.iter().any(Npc::is_talking) {
            self.player.cancel_jump();
        }

        self.particles.update(dt);

        let mut ctx = UpdateContext {
            world: &self.world,
            particles: &mut self.particles,
            rng: &mut self.rng,
            time,
            input_enabled: self.camera.is_on_target(),
        };
        self.player.update(dt, &mut ctx);
        for npc in &mut self.npcs {
            npc.update(dt, &mut ctx);
        }
        for object in &mut self.objects {
            object.update(dt, &mut ctx);
        }
        self.camera.update(dt, time, &self.player);

        self.frame += 1;
        FrameStats {
            frame: self.frame,
            dt,
            game_time: time,
            particles: self.particles.particle_count(),
            focus_force: self.camera.focus_force(),
        }
    }

    /// Draws the current state.
    pub fn draw(&mut self, target: &mut dyn RenderTarget) {
        let (width, height) = target.size();

        target.clear();
        target.save();
        target.translate(width / 2.0, height / 2.0);
        target.scale(self.display_scale, self.display_scale);
        self.camera.apply_transform(target);

        self.particles.draw(target);
        self.player.draw(target);
        for npc in &self.npcs {
            npc.draw(target);
        }
        for object in &self.objects {
            object.draw(target);
        }

        if self.accepts_input() && self.closest_npc().is_some() {
            let feet = self.player.position();
            target.fill_text(
                TALK_TIP,
                feet.x - PLAYER_WIDTH / 2.0,
                -feet.y + 20.0,
                10.0,
                Color::WHITE,
            );
        }

        self.camera.render_cinematic_bars(target);
        target.restore();

        if self.show_fps {
            let scale = self.display_scale;
            target.save();
            target.fill_text(
                &format!("{} FPS", self.fps.fps()),
                2.0 * scale,
                10.0 * scale,
                10.0 * scale,
                Color::WHITE,
            );
            target.restore();
        }
        self.fps.frame(self.clock.app_dt());
    }

    /// Talks to the closest NPC in range. Returns the line now shown, or
    /// `None` if nobody is in range, input is locked or the conversation
    /// just ended.
    pub fn interact(&mut self) -> Option<Message> {
        if !self.accepts_input() {
            return None;
        }
        let index = self.closest_npc()?;
        self.npcs[index].talk().cloned()
    }

    /// Index of the closest NPC with something to say within
    /// [`INTERACTION_RANGE`](crate::npc::INTERACTION_RANGE) of the player.
    fn closest_npc(&self) -> Option<usize> {
        let player = self.player.position();
        self.npcs
            .iter()
            .enumerate()
            .filter(|(_, npc)| npc.has_dialog() && npc.in_range(player))
            .min_by(|(_, a), (_, b)| a.distance_to(player).total_cmp(&b.distance_to(player)))
            .map(|(index, _)| index)
    }

    /// Player input is only accepted while the camera is on the player.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.camera.is_on_target()
    }

    /// Freezes game time.
    pub fn pause(&mut self) {
        self.clock.pause();
    }

    /// Unfreezes game time.
    pub fn resume(&mut self) {
        self.clock.resume();
    }

    /// Flips pause; returns `true` if now paused.
    pub fn toggle_pause(&mut self) -> bool {
        self.clock.toggle_pause()
    }

    /// Frame clock.
    #[must_use]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Camera, e.g. to request a focus.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Scene particles.
    #[must_use]
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    /// Mutable scene particles, e.g. to register an effect emitter.
    pub fn particles_mut(&mut self) -> &mut ParticleSystem {
        &mut self.particles
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable player, e.g. to feed input.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// NPCs in registration order.
    #[must_use]
    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// Level collision.
    #[must_use]
    pub fn world(&self) -> &CollisionMap {
        &self.world
    }

    /// Last published FPS value.
    #[must_use]
    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }
}
