//! Integration tests for the frame loop.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lantern::camera::CameraConfig;
use lantern::particles::EmitterConfig;
use lantern::render::{BlendMode, Color, CommandRecorder, RenderCommand, RenderTarget};
use lantern::shared::{Vec2, MAX_FRAME_STEP};
use lantern::{
    CollisionMap, Game, GameConfig, GameError, GameObject, Message, Npc, PlayerInput,
    UpdateContext,
};

const STEP: f32 = 1.0 / 60.0;
const SIGN_COLOR: Color = Color::hex(0x20C0_40FF);

/// Static prop that counts its updates.
struct Sign {
    updates: Arc<AtomicUsize>,
}

impl GameObject for Sign {
    fn update(&mut self, _dt: f32, _ctx: &mut UpdateContext<'_>) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.fill_rect(50.0, -11.0, 4.0, 10.0, SIGN_COLOR);
    }
}

/// 64 x 40 px, solid bottom row: standing height is y = 1.
fn level() -> CollisionMap {
    let mut rows = vec![".".repeat(64); 39];
    rows.push("#".repeat(64));
    CollisionMap::from_ascii(&rows.join("\n")).unwrap()
}

fn game_at(spawn: Vec2) -> Game {
    Game::new(&GameConfig::default().with_seed(1), level(), spawn).unwrap()
}

fn walk_right() -> PlayerInput {
    PlayerInput {
        right: true,
        ..PlayerInput::default()
    }
}

#[test]
fn test_rejects_bad_camera_config() {
    let config = GameConfig {
        camera: CameraConfig {
            interpolation_time: 1.5,
            ..CameraConfig::default()
        },
        ..GameConfig::default()
    };
    assert!(matches!(
        Game::new(&config, level(), Vec2::ZERO),
        Err(GameError::Camera(_))
    ));
}

#[test]
fn test_long_stall_is_clamped() {
    let mut game = game_at(Vec2::new(20.0, 1.0));
    let stats = game.update(3.0);

    assert_eq!(stats.dt, MAX_FRAME_STEP);
    assert_eq!(stats.game_time, f64::from(MAX_FRAME_STEP));
    assert_eq!(game.clock().app_time(), 3.0);
}

#[test]
fn test_pause_freezes_the_scene() {
    let mut game = game_at(Vec2::new(20.0, 1.0));
    let sparks = game.particles_mut().create_emitter(
        EmitterConfig::at(Vec2::new(30.0, 20.0))
            .with_velocity(Vec2::new(10.0, 5.0))
            .with_seed(3),
    );
    if let Some(emitter) = game.particles_mut().emitter_mut(sparks) {
        emitter.emit(5);
    }
    game.camera_mut().focus_on(2.0, 50.0, 30.0, 2.0);
    game.update(STEP);

    let positions = |game: &Game| -> Vec<Vec2> {
        game.particles()
            .emitter(sparks)
            .map(|e| e.particles().iter().map(|p| p.position()).collect())
            .unwrap_or_default()
    };
    let before = positions(&game);
    let progress = game.camera().focuses()[0].progress();
    let game_time = game.clock().game_time();

    game.pause();
    for _ in 0..30 {
        let stats = game.update(STEP);
        assert_eq!(stats.dt, 0.0);
    }

    assert_eq!(positions(&game), before);
    assert_eq!(game.camera().focuses()[0].progress(), progress);
    assert_eq!(game.clock().game_time(), game_time);

    assert!(!game.toggle_pause());
    game.update(STEP);
    assert_ne!(positions(&game), before);
}

#[test]
fn test_input_locked_during_focus() {
    let mut game = game_at(Vec2::new(20.0, 1.0));
    game.update(STEP);
    game.camera_mut().focus_on(1.0, 60.0, 30.0, 1.0);
    assert!(!game.accepts_input());

    let start = game.player().position();
    game.player_mut().set_input(walk_right());
    for _ in 0..30 {
        game.update(STEP);
    }
    assert_eq!(game.player().position().x, start.x);
    assert_eq!(game.player().input(), PlayerInput::default());

    for _ in 0..60 {
        game.update(STEP);
    }
    assert!(game.accepts_input());

    game.player_mut().set_input(walk_right());
    for _ in 0..10 {
        game.update(STEP);
    }
    assert!(game.player().position().x > start.x);
}

#[test]
fn test_draw_order() {
    let mut game = game_at(Vec2::new(20.0, 1.0));
    let mut recorder = CommandRecorder::new(480.0, 300.0);
    game.frame(STEP, &mut recorder);

    let commands = recorder.commands();
    assert_eq!(
        &commands[..5],
        &[
            RenderCommand::Clear,
            RenderCommand::Save,
            RenderCommand::Translate { x: 240.0, y: 150.0 },
            RenderCommand::Scale { sx: 1.0, sy: 1.0 },
            RenderCommand::Scale { sx: 1.0, sy: 1.0 },
        ]
    );
    assert!(matches!(commands[5], RenderCommand::Translate { .. }));

    // Dust emitter, empty, then the player on top of it.
    assert_eq!(
        &commands[6..9],
        &[
            RenderCommand::Save,
            RenderCommand::Blend(BlendMode::SourceOver),
            RenderCommand::Restore,
        ]
    );
    assert!(matches!(commands[9], RenderCommand::FillRect { .. }));

    let bars = commands
        .iter()
        .position(|c| *c == RenderCommand::ResetTransform)
        .unwrap();
    let fps = commands
        .iter()
        .position(|c| matches!(c, RenderCommand::Text { text, .. } if text.ends_with("FPS")))
        .unwrap();
    assert!(bars < fps);
    assert_eq!(commands.last(), Some(&RenderCommand::Restore));
    assert_eq!(recorder.depth(), 0);
}

#[test]
fn test_fps_text_can_be_hidden() {
    let config = GameConfig {
        show_fps: false,
        ..GameConfig::default().with_seed(1)
    };
    let mut game = Game::new(&config, level(), Vec2::new(20.0, 1.0)).unwrap();
    let mut recorder = CommandRecorder::default();
    game.frame(STEP, &mut recorder);

    assert!(!recorder
        .commands()
        .iter()
        .any(|c| matches!(c, RenderCommand::Text { .. })));
}

#[test]
fn test_landing_kicks_up_dust() {
    let mut game = game_at(Vec2::new(20.0, 41.0));

    let mut landed = false;
    for _ in 0..120 {
        let stats = game.update(STEP);
        if game.player().is_grounded() {
            assert!(stats.particles >= 20, "particles = {}", stats.particles);
            landed = true;
            break;
        }
        assert_eq!(stats.particles, 0);
    }
    assert!(landed);
    assert_eq!(game.player().position().y, 1.0);
}

#[test]
fn test_talking_to_npc() {
    let mut game = game_at(Vec2::new(20.0, 1.0));
    game.add_npc(Npc::new(
        "block",
        Vec2::new(30.0, 1.0),
        vec![Message::new("player", "Hello block."), Message::new("block", "Bye.")],
    ));

    assert_eq!(game.interact().map(|m| m.text), Some("Hello block.".to_string()));
    assert!(game.npcs()[0].is_talking());
    assert_eq!(game.interact().map(|m| m.speaker), Some("block".to_string()));
    assert!(game.interact().is_none());
    assert!(!game.npcs()[0].is_talking());

    game.camera_mut().focus_on(1.0, 0.0, 0.0, 1.0);
    assert!(game.interact().is_none());
    assert!(!game.npcs()[0].is_talking());
}

#[test]
fn test_objects_run_after_npcs() {
    let mut game = game_at(Vec2::new(20.0, 1.0));
    game.add_npc(Npc::new("block", Vec2::new(40.0, 1.0), vec![Message::new("block", "Hi.")]));
    let updates = Arc::new(AtomicUsize::new(0));
    game.add_object(Box::new(Sign {
        updates: Arc::clone(&updates),
    }));

    let mut recorder = CommandRecorder::default();
    game.frame(STEP, &mut recorder);
    game.pause();
    game.update(STEP);
    assert_eq!(updates.load(Ordering::Relaxed), 2);

    let commands = recorder.commands();
    let npc = commands
        .iter()
        .position(|c| matches!(c, RenderCommand::Text { text, .. } if text == "block"))
        .unwrap();
    let sign = commands
        .iter()
        .position(|c| matches!(c, RenderCommand::FillRect { color, .. } if *color == SIGN_COLOR))
        .unwrap();
    assert!(npc < sign);
}

#[test]
fn test_npc_out_of_range() {
    let mut game = game_at(Vec2::new(5.0, 1.0));
    game.add_npc(Npc::new("far", Vec2::new(60.0, 1.0), vec![Message::new("far", "Hi.")]));
    assert!(game.interact().is_none());
}

#[test]
fn test_seeded_games_replay() {
    let run = || {
        let mut game = game_at(Vec2::new(10.0, 30.0));
        let mut recorder = CommandRecorder::default();
        let mut frames = Vec::new();
        for i in 0..180 {
            game.player_mut().set_input(PlayerInput {
                right: i < 90,
                left: false,
                jump: i == 100,
            });
            recorder.begin_frame();
            game.frame(STEP, &mut recorder);
            frames.push(recorder.take_commands());
        }
        frames
    };
    assert_eq!(run(), run());
}
