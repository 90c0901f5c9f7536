//! # Headless Run
//!
//! Plays a scripted session at 60 Hz against a recording render target:
//! walk to the NPC, watch a camera focus, talk, jump, pause.
//!
//! Usage: `lantern_headless [game.toml]`. Log level via `LOG_LEVEL`.

use lantern::particles::PresetLibrary;
use lantern::render::CommandRecorder;
use lantern::shared::{Vec2, GAME_HEIGHT, GAME_WIDTH};
use lantern::telemetry::init_telemetry;
use lantern::{CollisionMap, Game, GameConfig, GameResult, Message, Npc, PlayerInput};
use tracing::info;

const STEP: f32 = 1.0 / 60.0;
const RUN_SECONDS: f32 = 14.0;

const MAP_WIDTH: usize = 480;
const MAP_HEIGHT: usize = 160;
const GROUND: usize = 10;

const EFFECTS: &str = r##"
[presets.beacon]
blend_mode = "lighter"
velocity = { min = { x = -20.0, y = 40.0 }, max = { x = 20.0, y = 80.0 } }
color = { one_of = ["#FFD27F", "#FFB347", "#FFFFFF"] }
size = { min = 1.0, max = 3.0 }
lifetime = { min = 0.6, max = 1.2 }
gravity = { x = 0.0, y = -30.0 }
alpha_curve = { kind = "cos", rise = 0.1, fall = 0.5 }
seed = 11
"##;

/// Flat ground with a ledge at the far end.
fn level() -> GameResult<CollisionMap> {
    let mut text = String::with_capacity((MAP_WIDTH + 1) * MAP_HEIGHT);
    for row in 0..MAP_HEIGHT {
        let height_from_bottom = MAP_HEIGHT - 1 - row;
        for column in 0..MAP_WIDTH {
            let solid = height_from_bottom < GROUND || (column >= 400 && height_from_bottom < GROUND + 40);
            text.push(if solid { '#' } else { '.' });
        }
        text.push('\n');
    }
    Ok(CollisionMap::from_ascii(&text)?)
}

fn script() -> Vec<Message> {
    vec![
        Message::new("player", "Hello block.\nDo you have a task for me?"),
        Message::new("block", "Sure, Player 1. Just follow me."),
        Message::new("player", "Sure."),
        Message::new("block", "You ready?"),
        Message::new("player", "Sure."),
        Message::new("block", "Thanks for your help."),
        Message::new("player", "You're welcome."),
        Message::new("block", "Bye."),
    ]
}

fn main() -> GameResult<()> {
    init_telemetry(false);

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::from_toml(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default().with_seed(1),
    };

    let ground = GROUND as f32;
    let npc_position = Vec2::new(160.0, ground);
    let beacon_position = Vec2::new(420.0, ground + 40.0);

    let mut game = Game::new(&config, level()?, Vec2::new(40.0, ground + 20.0))?;
    game.add_npc(Npc::new("block", npc_position, script()));

    let effects = PresetLibrary::from_toml(EFFECTS)?;
    let beacon = game
        .particles_mut()
        .create_emitter(effects.config("beacon", beacon_position)?);

    let mut recorder = CommandRecorder::new(GAME_WIDTH as f32, GAME_HEIGHT as f32);
    let mut focus_requested = false;
    let mut paused_at = None;
    let mut next_talk = 0.0;
    let mut next_report = 1.0;
    let mut lines = 0;
    let mut jumped = false;
    let mut app_time = 0.0;

    while app_time < RUN_SECONDS {
        let time = game.clock().game_time();
        let player = game.player().position();

        // Walk to the NPC, then stand still.
        let walking = time > 0.5 && player.x < npc_position.x - 20.0;
        game.player_mut().set_input(PlayerInput {
            right: walking,
            left: false,
            jump: false,
        });

        if !focus_requested && time >= 3.0 {
            focus_requested = true;
            info!(x = beacon_position.x, y = beacon_position.y, "showing the beacon");
            game.camera_mut()
                .focus_on(3.0, beacon_position.x, beacon_position.y, 0.5);
        }

        if let Some(emitter) = game.particles_mut().emitter_mut(beacon) {
            if (3.0..6.0).contains(&time) {
                emitter.emit(2);
            }
        }

        if time >= 6.5 && time >= next_talk && game.accepts_input() && !jumped {
            next_talk = time + 0.5;
            match game.interact() {
                Some(line) => {
                    lines += 1;
                    info!(speaker = %line.speaker, text = %line.text, "dialog");
                }
                None if lines > 0 => {
                    jumped = true;
                    game.player_mut().set_input(PlayerInput {
                        jump: true,
                        ..PlayerInput::default()
                    });
                }
                None => {}
            }
        }

        match paused_at {
            None if time >= 12.0 => {
                game.pause();
                paused_at = Some(app_time);
                info!(time, "paused");
            }
            Some(at) if game.clock().is_paused() && app_time - at >= 1.0 => {
                game.resume();
                info!(time, "resumed");
            }
            _ => {}
        }

        recorder.begin_frame();
        let stats = game.frame(STEP, &mut recorder);
        app_time += STEP;

        if app_time >= next_report {
            next_report += 1.0;
            let camera = game.camera().position();
            info!(
                frame = stats.frame,
                game_time = stats.game_time,
                particles = stats.particles,
                focus_force = stats.focus_force,
                player_x = game.player().position().x,
                camera_x = camera.x,
                camera_y = camera.y,
                commands = recorder.command_count(),
                fps = game.fps(),
                "frame"
            );
        }
    }

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                    LANTERN HEADLESS RUN                          ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  Game time:      {:>8.2}s                                       ║", game.clock().game_time());
    println!("║  App time:       {:>8.2}s                                       ║", game.clock().app_time());
    println!("║  Dialog lines:   {:>8}                                        ║", lines);
    println!("║  Particles:      {:>8}                                        ║", game.particles().particle_count());
    println!("╚══════════════════════════════════════════════════════════════════╝");

    Ok(())
}
