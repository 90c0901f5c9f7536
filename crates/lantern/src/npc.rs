//! Talking NPCs.

use lantern_render::{Color, RenderTarget};
use lantern_shared::Vec2;
use tracing::debug;

use crate::dialog::{Dialog, Message};
use crate::game_loop::{GameObject, UpdateContext};

/// How close (pixels) the player must stand to talk.
pub const INTERACTION_RANGE: f32 = 35.0;

/// NPC body width in pixels.
pub const NPC_WIDTH: f32 = 20.0;

/// NPC body height in pixels.
pub const NPC_HEIGHT: f32 = 30.0;

const NPC_COLOR: Color = Color::BLACK;

/// Standing character with a scripted conversation.
#[derive(Debug, Clone)]
pub struct Npc {
    name: String,
    /// Feet position
    position: Vec2,
    /// Lines played by every conversation
    script: Vec<Message>,
    /// Running conversation
    dialog: Option<Dialog>,
}

impl Npc {
    /// Creates an NPC standing at `position`.
    pub fn new(name: impl Into<String>, position: Vec2, script: Vec<Message>) -> Self {
        Self {
            name: name.into(),
            position,
            script,
            dialog: None,
        }
    }

    /// Display name, also the speaker name in its script.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Feet position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// `true` if the NPC has anything to say.
    #[must_use]
    pub fn has_dialog(&self) -> bool {
        !self.script.is_empty()
    }

    /// Distance from the feet to `point`.
    #[must_use]
    pub fn distance_to(&self, point: Vec2) -> f32 {
        (self.position - point).length()
    }

    /// `true` if `point` is within [`INTERACTION_RANGE`].
    #[must_use]
    pub fn in_range(&self, point: Vec2) -> bool {
        self.distance_to(point) <= INTERACTION_RANGE
    }

    /// Starts the conversation or moves it forward.
    ///
    /// Returns the line now shown. Once the script is exhausted the
    /// conversation closes and `None` is returned; the next call starts over.
    pub fn talk(&mut self) -> Option<&Message> {
        if !self.has_dialog() {
            return None;
        }
        if self.dialog.is_none() {
            debug!(name = %self.name, "dialog started");
        }
        let dialog = self.dialog.get_or_insert_with(|| Dialog::new(self.script.clone()));
        if dialog.advance().is_none() {
            debug!(name = %self.name, "dialog finished");
            self.dialog = None;
            return None;
        }
        self.dialog.as_ref().and_then(Dialog::current)
    }

    /// `true` while a conversation is open.
    #[must_use]
    pub fn is_talking(&self) -> bool {
        self.dialog.is_some()
    }

    /// Line currently shown, if talking.
    #[must_use]
    pub fn current_line(&self) -> Option<&Message> {
        self.dialog.as_ref().and_then(Dialog::current)
    }
}

impl GameObject for Npc {
    fn update(&mut self, _dt: f32, _ctx: &mut UpdateContext<'_>) {}

    fn draw(&self, target: &mut dyn RenderTarget) {
        let left = self.position.x - NPC_WIDTH / 2.0;
        let top = -self.position.y - NPC_HEIGHT;
        target.fill_rect(left, top, NPC_WIDTH, NPC_HEIGHT, NPC_COLOR);
        target.fill_text(&self.name, left, top, 10.0, NPC_COLOR);

        if let Some(line) = self.current_line() {
            let text = format!("{}: {}", line.speaker, line.text);
            target.fill_text(&text, left, top - 30.0, 10.0, Color::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_render::{CommandRecorder, RenderCommand};

    fn npc() -> Npc {
        Npc::new(
            "block",
            Vec2::new(100.0, 0.0),
            vec![Message::new("player", "Hello block."), Message::new("block", "Bye.")],
        )
    }

    #[test]
    fn test_talk_cycles_and_restarts() {
        let mut npc = npc();
        assert!(!npc.is_talking());

        assert_eq!(npc.talk().map(|m| m.text.as_str()), Some("Hello block."));
        assert!(npc.is_talking());
        assert_eq!(npc.talk().map(|m| m.speaker.as_str()), Some("block"));
        assert!(npc.talk().is_none());
        assert!(!npc.is_talking());

        assert_eq!(npc.talk().map(|m| m.text.as_str()), Some("Hello block."));
    }

    #[test]
    fn test_silent_npc() {
        let mut npc = Npc::new("rock", Vec2::ZERO, Vec::new());
        assert!(!npc.has_dialog());
        assert!(npc.talk().is_none());
        assert!(!npc.is_talking());
    }

    #[test]
    fn test_range() {
        let npc = npc();
        assert!(npc.in_range(Vec2::new(70.0, 0.0)));
        assert!(npc.in_range(Vec2::new(65.0, 0.0)));
        assert!(!npc.in_range(Vec2::new(64.0, 0.0)));
    }

    #[test]
    fn test_draw_shows_current_line() {
        let mut npc = npc();
        npc.talk();
        let mut recorder = CommandRecorder::default();
        npc.draw(&mut recorder);

        let texts: Vec<&str> = recorder
            .commands()
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["block", "player: Hello block."]);
    }
}
