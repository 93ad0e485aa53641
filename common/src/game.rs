pub mod phase;

use glam::{Vec2, vec2};
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use phase::{Choice, Phase, PhaseEvent};

use crate::{
    buttons::{PointerAction, pointer_action},
    collision::try_move,
    config::GameConfig,
    constants::{HEART_MESSAGE_SECS, NOTE_MESSAGE_SECS, SIGN_RADIUS, TILE_SIZE},
    error::MazeError,
    input::PlayerInput,
    inventory::Inventory,
    maze::Maze,
    notification::{HEART_FOUND_TEXT, LOCKED_TEXT, MessageBox, MessageKind},
    player::Player,
    tile::Tile,
    time::ticks_from_secs,
};

/// Things that happened during a tick or a choice, for the presentation
/// layer to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    HeartFound,
    NoteFound { index: usize, text: String },
    ChestLocked,
    GoalReached,
    ChoiceMade(Choice),
}

/// One play session. Owns every piece of mutable game state; the client
/// only feeds it input and reads it back to draw.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    pub maze: Maze,
    pub player: Player,
    pub inventory: Inventory,
    pub messages: MessageBox,
    phase: Phase,
    tick: u64,
    sign_text: String,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, MazeError> {
        let maze = Maze::generate(&config.maze_settings(), rng)?;
        Ok(Self::from_maze(maze, config.sign_text.clone(), config.notes.clone()))
    }

    /// Starts a session on an already built maze. Notes beyond the number
    /// the maze has room for are dropped, so every remaining one can be
    /// found.
    pub fn from_maze(maze: Maze, sign_text: impl Into<String>, mut notes: Vec<String>) -> Self {
        notes.truncate(maze.notes_placed);
        let spawn = maze.layout.spawn.origin();

        Self {
            maze,
            player: Player::new(spawn),
            inventory: Inventory::new(notes),
            messages: MessageBox::new(),
            phase: Phase::Exploring,
            tick: 0,
            sign_text: sign_text.into(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn sign_text(&self) -> &str {
        &self.sign_text
    }

    /// Size of the logical drawing surface in display units.
    pub fn surface_size(&self) -> Vec2 {
        vec2(
            self.maze.grid.cols() as f32 * TILE_SIZE,
            self.maze.grid.rows() as f32 * TILE_SIZE,
        )
    }

    /// Advances the simulation by one fixed step. Does nothing once the
    /// chest has been opened.
    pub fn tick(&mut self, input: &PlayerInput) -> Vec<GameEvent> {
        if self.phase != Phase::Exploring {
            return Vec::new();
        }

        self.tick += 1;
        self.messages.expire(self.tick);
        self.update_sign_message();

        let direction = input.direction();
        let displacement = match direction {
            Some(direction) => {
                self.player.facing = direction;
                direction.delta() * self.player.speed
            }
            None => Vec2::ZERO,
        };

        let outcome = try_move(
            &self.player,
            displacement,
            &mut self.maze.grid,
            &mut self.inventory,
        );
        self.player.position = outcome.position;
        self.player.animate(direction.is_some());

        for event in &outcome.events {
            self.react(event);
        }

        outcome.events
    }

    /// Answers the question. Only the first answer counts.
    pub fn choose(&mut self, choice: Choice) -> Option<GameEvent> {
        let next = self.phase.next(PhaseEvent::Chose(choice))?;
        self.phase = next;

        match choice {
            Choice::Accept => self.maze.grid.draw_heart(Tile::Flower),
            Choice::Decline => self.maze.grid.fill(Tile::Spike),
        }
        self.messages.hide();
        info!("player chose {}, game is now {}", choice, self.phase);

        Some(GameEvent::ChoiceMade(choice))
    }

    /// Handles a pointer press at `point` in surface coordinates. Restart is
    /// passed back for the caller to act on, since it replaces the session.
    pub fn press(&mut self, point: Vec2) -> Option<PointerAction> {
        let action = pointer_action(self.phase, point, self.surface_size())?;
        if let PointerAction::Choose(choice) = action {
            self.choose(choice);
        }
        Some(action)
    }

    fn update_sign_message(&mut self) {
        let sign = self.maze.layout.sign.origin();

        if self.player.position.distance(sign) < SIGN_RADIUS {
            if !self.messages.is_showing() || self.messages.is_showing_kind(MessageKind::Locked) {
                self.messages
                    .show(MessageKind::Sign, self.sign_text.clone(), None, self.tick);
            }
        } else if self.messages.is_showing_kind(MessageKind::Sign) {
            self.messages.hide();
        }
    }

    fn react(&mut self, event: &GameEvent) {
        match event {
            GameEvent::HeartFound => self.messages.show(
                MessageKind::HeartFound,
                HEART_FOUND_TEXT,
                Some(ticks_from_secs(HEART_MESSAGE_SECS)),
                self.tick,
            ),
            GameEvent::NoteFound { text, .. } => self.messages.show(
                MessageKind::Note,
                text.clone(),
                Some(ticks_from_secs(NOTE_MESSAGE_SECS)),
                self.tick,
            ),
            GameEvent::ChestLocked => {
                self.messages
                    .show(MessageKind::Locked, LOCKED_TEXT, None, self.tick)
            }
            GameEvent::GoalReached => {
                if let Some(next) = self.phase.next(PhaseEvent::GoalReached) {
                    self.phase = next;
                    self.messages.hide();
                    info!("chest opened on tick {}, waiting for an answer", self.tick);
                }
            }
            GameEvent::ChoiceMade(_) => {}
        }
    }
}
