// Grid:
pub const COLS: usize = 30;
pub const ROWS: usize = 20;
pub const TILE_SIZE: f32 = 32.0; // Display units per cell edge.

// Player:
pub const PLAYER_SIZE: f32 = TILE_SIZE - 4.0;
pub const COLLISION_MARGIN: f32 = 6.0; // Inset of the bounding box corners, so brushing a wall doesn't stop you.
pub const PLAYER_SPEED: f32 = 4.0; // Units per tick.
pub const FRAME_COUNT: usize = 4;
pub const TICKS_PER_FRAME: u32 = 8;

// Maze decoration and features:
pub const FLOWER_CHANCE: f64 = 0.1;
pub const SIGN_RADIUS: f32 = 1.5 * TILE_SIZE;
pub const NOTE_MIN_DISTANCE: f32 = 5.0; // In cells, measured from the center cell.
pub const NOTE_PLACEMENT_ATTEMPTS: usize = 1024;

// Messages, in seconds:
pub const HEART_MESSAGE_SECS: f32 = 3.0;
pub const NOTE_MESSAGE_SECS: f32 = 4.0;
