pub const TICK_RATE: f32 = 60.0;
pub const TICK_SECS: f32 = 1.0 / 60.0;
pub const MAX_FRAME_SECS: f32 = 0.25; // Clamp to avoid a burst of ticks after a stalled frame.

pub fn ticks_from_secs(secs: f32) -> u64 {
    (secs * TICK_RATE).round().max(0.0) as u64
}
