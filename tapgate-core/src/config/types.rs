//! Lock timing and combination types

/// Interval between two polls of the buttons
pub const POLL_INTERVAL_MS: u32 = 50;

/// Hold after a counted press before polling resumes
pub const DEBOUNCE_HOLD_MS: u32 = 200;

/// On and off time of one cross blink
pub const BLINK_HOLD_MS: u32 = 500;

/// Cooldown after too many failed attempts
pub const LOCKOUT_DURATION_MS: u32 = 10_000;

/// Failed attempts that trigger a lockout
pub const MAX_FAILED_ATTEMPTS: u8 = 5;

/// Presses sampled per attempt
pub const PRESSES_PER_ATTEMPT: u8 = 5;

/// Cross blinks shown after a rejected attempt
pub const FAILURE_BLINKS: u8 = 3;

/// Chime notes in ascending order (A4, C5, E5)
pub const CHIME_NOTES_HZ: [u32; 3] = [440, 523, 659];

/// Length of each chime note
pub const CHIME_NOTE_MS: u32 = 200;

/// Idle time that terminates an LED frame
///
/// WS2812 latches after 50 µs of low; twice that leaves margin for
/// slower clones.
pub const FRAME_RESET_US: u32 = 100;

/// A tone at a fixed pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneSpec {
    /// Pitch in Hz (0 = silence)
    pub frequency_hz: u32,
    /// Length in milliseconds
    pub duration_ms: u32,
}

impl ToneSpec {
    /// Short click played for every counted press
    pub const PRESS_FEEDBACK: Self = Self {
        frequency_hz: 1000,
        duration_ms: 100,
    };
}

/// Press counts that unlock the node
///
/// Only the per-channel totals matter; the order of presses does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Combination {
    /// Presses required on channel A
    pub channel_a: u8,
    /// Presses required on channel B
    pub channel_b: u8,
}

impl Default for Combination {
    fn default() -> Self {
        Self {
            channel_a: 3,
            channel_b: 2,
        }
    }
}

/// Combination lock behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockConfig {
    /// Target press counts
    pub combination: Combination,
    /// Presses sampled before an attempt is evaluated
    pub presses_per_attempt: u8,
    /// Failed attempts before lockout
    pub max_failed_attempts: u8,
    /// Lockout cooldown (ms)
    pub lockout_ms: u32,
    /// Button poll interval (ms)
    pub poll_interval_ms: u32,
    /// Hold after each counted press (ms)
    pub debounce_ms: u32,
    /// Tone played for each counted press
    pub press_tone: ToneSpec,
    /// Cross blinks after a rejected attempt
    pub failure_blinks: u8,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            combination: Combination::default(),
            presses_per_attempt: PRESSES_PER_ATTEMPT,
            max_failed_attempts: MAX_FAILED_ATTEMPTS,
            lockout_ms: LOCKOUT_DURATION_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
            debounce_ms: DEBOUNCE_HOLD_MS,
            press_tone: ToneSpec::PRESS_FEEDBACK,
            failure_blinks: FAILURE_BLINKS,
        }
    }
}
