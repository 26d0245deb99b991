//! Pattern system with compile-time known pattern variants
//!
//! Every pattern keeps its motion state in its own struct and touches
//! pixels only through a [`Canvas`]. All patterns are stored in an enum to
//! avoid heap allocations.

mod ball;
mod breath;
mod flash;
mod priority_bars;
mod quadrant_ball;
mod rainbow;
mod twinkle;
mod wave;

pub use ball::BallPattern;
pub use breath::BreathPattern;
pub use flash::{FLASH_FRAMES, FlashBurst};
pub use priority_bars::{PRIORITY_LEVELS, PriorityBars, bar_length};
pub use quadrant_ball::{BallState, QuadrantBall};
pub use rainbow::RainbowSweep;
pub use twinkle::TwinklePattern;
pub use wave::WavePattern;

use crate::frame::Canvas;
use crate::priority::{CYCLE_LEVELS, CYCLE_START_INDEX, PriorityLevel};

const PATTERN_NAME_WAVE: &str = "wave";
const PATTERN_NAME_BALL: &str = "ball";
const PATTERN_NAME_BREATH: &str = "breath";
const PATTERN_NAME_TWINKLE: &str = "twinkle";
const PATTERN_NAME_PRIORITY_BARS: &str = "priority_bars";
const PATTERN_NAME_RAINBOW_SWEEP: &str = "rainbow_sweep";
const PATTERN_NAME_FLASH_BURST: &str = "flash_burst";
const PATTERN_NAME_QUADRANT_BALL: &str = "quadrant_ball";

const PATTERN_ID_WAVE: u8 = 0;
const PATTERN_ID_BALL: u8 = 1;
const PATTERN_ID_BREATH: u8 = 2;
const PATTERN_ID_TWINKLE: u8 = 3;
const PATTERN_ID_PRIORITY_BARS: u8 = 4;
const PATTERN_ID_RAINBOW_SWEEP: u8 = 5;
const PATTERN_ID_FLASH_BURST: u8 = 6;
const PATTERN_ID_QUADRANT_BALL: u8 = 7;

/// Seed used when a pattern is built from its id alone
const DEFAULT_SEED: u64 = 0x5eed;

pub trait Pattern {
    /// Step private motion state. Runs outside the frame lock.
    ///
    /// `width` and `height` are the size of the area the pattern owns.
    fn advance(&mut self, _width: usize, _height: usize) {}

    /// Draw the current state. Runs under the frame lock, so keep it short.
    fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C);

    /// React to a priority level change of the owning task
    fn apply_level(&mut self, _level: &PriorityLevel) {}

    /// Reset pattern state
    fn reset(&mut self) {}
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    Wave(WavePattern),
    Ball(BallPattern),
    Breath(BreathPattern),
    Twinkle(TwinklePattern),
    PriorityBars(PriorityBars),
    RainbowSweep(RainbowSweep),
    FlashBurst(FlashBurst),
    QuadrantBall(QuadrantBall),
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    Wave = PATTERN_ID_WAVE,
    Ball = PATTERN_ID_BALL,
    Breath = PATTERN_ID_BREATH,
    Twinkle = PATTERN_ID_TWINKLE,
    PriorityBars = PATTERN_ID_PRIORITY_BARS,
    RainbowSweep = PATTERN_ID_RAINBOW_SWEEP,
    FlashBurst = PATTERN_ID_FLASH_BURST,
    QuadrantBall = PATTERN_ID_QUADRANT_BALL,
}

impl PatternId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_WAVE => Self::Wave,
            PATTERN_ID_BALL => Self::Ball,
            PATTERN_ID_BREATH => Self::Breath,
            PATTERN_ID_TWINKLE => Self::Twinkle,
            PATTERN_ID_PRIORITY_BARS => Self::PriorityBars,
            PATTERN_ID_RAINBOW_SWEEP => Self::RainbowSweep,
            PATTERN_ID_FLASH_BURST => Self::FlashBurst,
            PATTERN_ID_QUADRANT_BALL => Self::QuadrantBall,
            _ => return None,
        })
    }

    pub fn to_slot(self) -> PatternSlot {
        match self {
            Self::Wave => PatternSlot::Wave(WavePattern::new()),
            Self::Ball => PatternSlot::Ball(BallPattern::new()),
            Self::Breath => PatternSlot::Breath(BreathPattern::new()),
            Self::Twinkle => PatternSlot::Twinkle(TwinklePattern::new(DEFAULT_SEED)),
            Self::PriorityBars => PatternSlot::PriorityBars(PriorityBars::new(DEFAULT_SEED)),
            Self::RainbowSweep => PatternSlot::RainbowSweep(RainbowSweep::new()),
            Self::FlashBurst => PatternSlot::FlashBurst(FlashBurst::new()),
            Self::QuadrantBall => PatternSlot::QuadrantBall(QuadrantBall::new(
                &CYCLE_LEVELS[CYCLE_START_INDEX],
            )),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wave => PATTERN_NAME_WAVE,
            Self::Ball => PATTERN_NAME_BALL,
            Self::Breath => PATTERN_NAME_BREATH,
            Self::Twinkle => PATTERN_NAME_TWINKLE,
            Self::PriorityBars => PATTERN_NAME_PRIORITY_BARS,
            Self::RainbowSweep => PATTERN_NAME_RAINBOW_SWEEP,
            Self::FlashBurst => PATTERN_NAME_FLASH_BURST,
            Self::QuadrantBall => PATTERN_NAME_QUADRANT_BALL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_WAVE => Some(Self::Wave),
            PATTERN_NAME_BALL => Some(Self::Ball),
            PATTERN_NAME_BREATH => Some(Self::Breath),
            PATTERN_NAME_TWINKLE => Some(Self::Twinkle),
            PATTERN_NAME_PRIORITY_BARS => Some(Self::PriorityBars),
            PATTERN_NAME_RAINBOW_SWEEP => Some(Self::RainbowSweep),
            PATTERN_NAME_FLASH_BURST => Some(Self::FlashBurst),
            PATTERN_NAME_QUADRANT_BALL => Some(Self::QuadrantBall),
            _ => None,
        }
    }
}

impl PatternSlot {
    /// Get the pattern ID for external observation
    pub fn id(&self) -> PatternId {
        match self {
            Self::Wave(_) => PatternId::Wave,
            Self::Ball(_) => PatternId::Ball,
            Self::Breath(_) => PatternId::Breath,
            Self::Twinkle(_) => PatternId::Twinkle,
            Self::PriorityBars(_) => PatternId::PriorityBars,
            Self::RainbowSweep(_) => PatternId::RainbowSweep,
            Self::FlashBurst(_) => PatternId::FlashBurst,
            Self::QuadrantBall(_) => PatternId::QuadrantBall,
        }
    }
}

impl Pattern for PatternSlot {
    fn advance(&mut self, width: usize, height: usize) {
        match self {
            Self::Wave(pattern) => pattern.advance(width, height),
            Self::Ball(pattern) => pattern.advance(width, height),
            Self::Breath(pattern) => pattern.advance(width, height),
            Self::Twinkle(pattern) => pattern.advance(width, height),
            Self::PriorityBars(pattern) => pattern.advance(width, height),
            Self::RainbowSweep(pattern) => pattern.advance(width, height),
            Self::FlashBurst(pattern) => pattern.advance(width, height),
            Self::QuadrantBall(pattern) => pattern.advance(width, height),
        }
    }

    fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        match self {
            Self::Wave(pattern) => pattern.draw(canvas),
            Self::Ball(pattern) => pattern.draw(canvas),
            Self::Breath(pattern) => pattern.draw(canvas),
            Self::Twinkle(pattern) => pattern.draw(canvas),
            Self::PriorityBars(pattern) => pattern.draw(canvas),
            Self::RainbowSweep(pattern) => pattern.draw(canvas),
            Self::FlashBurst(pattern) => pattern.draw(canvas),
            Self::QuadrantBall(pattern) => pattern.draw(canvas),
        }
    }

    fn apply_level(&mut self, level: &PriorityLevel) {
        if let Self::QuadrantBall(pattern) = self {
            pattern.apply_level(level);
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Wave(pattern) => Pattern::reset(pattern),
            Self::Ball(pattern) => Pattern::reset(pattern),
            Self::Breath(pattern) => Pattern::reset(pattern),
            Self::Twinkle(pattern) => Pattern::reset(pattern),
            Self::PriorityBars(pattern) => Pattern::reset(pattern),
            Self::RainbowSweep(pattern) => Pattern::reset(pattern),
            Self::FlashBurst(pattern) => Pattern::reset(pattern),
            Self::QuadrantBall(pattern) => Pattern::reset(pattern),
        }
    }
}
