//! Four-quadrant bouncing ball setup for a 16x16 matrix.
//!
//! Each quadrant runs its own [`QuadrantBall`] at a fixed scheduler
//! priority, except the top-left one, which walks through
//! [`CYCLE_LEVELS`] on every button press. Together with the display task
//! this shows how priorities shape the motion of otherwise identical
//! producers.

use crate::error::{Error, Result};
use crate::frame_scheduler::{DEFAULT_ANIMATION_PERIOD, DEFAULT_DISPLAY_PERIOD};
use crate::pattern::QuadrantBall;
use crate::priority::{
    BLUE, CYAN, CYCLE_LEVELS, CYCLE_START_INDEX, EVENT_CHANNEL_SIZE, EventReceiver, Priority,
    PriorityCycle, PriorityLevel, YELLOW,
};
use crate::region::Region;
use crate::task::{AnimationTask, check_cadence};

pub const MATRIX_SIZE: usize = 16;
pub const QUAD_SIZE: usize = MATRIX_SIZE / 2;
pub const QUADRANTS: usize = 4;

/// The flusher runs above every quadrant
pub const DISPLAY_PRIORITY: Priority = Priority(1);

pub type QuadrantTask<'a> = AnimationTask<'a, QuadrantBall, EVENT_CHANNEL_SIZE>;

/// Fixed levels of quadrants 2 to 4
pub const FIXED_LEVELS: [PriorityLevel; QUADRANTS - 1] = [
    PriorityLevel {
        name: "Q2",
        priority: Priority(2),
        speed: 1.5,
        color: CYAN,
    },
    PriorityLevel {
        name: "Q3",
        priority: Priority(6),
        speed: 0.8,
        color: YELLOW,
    },
    PriorityLevel {
        name: "Q4",
        priority: Priority(8),
        speed: 1.2,
        color: BLUE,
    },
];

const TASK_NAMES: [&str; QUADRANTS] = ["quad1", "quad2", "quad3", "quad4"];

/// Build the four quadrant tasks, quadrant 1 first.
///
/// `events` feeds quadrant 1; wire the button callback to the matching
/// sender with [`button_pressed`](crate::priority::button_pressed).
pub fn quadrant_tasks(
    events: EventReceiver<'_, EVENT_CHANNEL_SIZE>,
) -> Result<[QuadrantTask<'_>; QUADRANTS]> {
    let regions: [Region; QUADRANTS] =
        core::array::from_fn(|index| Region::quadrant(index, MATRIX_SIZE, MATRIX_SIZE));
    if !Region::are_disjoint(&regions) {
        return Err(Error::InvalidConfig {
            reason: "quadrant regions overlap",
        });
    }
    check_cadence(DEFAULT_DISPLAY_PERIOD, &[DEFAULT_ANIMATION_PERIOD])?;

    let start = &CYCLE_LEVELS[CYCLE_START_INDEX];
    let variable = AnimationTask::new(
        TASK_NAMES[0],
        regions[0],
        QuadrantBall::new(start),
        start.priority,
        DEFAULT_ANIMATION_PERIOD,
    )
    .with_events(events, PriorityCycle::new(CYCLE_LEVELS, CYCLE_START_INDEX));

    let fixed = |index: usize, level: &PriorityLevel| {
        AnimationTask::new(
            TASK_NAMES[index],
            regions[index],
            QuadrantBall::new(level),
            level.priority,
            DEFAULT_ANIMATION_PERIOD,
        )
    };

    Ok([
        variable,
        fixed(1, &FIXED_LEVELS[0]),
        fixed(2, &FIXED_LEVELS[1]),
        fixed(3, &FIXED_LEVELS[2]),
    ])
}
