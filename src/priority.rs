//! Scheduling priorities and the events that retarget a running task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::Duration;

use crate::color::Rgb;
use crate::log::log;

/// Scheduler priority handed to the host's thread API.
///
/// Lower values are more urgent, following the usual RTOS convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub i8);

impl Priority {
    pub const fn value(self) -> i8 {
        self.0
    }

    /// Returns true if `self` should preempt `other`
    pub const fn is_more_urgent_than(self, other: Self) -> bool {
        self.0 < other.0
    }
}

/// One selectable operating point for a variable-priority task.
///
/// The color is carried here, next to the priority, so rendering code reads
/// it from task state instead of reverse-mapping a scheduler number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityLevel {
    pub name: &'static str,
    pub priority: Priority,
    /// Motion speed multiplier
    pub speed: f32,
    pub color: Rgb,
}

/// Events accepted by a task at the top of its loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityEvent {
    /// Move to the next level, wrapping around
    Cycle,
    /// Jump to a level by index; out-of-range indices are ignored
    Select(usize),
    /// Change the tick period
    SetPeriod(Duration),
}

/// Queue depth for button presses
pub const EVENT_CHANNEL_SIZE: usize = 4;

/// Bounded event queue between an input callback and a task loop.
///
/// The producer runs in interrupt context, so the queue is guarded by a
/// critical section rather than the host's thread mutex. Sending never
/// blocks; the task drains the queue at the top of its loop.
pub type EventChannel<const SIZE: usize> =
    Channel<CriticalSectionRawMutex, PriorityEvent, SIZE>;
pub type EventSender<'a, const SIZE: usize> =
    Sender<'a, CriticalSectionRawMutex, PriorityEvent, SIZE>;
pub type EventReceiver<'a, const SIZE: usize> =
    Receiver<'a, CriticalSectionRawMutex, PriorityEvent, SIZE>;

/// Edge-triggered input callback body.
///
/// Only queues an event; a full queue drops the press and returns false.
pub fn button_pressed<const SIZE: usize>(sender: &EventSender<'_, SIZE>) -> bool {
    sender.try_send(PriorityEvent::Cycle).is_ok()
}

/// Round-robin over a fixed table of levels
#[derive(Debug, Clone)]
pub struct PriorityCycle<const N: usize> {
    levels: [PriorityLevel; N],
    index: usize,
}

impl<const N: usize> PriorityCycle<N> {
    /// Start at `index`, clamped into the table
    pub const fn new(levels: [PriorityLevel; N], index: usize) -> Self {
        let index = if N == 0 {
            0
        } else if index < N {
            index
        } else {
            N - 1
        };
        Self { levels, index }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&PriorityLevel> {
        self.levels.get(self.index)
    }

    /// Advance to the next level and return it
    pub fn advance(&mut self) -> Option<&PriorityLevel> {
        if N == 0 {
            return None;
        }
        self.index = (self.index + 1) % N;
        let level = self.levels.get(self.index)?;
        log!(
            "[PriorityCycle.advance] switching to {} ({})",
            level.name,
            level.priority.value()
        );
        Some(level)
    }

    /// Select a level by index, ignoring indices outside the table
    pub fn select(&mut self, index: usize) -> Option<&PriorityLevel> {
        if index >= N {
            return None;
        }
        self.index = index;
        self.levels.get(index)
    }
}

pub const CYAN: Rgb = Rgb { r: 0, g: 32, b: 32 };
pub const GREEN: Rgb = Rgb { r: 0, g: 64, b: 0 };
pub const YELLOW: Rgb = Rgb { r: 32, g: 32, b: 0 };
pub const RED: Rgb = Rgb { r: 64, g: 0, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 64 };

/// Number of levels the button cycles through
pub const CYCLE_LEN: usize = 4;

/// Levels the button cycles through, most urgent first
pub const CYCLE_LEVELS: [PriorityLevel; CYCLE_LEN] = [
    PriorityLevel {
        name: "HIGHEST",
        priority: Priority(2),
        speed: 1.5,
        color: CYAN,
    },
    PriorityLevel {
        name: "HIGH",
        priority: Priority(4),
        speed: 1.0,
        color: GREEN,
    },
    PriorityLevel {
        name: "MEDIUM",
        priority: Priority(6),
        speed: 0.8,
        color: YELLOW,
    },
    PriorityLevel {
        name: "LOW",
        priority: Priority(8),
        speed: 1.2,
        color: RED,
    },
];

/// Index into [`CYCLE_LEVELS`] the variable task starts at
pub const CYCLE_START_INDEX: usize = 1;
