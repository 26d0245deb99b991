use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Instant};

use super::TickResult;
use crate::frame_scheduler::FrameScheduler;
use crate::pattern::Pattern;
use crate::priority::{CYCLE_LEN, EventReceiver, Priority, PriorityCycle, PriorityEvent};
use crate::region::Region;
use crate::shared::SharedFrame;

/// Event input of a variable-priority task
struct EventInput<'a, const EVENTS: usize> {
    receiver: EventReceiver<'a, EVENTS>,
    cycle: PriorityCycle<CYCLE_LEN>,
}

/// Producer that owns one region of the shared frame.
///
/// Motion state lives in the pattern and is only touched by this task.
/// Each tick steps the pattern outside the lock and then draws it through
/// a [`RegionView`](crate::region::RegionView), so pixels outside
/// `region` are unreachable.
pub struct AnimationTask<'a, P, const EVENTS: usize> {
    name: &'static str,
    region: Region,
    pattern: P,
    priority: Priority,
    scheduler: FrameScheduler,
    events: Option<EventInput<'a, EVENTS>>,
    ticks: u32,
}

impl<'a, P: Pattern, const EVENTS: usize> AnimationTask<'a, P, EVENTS> {
    pub const fn new(
        name: &'static str,
        region: Region,
        pattern: P,
        priority: Priority,
        period: Duration,
    ) -> Self {
        Self {
            name,
            region,
            pattern,
            priority,
            scheduler: FrameScheduler::new(period),
            events: None,
            ticks: 0,
        }
    }

    /// Let the task react to priority events.
    ///
    /// The cycle's current level is applied right away.
    #[must_use]
    pub fn with_events(
        mut self,
        receiver: EventReceiver<'a, EVENTS>,
        cycle: PriorityCycle<CYCLE_LEN>,
    ) -> Self {
        if let Some(level) = cycle.current() {
            self.priority = level.priority;
            self.pattern.apply_level(level);
        }
        self.events = Some(EventInput { receiver, cycle });
        self
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn region(&self) -> Region {
        self.region
    }

    pub const fn priority(&self) -> Priority {
        self.priority
    }

    pub const fn period(&self) -> Duration {
        self.scheduler.frame_duration()
    }

    pub const fn pattern(&self) -> &P {
        &self.pattern
    }

    /// Number of completed ticks, wrapping
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Run one loop iteration
    pub fn tick<R: RawMutex, const W: usize, const H: usize>(
        &mut self,
        frame: &SharedFrame<R, W, H>,
        now: Instant,
    ) -> TickResult {
        let priority = self.process_events();

        let region = self.region.clipped(W, H);
        self.pattern.advance(region.width, region.height);

        let pattern = &mut self.pattern;
        frame.lock(|state| {
            let mut view = state.buffer.view(region);
            pattern.draw(&mut view);
        });

        self.ticks = self.ticks.wrapping_add(1);
        TickResult::from_frame(self.scheduler.tick(now), priority)
    }

    /// Drain queued events, returning the new priority if it changed
    fn process_events(&mut self) -> Option<Priority> {
        let input = self.events.as_mut()?;
        let before = self.priority;

        while let Ok(event) = input.receiver.try_receive() {
            let level = match event {
                PriorityEvent::Cycle => input.cycle.advance().copied(),
                PriorityEvent::Select(index) => input.cycle.select(index).copied(),
                PriorityEvent::SetPeriod(period) => {
                    self.scheduler.set_frame_duration(period);
                    None
                }
            };
            if let Some(level) = level {
                self.priority = level.priority;
                self.pattern.apply_level(&level);
            }
        }

        (self.priority != before).then_some(self.priority)
    }
}
