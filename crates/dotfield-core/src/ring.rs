//! Fixed-capacity, time-stamped ring buffer.
//!
//! Slots are written circularly by a monotonically increasing cursor; the
//! oldest entry is silently overwritten. Unused slots are `None` rather
//! than carrying a sentinel timestamp.

use glam::Vec2;

/// A position recorded at an engine-clock time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedSample {
    pub pos: Vec2,
    pub time: f32,
}

impl TimedSample {
    #[inline]
    pub fn age(&self, now: f32) -> f32 {
        now - self.time
    }

    /// Live while `0 <= age <= max_age`. Samples stamped at `time <= 0`
    /// (before the clock has started) never count.
    #[inline]
    pub fn is_live(&self, now: f32, max_age: f32) -> bool {
        let age = self.age(now);
        self.time > 0.0 && (0.0..=max_age).contains(&age)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimedRing<const N: usize> {
    slots: [Option<TimedSample>; N],
    cursor: u64,
}

impl<const N: usize> Default for TimedRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TimedRing<N> {
    pub const CAPACITY: usize = N;

    pub fn new() -> Self {
        Self {
            slots: [None; N],
            cursor: 0,
        }
    }

    /// Overwrite the slot at `cursor % N` and advance. Returns the slot index.
    pub fn push(&mut self, pos: Vec2, time: f32) -> usize {
        let slot = (self.cursor % N as u64) as usize;
        self.slots[slot] = Some(TimedSample { pos, time });
        self.cursor = self.cursor.wrapping_add(1);
        slot
    }

    /// Total writes so far (not reduced modulo capacity).
    #[inline]
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Slot holding the most recent write; 0 before anything is written.
    #[inline]
    pub fn head(&self) -> usize {
        if self.cursor == 0 {
            0
        } else {
            ((self.cursor - 1) % N as u64) as usize
        }
    }

    /// Slot holding the oldest entry once the ring has wrapped.
    #[inline]
    pub fn oldest_slot(&self) -> usize {
        (self.head() + 1) % N
    }

    /// Slot written just before `slot` in chronological order.
    #[inline]
    pub fn predecessor(slot: usize) -> usize {
        if slot == 0 {
            N - 1
        } else {
            slot - 1
        }
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<&TimedSample> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    #[inline]
    pub fn slots(&self) -> &[Option<TimedSample>; N] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Entries still within `max_age` of `now`, in slot order.
    pub fn live(&self, now: f32, max_age: f32) -> impl Iterator<Item = (usize, &TimedSample)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(i, s)| s.as_ref().filter(|s| s.is_live(now, max_age)).map(|s| (i, s)))
    }
}
