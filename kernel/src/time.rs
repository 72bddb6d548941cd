// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Timekeeping.
//!
//! The kernel counts time in scheduler ticks. A periodic timer interrupt advances the counter;
//! everything else only ever reads it. ARMv6-M has no compare-and-swap, so the whole scheme is
//! built from plain atomic loads and stores:
//!
//! - The tick interrupt handler is the only writer, which makes its read-modify-write sequence
//!   race-free without CAS.
//! - Readers must treat the counter as free-running and wrapping. Comparisons are wrapping
//!   differences, never equality, because a sleeping reader can miss any number of values.

use crate::synchronization::{interface::ReadWriteEx, InitStateLock};
use core::{
    num::NonZeroU32,
    sync::atomic::{AtomicU32, Ordering},
    time::Duration,
};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

const MAX_TICK_HOOKS: usize = 4;

/// A deferred work item, run from interrupt context every `every_ticks` ticks.
#[derive(Copy, Clone)]
struct TickHook {
    every_ticks: NonZeroU32,
    hook: TickHookFn,
    name: &'static str,
}

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// The scheduler tick rate.
pub const TICK_HZ: u32 = 1_000;

/// Type of the functions that can be hooked into the tick.
pub type TickHookFn = fn();

/// The global tick state.
pub struct TickManager {
    ticks: AtomicU32,
    hooks: InitStateLock<[Option<TickHook>; MAX_TICK_HOOKS]>,
}

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

static TICK_MANAGER: TickManager = TickManager::new();

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Return a reference to the global TickManager.
pub fn tick_manager() -> &'static TickManager {
    &TICK_MANAGER
}

impl TickManager {
    const MICROS_PER_TICK: u64 = (1_000_000 / TICK_HZ) as u64;

    /// Create an instance.
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
            hooks: InitStateLock::new([None; MAX_TICK_HOOKS]),
        }
    }

    /// The current tick count.
    ///
    /// Wraps silently at the numeric limit. Relaxed is enough, since the counter itself is the
    /// only data being communicated.
    pub fn tick_count(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Uptime since the tick interrupt was enabled.
    ///
    /// Derived from the tick count, so it wraps along with it.
    pub fn uptime(&self) -> Duration {
        Duration::from_micros(u64::from(self.tick_count()) * Self::MICROS_PER_TICK)
    }

    /// Hook `hook` into the tick so that it runs every `every_ticks` ticks.
    ///
    /// Hooks run in interrupt context and must be short. May only be called during kernel init.
    pub fn register_periodic(
        &self,
        every_ticks: NonZeroU32,
        name: &'static str,
        hook: TickHookFn,
    ) -> Result<(), &'static str> {
        self.hooks.write(|hooks| {
            let slot = hooks
                .iter_mut()
                .find(|slot| slot.is_none())
                .ok_or("No free tick hook slot")?;

            *slot = Some(TickHook {
                every_ticks,
                hook,
                name,
            });

            Ok(())
        })
    }

    /// Advance the counter by one tick and run the hooks that are due.
    ///
    /// Must only ever be called from the tick interrupt handler, which makes this the sole
    /// writer of the counter. A hook with period `p` runs when the new count is a multiple of
    /// `p`, so the first run happens a full period after start, not at tick zero. After a wrap,
    /// count zero is a multiple of every period again.
    pub fn advance(&self) {
        let ticks = self.tick_count().wrapping_add(1);
        self.ticks.store(ticks, Ordering::Relaxed);

        self.hooks.read(|hooks| {
            for hook in hooks.iter().flatten() {
                if ticks % hook.every_ticks.get() == 0 {
                    (hook.hook)();
                }
            }
        })
    }

    /// Print the registered tick hooks.
    pub fn print_hooks(&self) {
        use crate::info;

        self.hooks.read(|hooks| {
            for hook in hooks.iter().flatten() {
                info!("      every {: >5} ticks: {}", hook.every_ticks, hook.name);
            }
        })
    }

    /// Set the tick count to an arbitrary value, so tests can place it next to the wrap.
    #[cfg(test)]
    fn set_tick_count(&self, ticks: u32) {
        self.ticks.store(ticks, Ordering::Relaxed);
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::AtomicUsize;

    fn period(ticks: u32) -> NonZeroU32 {
        NonZeroU32::new(ticks).unwrap()
    }

    /// K calls to advance() must land the counter at exactly K.
    #[test]
    fn advance_counts_every_tick() {
        let manager = TickManager::new();

        for _ in 0..7 {
            manager.advance();
        }

        assert_eq!(manager.tick_count(), 7);
    }

    /// A hook with period 500 runs at ticks 500, 1000 and 1500, and nowhere else.
    #[test]
    fn hook_runs_exactly_on_its_period() {
        static RUNS: AtomicUsize = AtomicUsize::new(0);
        fn count_run() {
            RUNS.fetch_add(1, Ordering::Relaxed);
        }

        let manager = TickManager::new();
        manager
            .register_periodic(period(500), "counter", count_run)
            .unwrap();

        for tick in 1..=1500_usize {
            manager.advance();

            assert_eq!(RUNS.load(Ordering::Relaxed), tick / 500, "at tick {}", tick);
        }
    }

    /// Hooks with different periods run independently.
    #[test]
    fn hooks_run_independently() {
        static FAST_RUNS: AtomicUsize = AtomicUsize::new(0);
        static SLOW_RUNS: AtomicUsize = AtomicUsize::new(0);
        fn fast() {
            FAST_RUNS.fetch_add(1, Ordering::Relaxed);
        }
        fn slow() {
            SLOW_RUNS.fetch_add(1, Ordering::Relaxed);
        }

        let manager = TickManager::new();
        manager.register_periodic(period(2), "fast", fast).unwrap();
        manager.register_periodic(period(5), "slow", slow).unwrap();

        for _ in 0..10 {
            manager.advance();
        }

        assert_eq!(FAST_RUNS.load(Ordering::Relaxed), 5);
        assert_eq!(SLOW_RUNS.load(Ordering::Relaxed), 2);
    }

    /// The counter wraps silently instead of saturating or faulting.
    #[test]
    fn counter_wraps_silently() {
        let manager = TickManager::new();
        manager.set_tick_count(u32::MAX);

        manager.advance();

        assert_eq!(manager.tick_count(), 0);
    }

    /// Hook capacity is bounded; exhausting it is an error, not a panic.
    #[test]
    fn hook_slots_are_bounded() {
        fn nop() {}

        let manager = TickManager::new();
        for _ in 0..MAX_TICK_HOOKS {
            manager.register_periodic(period(1), "filler", nop).unwrap();
        }

        assert!(manager.register_periodic(period(1), "extra", nop).is_err());
    }

    /// Uptime is derived from ticks at the advertised resolution.
    #[test]
    fn uptime_follows_tick_count() {
        let manager = TickManager::new();

        for _ in 0..TICK_HZ {
            manager.advance();
        }

        assert_eq!(manager.uptime(), Duration::from_secs(1));
    }
}
