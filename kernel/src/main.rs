// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! The `kernel` binary.

#![cfg_attr(target_os = "none", no_main)]
#![cfg_attr(target_os = "none", no_std)]

#[cfg(target_os = "none")]
use core::num::NonZeroU32;
#[cfg(target_os = "none")]
use libkernel::{bsp, console, cpu, driver, exception, info, state, time, warn};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

/// The status LED flips once per this many ticks.
#[cfg(target_os = "none")]
const HEARTBEAT_PERIOD_TICKS: NonZeroU32 = match NonZeroU32::new(500) {
    Some(ticks) => ticks,
    None => panic!("Heartbeat period must be non-zero"),
};

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

/// Early init code.
///
/// # Safety
///
/// - Only a single core must be active and running this function.
/// - The init calls in this function must appear in the correct order:
///     - Exception handling must point VTOR at the kernel's vector table before any interrupt
///       source is armed.
///     - The driver subsystem must be brought up before interrupts are unmasked, because the
///       SysTick driver arms its interrupt during init.
#[cfg(target_os = "none")]
#[no_mangle]
unsafe fn kernel_init() -> ! {
    exception::handling_init();

    // Initialize the BSP driver subsystem.
    if let Err(x) = bsp::driver::init() {
        panic!("Error initializing BSP driver subsystem: {}", x);
    }

    // Initialize all device drivers.
    driver::driver_manager().init_drivers_and_irqs();

    // Attach the heartbeat to the tick before interrupts start firing.
    if let Err(msg) = time::tick_manager().register_periodic(
        HEARTBEAT_PERIOD_TICKS,
        "LED heartbeat",
        bsp::driver::toggle_status_led,
    ) {
        warn!("Heartbeat disabled: {}", msg);
    }

    // Unmask interrupts on the boot CPU core.
    exception::asynchronous::local_irq_unmask();

    // Announce conclusion of the kernel_init() phase.
    state::state_manager().transition_to_single_core_main();

    // Transition from unsafe to safe.
    kernel_main()
}

/// The main function running after the early init.
#[cfg(target_os = "none")]
fn kernel_main() -> ! {
    info!("{}", libkernel::version());
    info!("Booting on: {}", bsp::board_name());

    let (_, privilege_level) = exception::current_privilege_level();
    info!("Current privilege level: {}", privilege_level);

    info!("Exception handling state:");
    exception::asynchronous::print_state();

    info!("Scheduler tick: {} Hz", time::TICK_HZ);

    info!("Drivers loaded:");
    driver::driver_manager().enumerate();

    info!("Registered IRQ handlers:");
    exception::asynchronous::irq_manager().print_handler();

    info!("Registered tick hooks:");
    time::tick_manager().print_hooks();

    info!(
        "Characters buffered so far: {}",
        console::console().chars_written()
    );
    info!("Entering idle loop");

    // The tick counter has exactly one writer, the SysTick handler. This loop only ever reads it
    // and compares with wrapping differences, never with equality, so a missed wakeup or a
    // counter wrap cannot stall the reporting.
    let mut next_report = time::TICK_HZ;
    loop {
        cpu::wait_for_interrupt();

        let ticks = time::tick_manager().tick_count();
        if ticks.wrapping_sub(next_report) as i32 >= 0 {
            info!("Uptime: {} s", time::tick_manager().uptime().as_secs());
            next_report = next_report.wrapping_add(time::TICK_HZ);
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {}
