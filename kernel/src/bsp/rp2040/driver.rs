// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! BSP driver support.

use super::{exception, memory::map::mmio};
use crate::{bsp::device_driver, driver as generic_driver, exception as generic_exception, time};
use core::sync::atomic::{AtomicBool, Ordering};

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

static RESETS: device_driver::Resets =
    unsafe { device_driver::Resets::new(mmio::RESETS_START, mmio::RESETS_CLR_START) };

static GPIO: device_driver::GPIO =
    unsafe { device_driver::GPIO::new(mmio::IO_BANK0_START, mmio::SIO_START) };

static NVIC: device_driver::Nvic = unsafe { device_driver::Nvic::new(mmio::NVIC_START) };

static SYSTICK: device_driver::SysTick = unsafe {
    device_driver::SysTick::new(
        mmio::SYSTICK_START,
        super::ROSC_NOMINAL_HZ / time::TICK_HZ - 1,
    )
};

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

/// This must be called only after successful init of the RESETS driver, because the GPIO register
/// blocks stay in reset until then.
unsafe fn post_init_gpio() -> Result<(), &'static str> {
    GPIO.map_status_led();

    Ok(())
}

/// This must be called only after successful init of the NVIC driver.
unsafe fn post_init_nvic() -> Result<(), &'static str> {
    generic_exception::asynchronous::register_irq_manager(&NVIC);

    Ok(())
}

fn instantiate_resets() -> Result<(), &'static str> {
    let resets_descriptor = generic_driver::DeviceDriverDescriptor::new(&RESETS, None, None);
    generic_driver::driver_manager().register_driver(resets_descriptor);

    Ok(())
}

fn instantiate_gpio() -> Result<(), &'static str> {
    let gpio_descriptor =
        generic_driver::DeviceDriverDescriptor::new(&GPIO, Some(post_init_gpio), None);
    generic_driver::driver_manager().register_driver(gpio_descriptor);

    Ok(())
}

fn instantiate_nvic() -> Result<(), &'static str> {
    let nvic_descriptor =
        generic_driver::DeviceDriverDescriptor::new(&NVIC, Some(post_init_nvic), None);
    generic_driver::driver_manager().register_driver(nvic_descriptor);

    Ok(())
}

fn instantiate_systick() -> Result<(), &'static str> {
    let systick_descriptor = generic_driver::DeviceDriverDescriptor::new(
        &SYSTICK,
        None,
        Some(exception::asynchronous::irq_map::SYS_TICK),
    );
    generic_driver::driver_manager().register_driver(systick_descriptor);

    Ok(())
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Initialize the driver subsystem.
///
/// Registration order is init order. RESETS must come first so that the GPIO bank is out of reset
/// before its post-init callback programs the pad.
///
/// # Safety
///
/// See child function calls.
pub unsafe fn init() -> Result<(), &'static str> {
    static INIT_DONE: AtomicBool = AtomicBool::new(false);
    if INIT_DONE.load(Ordering::Relaxed) {
        return Err("Init already done");
    }

    instantiate_resets()?;
    instantiate_gpio()?;
    instantiate_nvic()?;
    instantiate_systick()?;

    INIT_DONE.store(true, Ordering::Relaxed);
    Ok(())
}

/// Flip the status LED. Runs in interrupt context when used as a tick hook.
pub fn toggle_status_led() {
    GPIO.toggle_status_led();
}
