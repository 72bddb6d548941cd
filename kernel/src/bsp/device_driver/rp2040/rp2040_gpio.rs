// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! RP2040 GPIO driver.
//!
//! Only the board's status LED is wired up. The pin is driven entirely through the SIO block:
//! direction comes from the set alias of the output-enable register, and level changes go
//! through the XOR alias, so a toggle is a single write with no read back of the current level.

use crate::{
    bsp::device_driver::common::MMIODerefWrapper,
    driver,
    synchronization::{interface::Mutex, IRQSafeNullLock},
};
use tock_registers::{
    interfaces::Writeable,
    register_bitfields, register_structs,
    registers::{ReadWrite, WriteOnly},
};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

register_bitfields! {
    u32,

    /// Function select control for the status LED pin.
    GPIO25_CTRL [
        /// Peripheral that drives the pad.
        FUNCSEL OFFSET(0) NUMBITS(5) [
            Sio = 5
        ]
    ]
}

register_structs! {
    #[allow(non_snake_case)]
    IoBank0RegisterBlock {
        (0x000 => _reserved1),
        (0x0cc => GPIO25_CTRL: ReadWrite<u32, GPIO25_CTRL::Register>),
        (0x0d0 => @END),
    }
}

register_structs! {
    #[allow(non_snake_case)]
    SioRegisterBlock {
        (0x00 => _reserved1),
        (0x1c => GPIO_OUT_XOR: WriteOnly<u32>),
        (0x20 => _reserved2),
        (0x24 => GPIO_OE_SET: WriteOnly<u32>),
        (0x28 => @END),
    }
}

/// Abstraction for the associated IO_BANK0 MMIO registers.
type IoBank0Registers = MMIODerefWrapper<IoBank0RegisterBlock>;

/// Abstraction for the associated SIO MMIO registers.
type SioRegisters = MMIODerefWrapper<SioRegisterBlock>;

struct GPIOInner {
    io_bank0_registers: IoBank0Registers,
    sio_registers: SioRegisters,
}

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Representation of the GPIO hardware.
pub struct GPIO {
    inner: IRQSafeNullLock<GPIOInner>,
}

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

impl GPIOInner {
    /// The status LED sits on GPIO 25.
    const STATUS_LED_MASK: u32 = 1 << 25;

    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide correct MMIO start addresses.
    pub const unsafe fn new(io_bank0_mmio_start_addr: usize, sio_mmio_start_addr: usize) -> Self {
        Self {
            io_bank0_registers: IoBank0Registers::new(io_bank0_mmio_start_addr),
            sio_registers: SioRegisters::new(sio_mmio_start_addr),
        }
    }

    /// Route the status LED pad to the SIO block and enable the output driver.
    fn map_status_led(&mut self) {
        self.io_bank0_registers
            .GPIO25_CTRL
            .write(GPIO25_CTRL::FUNCSEL::Sio);
        self.sio_registers.GPIO_OE_SET.set(Self::STATUS_LED_MASK);
    }

    /// Flip the status LED level.
    fn toggle_status_led(&mut self) {
        self.sio_registers.GPIO_OUT_XOR.set(Self::STATUS_LED_MASK);
    }
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl GPIO {
    pub const COMPATIBLE: &'static str = "RP2040 GPIO";

    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide correct MMIO start addresses.
    pub const unsafe fn new(io_bank0_mmio_start_addr: usize, sio_mmio_start_addr: usize) -> Self {
        Self {
            inner: IRQSafeNullLock::new(GPIOInner::new(
                io_bank0_mmio_start_addr,
                sio_mmio_start_addr,
            )),
        }
    }

    /// Concurrency safe version of `GPIOInner.map_status_led()`.
    pub fn map_status_led(&self) {
        self.inner.lock(|inner| inner.map_status_led())
    }

    /// Concurrency safe version of `GPIOInner.toggle_status_led()`.
    ///
    /// Called from interrupt context by the heartbeat tick hook.
    pub fn toggle_status_led(&self) {
        self.inner.lock(|inner| inner.toggle_status_led())
    }
}

//--------------------------------------------------------------------------------------------------
// OS Interface Code
//--------------------------------------------------------------------------------------------------

impl driver::interface::DeviceDriver for GPIO {
    type IRQNumberType = crate::bsp::device_driver::IRQNumber;

    fn compatible(&self) -> &'static str {
        Self::COMPATIBLE
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const LED_MASK: u32 = 1 << 25;

    fn gpio_over(io_bank0: &mut [u32; 52], sio: &mut [u32; 10]) -> GPIO {
        unsafe { GPIO::new(io_bank0.as_mut_ptr() as usize, sio.as_mut_ptr() as usize) }
    }

    /// Mapping the LED selects the SIO function and enables the output driver, and nothing
    /// touches the output level.
    #[test]
    fn map_status_led_programs_funcsel_and_output_enable() {
        let mut io_bank0 = [0u32; 52];
        let mut sio = [0u32; 10];
        let gpio = gpio_over(&mut io_bank0, &mut sio);

        gpio.map_status_led();

        assert_eq!(io_bank0[0xcc / 4], 5); // FUNCSEL = SIO
        assert_eq!(sio[0x24 / 4], LED_MASK); // output enable, set alias
        assert_eq!(sio[0x1c / 4], 0); // no level write
    }

    /// A toggle is exactly one write, to the XOR alias.
    #[test]
    fn toggle_goes_through_the_xor_alias() {
        let mut io_bank0 = [0u32; 52];
        let mut sio = [0u32; 10];
        let gpio = gpio_over(&mut io_bank0, &mut sio);

        gpio.toggle_status_led();

        assert_eq!(sio[0x1c / 4], LED_MASK);
        assert_eq!(sio[0x24 / 4], 0);
        assert_eq!(io_bank0[0xcc / 4], 0);
    }
}
