// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! RP2040 RESETS driver.
//!
//! Every subsystem on the chip comes out of power-on held in reset. This driver releases the
//! subsystems the kernel uses and spins until the hardware reports them ready. The release goes
//! through the chip's atomic clear alias, so no read-modify-write of the reset register is
//! needed and a release can never clobber bits owned by someone else.

use crate::{
    bsp::device_driver::common::MMIODerefWrapper,
    cpu, driver,
    synchronization::{interface::Mutex, IRQSafeNullLock},
};
use tock_registers::{
    interfaces::{Readable, Writeable},
    register_bitfields, register_structs,
    registers::{ReadOnly, ReadWrite, WriteOnly},
};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

register_bitfields! {
    u32,

    /// Reset state, one bit per subsystem. Layout is shared by RESET, its aliases and
    /// RESET_DONE.
    PERIPHERALS [
        /// GPIO function select block.
        IO_BANK0 OFFSET(5) NUMBITS(1) [],

        /// Pad control block.
        PADS_BANK0 OFFSET(8) NUMBITS(1) []
    ]
}

register_structs! {
    #[allow(non_snake_case)]
    RegisterBlock {
        (0x00 => RESET: ReadWrite<u32, PERIPHERALS::Register>),
        (0x04 => _reserved1),
        (0x08 => RESET_DONE: ReadOnly<u32, PERIPHERALS::Register>),
        (0x0c => @END),
    }
}

register_structs! {
    #[allow(non_snake_case)]
    ClrRegisterBlock {
        (0x00 => RESET: WriteOnly<u32, PERIPHERALS::Register>),
        (0x04 => @END),
    }
}

/// Abstraction for the associated MMIO registers.
type Registers = MMIODerefWrapper<RegisterBlock>;

/// Abstraction for the clear alias of the MMIO registers. A write of 1 clears the addressed
/// bits atomically in hardware.
type ClrRegisters = MMIODerefWrapper<ClrRegisterBlock>;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Representation of the RESETS block.
pub struct Resets {
    registers: Registers,
    clr_registers: IRQSafeNullLock<ClrRegisters>,
}

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

impl Resets {
    /// Release the kernel's reset domains.
    ///
    /// Writes only the clear alias. Clearing the bit of an already-released subsystem is a
    /// hardware no-op, which makes repeated releases harmless.
    fn release(&self) {
        self.clr_registers.lock(|registers| {
            registers
                .RESET
                .write(PERIPHERALS::IO_BANK0::SET + PERIPHERALS::PADS_BANK0::SET)
        })
    }

    /// Spin until the hardware reports the kernel's domains released.
    ///
    /// Polling issues no writes. When the done bits are already set, the first read satisfies
    /// the loop and this returns immediately.
    fn wait_released(&self) {
        while !self
            .registers
            .RESET_DONE
            .matches_all(PERIPHERALS::IO_BANK0::SET + PERIPHERALS::PADS_BANK0::SET)
        {
            cpu::nop();
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl Resets {
    pub const COMPATIBLE: &'static str = "RP2040 RESETS";

    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide correct MMIO start addresses, where
    ///   `mmio_clr_start_addr` is the clear alias of `mmio_start_addr`.
    pub const unsafe fn new(mmio_start_addr: usize, mmio_clr_start_addr: usize) -> Self {
        Self {
            registers: Registers::new(mmio_start_addr),
            clr_registers: IRQSafeNullLock::new(ClrRegisters::new(mmio_clr_start_addr)),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// OS Interface Code
//--------------------------------------------------------------------------------------------------

impl driver::interface::DeviceDriver for Resets {
    type IRQNumberType = crate::bsp::device_driver::IRQNumber;

    fn compatible(&self) -> &'static str {
        Self::COMPATIBLE
    }

    unsafe fn init(&self) -> Result<(), &'static str> {
        self.release();
        self.wait_released();

        Ok(())
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use driver::interface::DeviceDriver;

    const DOMAIN_MASK: u32 = (1 << 5) | (1 << 8);

    fn resets_over(base: &mut [u32; 3], clr: &mut [u32; 1]) -> Resets {
        unsafe { Resets::new(base.as_mut_ptr() as usize, clr.as_mut_ptr() as usize) }
    }

    /// The release goes through the clear alias exclusively. The base register is left alone.
    #[test]
    fn release_writes_only_the_clear_alias() {
        let mut base = [0u32; 3];
        let mut clr = [0u32; 1];
        let resets = resets_over(&mut base, &mut clr);

        resets.release();

        assert_eq!(clr[0], DOMAIN_MASK);
        assert_eq!(base[0], 0);
    }

    /// Polling a status that is already set returns at once and issues no writes.
    #[test]
    fn wait_on_released_domains_returns_without_writes() {
        let mut base = [0u32; 3];
        let mut clr = [0u32; 1];
        base[2] = DOMAIN_MASK; // RESET_DONE reads as released.
        let resets = resets_over(&mut base, &mut clr);

        resets.wait_released();

        assert_eq!(clr[0], 0);
        assert_eq!(base, [0, 0, DOMAIN_MASK]);
    }

    /// Running init against already-released hardware leaves the same state behind, twice.
    #[test]
    fn init_is_idempotent() {
        let mut base = [0u32; 3];
        let mut clr = [0u32; 1];
        base[2] = DOMAIN_MASK;
        let resets = resets_over(&mut base, &mut clr);

        unsafe { resets.init() }.unwrap();
        let after_first = (base, clr);

        unsafe { resets.init() }.unwrap();

        assert_eq!((base, clr), after_first);
        assert_eq!(clr[0], DOMAIN_MASK);
    }
}
