// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! ARMv6-M SysTick driver.
//!
//! Drives the kernel's scheduler tick. The counter runs from the core clock, which on this board
//! is the raw ring oscillator, and requests the SysTick exception every time it counts down to
//! zero.

use super::super::common::MMIODerefWrapper;
use crate::{
    driver, exception,
    synchronization::{interface::Mutex, IRQSafeNullLock},
    time,
};
use tock_registers::{
    interfaces::Writeable, register_bitfields, register_structs, registers::ReadWrite,
};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

register_bitfields! {
    u32,

    /// SysTick Control and Status Register.
    CSR [
        /// Counter enable.
        ENABLE OFFSET(0) NUMBITS(1) [],

        /// Exception request on count-to-zero.
        TICKINT OFFSET(1) NUMBITS(1) [],

        /// Clock source selection.
        CLKSOURCE OFFSET(2) NUMBITS(1) [
            External = 0,
            Processor = 1
        ]
    ]
}

register_structs! {
    #[allow(non_snake_case)]
    RegisterBlock {
        (0x00 => CSR: ReadWrite<u32, CSR::Register>),
        (0x04 => RVR: ReadWrite<u32>),
        (0x08 => CVR: ReadWrite<u32>),
        (0x0c => @END),
    }
}

/// Abstraction for the associated MMIO registers.
type Registers = MMIODerefWrapper<RegisterBlock>;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Representation of the SysTick timer.
pub struct SysTick {
    registers: IRQSafeNullLock<Registers>,
    reload: u32,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl SysTick {
    pub const COMPATIBLE: &'static str = "ARMv6-M SysTick";

    /// The reload register holds 24 bits.
    const MAX_RELOAD: u32 = 0x00FF_FFFF;

    /// Create an instance that will fire every `reload + 1` core clock cycles.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide a correct MMIO start address.
    pub const unsafe fn new(mmio_start_addr: usize, reload: u32) -> Self {
        Self {
            registers: IRQSafeNullLock::new(Registers::new(mmio_start_addr)),
            reload,
        }
    }
}

//--------------------------------------------------------------------------------------------------
// OS Interface Code
//--------------------------------------------------------------------------------------------------

impl driver::interface::DeviceDriver for SysTick {
    type IRQNumberType = super::IRQNumber;

    fn compatible(&self) -> &'static str {
        Self::COMPATIBLE
    }

    /// Program the periodic tick.
    ///
    /// After this returns the counter runs and the exception request is armed. Delivery still
    /// waits on PRIMASK, which `kernel_init()` clears only after handler registration, so a tick
    /// can pend here but never dispatches early.
    unsafe fn init(&self) -> Result<(), &'static str> {
        if self.reload > Self::MAX_RELOAD {
            return Err("SysTick reload value exceeds the 24 bit counter");
        }

        self.registers.lock(|registers| {
            registers.RVR.set(self.reload);

            // Any write clears the current count, so the first period is neither truncated nor
            // stretched by whatever was left in the counter.
            registers.CVR.set(0);

            // ENABLE, TICKINT and CLKSOURCE must go in as one combined write.
            registers
                .CSR
                .write(CSR::CLKSOURCE::Processor + CSR::TICKINT::SET + CSR::ENABLE::SET);
        });

        Ok(())
    }

    fn register_and_enable_irq_handler(
        &'static self,
        irq_number: &Self::IRQNumberType,
    ) -> Result<(), &'static str> {
        use exception::asynchronous::{irq_manager, IRQHandlerDescriptor};

        let descriptor = IRQHandlerDescriptor::new(*irq_number, Self::COMPATIBLE, self);

        irq_manager().register_handler(descriptor)?;
        irq_manager().enable(irq_number);

        Ok(())
    }
}

impl exception::asynchronous::interface::IRQHandler for SysTick {
    fn handle(&self) -> Result<(), &'static str> {
        time::tick_manager().advance();

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

    /// Bring-up programs the reload value, clears the counter, then starts everything with a
    /// single control register value.
    #[test]
    fn init_programs_the_advertised_sequence() {
        let mut backing: [u32; 3] = [0, 0xAAAA_AAAA, 0xBBBB_BBBB];
        let systick = unsafe { SysTick::new(backing.as_mut_ptr() as usize, 5_999) };

        unsafe { systick.init() }.unwrap();

        assert_eq!(backing[0], 0b111); // CSR: CLKSOURCE | TICKINT | ENABLE
        assert_eq!(backing[1], 5_999); // RVR
        assert_eq!(backing[2], 0); // CVR
    }

    /// A reload value beyond the 24 bit counter is a configuration bug. It must be reported,
    /// never truncated, and nothing may be written.
    #[test]
    fn oversized_reload_is_rejected() {
        let mut backing: [u32; 3] = [0; 3];
        let systick = unsafe { SysTick::new(backing.as_mut_ptr() as usize, 0x0100_0000) };

        assert!(unsafe { systick.init() }.is_err());
        assert_eq!(backing, [0; 3]);
    }
}
