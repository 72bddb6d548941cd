// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! ARMv6-M NVIC driver.
//!
//! Owns everything that arrives through the shared exception dispatch vector: the chip's NVIC
//! lines plus the architectural SysTick exception. The flash vector table never changes, so the
//! binding of lines to handler code lives here, in a runtime registry. A line without a
//! registration has no recovery path and dispatching it halts the kernel loudly.

use super::super::common::{BoundedUsize, MMIODerefWrapper};
use crate::{
    driver, exception,
    exception::asynchronous::{IRQContext, IRQHandlerDescriptor},
    synchronization::{
        interface::{Mutex, ReadWriteEx},
        IRQSafeNullLock, InitStateLock,
    },
};
use core::fmt;
use tock_registers::{interfaces::Writeable, register_structs, registers::ReadWrite};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

register_structs! {
    #[allow(non_snake_case)]
    RegisterBlock {
        (0x00 => ISER: ReadWrite<u32>),
        (0x04 => @END),
    }
}

/// Abstraction for the associated MMIO registers.
type Registers = MMIODerefWrapper<RegisterBlock>;

type HandlerTable = [Option<IRQHandlerDescriptor<IRQNumber>>; Nvic::NUM_DISPATCHABLE];

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// The NVIC line type.
pub type NvicIRQ = BoundedUsize<{ Nvic::MAX_NVIC_IRQ_NUMBER }>;

/// Used for the associated type of trait [`exception::asynchronous::interface::IRQManager`].
#[derive(Copy, Clone)]
pub enum IRQNumber {
    /// The architectural tick exception. Not an NVIC input, but dispatched the same way.
    SysTick,

    /// One of the chip's NVIC lines.
    Nvic(NvicIRQ),
}

/// Representation of the interrupt controller.
pub struct Nvic {
    registers: IRQSafeNullLock<Registers>,
    handler_table: InitStateLock<HandlerTable>,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl IRQNumber {
    /// Decode an active exception number, as read from `ICSR.VECTACTIVE`, into the dispatchable
    /// line it belongs to.
    ///
    /// Returns `None` for thread mode and for the architectural exceptions whose handlers bind
    /// directly in the vector table.
    pub const fn from_exception_number(number: usize) -> Option<Self> {
        match number {
            Nvic::SYSTICK_EXCEPTION_NUMBER => Some(Self::SysTick),
            _ => {
                if number >= Nvic::NVIC_EXCEPTION_BASE
                    && number < Nvic::NVIC_EXCEPTION_BASE + Nvic::NUM_NVIC_IRQS
                {
                    Some(Self::Nvic(NvicIRQ::new(number - Nvic::NVIC_EXCEPTION_BASE)))
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for IRQNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::SysTick => write!(f, "SysTick"),
            Self::Nvic(number) => write!(f, "NVIC {}", number),
        }
    }
}

impl Nvic {
    /// Highest NVIC line the chip wires up.
    pub const MAX_NVIC_IRQ_NUMBER: usize = 25;

    const NUM_NVIC_IRQS: usize = Self::MAX_NVIC_IRQ_NUMBER + 1;

    /// SysTick plus the NVIC lines.
    const NUM_DISPATCHABLE: usize = 1 + Self::NUM_NVIC_IRQS;

    /// Exception number of SysTick.
    const SYSTICK_EXCEPTION_NUMBER: usize = 15;

    /// Exception number of NVIC line 0.
    const NVIC_EXCEPTION_BASE: usize = 16;

    pub const COMPATIBLE: &'static str = "ARMv6-M NVIC";

    /// Create an instance.
    ///
    /// # Safety
    ///
    /// - The user must ensure to provide a correct MMIO start address.
    pub const unsafe fn new(mmio_start_addr: usize) -> Self {
        Self {
            registers: IRQSafeNullLock::new(Registers::new(mmio_start_addr)),
            handler_table: InitStateLock::new([None; Self::NUM_DISPATCHABLE]),
        }
    }

    /// Slot of a line in the handler table. SysTick sits in front of the NVIC lines.
    const fn table_index(irq_number: &IRQNumber) -> usize {
        match irq_number {
            IRQNumber::SysTick => 0,
            IRQNumber::Nvic(number) => 1 + number.get(),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// OS Interface Code
//--------------------------------------------------------------------------------------------------

impl exception::asynchronous::interface::IRQManager for Nvic {
    type IRQNumberType = IRQNumber;

    fn register_handler(
        &self,
        irq_handler_descriptor: IRQHandlerDescriptor<Self::IRQNumberType>,
    ) -> Result<(), &'static str> {
        self.handler_table.write(|table| {
            let index = Self::table_index(&irq_handler_descriptor.number());

            if table[index].is_some() {
                return Err("IRQ handler already registered");
            }

            table[index] = Some(irq_handler_descriptor);

            Ok(())
        })
    }

    fn enable(&self, irq_number: &Self::IRQNumberType) {
        match irq_number {
            // SysTick's interrupt enable lives in the timer's own control register, programmed
            // by the timer driver. Nothing to do in the NVIC.
            IRQNumber::SysTick => (),
            IRQNumber::Nvic(number) => self.registers.lock(|registers| {
                // ISER writes are set-bit only, so a plain store of the single bit enables the
                // line without a read-modify-write.
                registers.ISER.set(1 << number.get());
            }),
        }
    }

    fn dispatch<'irq_context>(
        &'irq_context self,
        irq_number: Self::IRQNumberType,
        _ic: &IRQContext<'irq_context>,
    ) {
        self.handler_table.read(|table| {
            match table[Self::table_index(&irq_number)] {
                None => panic!("No handler registered for IRQ {}", irq_number),
                Some(descriptor) => {
                    // Call the IRQ handler. Panic if it returned an error.
                    descriptor.handler().handle().expect("Error handling IRQ");
                }
            }
        })
    }

    fn print_handler(&self) {
        use crate::info;

        self.handler_table.read(|table| {
            for descriptor in table.iter().flatten() {
                info!("      {: >8}. {}", descriptor.number(), descriptor.name());
            }
        });
    }
}

impl driver::interface::DeviceDriver for Nvic {
    type IRQNumberType = IRQNumber;

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
    use core::sync::atomic::{AtomicBool, Ordering};
    use exception::asynchronous::interface::{IRQHandler, IRQManager};

    struct RecordingHandler {
        hit: AtomicBool,
    }

    impl IRQHandler for RecordingHandler {
        fn handle(&self) -> Result<(), &'static str> {
            self.hit.store(true, Ordering::Relaxed);

            Ok(())
        }
    }

    fn nvic_over(backing: &mut [u32; 1]) -> Nvic {
        unsafe { Nvic::new(backing.as_mut_ptr() as usize) }
    }

    /// Decoding covers SysTick and the NVIC range, and rejects everything else.
    #[test]
    fn exception_number_decoding() {
        assert!(matches!(
            IRQNumber::from_exception_number(15),
            Some(IRQNumber::SysTick)
        ));
        assert!(matches!(
            IRQNumber::from_exception_number(16),
            Some(IRQNumber::Nvic(n)) if n.get() == 0
        ));
        assert!(matches!(
            IRQNumber::from_exception_number(41),
            Some(IRQNumber::Nvic(n)) if n.get() == 25
        ));

        assert!(IRQNumber::from_exception_number(0).is_none());
        assert!(IRQNumber::from_exception_number(14).is_none());
        assert!(IRQNumber::from_exception_number(42).is_none());
    }

    /// A line accepts exactly one handler registration.
    #[test]
    fn double_registration_is_rejected() {
        static HANDLER: RecordingHandler = RecordingHandler {
            hit: AtomicBool::new(false),
        };
        let mut backing = [0u32; 1];
        let nvic = nvic_over(&mut backing);

        let first = IRQHandlerDescriptor::new(IRQNumber::SysTick, "tick", &HANDLER);
        let second = IRQHandlerDescriptor::new(IRQNumber::SysTick, "tock", &HANDLER);

        assert_eq!(nvic.register_handler(first), Ok(()));
        assert_eq!(
            nvic.register_handler(second),
            Err("IRQ handler already registered")
        );
    }

    /// A dispatched line runs its registered handler.
    #[test]
    fn dispatch_runs_the_registered_handler() {
        static HANDLER: RecordingHandler = RecordingHandler {
            hit: AtomicBool::new(false),
        };
        let mut backing = [0u32; 1];
        let nvic = nvic_over(&mut backing);

        nvic.register_handler(IRQHandlerDescriptor::new(
            IRQNumber::SysTick,
            "tick",
            &HANDLER,
        ))
        .unwrap();

        let ic = unsafe { IRQContext::new() };
        nvic.dispatch(IRQNumber::SysTick, &ic);

        assert!(HANDLER.hit.load(Ordering::Relaxed));
    }

    /// Dispatching a line that nobody registered halts loudly instead of returning.
    #[test]
    #[should_panic(expected = "No handler registered")]
    fn dispatch_of_unbound_line_halts() {
        let mut backing = [0u32; 1];
        let nvic = nvic_over(&mut backing);

        let ic = unsafe { IRQContext::new() };
        nvic.dispatch(IRQNumber::Nvic(NvicIRQ::new(13)), &ic);
    }

    /// Enabling an NVIC line sets exactly its ISER bit; SysTick needs no NVIC write.
    #[test]
    fn enable_touches_only_the_nvic_lines() {
        let mut backing = [0u32; 1];
        let nvic = nvic_over(&mut backing);

        nvic.enable(&IRQNumber::SysTick);
        assert_eq!(backing[0], 0);

        nvic.enable(&IRQNumber::Nvic(NvicIRQ::new(5)));
        assert_eq!(backing[0], 1 << 5);
    }
}
