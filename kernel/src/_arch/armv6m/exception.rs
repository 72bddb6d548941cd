// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Architectural synchronous and asynchronous exception handling.
//!
//! # Orientation
//!
//! Since arch modules are imported into generic modules using the path attribute, the path of this
//! file is:
//!
//! crate::exception::arch_exception

use crate::{
    bsp, exception,
    exception::{asynchronous::IRQNumber, PrivilegeLevel, Vector},
};
use cortex_m::{
    asm,
    register::control::{self, Npriv},
};
use tock_registers::{
    interfaces::{Readable, Writeable},
    register_bitfields, register_structs,
    registers::{ReadOnly, ReadWrite},
};

//--------------------------------------------------------------------------------------------------
// Private Definitions
//--------------------------------------------------------------------------------------------------

register_bitfields! {
    u32,

    /// Interrupt Control and State Register.
    ICSR [
        /// Exception number of the currently active exception. Zero in thread mode.
        VECTACTIVE OFFSET(0) NUMBITS(9) []
    ]
}

register_structs! {
    #[allow(non_snake_case)]
    RegisterBlock {
        (0x00 => _reserved1),
        (0x04 => ICSR: ReadOnly<u32, ICSR::Register>),
        (0x08 => VTOR: ReadWrite<u32>),
        (0x0c => @END),
    }
}

/// System Control Block base. Fixed by the architecture for every ARMv6-M part.
const SCB_MMIO_START: usize = 0xE000_ED00;

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

/// The architecturally fixed SCB registers.
fn scb_registers() -> &'static RegisterBlock {
    unsafe { &*(SCB_MMIO_START as *const RegisterBlock) }
}

/// Terminal handler for exception types the kernel does not use.
fn halt_on(kind: &'static str) -> ! {
    panic!("CPU Exception: {}", kind)
}

extern "C" fn exc_nmi() {
    halt_on("NMI")
}

extern "C" fn exc_hard_fault() {
    halt_on("HardFault")
}

extern "C" fn exc_svcall() {
    halt_on("SVCall")
}

extern "C" fn exc_pend_sv() {
    halt_on("PendSV")
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Exception vector table slots 2 through 15.
///
/// Slot 15, SysTick, funnels into the shared dispatch vector. The architectural fault slots bind
/// to terminal handlers directly. Everything else is reserved on this core and must encode as
/// zero, which fault probes rely on.
#[no_mangle]
#[link_section = ".vector_table.exceptions"]
pub static __EXCEPTIONS: [Vector; 14] = [
    Vector::handler(exc_nmi),        // 2: NMI
    Vector::handler(exc_hard_fault), // 3: HardFault
    Vector::reserved(),              // 4
    Vector::reserved(),              // 5
    Vector::reserved(),              // 6
    Vector::reserved(),              // 7
    Vector::reserved(),              // 8
    Vector::reserved(),              // 9
    Vector::reserved(),              // 10
    Vector::handler(exc_svcall),     // 11: SVCall
    Vector::reserved(),              // 12
    Vector::reserved(),              // 13
    Vector::handler(exc_pend_sv),    // 14: PendSV
    Vector::handler(exception_dispatch), // 15: SysTick
];

/// Shared exception vector for all dispatchable lines.
///
/// Reads which exception is currently active and hands it to the registered IRQ manager.
/// SysTick and the NVIC lines all funnel through here.
pub extern "C" fn exception_dispatch() {
    let vectactive = scb_registers().ICSR.read(ICSR::VECTACTIVE) as usize;

    match IRQNumber::from_exception_number(vectactive) {
        Some(irq_number) => {
            // Entered through an exception vector, so constructing the token is sound.
            let ic = unsafe { exception::asynchronous::IRQContext::new() };
            exception::asynchronous::irq_manager().dispatch(irq_number, &ic)
        }
        None => panic!("Exception dispatch from non-dispatchable slot: {}", vectactive),
    }
}

/// Point VTOR at the kernel's vector table.
///
/// The second-stage handoff has already programmed this before jumping to the kernel.
/// Re-asserting it makes a debugger-loaded kernel behave identically to a flashed one.
pub fn handling_init() {
    scb_registers()
        .VTOR
        .set(bsp::memory::map::VECTOR_TABLE_START as u32);
    asm::dsb();
    asm::isb();
}

/// The processor's current privilege level.
pub fn current_privilege_level() -> (PrivilegeLevel, &'static str) {
    match control::read().npriv() {
        Npriv::Privileged => (PrivilegeLevel::Privileged, "Privileged"),
        Npriv::Unprivileged => (PrivilegeLevel::Unprivileged, "Unprivileged"),
    }
}
