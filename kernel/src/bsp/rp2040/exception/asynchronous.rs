// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! BSP asynchronous exception handling.

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

pub use crate::bsp::device_driver::IRQNumber;

/// The IRQ map.
#[rustfmt::skip]
pub mod irq_map {
    use super::IRQNumber;
    use crate::bsp::device_driver::NvicIRQ;

    /// The architectural tick exception. Not an NVIC input.
    pub const SYS_TICK:      IRQNumber = IRQNumber::SysTick;

    // The NVIC inputs, in datasheet order.
    pub const TIMER_IRQ_0:   IRQNumber = IRQNumber::Nvic(NvicIRQ::new(0));
    pub const TIMER_IRQ_1:   IRQNumber = IRQNumber::Nvic(NvicIRQ::new(1));
    pub const TIMER_IRQ_2:   IRQNumber = IRQNumber::Nvic(NvicIRQ::new(2));
    pub const TIMER_IRQ_3:   IRQNumber = IRQNumber::Nvic(NvicIRQ::new(3));
    pub const PWM_IRQ_WRAP:  IRQNumber = IRQNumber::Nvic(NvicIRQ::new(4));
    pub const USBCTRL_IRQ:   IRQNumber = IRQNumber::Nvic(NvicIRQ::new(5));
    pub const XIP_IRQ:       IRQNumber = IRQNumber::Nvic(NvicIRQ::new(6));
    pub const PIO0_IRQ_0:    IRQNumber = IRQNumber::Nvic(NvicIRQ::new(7));
    pub const PIO0_IRQ_1:    IRQNumber = IRQNumber::Nvic(NvicIRQ::new(8));
    pub const PIO1_IRQ_0:    IRQNumber = IRQNumber::Nvic(NvicIRQ::new(9));
    pub const PIO1_IRQ_1:    IRQNumber = IRQNumber::Nvic(NvicIRQ::new(10));
    pub const DMA_IRQ_0:     IRQNumber = IRQNumber::Nvic(NvicIRQ::new(11));
    pub const DMA_IRQ_1:     IRQNumber = IRQNumber::Nvic(NvicIRQ::new(12));
    pub const IO_IRQ_BANK0:  IRQNumber = IRQNumber::Nvic(NvicIRQ::new(13));
    pub const IO_IRQ_QSPI:   IRQNumber = IRQNumber::Nvic(NvicIRQ::new(14));
    pub const SIO_IRQ_PROC0: IRQNumber = IRQNumber::Nvic(NvicIRQ::new(15));
    pub const SIO_IRQ_PROC1: IRQNumber = IRQNumber::Nvic(NvicIRQ::new(16));
    pub const CLOCKS_IRQ:    IRQNumber = IRQNumber::Nvic(NvicIRQ::new(17));
    pub const SPI0_IRQ:      IRQNumber = IRQNumber::Nvic(NvicIRQ::new(18));
    pub const SPI1_IRQ:      IRQNumber = IRQNumber::Nvic(NvicIRQ::new(19));
    pub const UART0_IRQ:     IRQNumber = IRQNumber::Nvic(NvicIRQ::new(20));
    pub const UART1_IRQ:     IRQNumber = IRQNumber::Nvic(NvicIRQ::new(21));
    pub const ADC_IRQ_FIFO:  IRQNumber = IRQNumber::Nvic(NvicIRQ::new(22));
    pub const I2C0_IRQ:      IRQNumber = IRQNumber::Nvic(NvicIRQ::new(23));
    pub const I2C1_IRQ:      IRQNumber = IRQNumber::Nvic(NvicIRQ::new(24));
    pub const RTC_IRQ:       IRQNumber = IRQNumber::Nvic(NvicIRQ::new(25));
}
