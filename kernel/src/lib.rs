// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! The `kernel` library.
//!
//! Used to compose the final kernel binary.
//!
//! # Code organization and architecture
//!
//! The code is divided into different *modules*, each representing a typical **subsystem** of the
//! `kernel`. Top-level module files of subsystems reside directly in the `src` folder. For
//! example, `src/memory.rs` contains code that is concerned with all things memory management.
//!
//! ## Visibility of processor architecture code
//!
//! Some of the `kernel`'s subsystems depend on low-level code that is specific to the target
//! processor architecture. For each supported processor architecture, there exists a subfolder in
//! `src/_arch`, for example, `src/_arch/armv6m`.
//!
//! The architecture folders mirror the subsystem modules laid out in `src`. For example,
//! architectural code that belongs to the `kernel`'s exception subsystem (`src/exception.rs`)
//! goes into `src/_arch/armv6m/exception.rs`. The latter file is loaded as a module in
//! `src/exception.rs` using the `path attribute`. Usually, the chosen module name is the generic
//! module's name prefixed with `arch_`.
//!
//! For example, this is the top of `src/exception.rs`:
//!
//! ```
//! #[cfg(target_arch = "arm")]
//! #[path = "_arch/armv6m/exception.rs"]
//! mod arch_exception;
//! ```
//!
//! Often times, items from the `arch_ module` will be publicly reexported by the parent module.
//! This way, each architecture specific module can provide its implementation of an item, while
//! the caller must not be concerned which architecture has been conditionally compiled.
//!
//! ## BSP code
//!
//! `BSP` stands for Board Support Package. `BSP` code is organized under `src/bsp.rs` and
//! contains target board specific definitions and functions. These are things such as the board's
//! memory map or instances of drivers for devices that are featured on the respective board.
//!
//! Just like processor architecture code, the `BSP` code's module structure tries to mirror the
//! `kernel`'s subsystem modules, but there is no reexporting this time. That means whatever is
//! provided must be called starting from the `bsp` namespace, e.g.
//! `bsp::driver::toggle_status_led()`.
//!
//! ## Kernel interfaces
//!
//! Both `arch` and `bsp` contain code that is conditionally compiled depending on the actual
//! target and board for which the kernel is compiled. In order to provide a clean abstraction
//! between `arch`, `bsp` and `generic kernel code`, `interface` traits are provided *whenever
//! possible* and *where it makes sense*. They are defined in the respective subsystem module and
//! help to enforce the idiom of *program to an interface, not an implementation*. For example,
//! the generic IRQ handling interface is implemented by the NVIC driver, and only the interface
//! is exported to the rest of the `kernel`.
//!
//! ```text
//!         +-------------------+
//!         | Interface (Trait) |
//!         |                   |
//!         +--+-------------+--+
//!            ^             ^
//!            |             |
//!            |             |
//! +----------+--+       +--+----------+
//! | kernel code |       |  bsp code   |
//! |             |       |  arch code  |
//! +-------------+       +-------------+
//! ```
//!
//! # Summary
//!
//! For a logical `kernel` subsystem, corresponding code can be distributed over several physical
//! locations. Here is an example for the **exception** subsystem:
//!
//! - `src/exception.rs` and `src/exception/**/*`
//!   - Common code that is agnostic of target processor architecture and `BSP` characteristics.
//!     - Example: The IRQ handler registration interface.
//! - `src/bsp/__board_name__/exception.rs` and `src/bsp/__board_name__/exception/**/*`
//!   - `BSP` specific code.
//!   - Example: The board's populated interrupt vector entries and its IRQ map.
//! - `src/_arch/__arch_name__/exception.rs` and `src/_arch/__arch_name__/exception/**/*`
//!   - Processor architecture specific code.
//!   - Example: The dispatch routine that decodes the active vector number.
//!
//! # Boot flow
//!
//! 1. The kernel's entry point is the function `cpu::boot::arch_boot::_start()`.
//!     - It is implemented in `src/_arch/armv6m/cpu/boot.rs` and reached through slot 1 of the
//!       vector table.
//! 2. Once finished with architectural setup, the arch code calls
//!    `runtime_init::runtime_init()`, which establishes the static memory image and then calls
//!    `kernel_init()`.

#![allow(clippy::upper_case_acronyms)]
#![cfg_attr(not(test), no_std)]

#[cfg(target_os = "none")]
mod panic_wait;
mod synchronization;

pub mod bsp;
pub mod console;
pub mod cpu;
pub mod driver;
pub mod exception;
pub mod memory;
pub mod print;
#[cfg(target_os = "none")]
pub mod runtime_init;
pub mod state;
pub mod time;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Version string.
pub fn version() -> &'static str {
    concat!(
        env!("CARGO_PKG_NAME"),
        " version ",
        env!("CARGO_PKG_VERSION")
    )
}
