//! Embassy async tasks
//!
//! The console task owns both UART halves and the synthesizer driver,
//! so no inter-task channels are needed.

pub mod console;

pub use console::console_task;
