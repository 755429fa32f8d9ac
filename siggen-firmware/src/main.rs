//! Siggen - AD9850 DDS signal generator firmware
//!
//! Main firmware binary for RP2040-based signal generator boards.
//! Drives an AD9850 synthesizer module over its serial load interface
//! and accepts line-oriented JSON commands on the console UART.

#![no_std]
#![no_main]

extern crate alloc;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use embedded_alloc::LlffHeap as Heap;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use siggen_drivers::dds::{Ad9850, BusTiming, SerialBus};
use siggen_hal_rp2040::{RpOutputPin, UartConsoleRx, UartConsoleTx};

use crate::config::{parse_config, BoardConfig};

// Heap allocator for JSON parsing
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 16KB
const HEAP_SIZE: usize = 16 * 1024;

/// Embedded board configuration (compiled into firmware)
/// Edit board.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../board.toml");

mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Siggen firmware starting...");

    // Initialize heap allocator
    init_heap();

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    info!(
        "Board config: osc={} Hz, console={} baud",
        config.dds.osc_hz, config.console.baud_rate
    );

    // Setup UART for the command console
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = config.console.baud_rate;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("Console UART initialized");

    // Setup the AD9850 serial load interface
    // Typed pins cannot be picked at runtime; these bindings must match
    // the wiring record in board.toml (DATA=12, W_CLK=10, FQ_UD=11, RESET=13)
    info!(
        "DDS wiring: DATA={} W_CLK={} FQ_UD={} RESET={}",
        config.dds.data_pin, config.dds.w_clk_pin, config.dds.fq_ud_pin, config.dds.reset_pin
    );
    let data = RpOutputPin::new(Output::new(p.PIN_12, Level::Low));
    let w_clk = RpOutputPin::new(Output::new(p.PIN_10, Level::Low));
    let fq_ud = RpOutputPin::new(Output::new(p.PIN_11, Level::Low));
    let reset = RpOutputPin::new(Output::new(p.PIN_13, Level::Low));

    let timing = BusTiming {
        pulse_width_ns: config.dds.pulse_width_ns,
    };
    let bus = SerialBus::new(data, w_clk, fq_ud, reset, Delay).with_timing(timing);

    // Reset the synthesizer into serial load mode, then commit the
    // power-on settings from the board file
    let mut dds = Ad9850::new(bus, config.dds.osc_hz);
    dds.set_frequency(config.startup.frequency_hz);
    dds.set_phase(config.startup.phase_cdeg);
    dds.set_enabled(config.startup.enable_out);
    dds.commit();

    info!(
        "DDS initialized: {} Hz, {} cdeg, output {}",
        dds.frequency(),
        dds.phase(),
        if dds.enabled() { "on" } else { "off" }
    );

    // Spawn tasks
    spawner
        .spawn(tasks::console_task(
            UartConsoleRx::new(rx),
            UartConsoleTx::new(tx),
            dds,
        ))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Initialize the heap allocator
fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}

/// Parse the embedded board configuration
///
/// Falls back to stock module defaults if the embedded TOML is broken.
/// Should not happen once board.toml passes the build-time check.
fn load_config() -> BoardConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using stock module defaults");
            BoardConfig::default()
        }
    }
}
