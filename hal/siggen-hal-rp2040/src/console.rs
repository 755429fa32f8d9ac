//! Console transport over a buffered UART
//!
//! The RX half implements the non-blocking [`ByteRx`] poll on top of
//! `ReadReady`, so the command loop never stalls waiting for input. The
//! TX half uses the blocking writer, which only waits when the interrupt
//! driven ring buffer is full.

use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io::{Read, ReadReady, Write};
use siggen_hal::{ByteRx, ByteTx};

/// Non-blocking console input over the buffered UART RX half.
pub struct UartConsoleRx {
    rx: BufferedUartRx,
}

impl UartConsoleRx {
    pub fn new(rx: BufferedUartRx) -> Self {
        Self { rx }
    }
}

impl ByteRx for UartConsoleRx {
    fn poll_byte(&mut self) -> Option<u8> {
        match self.rx.read_ready() {
            Ok(true) => {
                let mut byte = [0u8; 1];
                match self.rx.read(&mut byte) {
                    Ok(n) if n > 0 => Some(byte[0]),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Console output over the buffered UART TX half.
pub struct UartConsoleTx {
    tx: BufferedUartTx,
}

impl UartConsoleTx {
    pub fn new(tx: BufferedUartTx) -> Self {
        Self { tx }
    }
}

impl ByteTx for UartConsoleTx {
    fn write_byte(&mut self, byte: u8) {
        let _ = self.tx.write_all(&[byte]);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let _ = self.tx.write_all(bytes);
    }
}
