//! Command console task
//!
//! Polls the UART for command bytes, feeds them through the JSON command
//! pipeline and applies completed commands to the synthesizer. Every
//! queued outcome is answered on the same UART: an acknowledgement
//! echoing the committed settings, or an error report.

use defmt::*;
use embassy_time::{Delay, Timer};

use siggen_drivers::dds::Ad9850;
use siggen_hal_rp2040::{ByteTx, RpOutputPin, UartConsoleRx, UartConsoleTx};
use siggen_protocol::{CommandIntake, CommandRecord, Reply};

/// How long to sleep when the UART had no byte for us
const IDLE_POLL_MS: u64 = 1;

/// Console task - receives JSON commands and drives the synthesizer
#[embassy_executor::task]
pub async fn console_task(
    mut rx: UartConsoleRx,
    mut tx: UartConsoleTx,
    mut dds: Ad9850<RpOutputPin, Delay>,
) {
    info!("Console task started");

    let mut intake = CommandIntake::new();
    let mut reported_truncations = 0;

    loop {
        let consumed = intake.poll(&mut rx, &mut tx);

        let truncated = intake.truncated_lines();
        if truncated != reported_truncations {
            warn!("Oversized line truncated ({} so far)", truncated);
            reported_truncations = truncated;
        }

        while let Some(outcome) = intake.take_command() {
            let reply = match outcome {
                Ok(record) => {
                    debug!("Command {}: applying", record.command_number);
                    apply_command(&mut dds, &record)
                }
                Err(error) => {
                    warn!(
                        "Command {} rejected: {}",
                        error.command_number,
                        error.message()
                    );
                    Reply::from_error(&error)
                }
            };
            send_reply(&mut tx, &reply);
        }

        // Nothing buffered; yield until the next poll tick
        if !consumed {
            Timer::after_millis(IDLE_POLL_MS).await;
        }
    }
}

/// Apply a parsed command to the synthesizer and build the acknowledgement
///
/// Absent fields leave the corresponding setting untouched. The
/// acknowledgement reports the committed state, so the phase comes back
/// quantized to the register grid.
fn apply_command(dds: &mut Ad9850<RpOutputPin, Delay>, record: &CommandRecord) -> Reply {
    if let Some(frequency_hz) = record.frequency_hz {
        dds.set_frequency(frequency_hz);
    }
    if let Some(phase_cdeg) = record.phase_cdeg {
        dds.set_phase(phase_cdeg);
    }
    if let Some(enable) = record.enable_out {
        dds.set_enabled(enable);
    }
    dds.commit();

    Reply::Ack {
        command_number: record.command_number,
        frequency_hz: dds.frequency(),
        phase_cdeg: dds.phase(),
        enable_out: dds.enabled(),
    }
}

/// Serialize a reply and write it to the console
fn send_reply(tx: &mut UartConsoleTx, reply: &Reply) {
    match reply.to_json() {
        Ok(json) => {
            tx.write_bytes(json.as_bytes());
            tx.write_byte(b'\n');
        }
        Err(_) => {
            // Out of heap mid-reply; drop it rather than emit garbage
            error!("Reply serialization failed");
        }
    }
}
