//! Interactive session loop
//!
//! Paint the current page, block for one byte, apply it, repeat until the
//! pager is terminated. The loop is generic over its input and output so it
//! can be driven by scripted bytes in tests; [`run_interactive`] wires it to
//! the real terminal inside a raw-mode guard.

use std::io::{self, BufWriter, Read, Write};

use crate::app::pager::Pager;
use crate::config::PagerConfig;
use crate::error::PagerError;
use crate::services::signal_handler;
use crate::services::terminal_modes::TerminalModes;
use crate::view::page::{clear_screen, render_page};

/// Read a single byte.
///
/// Returns `Ok(None)` at end of input, or when `should_stop` reports a
/// termination request either before the read or after it was interrupted.
/// Interrupted reads without such a request are retried.
pub fn read_byte<R: Read>(input: &mut R, should_stop: impl Fn() -> bool) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        // A signal landing between this check and `read` is not lost: it is
        // seen once the next byte arrives
        if should_stop() {
            return Ok(None);
        }
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Drive `pager` until it terminates.
pub fn run<R: Read, W: Write>(
    pager: &mut Pager,
    input: &mut R,
    out: &mut W,
    config: &PagerConfig,
    should_stop: impl Fn() -> bool,
) -> io::Result<()> {
    while !pager.is_terminated() {
        render_page(out, &pager.view(), config)?;

        match read_byte(input, &should_stop)? {
            Some(byte) => {
                pager.handle_byte(byte);
            }
            None => {
                tracing::info!("Input closed or termination requested, ending session");
                pager.terminate();
            }
        }
    }

    tracing::info!(
        "Session ended on page {}/{}",
        pager.page_index() + 1,
        pager.total_pages()
    );
    Ok(())
}

/// Run `pager` on the controlling terminal.
///
/// Raw mode is held only for the duration of the loop. Afterwards the screen
/// is cleared, also when the loop failed part way.
pub fn run_interactive(pager: &mut Pager, config: &PagerConfig) -> Result<(), PagerError> {
    let mut modes = TerminalModes::enable().map_err(PagerError::TerminalMode)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = BufWriter::new(io::stdout().lock());

    let result = run(
        pager,
        &mut input,
        &mut out,
        config,
        signal_handler::termination_requested,
    );

    modes.undo();
    let cleared = clear_screen(&mut out);

    result.and(cleared).map_err(|e| {
        tracing::error!("Terminal I/O failed: {}", e);
        PagerError::TerminalIo(e)
    })
}
