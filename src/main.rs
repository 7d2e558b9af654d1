//! Fills a 16384-slot u32 buffer one million times and reports the elapsed
//! seconds on stdout, with a `done <sample> <tot>` diagnostic on stderr.

use std::error::Error;
use std::io::Write;

use fill_test::{done_line, timed_fill, BUF_LEN, N_PASSES};

fn main() -> Result<(), Box<dyn Error>> {
    let mut array = vec![0u32; BUF_LEN];
    // Read-back accumulator; the summation pass that fed it is disabled.
    let tot: u32 = 0;

    let secs = timed_fill(&mut array, N_PASSES);

    let stderr = std::io::stderr();
    let mut diag = stderr.lock();

    writeln!(diag)?;
    println!("{secs:.6}");
    writeln!(diag, "{}", done_line(&array, tot))?;

    Ok(())
}
