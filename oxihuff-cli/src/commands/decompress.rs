//! Decompress command implementation.

use super::CodecOptions;
use crate::utils::{
    CliResult, Direction, check_output, create_output, create_progress_bar, is_stdio, open_input,
    print_report,
};
use oxihuff_core::traits::{read_source, write_sink};
use oxihuff_huffman::HuffmanDecoder;
use std::time::Instant;
use tracing::{debug, info, warn};

pub fn cmd_decompress(opts: &CodecOptions<'_>) -> CliResult<()> {
    info!(
        input = %opts.input.display(),
        output = %opts.output.display(),
        verify = opts.config.verify,
        "decompressing"
    );
    check_output(opts.output, opts.force)?;
    if !opts.config.verify {
        warn!("output verification disabled");
    }

    let to_stdout = is_stdio(opts.output);
    let (source, len) = open_input(opts.input)?;
    let pb = create_progress_bar(len, !opts.quiet && !to_stdout);

    pb.set_message("reading");
    let start = Instant::now();
    let data = read_source(&mut pb.wrap_read(source))?;
    debug!(bytes = data.len(), elapsed = ?start.elapsed(), "container read");

    pb.set_message("decoding");
    let start = Instant::now();
    let result = HuffmanDecoder::with_config(opts.config).decode(&data);
    let (output, report) = match result {
        Ok(decoded) => decoded,
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    };
    debug!(bytes = output.len(), elapsed = ?start.elapsed(), "payload decoded");

    pb.set_message("writing");
    let start = Instant::now();
    let mut sink = create_output(opts.output)?;
    write_sink(&mut sink, &output)?;
    debug!(elapsed = ?start.elapsed(), "output written");
    pb.finish_and_clear();

    info!(
        input_len = report.input_len,
        output_len = report.output_len,
        "decompressed"
    );

    if !opts.quiet {
        print_report(&report, Direction::Decompress, to_stdout);
    }

    Ok(())
}
