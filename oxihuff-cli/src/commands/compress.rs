//! Compress command implementation.

use super::CodecOptions;
use crate::utils::{
    CliResult, Direction, check_output, create_output, create_progress_bar, is_stdio, open_input,
    print_report,
};
use oxihuff_core::traits::{read_source_limited, write_sink};
use oxihuff_huffman::HuffmanEncoder;
use std::time::Instant;
use tracing::{debug, info};

pub fn cmd_compress(opts: &CodecOptions<'_>) -> CliResult<()> {
    info!(
        input = %opts.input.display(),
        output = %opts.output.display(),
        "compressing"
    );
    check_output(opts.output, opts.force)?;

    let to_stdout = is_stdio(opts.output);
    let (source, len) = open_input(opts.input)?;
    if let Some(len) = len {
        opts.config.check_size(len)?;
    }
    let pb = create_progress_bar(len, !opts.quiet && !to_stdout);

    pb.set_message("reading");
    let start = Instant::now();
    let data = read_source_limited(&mut pb.wrap_read(source), opts.config.max_input_size)
        .inspect_err(|_| pb.abandon())?;
    debug!(bytes = data.len(), elapsed = ?start.elapsed(), "input read");

    pb.set_message("encoding");
    let start = Instant::now();
    let result = HuffmanEncoder::with_config(opts.config).encode(&data);
    let (container, report) = match result {
        Ok(encoded) => encoded,
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    };
    debug!(
        payload = report.payload_len,
        metadata = report.header_len,
        elapsed = ?start.elapsed(),
        "input encoded"
    );

    pb.set_message("writing");
    let start = Instant::now();
    let mut sink = create_output(opts.output)?;
    write_sink(&mut sink, &container)?;
    debug!(bytes = container.len(), elapsed = ?start.elapsed(), "container written");
    pb.finish_and_clear();

    info!(
        input_len = report.input_len,
        output_len = report.output_len,
        ratio = %format!("{:.1}%", report.ratio()),
        "compressed"
    );

    if !opts.quiet {
        print_report(&report, Direction::Compress, to_stdout);
    }

    Ok(())
}
