//! Info command implementation.

use crate::utils::{CliResult, describe_byte, open_input};
use oxihuff_core::CodecReport;
use oxihuff_core::traits::read_source;
use oxihuff_huffman::{CodeTable, Container, HuffmanTree};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON serializable frequency record.
#[derive(Debug, Serialize, Deserialize)]
struct SymbolJson {
    byte: u8,
    frequency: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

/// JSON output for container inspection.
#[derive(Debug, Serialize, Deserialize)]
struct ContainerInfoJson {
    file: String,
    size: u64,
    original_size: u64,
    distinct_symbols: usize,
    bit_count: u64,
    payload_size: u64,
    metadata_size: u64,
    trailing_bytes: u64,
    ratio: f64,
    symbols: Vec<SymbolJson>,
}

pub fn cmd_info(path: &Path, json: bool) -> CliResult<()> {
    let (mut source, _) = open_input(path)?;
    let data = read_source(&mut source)?;
    let container = Container::parse(&data)?;
    let header = &container.header;

    let codes = HuffmanTree::build(&header.frequencies).map(|tree| CodeTable::derive(&tree));
    let symbols: Vec<SymbolJson> = header
        .frequencies
        .iter()
        .map(|(byte, frequency)| SymbolJson {
            byte,
            frequency,
            code: codes
                .as_ref()
                .and_then(|c| c.get(byte))
                .map(|code| code.to_string()),
        })
        .collect();

    let report = CodecReport {
        input_len: header.original_len(),
        output_len: container.encoded_len() as u64,
        payload_len: container.payload.len() as u64,
        header_len: header.encoded_len() as u64,
    };

    let info = ContainerInfoJson {
        file: path.display().to_string(),
        size: data.len() as u64,
        original_size: report.input_len,
        distinct_symbols: header.symbol_count(),
        bit_count: header.bit_count,
        payload_size: report.payload_len,
        metadata_size: report.header_len,
        trailing_bytes: container.trailing.len() as u64,
        ratio: report.ratio(),
        symbols,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Container Information");
    println!("=====================");
    println!("File: {}", info.file);
    println!("Size: {} bytes", info.size);
    println!("Original size: {} bytes", info.original_size);
    println!("Distinct symbols: {}", info.distinct_symbols);
    println!("Bit count: {}", info.bit_count);
    println!("Payload: {} bytes", info.payload_size);
    println!("Metadata: {} bytes", info.metadata_size);
    if info.original_size > 0 {
        println!("Compression ratio: {:.1}%", info.ratio);
    }
    if info.trailing_bytes > 0 {
        println!("Trailing bytes: {}", info.trailing_bytes);
    }

    if !info.symbols.is_empty() {
        println!();
        println!("{:<10} {:>12}  Code", "Symbol", "Count");
        println!("{}", "-".repeat(40));
        for symbol in &info.symbols {
            println!(
                "{:<10} {:>12}  {}",
                describe_byte(symbol.byte),
                symbol.frequency,
                symbol.code.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}
