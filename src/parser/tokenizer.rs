//! Byte stream to styled runes

use std::io::Read;

use vte::{Params, Perform};

use super::sgr::SgrState;
use crate::core::StyledRune;
use crate::error::{Error, Result};

/// Collects runes while vte walks the byte stream
#[derive(Debug, Default)]
struct RuneCollector {
    sgr: SgrState,
    runes: Vec<StyledRune>,
}

impl RuneCollector {
    fn push(&mut self, symbol: char) {
        self.runes.push(StyledRune::new(symbol, self.sgr.style()));
    }
}

impl Perform for RuneCollector {
    fn print(&mut self, c: char) {
        self.push(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' => self.push('\n'),
            b'\t' => self.push('\t'),
            _ => {}
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        if ignore || !intermediates.is_empty() || action != 'm' {
            tracing::trace!("Ignoring CSI {:?}", action);
            return;
        }
        let flat: Vec<u16> = params.iter().flat_map(|p| p.iter().copied()).collect();
        self.sgr.apply(&flat);
    }
}

/// Incremental tokenizer; style state carries over between `feed` calls
pub struct Tokenizer {
    parser: vte::Parser,
    collector: RuneCollector,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            parser: vte::Parser::new(),
            collector: RuneCollector::default(),
        }
    }

    /// Feed bytes; returns the runes completed by this chunk
    pub fn feed(&mut self, data: &[u8]) -> Vec<StyledRune> {
        self.parser.advance(&mut self.collector, data);
        std::mem::take(&mut self.collector.runes)
    }
}

/// Tokenize a complete byte buffer
pub fn parse_bytes(data: &[u8]) -> Vec<StyledRune> {
    Tokenizer::new().feed(data)
}

/// Read `reader` to the end and tokenize it
pub fn parse_stream<R: Read>(mut reader: R) -> Result<Vec<StyledRune>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(Error::Input)?;
    Ok(parse_bytes(&data))
}
