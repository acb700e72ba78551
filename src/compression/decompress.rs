use log::{debug, error, info, trace};

use crate::bitstream::bitreader::SafeBitReader;
use crate::tools::cli::HsOpts;
use crate::tools::data_io::{read_input, sources, unzip_name, write_output};
use crate::tools::safe_alphabet::decode_node;

use std::io::{self, Error};

use super::compress::{encode, Encoded};
use super::script::{parse, render};

const EOF_MESSAGE: &str = "Bitstream ended before all symbols were decoded";

fn invalid(msg: String) -> Error {
    Error::new(io::ErrorKind::InvalidData, msg)
}

/// Turn the transcoded tree literal back into the node array.
fn tree_from_literal(tree: &[u8]) -> io::Result<Vec<i32>> {
    if tree.len() % 2 != 0 {
        return Err(invalid(format!(
            "Tree literal has odd length {}",
            tree.len()
        )));
    }
    tree.chunks_exact(2)
        .map(|pair| decode_node([pair[0], pair[1]]))
        .collect()
}

/// Rebuild the original bytes from the encoded tree and bitstream.
pub fn decode(encoded: &Encoded) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(encoded.len);
    if encoded.len == 0 {
        return Ok(out);
    }

    let nodes = tree_from_literal(encoded.tree.as_bytes())?;
    trace!("Tree array: {:?}", nodes);
    if encoded.root >= nodes.len() {
        return Err(invalid(format!(
            "Root {} is outside a tree of {} nodes",
            encoded.root,
            nodes.len()
        )));
    }
    let mut br = SafeBitReader::new(encoded.stream.as_bytes())?;

    // A lone leaf still spends one bit per symbol.
    let lone = nodes[encoded.root] >= 0;

    while out.len() < encoded.len {
        if out.len() & 0xffff == 0 {
            debug!("Decoding - {}%", 100 * out.len() / encoded.len);
        }
        let mut i = encoded.root;
        if lone && br.bit().is_none() {
            return Err(Error::new(io::ErrorKind::UnexpectedEof, EOF_MESSAGE));
        }
        loop {
            let value = *nodes.get(i).ok_or_else(|| {
                invalid(format!("Branch to slot {} at stream position {}", i, br.loc()))
            })?;
            if value >= 0 {
                if value > 255 {
                    return Err(invalid(format!("Leaf value {} is not a byte", value)));
                }
                out.push(value as u8);
                break;
            }
            i = match br.bool_bit() {
                Some(true) => (-value) as usize,
                Some(false) => i + 1,
                None => return Err(Error::new(io::ErrorKind::UnexpectedEof, EOF_MESSAGE)),
            };
        }
    }
    trace!("Stopped at {}", br.loc());
    Ok(out)
}

/// Decompress every script named in opts.
pub fn decompress(opts: &HsOpts) -> io::Result<()> {
    for source in sources(opts) {
        let raw = read_input(source)?;
        let script = String::from_utf8(raw)
            .map_err(|_| invalid("Decoder script is not valid text".to_string()))?;

        let encoded = parse(&script)?;
        info!(
            "Found a decoder script for {} symbols in {}",
            encoded.len,
            source.unwrap_or("stdin")
        );
        let data = decode(&encoded)?;

        let target = source.map(unzip_name);
        if let Err(e) = write_output(opts, target.as_deref(), &data) {
            if e.kind() == io::ErrorKind::AlreadyExists {
                error!("{}", e);
                continue;
            }
            return Err(e);
        }
    }
    Ok(())
}

/// Compress each input in memory, read the script back, decode it and compare.
pub fn self_test(opts: &HsOpts) -> io::Result<()> {
    for source in sources(opts) {
        let data = read_input(source)?;
        let name = source.unwrap_or("stdin");

        let script = render(&encode(&data), opts.html);
        let restored = decode(&parse(&script)?)?;
        if restored != data {
            error!("{}: round trip FAILED", name);
            return Err(invalid(format!("{} did not survive the round trip", name)));
        }
        info!("{}: ok ({} -> {} bytes)", name, data.len(), script.len());
    }
    Ok(())
}
