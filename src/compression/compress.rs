use std::io;

use log::{debug, error, info, trace};

use crate::bitstream::bitpacker::SixBitPacker;
use crate::huffman_coding::huffman::HuffmanTree;
use crate::huffman_coding::tree_array::TreeArray;
use crate::tools::cli::HsOpts;
use crate::tools::data_io::{read_input, sources, write_output, zip_name};
use crate::tools::freq_count::{distinct, freqs};
use crate::tools::safe_alphabet::encode_node;

use super::script::render;

/// Everything the decoder needs: the transcoded tree array, the transcoded bitstream,
/// how many symbols to produce and where in the array the root sits.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Encoded {
    /// Two safe characters per tree array element.
    pub tree: String,
    /// One safe character per six bits of code.
    pub stream: String,
    /// Symbol count of the original input.
    pub len: usize,
    pub root: usize,
}

impl Encoded {
    /// Number of safe characters in both literals.
    pub fn transcoded_len(&self) -> usize {
        self.tree.len() + self.stream.len()
    }
}

/// Run the whole encoding pipeline over `data`.
pub fn encode(data: &[u8]) -> Encoded {
    let freqs = freqs(data);
    debug!("Counted {} distinct symbols in {} bytes", distinct(&freqs), data.len());

    // Nothing to build a tree from
    let tree = match HuffmanTree::from_freqs(&freqs) {
        Some(tree) => tree,
        None => {
            info!("Empty input, nothing to encode.");
            return Encoded::default();
        }
    };
    debug!("Tree has {} nodes after {} merges", tree.len(), tree.merges.len());

    let array = TreeArray::from_tree(&tree);
    let table = array.code_table();

    let mut bp = SixBitPacker::new(data.len() / 2 + 1);
    for (i, sym) in data.iter().enumerate() {
        if i & 0xffff == 0 {
            debug!("Building data stream - {}%", 100 * i / data.len());
        }
        bp.out_code(&table[sym]);
    }
    bp.flush();
    trace!("Stream ended at {}", bp.loc());

    let tree_chars = array
        .nodes
        .iter()
        .flat_map(|&element| encode_node(element))
        .map(char::from)
        .collect::<String>();
    let stream_chars = bp.output.iter().map(|&b| char::from(b)).collect::<String>();

    Encoded {
        tree: tree_chars,
        stream: stream_chars,
        len: data.len(),
        root: 0,
    }
}

/// Percentage saved going from `before` to `after` bytes. Negative if the data grew.
pub fn savings(before: usize, after: usize) -> i64 {
    if before == 0 {
        return 0;
    }
    100 * (before as i64 - after as i64) / before as i64
}

/// Compress every input named in opts, writing one decoder script per input.
pub fn compress(opts: &HsOpts) -> io::Result<()> {
    for source in sources(opts) {
        let data = read_input(source)?;
        info!("Compressing {}", source.unwrap_or("stdin"));

        let encoded = encode(&data);
        let script = render(&encoded, opts.html);
        info!(
            "Done. Compressed by {}% ({} -> {})",
            savings(data.len(), script.len()),
            data.len(),
            script.len()
        );

        let target = source.map(|name| zip_name(name, opts.html));
        if let Err(e) = write_output(opts, target.as_deref(), script.as_bytes()) {
            if e.kind() == io::ErrorKind::AlreadyExists {
                // Refuse this one, carry on with the rest
                error!("{}", e);
                continue;
            }
            return Err(e);
        }
    }
    Ok(())
}
