use huffscript::compression::compress::encode;
use huffscript::compression::decompress::decode;
use huffscript::compression::script::{parse, render};
use huffscript::huffman_coding::huffman::HuffmanTree;
use huffscript::huffman_coding::tree_array::TreeArray;
use huffscript::tools::freq_count::{distinct, freqs};

/// Small linear congruential generator so the tests stay deterministic.
fn noise(len: usize, seed: u32, modulus: u32) -> Vec<u8> {
    let mut x = seed;
    (0..len)
        .map(|_| {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            ((x >> 16) % modulus) as u8
        })
        .collect()
}

fn round_trip(data: &[u8]) {
    let encoded = encode(data);
    assert_eq!(encoded.len, data.len());
    assert_eq!(decode(&encoded).unwrap(), data);

    // And again through the emitted program text
    let script = render(&encoded, false);
    assert!(!script.contains('\\'));
    assert_eq!(decode(&parse(&script).unwrap()).unwrap(), data);
}

#[test]
fn abracadabra() {
    let encoded = encode(b"abracadabra");
    assert_eq!(decode(&encoded).unwrap(), b"abracadabra");
    assert!(encoded.stream.len() < 11 * 2);
    assert!(encoded.transcoded_len() <= 11 * 2);
}

#[test]
fn degenerate_inputs() {
    round_trip(b"");
    round_trip(b"a");
    round_trip(b"aaaaa");
    round_trip(b"ab");
    round_trip(&[0]);
    round_trip(&[255, 255, 255]);
}

#[test]
fn every_byte_value() {
    let data: Vec<u8> = (0..=255_u8).cycle().take(256 * 3 + 17).collect();
    round_trip(&data);
}

#[test]
fn skewed_text() {
    let text = b"Mississippi river, Mississippi state. Sassy sisters sip sassafras.".repeat(40);
    round_trip(&text);
    let encoded = encode(&text);
    assert!(encoded.transcoded_len() < text.len());
}

#[test]
fn noisy_inputs() {
    for (seed, modulus) in [(1, 2), (7, 3), (42, 17), (99, 256), (1234, 200)] {
        round_trip(&noise(3000, seed, modulus));
    }
}

#[test]
fn large_input_uses_parallel_count() {
    let data = noise(150_000, 5, 90);
    round_trip(&data);
}

#[test]
fn prefix_free_codes() {
    let data = noise(10_000, 77, 256);
    let f = freqs(&data);
    let tree = HuffmanTree::from_freqs(&f).unwrap();
    assert_eq!(tree.len(), 2 * distinct(&f) - 1);

    let table = TreeArray::from_tree(&tree).code_table();
    assert_eq!(table.len(), distinct(&f));
    for (a, ca) in &table {
        for (b, cb) in &table {
            if a != b {
                assert!(!ca.is_prefix_of(cb));
            }
        }
    }
}

#[test]
fn wrapped_script() {
    let text = b"<p>Hello, \"quoted\" world</p>\n\\ backslashes \\ stay in the text\n";
    let script = render(&encode(text), true);
    assert!(script.starts_with("<script"));
    assert_eq!(decode(&parse(&script).unwrap()).unwrap(), text.to_vec());
}
