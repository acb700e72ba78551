//! Emits the self-decoding JavaScript program, and reads one back.
//!
//! The program holds four values:
//! - `a`: the tree array literal, two safe characters per element
//! - `d`: the bitstream literal, six bits per safe character
//! - `c`: how many symbols to write
//! - `r`: the root slot
//!
//! Literals are cut into 74 character chunks joined with `+`. The chunking is cosmetic.

use std::io::{self, Error};

use super::compress::Encoded;

/// Characters per quoted chunk.
pub const CHUNK_WIDTH: usize = 74;

const SCRIPT_OPEN: &str = "<script type=\"text/javascript\">\n<!--\n";
const SCRIPT_CLOSE: &str = "// --></script>\n";

/// Expands `a` into the node list `l`.
const EXPAND: &str = "l=new Array();
while(a.length){l.push((Y(a.charCodeAt(0))<<6)+Y(a.charCodeAt(1))-512);
a=a.slice(2,a.length)}
";

/// Reads bits from `d` high bit first and walks `l` once per symbol. A leaf root still spends
/// one bit per symbol.
const DECODE: &str = "function Y(y){if(y>92)y--;return y-42}
function B(){if(a==0){b=Y(d.charCodeAt(e++));a=6;}
return ((b>>--a)&0x01);}
while(c--){i=r;if(l[i]>=0)B();while(l[i]<0){if(B())i=-l[i];else i++;}
o+=String.fromCharCode(l[i]);}document.write(o);
";

/// Render `name="chunk"\n+"chunk";\n`.
fn literal(name: &str, text: &str) -> String {
    let chunks = text
        .as_bytes()
        .chunks(CHUNK_WIDTH)
        .map(|chunk| format!("\"{}\"", String::from_utf8_lossy(chunk)))
        .collect::<Vec<String>>();
    if chunks.is_empty() {
        return format!("{}=\"\";\n", name);
    }
    format!("{}={};\n", name, chunks.join("\n+"))
}

/// Emit the decoder program for `encoded`. `wrap` puts it inside script tags.
pub fn render(encoded: &Encoded, wrap: bool) -> String {
    let mut s = String::with_capacity(encoded.transcoded_len() * 41 / 40 + 512);
    if wrap {
        s.push_str(SCRIPT_OPEN);
    }
    s.push_str(&literal("a", &encoded.tree));
    s.push_str(EXPAND);
    s.push_str(&literal("d", &encoded.stream));
    s.push_str(&format!(
        "c={};r={};e=b=a=0;o=\"\";\n",
        encoded.len, encoded.root
    ));
    s.push_str(DECODE);
    if wrap {
        s.push_str(SCRIPT_CLOSE);
    }
    s
}

fn bad_script(what: &str) -> Error {
    Error::new(
        io::ErrorKind::InvalidData,
        format!("Not a decoder script: {}", what),
    )
}

/// Collect the quoted chunks assigned to `name`, up to the closing `;`.
fn read_literal(script: &str, name: &str) -> io::Result<String> {
    let start = script
        .find(&format!("{}=\"", name))
        .ok_or_else(|| bad_script(&format!("no {} literal", name)))?;
    let mut rest = &script[start + name.len() + 1..];
    let mut text = String::new();
    loop {
        rest = rest
            .strip_prefix('"')
            .ok_or_else(|| bad_script("expected a quote"))?;
        let end = rest
            .find('"')
            .ok_or_else(|| bad_script("unterminated literal"))?;
        text.push_str(&rest[..end]);
        rest = &rest[end + 1..];
        if rest.starts_with(';') {
            return Ok(text);
        }
        rest = rest
            .strip_prefix("\n+")
            .ok_or_else(|| bad_script("broken literal chain"))?;
    }
}

/// Read the decimal number assigned to `name`.
fn read_number(script: &str, name: &str) -> io::Result<usize> {
    let key = format!("{}=", name);
    let start = script
        .find(&key)
        .ok_or_else(|| bad_script(&format!("no {} value", name)))?;
    let digits: String = script[start + key.len()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits
        .parse()
        .map_err(|_| bad_script(&format!("bad {} value", name)))
}

/// Recover the encoded values from a script made by `render`.
pub fn parse(script: &str) -> io::Result<Encoded> {
    Ok(Encoded {
        tree: read_literal(script, "a")?,
        stream: read_literal(script, "d")?,
        len: read_number(script, "\nc")?,
        root: read_number(script, ";r")?,
    })
}
