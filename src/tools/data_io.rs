use std::{
    fs,
    io::{self, Error, Read, Write},
    path::Path,
};

use log::{debug, warn};

use super::cli::{HsOpts, Output};

/// The inputs named in opts. `None` stands for standard input.
pub fn sources(opts: &HsOpts) -> Vec<Option<&str>> {
    if opts.files.is_empty() {
        vec![None]
    } else {
        opts.files.iter().map(|f| Some(f.as_str())).collect()
    }
}

/// Read a whole input, from the named file or from stdin.
pub fn read_input(source: Option<&str>) -> io::Result<Vec<u8>> {
    let data = match source {
        Some(name) => fs::read(name)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    debug!("Read {} bytes", data.len());
    Ok(data)
}

/// Write the result to stdout or to `target`. An existing file is only replaced when the
/// user forced it.
pub fn write_output(opts: &HsOpts, target: Option<&str>, data: &[u8]) -> io::Result<()> {
    let target = match (opts.output, target) {
        (Output::File, Some(target)) => target,
        _ => {
            let mut out = io::stdout().lock();
            out.write_all(data)?;
            return out.flush();
        }
    };
    if Path::new(target).exists() {
        if !opts.force_overwrite {
            return Err(Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Output file {} already exists, use -f to overwrite.", target),
            ));
        }
        warn!("Overwriting {}", target);
    }
    fs::write(target, data)?;
    debug!("Wrote {} bytes to {}", data.len(), target);
    Ok(())
}

/// Name of the script written when compressing `file`.
pub fn zip_name(file: &str, html: bool) -> String {
    let mut name = file.to_owned();
    name.push_str(if html { ".html" } else { ".js" });
    name
}

/// Name of the file restored when decompressing `file`.
pub fn unzip_name(file: &str) -> String {
    for suffix in [".js", ".html"] {
        if let Some(stem) = file.strip_suffix(suffix) {
            if !stem.is_empty() {
                return stem.to_owned();
            }
        }
    }
    let mut name = file.to_owned();
    name.push_str(".out");
    name
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_test() {
        assert_eq!(zip_name("page.txt", false), "page.txt.js");
        assert_eq!(zip_name("page.txt", true), "page.txt.html");
        assert_eq!(unzip_name("page.txt.js"), "page.txt");
        assert_eq!(unzip_name("page.txt.html"), "page.txt");
        assert_eq!(unzip_name("page.dat"), "page.dat.out");
        assert_eq!(unzip_name(".js"), ".js.out");
    }

    #[test]
    fn sources_test() {
        let mut opts = HsOpts::new();
        assert_eq!(sources(&opts), vec![None]);
        opts.files = vec!["a".to_string(), "b".to_string()];
        assert_eq!(sources(&opts), vec![Some("a"), Some("b")]);
    }

    #[test]
    fn refuses_overwrite_test() {
        let path = std::env::temp_dir().join(format!("huffscript_io_{}.js", std::process::id()));
        let name = path.to_string_lossy().to_string();
        let mut opts = HsOpts::new();

        write_output(&opts, Some(&name), b"first").unwrap();
        let err = write_output(&opts, Some(&name), b"second").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&path).unwrap(), b"first");

        opts.force_overwrite = true;
        write_output(&opts, Some(&name), b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
        fs::remove_file(&path).unwrap();
    }
}
