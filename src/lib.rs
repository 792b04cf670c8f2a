use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

/// File written when the caller does not pick a destination.
pub const DEFAULT_OUTPUT: &str = "data.h";

/// Macro bound to the array length.
pub const MACRO_NAME: &str = "ARRAY_SIZE";
/// Name of the declared `uint32_t` array.
pub const ARRAY_NAME: &str = "l2_data_flat";

const PER_LINE: u32 = 8;

const BANNER: &str = "// This data file is only for testing copy data from L2 to L1 with cores";
const ALIAS_HINT: &str = "// int32_t(*l2_data) = (int32_t(*))l2_data_flat;";

/// Number of elements in the generated array. Never zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrayLength(u32);

impl ArrayLength {
    pub fn new(len: u32) -> anyhow::Result<Self> {
        if len == 0 {
            anyhow::bail!("array length must be positive, got 0");
        }
        Ok(Self(len))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ArrayLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Writes the whole header for `len` into `out`.
///
/// Element `i` is `\t{i}`, followed by `", "` unless it is the last one, and
/// by a newline after every eighth element and after the last one. The
/// closing alias comment is not newline-terminated.
pub fn render<W: Write>(out: &mut W, len: ArrayLength) -> anyhow::Result<()> {
    let n = len.get();
    write!(out, "{BANNER}\n\n")?;
    write!(out, "#define {MACRO_NAME} ({n})\n\n")?;
    writeln!(out, "uint32_t {ARRAY_NAME}[{n}] = {{")?;
    for i in 0..n {
        let last = i == n - 1;
        write!(out, "\t{i}")?;
        if !last {
            out.write_all(b", ")?;
        }
        if (i + 1) % PER_LINE == 0 || last {
            out.write_all(b"\n")?;
        }
    }
    out.write_all(b"};\n")?;
    out.write_all(ALIAS_HINT.as_bytes())?;
    Ok(())
}

/// [`render`] into an owned string.
pub fn render_to_string(len: ArrayLength) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    render(&mut buf, len)?;
    Ok(String::from_utf8(buf)?)
}

/// Renders the header into `path`, replacing whatever is there.
pub fn generate<P: AsRef<Path>>(path: P, len: ArrayLength) -> anyhow::Result<PathBuf> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut fout = BufWriter::new(file);
    render(&mut fout, len).with_context(|| format!("writing {}", path.display()))?;
    fout.flush().with_context(|| format!("flushing {}", path.display()))?;
    Ok(path.to_path_buf())
}
