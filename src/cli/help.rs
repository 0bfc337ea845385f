use std::io::{self, Write};

use crate::settings::DEFAULT_LENGTH;

const OPTIONS: &[(&str, &str)] = &[
    ("-l, --length <N>", "Characters in the password"),
    ("-a, --alpha", "Use letters, upper and lower case"),
    ("-n, --numeric", "Use digits"),
    ("-s, --symbols", "Use symbols from: #?!@$ %^&*- (includes space)"),
    ("-d, --deny <CHARS>", "Characters never to use, from any class"),
    ("    --seed <N>", "Reproducible output from a fixed seed"),
    ("    --verbose", "Diagnostics on stderr"),
    ("-h, --help", "Display this help message"),
    ("-v, --version", "Display version"),
];

const EXAMPLES: &[(&str, &str)] = &[
    ("genpass -a -n", "16 letters and digits, at least one of each"),
    ("genpass -l 8 -a -d aeiouAEIOU", "8 letters, no vowels"),
    ("genpass -l 20 -a -n -s", "20 characters from every class"),
];

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "genpass {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Random password with every enabled character class present.")?;
    writeln!(out)?;
    writeln!(out, "USAGE:")?;
    writeln!(out, "  genpass [OPTIONS]")?;
    writeln!(out)?;
    writeln!(out, "OPTIONS:")?;
    for (flag, text) in OPTIONS {
        writeln!(out, "  {flag:<22}{text}")?;
    }
    writeln!(out, "  {:<22}(length default: {DEFAULT_LENGTH})", "")?;
    writeln!(out)?;
    writeln!(out, "EXAMPLES:")?;
    for (cmd, text) in EXAMPLES {
        writeln!(out, "  {cmd:<32}{text}")?;
    }
    Ok(())
}
