//! CLI context - bundles settings and flags for one invocation.

use std::io::Write;

use tracing::{debug, info};
use zeroize::Zeroize;

use super::{CliFlags, ParseError, write_help};
use crate::Error;
use crate::pass::{self, Charset, strength};
use crate::rand::{self, Rand, SplitMix};
use crate::settings::Settings;

/// Application context for CLI mode.
#[derive(Debug)]
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: Vec<String>) -> Result<Self, ParseError> {
        let flags = super::parse(&args)?;
        let mut context = Self {
            settings: Settings::default(),
            flags,
        };
        context.apply_flags();
        Ok(context)
    }

    /// Run the invocation, writing the result to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        if self.flags.is_info_only() {
            return self.handle_info_flags(out);
        }
        self.generate_output(out)
    }

    fn handle_info_flags<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        if self.flags.help {
            write_help(out)?;
        } else {
            writeln!(out, "genpass {}", env!("CARGO_PKG_VERSION"))?;
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(ref deny) = self.flags.deny {
            self.settings.deny = deny.clone();
        }
        self.settings.alpha = self.flags.alpha;
        self.settings.numeric = self.flags.numeric;
        self.settings.symbols = self.flags.symbols;
        self.settings.seed = self.flags.seed;
    }

    /// Generate the password and write it as a single line.
    fn generate_output<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        let charset = Charset::build(&self.settings);
        debug!(
            alphabet = charset.len(),
            rules = charset.rules().len(),
            denied = self.settings.deny.chars().count(),
            "charset built"
        );

        let password = match self.settings.seed {
            Some(seed) => {
                info!(seed, "using seeded generator");
                pass::generate(self.settings.pass_length, &charset, &mut SplitMix::new(seed))?
            }
            None => {
                debug!(source = rand::entropy_source(), "using hardware generator");
                pass::generate(self.settings.pass_length, &charset, &mut Rand::new())?
            }
        };

        let bits = strength::entropy_bits(password.len(), charset.len());
        info!(
            bits = %format!("{bits:.1}"),
            strength = strength::label(bits),
            "password generated"
        );

        let mut line = Vec::with_capacity(password.len() + 1);
        line.extend_from_slice(password.as_bytes());
        line.push(b'\n');
        let written = out.write_all(&line).and_then(|()| out.flush());
        line.zeroize();
        written?;
        Ok(())
    }
}
