#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub verbose: bool,
    pub alpha: bool,
    pub numeric: bool,
    pub symbols: bool,
    pub length: Option<i64>,
    pub deny: Option<String>,
    pub seed: Option<u64>,
}

impl CliFlags {
    /// Help and version short-circuit generation.
    pub fn is_info_only(&self) -> bool {
        self.help || self.version
    }
}
