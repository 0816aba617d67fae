//! Sequence options

/// Sequence creation options
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// The name of the sequence, shown in log lines
    pub name: Option<String>,
}
