//! Command line and environment configuration.

#[derive(clap::Parser, Debug)]
#[clap(name = "bitmath", about = "Set, test and clear bits of a 256-bit flag value")]
pub struct Config {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replays the reference set/get/unset sequence starting from zero.
    Trace,
    /// Sets the flag at `--index` and prints the new value.
    Set(Operand),
    /// Prints whether the flag at `--index` is set.
    Get(Operand),
    /// Clears the flag at `--index` and prints the new value.
    Unset(Operand),
}

#[derive(clap::Args, Debug, PartialEq, Eq)]
pub struct Operand {
    /// Flag index. Only the low 8 bits select the flag, so 261 and -251 both
    /// address flag 5.
    #[clap(long, env = "FLAG_INDEX", allow_hyphen_values = true)]
    pub index: String,

    /// Current value, as 0x prefixed hex or decimal.
    #[clap(long, env = "FLAG_VALUE", default_value = "0x00")]
    pub value: String,
}
