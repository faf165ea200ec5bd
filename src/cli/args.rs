use clap::Parser;

#[derive(Parser)]
#[command(name = "peanoc", version, about = "PEANOC CLI")]
pub struct CliArgs {
    /// Input value: a non-negative integer (e.g. '5') or a Peano numeral
    /// string (e.g. 'S(S(O))')
    pub input: Option<String>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
