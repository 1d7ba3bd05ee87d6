//! Command line arguments.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "netspec")]
#[command(about = "Show address, mask, first/last and offset addresses of IPv4 networks", long_about = None)]
pub struct Cli {
    /// Networks in CIDR notation, e.g. 192.168.1.0/24
    pub networks: Vec<String>,

    /// Also show the host at this offset from the network address (repeatable)
    #[arg(short, long = "offset", allow_negative_numbers = true)]
    pub offsets: Vec<i128>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

impl Cli {
    /// Networks from the command line, or the configured default if none were given.
    pub fn networks_or(&self, default: Option<&str>) -> Vec<String> {
        if self.networks.is_empty() {
            default.map(|d| vec![d.to_string()]).unwrap_or_default()
        } else {
            self.networks.clone()
        }
    }
}
