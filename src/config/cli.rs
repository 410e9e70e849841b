//! Command-line surface.

use clap::Parser;

/// Flags for a single service-chain process.
#[derive(Debug, Parser)]
#[command(name = "service-chain")]
#[command(about = "Minimal HTTP service that chains to one adjacent peer", long_about = None)]
pub struct Cli {
    /// Name of this service; the primary route is served at /<name>
    #[arg(short, long)]
    pub service: String,

    /// Host of the peer service to invoke (host or host:port)
    #[arg(short = 'd', long)]
    pub peer_host: Option<String>,

    /// HTTP path to request on the peer service
    #[arg(short = 'e', long)]
    pub peer_path: Option<String>,

    /// Server port
    #[arg(short, long, env = "SS_PORT", default_value_t = 80)]
    pub port: u16,
}
