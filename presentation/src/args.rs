//! [`Args`] definitions.

use clap::{Parser, ValueEnum};
use service::domain::Role;

/// Order page simulator of the watch marketplace.
///
/// Makes the provided gestures on a fresh order and renders the resulting
/// page for the viewing role.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Role viewing the order page.
    #[arg(short, long, value_enum, default_value_t = Viewer::Buyer)]
    pub role: Viewer,

    /// Gestures to make, in order (e.g. `agree price=180000 submit`).
    pub gestures: Vec<String>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// [`Role`] viewing the order page.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Viewer {
    /// Buyer.
    Buyer,

    /// Seller.
    Seller,
}

impl From<Viewer> for Role {
    fn from(viewer: Viewer) -> Self {
        match viewer {
            Viewer::Buyer => Self::Buyer,
            Viewer::Seller => Self::Seller,
        }
    }
}
