use clap::{Parser, Subcommand};
use std::str::FromStr;

/// Address scheme selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeArg {
    Native,
    Bitcoin,
}

impl FromStr for SchemeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(SchemeArg::Native),
            "bitcoin" | "btc" => Ok(SchemeArg::Bitcoin),
            _ => Err(format!(
                "Invalid scheme: {s}. Valid options: native, bitcoin"
            )),
        }
    }
}

impl std::fmt::Display for SchemeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemeArg::Native => write!(f, "native"),
            SchemeArg::Bitcoin => write!(f, "bitcoin"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "architect-cipher")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "generate", about = "Generate new key pairs")]
    Generate {
        #[arg(long = "count", default_value_t = 1, help = "Number of key pairs")]
        count: usize,
        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },
    #[command(
        name = "fromseckey",
        about = "Derive keys and addresses from a secret key"
    )]
    FromSecKey {
        #[arg(help = "Secret key as 64 hex characters")]
        secret_key: String,
        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },
    #[command(name = "address", about = "Derive the address of a public key")]
    Address {
        #[arg(help = "Public key as 66 hex characters")]
        public_key: String,
        #[arg(long = "scheme", default_value = "native", help = "native or bitcoin")]
        scheme: SchemeArg,
    },
    #[command(
        name = "decodeaddress",
        about = "Decode an address into its version and hash"
    )]
    DecodeAddress {
        #[arg(help = "Base58 address")]
        address: String,
        #[arg(long = "scheme", default_value = "native", help = "native or bitcoin")]
        scheme: SchemeArg,
    },
    #[command(name = "verify", about = "Check that an address belongs to a public key")]
    Verify {
        #[arg(help = "Base58 address")]
        address: String,
        #[arg(help = "Public key as 66 hex characters")]
        public_key: String,
        #[arg(long = "scheme", default_value = "native", help = "native or bitcoin")]
        scheme: SchemeArg,
    },
    #[command(name = "towif", about = "Encode a secret key in Wallet Import Format")]
    ToWif {
        #[arg(help = "Secret key as 64 hex characters")]
        secret_key: String,
        #[arg(long = "uncompressed", help = "Omit the compression flag byte")]
        uncompressed: bool,
    },
    #[command(name = "fromwif", about = "Decode a Wallet Import Format secret key")]
    FromWif {
        #[arg(help = "WIF text")]
        wif: String,
        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },
    #[command(
        name = "bulkcheck",
        about = "Round-trip freshly generated addresses through text form"
    )]
    BulkCheck {
        #[arg(long = "count", help = "Number of key pairs (defaults to BULK_COUNT)")]
        count: Option<usize>,
    },
}
