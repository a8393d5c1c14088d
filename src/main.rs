// Entry point for the architect-cipher command-line tool
// Every command is a thin wrapper around the library's address and key operations
use architect_cipher::{
    bitcoin_address_from_public_key, bulk_round_trip, decode_bitcoin_address, encode_wif,
    secret_key_from_wif, verify_bitcoin_address, Address, Command, KeyProvider, KeyReport, Opt,
    PublicKey, SchemeArg, Secp256k1Provider, SecretKey, WifFormat, GLOBAL_CONFIG,
};
use clap::Parser;
use log::{error, LevelFilter};
use std::process;

fn main() {
    // The logger has to exist before GLOBAL_CONFIG is first touched, so
    // start wide open and narrow to LOG_LEVEL afterwards
    env_logger::builder().filter_level(LevelFilter::Trace).init();
    log::set_max_level(LevelFilter::Warn);
    GLOBAL_CONFIG.warn_rejected();
    log::set_max_level(GLOBAL_CONFIG.get_log_level());

    let opt = Opt::parse();

    // Any failure is logged and turned into exit code 1
    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let provider = Secp256k1Provider::new();
    let wif_format = WifFormat::from_compressed(GLOBAL_CONFIG.is_wif_compressed());

    match command {
        // Fresh random key pairs with every derived form
        Command::Generate { count, json } => {
            for _ in 0..count {
                let (public_key, secret_key) = provider.generate_key_pair()?;
                let report = KeyReport::new(&public_key, &secret_key, wif_format);
                print_report(&report, json)?;
            }
        }
        Command::FromSecKey { secret_key, json } => {
            let secret_key = SecretKey::from_hex(&secret_key)?;
            let report = KeyReport::from_secret_key(&provider, &secret_key, wif_format)?;
            print_report(&report, json)?;
        }
        Command::Address { public_key, scheme } => {
            let public_key = PublicKey::from_hex(&public_key)?;
            let address = match scheme {
                SchemeArg::Native => Address::from_public_key(&public_key),
                SchemeArg::Bitcoin => bitcoin_address_from_public_key(&public_key),
            };
            println!("{address}");
        }
        // The scheme picks which version byte the decoded address must carry
        Command::DecodeAddress { address, scheme } => {
            let decoded = decode_address(&address, scheme)?;
            println!("Version: {:#04x}", decoded.version);
            println!("Hash:    {}", architect_cipher::utils::encode_hex(&decoded.hash));
        }
        Command::Verify {
            address,
            public_key,
            scheme,
        } => {
            let decoded = decode_address(&address, scheme)?;
            let public_key = PublicKey::from_hex(&public_key)?;
            match scheme {
                SchemeArg::Native => decoded.verify(&public_key)?,
                SchemeArg::Bitcoin => verify_bitcoin_address(&decoded, &public_key)?,
            }
            println!("Address {address} belongs to {public_key}");
        }
        // The flag wins over WIF_COMPRESSED
        Command::ToWif {
            secret_key,
            uncompressed,
        } => {
            let secret_key = SecretKey::from_hex(&secret_key)?;
            let format = if uncompressed {
                WifFormat::Uncompressed
            } else {
                wif_format
            };
            println!("{}", encode_wif(&secret_key, format));
        }
        Command::FromWif { wif, json } => {
            let secret_key = secret_key_from_wif(&wif)?;
            let report = KeyReport::from_secret_key(&provider, &secret_key, wif_format)?;
            print_report(&report, json)?;
        }
        Command::BulkCheck { count } => {
            let count = count.unwrap_or_else(|| GLOBAL_CONFIG.get_bulk_count());
            let checked = bulk_round_trip(&provider, count)?;
            println!("Done! {checked} addresses round-tripped without a failure.");
        }
    }
    Ok(())
}

fn decode_address(text: &str, scheme: SchemeArg) -> architect_cipher::Result<Address> {
    match scheme {
        SchemeArg::Native => Address::decode_base58(text),
        SchemeArg::Bitcoin => decode_bitcoin_address(text),
    }
}

fn print_report(report: &KeyReport, json: bool) -> architect_cipher::Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
        println!();
    }
    Ok(())
}
