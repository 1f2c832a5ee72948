#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

use casego::config::AppConfig;
use casego::{telemetry, Result};

#[derive(Parser)]
#[command(
    name = "casego",
    version,
    about = "Encrypt short text into a password-protected token"
)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print only the token or plaintext
    #[arg(long, global = true)]
    bare: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt plaintext into a casego token
    Encrypt {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        plaintext: String,

        #[arg(
            env = "CASEGO_PASSWORD",
            hide_env_values = true,
            value_parser = NonEmptyStringValueParser::new()
        )]
        password: String,
    },
    /// Decrypt a casego token back into plaintext
    Decrypt {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        token: String,

        #[arg(
            env = "CASEGO_PASSWORD",
            hide_env_values = true,
            value_parser = NonEmptyStringValueParser::new()
        )]
        password: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = if let Some(ref config_path) = cli.config {
        AppConfig::load_from(config_path).unwrap_or_else(|e| {
            eprintln!("Warning: could not load config: {e}");
            AppConfig::default()
        })
    } else {
        AppConfig::load().unwrap_or_default()
    };

    if let Err(e) = telemetry::init(&config.log_level) {
        eprintln!("Warning: {e}");
    }

    let bare = cli.bare || config.bare_output;
    match run(cli.command, bare) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("casego: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, bare: bool) -> Result<()> {
    match command {
        Command::Encrypt {
            plaintext,
            password,
        } => {
            let plaintext = Zeroizing::new(plaintext);
            let password = Zeroizing::new(password);
            let token = casego::encrypt(plaintext.as_bytes(), &password)?;
            if bare {
                println!("{token}");
            } else {
                println!("token: {token}");
            }
        }
        Command::Decrypt { token, password } => {
            let password = Zeroizing::new(password);
            let plaintext = Zeroizing::new(casego::decrypt_to_string(&token, &password)?);
            if !bare {
                println!("Decrypted (UTF-8):");
            }
            println!("{}", plaintext.as_str());
        }
    }
    Ok(())
}
