//! Command-line front end for the `symmetric` cipher facade.
//!
//! Keys and IVs are read from files holding hex text; whitespace and line
//! breaks in those files are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use symmetric::{random_iv, BlockMode, Cipher};

/// Encrypt and decrypt files with ChaCha20 or AES.
#[derive(Parser, Debug)]
#[command(name = "symcrypt", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a file
    Encrypt(TransformArgs),
    /// Decrypt a file
    Decrypt(TransformArgs),
    /// Print a fresh random IV as hex
    Iv {
        /// IV length in bytes
        #[arg(short, long, default_value_t = 16)]
        size: usize,
    },
}

#[derive(Args, Debug)]
struct TransformArgs {
    /// Path to the input file
    #[arg(short, long)]
    file: PathBuf,

    /// Path to the output file
    #[arg(short, long)]
    output: PathBuf,

    /// File containing the key as hex
    #[arg(short, long)]
    key: PathBuf,

    /// File containing the IV as hex
    #[arg(short, long)]
    iv: Option<PathBuf>,

    /// Cipher family
    #[arg(short, long, value_enum, default_value_t = CipherKind::Aes)]
    cipher: CipherKind,

    /// Block mode, AES only (ecb, cbc, pcbc, cfb, ofb, ctr)
    #[arg(short, long, default_value = "cbc", value_parser = parse_block_mode)]
    block_mode: BlockMode,

    /// Read the input and write the output as hex text instead of raw bytes
    #[arg(long)]
    hex: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CipherKind {
    Chacha20,
    Aes,
}

#[derive(Clone, Copy, Debug)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn parse_block_mode(s: &str) -> std::result::Result<BlockMode, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Encrypt(args) => run(&args, Direction::Encrypt),
        Command::Decrypt(args) => run(&args, Direction::Decrypt),
        Command::Iv { size } => {
            println!("{}", hex::encode(random_iv(size)));
            Ok(())
        }
    }
}

fn run(args: &TransformArgs, direction: Direction) -> Result<()> {
    let key = read_hex_file(&args.key).context("reading key")?;
    let iv = match &args.iv {
        Some(path) => read_hex_file(path).context("reading IV")?,
        None => Vec::new(),
    };
    let cipher = build_cipher(args.cipher, &key, &iv, args.block_mode);

    let input = if args.hex {
        read_hex_file(&args.file)?
    } else {
        fs::read(&args.file).with_context(|| format!("reading {}", args.file.display()))?
    };

    info!("{direction:?} {} bytes with {cipher:?}", input.len());
    let output = match direction {
        Direction::Encrypt => cipher.encrypt(&input)?,
        Direction::Decrypt => cipher.decrypt(&input)?,
    };

    let written = if args.hex {
        fs::write(&args.output, hex::encode(&output))
    } else {
        fs::write(&args.output, &output)
    };
    written.with_context(|| format!("writing {}", args.output.display()))?;

    info!("wrote {} bytes to {}", output.len(), args.output.display());
    Ok(())
}

fn build_cipher(kind: CipherKind, key: &[u8], iv: &[u8], block_mode: BlockMode) -> Cipher {
    match kind {
        CipherKind::Chacha20 => Cipher::chacha20(key, iv),
        CipherKind::Aes => Cipher::aes_with_mode(key, iv, block_mode),
    }
}

fn read_hex_file(path: &Path) -> Result<Vec<u8>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    decode_hex(&content).with_context(|| format!("decoding hex in {}", path.display()))
}

/// Decodes hex text, ignoring any whitespace between digits
fn decode_hex(content: &str) -> Result<Vec<u8>> {
    let digits: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        bail!("no hex digits found");
    }
    Ok(hex::decode(digits)?)
}
