use clap::Parser;

mod error;
mod kernel;
mod keyspace;
mod search;

use error::CrackError;
use kernel::{DigestKernel, Md5Kernel};
use search::{DEFAULT_MAX_LEN, SearchConfig, SearchSession};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "hashcrack")]
#[command(about = "Brute-force digest preimage recovery over lowercase candidates")]
#[command(version)]
struct Args {
    /// Target digest as a hexadecimal string (MD5: 32 hex digits)
    digest: String,

    /// Longest candidate length to search
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Number of worker threads (defaults to all logical CPUs)
    #[arg(long, short = 'j')]
    cores: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CrackError> {
    let kernel = Md5Kernel;
    let target = parse_target(&args.digest, kernel.digest_len())?;

    let mut config = SearchConfig::default().with_max_len(args.max_len);
    if let Some(cores) = args.cores {
        config = config.with_workers(cores);
    }

    let session = SearchSession::new(config, &kernel);
    let result = session.run(&target)?;

    println!("{}", result);
    println!();
    print!("{}", result.statistics.format_summary());

    Ok(())
}

/// Decode the digest argument, validating it before any round runs.
fn parse_target(hex_digest: &str, expected_len: usize) -> Result<Vec<u8>, CrackError> {
    let target = hex::decode(hex_digest)?;
    if target.len() != expected_len {
        return Err(CrackError::DigestLength {
            expected: expected_len,
            actual: target.len(),
        });
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_accepts_md5_hex() {
        let target = parse_target("187ef4436122d1cc2f40dc2b92f0eba0", 16).unwrap();
        assert_eq!(target.len(), 16);
        assert_eq!(target[0], 0x18);
        assert_eq!(target[15], 0xa0);
    }

    #[test]
    fn test_parse_target_rejects_odd_length() {
        assert!(matches!(
            parse_target("abc", 16),
            Err(CrackError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_parse_target_rejects_non_hex() {
        assert!(matches!(
            parse_target("zz", 16),
            Err(CrackError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_parse_target_rejects_wrong_length() {
        assert!(matches!(
            parse_target("abcdef", 16),
            Err(CrackError::DigestLength {
                expected: 16,
                actual: 3,
            })
        ));
    }
}
