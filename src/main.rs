use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use huffman_codes::{english_frequencies, value_frequencies, HuffmanTree};


const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog.";


/// Builds a Huffman code, then compresses and decompresses a text with it
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {

    /// Text to encode
    #[arg(env = "HUFFMAN_TEXT", default_value = SAMPLE_TEXT)]
    text: String,

    /// Count the symbols of the text instead of using the English letter frequencies
    #[arg(long, env = "HUFFMAN_FROM_TEXT")]
    from_text: bool,

    /// Print the encoding tree
    #[arg(long, env = "HUFFMAN_TREE")]
    tree: bool,

    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

}


fn main() {

    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}


fn setup_logging(verbosity: u8) {

    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}


fn run(cli: &Cli) -> Result<()> {

    let (alphabet, text) = if cli.from_text {
        (value_frequencies(cli.text.chars()), cli.text.clone())
    } else {
        (english_frequencies(), cli.text.to_uppercase())
    };

    info!(symbols = alphabet.len(), from_text = cli.from_text, "building tree");

    let tree = HuffmanTree::<char>::build(alphabet)
        .context("could not build the encoding tree")?;

    if tree.root().is_leaf() {
        warn!("the alphabet has a single symbol: every code is empty and the decoded text will be empty");
    }

    println!("\nHUFFMAN CODES SAMPLE APPLICATION:\n");

    if cli.tree {
        print!("{tree}");
        println!();
    }

    let encoded = tree.encode_text(&text)
        .with_context(|| format!("could not encode {text:?}"))?;

    let decoded = tree.decode_text(&encoded)
        .context("could not decode the encoded text")?;

    let original_bits = text.chars().count() * 8;

    println!("- Initial text ({} bits, {} bytes): {}", original_bits, original_bits / 8, text);
    println!("- Huffman compression ({} bits, {} bytes): {}", encoded.len(), encoded.len().div_ceil(8), encoded);
    println!("- Huffman decompression: {decoded}");
    println!("- ABL = {:.2}", tree.average_bit_length());
    println!("- Max. bit length = {}", tree.max_bit_length());
    println!("- Compression factor = {:.2}", tree.compression_factor(&text)?);

    Ok(())
}
