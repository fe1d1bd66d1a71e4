use anyhow::Result;
use clap::{Parser, Subcommand};
use radiofec_cli::{commands, OutputFormat, RadioArg, SchemeArg};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "radiofec")]
#[command(about = "RadioFEC - Forward error correction for low-power radio payloads", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a payload with the chosen FEC scheme
    Encode {
        /// Input file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// FEC scheme
        #[arg(long, value_enum, default_value = "hamming")]
        scheme: SchemeArg,

        /// Treat the input as hex text
        #[arg(long)]
        hex: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "hex")]
        format: OutputFormat,
    },

    /// Decode a Hamming-encoded payload
    Decode {
        /// Input file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// FEC scheme
        #[arg(long, value_enum, default_value = "hamming")]
        scheme: SchemeArg,

        /// Treat the input as hex text
        #[arg(long)]
        hex: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "hex")]
        format: OutputFormat,
    },

    /// Generate encoded sample packets
    Packets {
        /// JSON packet configuration
        #[arg(short, long)]
        config: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Target radio (overrides config)
        #[arg(long, value_enum)]
        radio: Option<RadioArg>,

        /// FEC scheme (overrides config)
        #[arg(long, value_enum)]
        scheme: Option<SchemeArg>,

        /// Number of packets (overrides config)
        #[arg(long)]
        count: Option<usize>,

        /// Raw payload size in bytes (overrides config)
        #[arg(long)]
        payload_len: Option<usize>,

        /// Sample generator seed (overrides config)
        #[arg(long)]
        seed: Option<u32>,

        /// Leave out the 2-byte file index
        #[arg(long)]
        no_index: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "hex")]
        format: OutputFormat,
    },

    /// Decode the Hamming payloads of a receiver log
    DecodeLog {
        /// Log file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Compute the bit error rate of a receiver log
    Ber {
        /// Log file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Expected packet as hex
        #[arg(short, long)]
        expected: String,

        /// Hamming-decode logged payloads before comparing
        #[arg(long)]
        decode: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode {
            input,
            output,
            scheme,
            hex,
            format,
        } => commands::encode::execute(&input, output.as_deref(), scheme.into(), hex, format),

        Commands::Decode {
            input,
            output,
            scheme,
            hex,
            format,
        } => commands::decode::execute(&input, output.as_deref(), scheme.into(), hex, format),

        Commands::Packets {
            config,
            output,
            radio,
            scheme,
            count,
            payload_len,
            seed,
            no_index,
            format,
        } => {
            let mut packet_config = commands::packets::load_config(config.as_deref())?;
            if let Some(radio) = radio {
                packet_config.radio = radio.into();
            }
            if let Some(scheme) = scheme {
                packet_config.scheme = scheme.into();
            }
            if let Some(count) = count {
                packet_config.count = count;
            }
            if let Some(payload_len) = payload_len {
                packet_config.payload_len = payload_len;
            }
            if let Some(seed) = seed {
                packet_config.seed = seed;
            }
            if no_index {
                packet_config.include_index = false;
            }
            commands::packets::execute(&packet_config, output.as_deref(), format)
        }

        Commands::DecodeLog { input, output } => {
            commands::decode_log::execute(&input, output.as_deref())
        }

        Commands::Ber {
            input,
            expected,
            decode,
        } => commands::ber::execute(&input, &expected, decode),
    }
}
