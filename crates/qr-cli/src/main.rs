mod error;

use clap::{Parser, ValueEnum};
use error::CliError;
use qr_encode::{CodeEcc, Mask, QrCode, Segment, Version};
use qr_render::DEFAULT_BORDER;
use std::path::PathBuf;

/// Encode text as a QR Code and write it out as a PNG image.
#[derive(Parser, Debug)]
#[command(name = "qr", version, about)]
struct Cli {
    /// Text to encode.
    payload: String,

    /// Error correction level.
    #[arg(short, long, value_enum, default_value_t = CliEcl::M)]
    ecl: CliEcl,

    /// Output PNG path.
    #[arg(short, long, default_value = "qrcode.png")]
    out: PathBuf,

    /// Quiet-zone width, in modules.
    #[arg(long, default_value_t = DEFAULT_BORDER)]
    border: u32,

    /// Pixels per module in the rendered image.
    #[arg(long, default_value_t = 8)]
    scale: u32,

    /// Force a specific version (1-40) instead of auto-selecting.
    #[arg(long)]
    min_version: Option<u8>,

    /// Upper bound on the auto-selected version (1-40).
    #[arg(long)]
    max_version: Option<u8>,

    /// Force a specific mask pattern (0-7) instead of auto-selecting.
    #[arg(long)]
    mask: Option<u8>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CliEcl {
    L,
    M,
    Q,
    H,
}

impl From<CliEcl> for CodeEcc {
    fn from(e: CliEcl) -> Self {
        match e {
            CliEcl::L => CodeEcc::Low,
            CliEcl::M => CodeEcc::Medium,
            CliEcl::Q => CodeEcc::Quartile,
            CliEcl::H => CodeEcc::High,
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let ecl = CodeEcc::from(cli.ecl);
    let minversion = match cli.min_version {
        Some(v) => Version::try_new(v).ok_or(CliError::InvalidVersion(v))?,
        None => Version::MIN,
    };
    let maxversion = match cli.max_version {
        Some(v) => Version::try_new(v).ok_or(CliError::InvalidVersion(v))?,
        None => Version::MAX,
    };
    let mask = match cli.mask {
        Some(m) => Some(Mask::try_new(m).ok_or(CliError::InvalidMask(m))?),
        None => None,
    };

    log::info!("encoding {} bytes at ECL {:?}", cli.payload.len(), ecl);
    let segs = Segment::make_segments(&cli.payload)?;
    let qr = QrCode::encode_segments_advanced(&segs, ecl, minversion, maxversion, mask, true)?;
    log::info!(
        "selected version {}, mask {}, size {}",
        qr.version().value(),
        qr.mask().value(),
        qr.size()
    );

    let png = qr_render::render_png(&qr, cli.border, cli.scale)?;
    std::fs::write(&cli.out, png).map_err(|source| CliError::WriteOutput {
        path: cli.out.display().to_string(),
        source,
    })?;
    log::info!("wrote {}", cli.out.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
