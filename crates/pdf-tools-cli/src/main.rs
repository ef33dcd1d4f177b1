mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use logger::CliLogger;
use pdf_tile::{SourceImage, TileError, TileOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pdft", about = "PDF tools CLI", version)]
struct Cli {
    /// Show debug output (page, image and tile sizes)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a double-sided PDF from images, tiling as necessary to fit the
    /// paper size. Requires an even number of images.
    Tile {
        /// Image files; each consecutive pair forms the front and back of the sheets
        #[arg(required = true, num_args = 1..)]
        images: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Named paper size (overrides --width/--height)
        #[arg(long, value_enum, conflicts_with_all = ["width", "height"])]
        paper: Option<PaperArg>,

        /// Width of printable area in millimetres
        #[arg(long, default_value = "312")]
        width: f32,

        /// Height of printable area in millimetres
        #[arg(long, default_value = "440")]
        height: f32,

        /// Output orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// DPI of images
        #[arg(long, default_value = "300")]
        dpi: u32,

        /// Read paper size, orientation and DPI from a JSON options file
        #[arg(long, conflicts_with_all = ["paper", "width", "height", "orientation", "dpi"])]
        config: Option<PathBuf>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for pdf_tile::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for pdf_tile::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = CliLogger::new(cli.verbose).init() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<TileError>()
                .map(TileError::exit_code)
                .unwrap_or(5);
            ExitCode::from(code)
        }
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Tile {
            images,
            output,
            paper,
            width,
            height,
            orientation,
            dpi,
            config,
            stats_only,
        } => {
            // An odd count fails before any file, the config included, is opened
            pdf_tile::layout::check_image_count(images.len())?;

            let mut options = match config {
                Some(path) => TileOptions::load(&path).await?,
                None => TileOptions {
                    paper_size: paper.map(Into::into).unwrap_or(pdf_tile::PaperSize::Custom {
                        width_mm: width,
                        height_mm: height,
                    }),
                    orientation: orientation.into(),
                    dpi,
                    ..Default::default()
                },
            };
            options.input_files = images;
            options.validate()?;

            let loaded = pdf_tile::load_images(&options.input_files).await?;
            let dims: Vec<_> = loaded.iter().map(SourceImage::dims).collect();

            let page = options.page_size();
            let stats = pdf_tile::calculate_statistics(&dims, &options)?;
            println!("Tiling Statistics:");
            println!("  Source images: {}", stats.source_images);
            println!("  Page size: {} x {} px", page.width, page.height);
            println!("  Tiles per image: {} x {}", stats.cols, stats.rows);
            println!("  Rotated images: {}", stats.rotated_images);
            println!("  Output pages: {}", stats.output_pages);
            println!("  Output sheets: {}", stats.output_sheets);

            if stats_only {
                return Ok(());
            }

            let bytes = pdf_tile::tile_images(loaded, &options).await?;
            pdf_tile::save_pdf(bytes, &output).await?;
            info!("Tiled → {}", output.display());
        }
    }

    Ok(())
}
