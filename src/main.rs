use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use totem::color::{self, SeriesColor};
use totem::plot::PlotStyle;
use totem::{app, CoreSelection, TotemConfig};

/// Create a totem plot: two abundance columns as mirrored horizontal bars.
#[derive(Parser, Debug)]
#[command(name = "totem", version, about, long_about = None)]
struct Cli {
    /// Tab-separated table with a '#OTU ID' header and two value columns
    #[arg(short = 'i', long, value_name = "FILE", help_heading = "Input/Output")]
    input: PathBuf,

    /// Output stem; the image is written to <OUTPUT>.png
    #[arg(short = 'o', long, value_name = "STEM", help_heading = "Input/Output")]
    output: PathBuf,

    /// Two core taxa files to subset to, e.g. core_otus_100.txt
    #[arg(
        short = 'c',
        long,
        num_args = 2,
        value_names = ["FILE", "FILE"],
        requires = "level",
        help_heading = "Filtering"
    )]
    core: Option<Vec<PathBuf>>,

    /// Number of taxonomic ranks kept from core labels; required with --core
    #[arg(
        short = 'l',
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        help_heading = "Filtering"
    )]
    level: Option<u32>,

    /// Minimum percent a taxon must exceed to be plotted (0 disables)
    #[arg(short = 'p', long, value_name = "N", help_heading = "Filtering")]
    percent: Option<u32>,

    /// Sort bars by combined abundance, largest at the top
    #[arg(short = 's', long, help_heading = "Filtering")]
    sort: bool,

    /// Image width in pixels
    #[arg(
        long,
        value_name = "PX",
        env = "TOTEM_WIDTH",
        default_value_t = 2000,
        value_parser = clap::value_parser!(u32).range(1..),
        help_heading = "Appearance"
    )]
    width: u32,

    /// Image height in pixels
    #[arg(
        long,
        value_name = "PX",
        env = "TOTEM_HEIGHT",
        default_value_t = 1500,
        value_parser = clap::value_parser!(u32).range(1..),
        help_heading = "Appearance"
    )]
    height: u32,

    /// Colour of the first column's bars [default: #263F13]
    #[arg(long, value_name = "HEX", help_heading = "Appearance")]
    value1_color: Option<String>,

    /// Colour of the second column's bars [default: #77A61D]
    #[arg(long, value_name = "HEX", help_heading = "Appearance")]
    value2_color: Option<String>,

    /// More log output (-v info, -vv debug); TOTEM_LOG overrides
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Result<TotemConfig> {
        let style = PlotStyle {
            width: self.width,
            height: self.height,
            value1_color: color::resolve(self.value1_color.as_deref(), SeriesColor::dark_green)
                .context("parsing --value1-color")?,
            value2_color: color::resolve(self.value2_color.as_deref(), SeriesColor::light_green)
                .context("parsing --value2-color")?,
        };

        // clap guarantees --level whenever --core is present.
        let core = match (self.core, self.level) {
            (Some(files), Some(level)) => Some(CoreSelection {
                files,
                level: level as usize,
            }),
            _ => None,
        };

        Ok(TotemConfig {
            input: self.input,
            output: self.output,
            core,
            min_percent: self.percent,
            sort: self.sort,
            style,
        })
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::new().filter_or("TOTEM_LOG", default_level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let path = app::run(&config)
        .with_context(|| format!("creating totem plot from {}", config.input.display()))?;
    println!("{}", path.display());
    Ok(())
}
