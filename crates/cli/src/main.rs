use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use galnav::{
    timed, GalacticCoordinate, MapRenderer, NavigationReport, NavigatorInput,
    RenderConfig,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for locating positions on the galaxy map and generating portal codes.
///
/// The position can be given either as a raw galactic coordinate, or as polar
/// navigator parameters. Polar parameters that aren't given fall back to
/// their defaults.
#[derive(Debug, StructOpt)]
#[structopt(name = "galnav")]
struct Opt {
    /// Galactic coordinate to locate, as three values: X Y Z
    #[structopt(long, number_of_values = 3, allow_hyphen_values = true)]
    coordinate: Option<Vec<f64>>,

    /// Angle around the galactic core, in degrees [0, 360]
    #[structopt(long)]
    theta: Option<f64>,

    /// Distance from the galactic core, in navigator units (400 per
    /// coordinate unit)
    #[structopt(long)]
    radius: Option<f64>,

    /// Height above the galactic plane, in navigator units (400 per
    /// coordinate unit)
    #[structopt(long, allow_hyphen_values = true)]
    height: Option<f64>,

    /// Path to a config file that defines how the map is rendered. Supported
    /// formats: JSON, TOML
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// If given, output files will be written to this directory. The exact
    /// files that appear in the directory are defined by the output formats.
    /// See `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to output in. Supported formats:
    ///
    /// cfg - The full render config, in TOML format
    ///
    /// json - Portal code and marker positions, in JSON format
    ///
    /// svg - Markers drawn onto a canvas, optionally on top of the map image
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// Width of the canvas for rendered output formats, in pixels
    #[structopt(long, default_value = "1024")]
    canvas_width: f64,

    /// Height of the canvas for rendered output formats, in pixels
    #[structopt(long, default_value = "768")]
    canvas_height: f64,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the full render config in a human-readable file
    Cfg,
    /// Export the portal code and both marker positions as JSON
    Json,
    /// Render the markers as a 2D SVG
    Svg,
}

impl OutputFormat {
    fn file_ext(self) -> &'static str {
        match self {
            Self::Cfg => "toml",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<RenderConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Figure out which coordinate the user asked for. Exactly one of the two
/// input styles has to be used.
fn resolve_coordinate(opt: &Opt) -> anyhow::Result<GalacticCoordinate> {
    let polar_given =
        opt.theta.is_some() || opt.radius.is_some() || opt.height.is_some();
    match (&opt.coordinate, polar_given) {
        (Some(values), false) => match values.as_slice() {
            &[x, y, z] => Ok(GalacticCoordinate::new(x, y, z)),
            _ => bail!("--coordinate takes exactly 3 values"),
        },
        (None, true) => {
            let defaults = NavigatorInput::default();
            let input = NavigatorInput::validated(
                opt.theta.unwrap_or(defaults.theta),
                opt.radius.unwrap_or(defaults.radius),
                opt.height.unwrap_or(defaults.height),
            )
            .context("invalid navigator parameters")?;
            let coordinate = input.to_coordinate();
            info!("Navigator input {:?} is at {}", input, coordinate);
            Ok(coordinate)
        }
        _ => bail!(
            "must pass exactly one of --coordinate or polar parameters \
            (--theta/--radius/--height)"
        ),
    }
}

/// Generate an output file for the coordinate in the given format.
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    report: &NavigationReport,
    renderer: &MapRenderer,
    canvas_size: (f64, f64),
) -> anyhow::Result<()> {
    fn generate_bytes(
        output_format: OutputFormat,
        report: &NavigationReport,
        renderer: &MapRenderer,
        (canvas_width, canvas_height): (f64, f64),
    ) -> anyhow::Result<Vec<u8>> {
        Ok(match output_format {
            OutputFormat::Cfg => toml::to_string_pretty(renderer.render_config())
                .context("error serializing render config")?
                .into_bytes(),
            OutputFormat::Json => report.to_json().into_bytes(),
            OutputFormat::Svg => renderer
                .render_as_svg(report.coordinate, canvas_width, canvas_height)?
                .into_bytes(),
        })
    }

    let output_file_path = output_dir
        .join("galnav")
        .with_extension(output_format.file_ext());

    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes =
                generate_bytes(output_format, report, renderer, canvas_size)?;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Print the portal code and marker positions for humans
fn print_report(report: &NavigationReport) {
    println!("Coordinate:       {}", report.coordinate);
    match &report.portal_code {
        Ok(code) => println!("Portal code:      {}", code),
        Err(err) => println!("Portal code:      Invalid Coord ({})", err),
    }
    println!("Primary marker:   {}", report.primary);
    println!("Reference marker: {}", report.reference);
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let render_config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => RenderConfig::default(),
    };
    let renderer =
        MapRenderer::new(render_config).context("invalid render config")?;

    let coordinate = resolve_coordinate(&opt)?;
    let report = NavigationReport::new(coordinate);
    print_report(&report);

    // If an output dir was specified, write out output format(s) there
    if let Some(output_dir) = &opt.output {
        if opt.output_formats.is_empty() {
            bail!("output dir was specified, but no output formats were given")
        }
        MapRenderer::check_canvas_size(opt.canvas_width, opt.canvas_height)?;
        fs::create_dir_all(output_dir)?;

        for &output_format in &opt.output_formats {
            gen_output(
                output_dir,
                output_format,
                &report,
                &renderer,
                (opt.canvas_width, opt.canvas_height),
            )?;
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
