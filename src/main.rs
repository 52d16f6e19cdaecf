use std::env;
use std::process::ExitCode;

use particle_field::app::{self, RunOptions};
use particle_field::config::Viewport;
use particle_field::init_config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn print_usage() {
    println!("Usage: particle_field [options]\n");
    println!("Options:");
    println!("  --settings <file>   settings overlay (.toml or .json), default ./settings.toml");
    println!("  --frames <n>        stop after n frames (default: run forever)");
    println!("  --size <w>x<h>      viewport size in pixels");
    println!("  --seed <n>          seed for particle spawning");
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match parse_and_run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn parse_and_run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_path = None;
    let mut frames = None;
    let mut viewport = Viewport::default();
    let mut seed = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = || iter.next().ok_or_else(|| format!("missing value for {arg}"));
        match arg.as_str() {
            "--settings" => settings_path = Some(value()?.clone()),
            "--frames" => frames = Some(value()?.parse::<usize>()?),
            "--seed" => seed = Some(value()?.parse::<u64>()?),
            "--size" => {
                let raw = value()?;
                let (w, h) = raw
                    .split_once('x')
                    .ok_or_else(|| format!("expected <w>x<h>, got {raw}"))?;
                viewport = Viewport::new(w.parse()?, h.parse()?);
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => return Err(format!("unknown argument {other}").into()),
        }
    }

    let settings = match settings_path {
        Some(path) => init_config::load_from_file(path)?,
        None => init_config::load_default()?,
    };

    tracing::info!(
        width = viewport.width,
        height = viewport.height,
        particles = settings.total_particles(),
        "starting particle field"
    );

    app::run(RunOptions {
        settings,
        viewport,
        frames,
        seed,
    });
    Ok(())
}
