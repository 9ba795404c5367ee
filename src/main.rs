//! Load Angband's data files and report what was loaded.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use config::{Config, Environment, File};
use serde::Deserialize;

use angband_data::{FileSource, GameContent, LoadOptions, LoadReport, init_arrays};
use angband_rng::GameRng;

#[derive(Parser, Debug)]
#[command(name = "angband-rs")]
#[command(author, version, about = "Load and check Angband's game data files", long_about = None)]
struct Args {
    /// Directory holding the data files
    #[arg(long = "edit-dir")]
    edit_dir: Option<PathBuf>,

    /// Directory searched before the edit directory
    #[arg(long = "user-dir")]
    user_dir: Option<PathBuf>,

    /// Configuration file (default: angband.toml, if present)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Skip tables that fail to load instead of stopping
    #[arg(long = "best-effort")]
    best_effort: bool,

    /// Seed for the sample draws
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Print one table in full
    #[arg(short = 't', long = "table")]
    table: Option<String>,

    /// More logging; repeat for more
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Deserialize)]
struct Settings {
    edit_dir: PathBuf,
    user_dir: Option<PathBuf>,
    fail_fast: bool,
    seed: u64,
}

impl Settings {
    /// Defaults, then the config file, then `ANGBAND_*` variables, then
    /// command line flags.
    fn load(args: &Args) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("edit_dir", "lib/edit")?
            .set_default("fail_fast", true)?
            .set_default("seed", 0_u64)?;
        builder = match &args.config {
            Some(path) => builder.add_source(File::from(path.as_path())),
            None => builder.add_source(File::with_name("angband").required(false)),
        };
        builder = builder.add_source(Environment::with_prefix("ANGBAND").try_parsing(true));

        if let Some(dir) = &args.edit_dir {
            builder = builder.set_override("edit_dir", dir.to_string_lossy().into_owned())?;
        }
        if let Some(dir) = &args.user_dir {
            builder = builder.set_override("user_dir", dir.to_string_lossy().into_owned())?;
        }
        if args.best_effort {
            builder = builder.set_override("fail_fast", false)?;
        }
        if let Some(seed) = args.seed {
            builder = builder.set_override("seed", seed)?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = Settings::load(&args).wrap_err("cannot read configuration")?;
    log::debug!("{settings:?}");

    let mut source = FileSource::new(&settings.edit_dir);
    if let Some(dir) = &settings.user_dir {
        source = source.with_user_dir(dir);
    }
    let options = LoadOptions {
        fail_fast: settings.fail_fast,
    };
    let (content, report) = init_arrays(&source, options).map_err(|e| {
        let table = e.table().unwrap_or("game data").to_string();
        color_eyre::Report::new(e).wrap_err(format!("cannot initialize {table}"))
    })?;

    match &args.table {
        Some(name) => print_table(&content, name)?,
        None => print_summary(&content, &report, settings.seed),
    }
    Ok(())
}

fn print_summary(content: &GameContent, report: &LoadReport, seed: u64) {
    for (table, n) in &report.loaded {
        println!("{table:>14}: {n}");
    }
    for failure in &report.failures {
        println!("{:>14}: FAILED ({failure})", failure.table().unwrap_or("?"));
    }

    let mut rng = GameRng::new(seed);
    let sample = content
        .alloc
        .monsters
        .pick(1, &mut rng)
        .and_then(|ridx| content.monsters.get(ridx));
    if let Some(race) = sample {
        println!("a level 1 monster: {}", race.name);
    }
    if let Some(hint) = content.hints.first() {
        println!("hint: {hint}");
    }
}

fn print_table(content: &GameContent, name: &str) -> Result<()> {
    match name {
        "limits" => println!("{:#?}", content.maxima),
        "terrain" => println!("{:#?}", content.features),
        "trap" => println!("{:#?}", content.traps),
        "object_base" => println!("{:#?}", content.object_bases),
        "object" => println!("{:#?}", content.kinds),
        "ego_item" => println!("{:#?}", content.egos),
        "artifact" => println!("{:#?}", content.artifacts),
        "pain" => println!("{:#?}", content.pain),
        "monster_base" => println!("{:#?}", content.monster_bases),
        "monster" => println!("{:#?}", content.monsters),
        "pit" => println!("{:#?}", content.pits),
        "vault" => println!("{:#?}", content.vaults),
        "p_hist" => println!("{:#?}", content.histories),
        "p_race" => println!("{:#?}", content.races),
        "p_class" => println!("{:#?}", content.classes),
        "body" => println!("{:#?}", content.bodies),
        "flavor" => println!("{:#?}", content.flavors),
        "spell" => println!("{:#?}", content.spells),
        "hints" => println!("{:#?}", content.hints),
        "names" => println!("{:#?}", content.names),
        "alloc" => println!("{:#?}", content.alloc),
        other => return Err(eyre!("unknown table {other}")),
    }
    Ok(())
}
