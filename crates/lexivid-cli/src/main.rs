use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lexivid_core::GeneratorConfig;
use lexivid_host::{probe, DocumentHost, Generator, ProjectSession};
use lexivid_plan::{AssetKind, Manifest, ManifestRecord};

#[derive(Parser)]
#[command(
    name = "lexivid",
    version,
    about = "Lexivid — batch word-video composition generator",
    long_about = "Lexivid batch-generates short video compositions from a JSON manifest.\nEach record {word, image, audio} becomes one composition with a letter\nreveal, logo and image animations, and a queued render job."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate compositions and render jobs from a manifest
    Generate {
        /// Path to the JSON manifest (array of word/image/audio records)
        #[arg()]
        manifest: PathBuf,

        /// Project directory all relative asset paths resolve against
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Output directory (default: <project-dir>/Generated_Comps)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (default: <project-dir>/lexivid.config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a manifest and its referenced assets without generating
    Check {
        /// Path to the JSON manifest to check
        #[arg()]
        manifest: PathBuf,

        /// Project directory all relative asset paths resolve against
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Config file (default: <project-dir>/lexivid.config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Scaffold a new lexivid project directory
    Init {
        /// Name of the project directory to create
        #[arg()]
        name: String,
    },

    /// Display version and generator info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Generate {
            manifest,
            project_dir,
            output,
            config,
        } => cmd_generate(manifest, project_dir, output, config),
        Commands::Check {
            manifest,
            project_dir,
            config,
        } => cmd_check(manifest, project_dir, config),
        Commands::Init { name } => cmd_init(&name),
        Commands::Info => cmd_info(),
    }
}

/// Load the generator config: an explicit path must parse; the default
/// project-dir config file is used when present, built-in defaults otherwise.
fn load_config(project_dir: &Path, explicit: Option<PathBuf>) -> Result<GeneratorConfig> {
    match explicit {
        Some(path) => GeneratorConfig::load_from_file(&path)
            .with_context(|| format!("failed to load config: {}", path.display())),
        None => {
            let default_path = project_dir.join(GeneratorConfig::FILE_NAME);
            if default_path.is_file() {
                GeneratorConfig::load_from_file(&default_path)
                    .with_context(|| format!("failed to load config: {}", default_path.display()))
            } else {
                tracing::debug!("no config file, using defaults");
                Ok(GeneratorConfig::default())
            }
        }
    }
}

fn cmd_generate(
    manifest_path: PathBuf,
    project_dir: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let start = Instant::now();
    let config = load_config(&project_dir, config_path)?;

    println!("🎬 Lexivid Generator v{}", env!("CARGO_PKG_VERSION"));
    println!("   Manifest: {}", manifest_path.display());
    println!("   Project:  {}", project_dir.display());

    let session = ProjectSession::open(&project_dir, &config, output)?;
    let manifest = Manifest::load(&manifest_path)?;
    println!("   Records:  {}", manifest.len());
    println!();

    let mut host = DocumentHost::new(&config.render);
    let report = Generator::new(&session, &config).run(&manifest, &mut host)?;

    for name in &report.generated {
        println!("   ✓ {}", name);
    }
    for skipped in &report.skipped {
        println!("   ✗ {} skipped: {}", skipped.word, skipped.reason);
    }

    println!();
    println!(
        "   ⚡ {} generated, {} skipped in {:.2}s",
        report.generated.len(),
        report.skipped.len(),
        start.elapsed().as_secs_f64()
    );
    println!("   Output: {}", session.output_dir().display());
    Ok(())
}

fn cmd_check(
    manifest_path: PathBuf,
    project_dir: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(&project_dir, config_path)?;
    let session = ProjectSession::open(&project_dir, &config, None)?;
    let manifest = Manifest::load(&manifest_path)?;

    println!("🔍 Checking {} records", manifest.len());

    let mut problems = 0usize;

    match probe::resolve_asset(&session, Path::new(&config.project.logo), AssetKind::Image) {
        Ok(_) => println!("   ✓ logo {}", config.project.logo),
        Err(e) => {
            problems += 1;
            println!("   ✗ logo: {}", e);
        }
    }

    for record in manifest.iter() {
        let image = probe::resolve_asset(&session, &record.image, AssetKind::Image);
        let audio = probe::resolve_asset(&session, &record.audio, AssetKind::Audio);
        match (image, audio) {
            (Ok(_), Ok(_)) => println!("   ✓ {}", record.word),
            (image, audio) => {
                problems += 1;
                for err in [image.err(), audio.err()].into_iter().flatten() {
                    println!("   ✗ {}: {}", record.word, err);
                }
            }
        }
    }

    if problems > 0 {
        anyhow::bail!("{} of {} entries have problems", problems, manifest.len() + 1);
    }
    println!("   All assets resolve.");
    Ok(())
}

/// Lay out a fresh project directory with a default config and a sample
/// manifest.
fn scaffold_project(root: &Path) -> Result<()> {
    if root.exists() {
        anyhow::bail!("directory already exists: {}", root.display());
    }

    std::fs::create_dir_all(root.join("Assets/Images"))?;
    std::fs::create_dir_all(root.join("Assets/Audio"))?;
    std::fs::create_dir_all(root.join("JSON"))?;
    std::fs::create_dir_all(root.join("Generated_Comps"))?;

    let config = GeneratorConfig::default();
    config.save_to_file(&root.join(GeneratorConfig::FILE_NAME))?;

    let sample = vec![ManifestRecord {
        word: "Cat".into(),
        image: "Assets/Images/cat.jpg".into(),
        audio: "Assets/Audio/cat.wav".into(),
    }];
    std::fs::write(
        root.join("JSON/manifest.json"),
        serde_json::to_string_pretty(&sample)?,
    )?;

    Ok(())
}

fn cmd_init(name: &str) -> Result<()> {
    let root = PathBuf::from(name);
    scaffold_project(&root)?;

    println!("✨ Created project {}", root.display());
    println!("   {}", GeneratorConfig::FILE_NAME);
    println!("   JSON/manifest.json (sample)");
    println!("   Assets/Images/, Assets/Audio/, Generated_Comps/");
    println!();
    println!("   Next:");
    println!("   1. Drop your mascot at Assets/Images/mascot.jpg");
    println!("   2. Add word assets and edit JSON/manifest.json");
    println!(
        "   3. Run: lexivid generate JSON/manifest.json --project-dir {}",
        root.display()
    );
    Ok(())
}

fn cmd_info() -> Result<()> {
    let config = GeneratorConfig::default();
    println!("Lexivid v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "   Canvas:   {}x{} @ {}fps, {}s",
        config.composition.width,
        config.composition.height,
        config.composition.fps,
        config.composition.duration_secs
    );
    println!("   Template: {}", config.render.template);
    println!(
        "   ffprobe:  {}",
        if probe::ffprobe_available() {
            "available (audio durations probed)"
        } else {
            "not found (audio durations skipped)"
        }
    );
    Ok(())
}
