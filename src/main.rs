use clap::{Parser, Subcommand, ValueEnum};
use pagesmith::config::{self, GeneratorConfig};
use pagesmith::output::{self, OutputWriter};
use pagesmith::placeholder::RenderOptions;
use pagesmith::record::{self, Record, resume::Resume, site::SiteData};
use pagesmith::template::TemplateManager;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pagesmith")]
#[command(about = "Static site generator for business sites and resumes")]
#[command(long_about = "\
Static site generator for business sites and resumes

A JSON record is poured into a folder of HTML page templates. Templates hold
literal {{TOKEN}} placeholders; the generator fills them with escaped record
fields and pre-built sections (hero, services, menu, experience, ...).

Project layout:

  ./
  ├── pagesmith.toml               # Generator settings (optional)
  ├── site.json                    # Business site record
  ├── resume.json                  # Resume record
  ├── templates/
  │   ├── bistro/
  │   │   ├── template.json        # Pages, assets, colour theme (optional)
  │   │   ├── index.html           # Page template → output/index.html
  │   │   ├── menu.html
  │   │   ├── styles.css
  │   │   └── assets/              # Copied recursively
  │   └── modern/
  │       └── index.html           # No template.json: single index page
  └── output/                      # Generated site

Template selection (first available wins):
  --template NAME → default_template in pagesmith.toml → the only template

Run 'pagesmith gen-config' to generate a documented pagesmith.toml.")]
#[command(version)]
struct Cli {
    /// Templates directory (overrides pagesmith.toml)
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    /// Output directory (overrides pagesmith.toml)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Shared flags for the generating commands.
#[derive(clap::Args, Clone)]
struct GenerateArgs {
    /// Record file (defaults to site.json or resume.json)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Template to render with
    #[arg(long)]
    template: Option<String>,

    /// Leave out the animation script
    #[arg(long)]
    no_animations: bool,

    /// Empty the output directory first
    #[arg(long)]
    clean: bool,

    /// Refuse to generate when the record has validation issues
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Site,
    Resume,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a business website from a site record
    Site(GenerateArgs),
    /// Generate a resume website from a resume record
    Resume(GenerateArgs),
    /// List the available templates
    Templates,
    /// Validate a record without generating anything
    Check {
        kind: Kind,
        /// Record file (defaults to site.json or resume.json)
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Print a stock pagesmith.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Command::Site(args) => {
            let settings = resolve_settings(&cli)?;
            generate::<SiteData>(&settings, args)?;
        }
        Command::Resume(args) => {
            let settings = resolve_settings(&cli)?;
            generate::<Resume>(&settings, args)?;
        }
        Command::Templates => {
            let settings = resolve_settings(&cli)?;
            let manager = TemplateManager::discover(&settings.templates_dir)?;
            output::print_template_list(&manager.info());
        }
        Command::Check { kind, data } => match kind {
            Kind::Site => check::<SiteData>(data.as_deref())?,
            Kind::Resume => check::<Resume>(data.as_deref())?,
        },
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr so command output on stdout stays clean. `RUST_LOG`
/// overrides the default `info` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// `pagesmith.toml` values with command-line overrides applied.
struct Settings {
    config: GeneratorConfig,
    templates_dir: PathBuf,
    output_dir: PathBuf,
}

fn resolve_settings(cli: &Cli) -> Result<Settings, config::ConfigError> {
    let config = config::load_config(Path::new("."))?;
    let templates_dir = cli
        .templates
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.templates_dir));
    let output_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));
    config::validate_dirs(Path::new("."), &templates_dir, &output_dir)?;
    Ok(Settings {
        config,
        templates_dir,
        output_dir,
    })
}

fn load<R: Record>(data: Option<&Path>) -> Result<R, record::RecordError> {
    let path = data.map_or_else(|| PathBuf::from(R::FILE_NAME), Path::to_path_buf);
    record::load_record(&path)
}

fn check<R: Record>(data: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let record: R = load(data)?;
    let issues = record.validate();
    output::print_validation(R::KIND, &issues);
    if !issues.is_empty() {
        return Err(format!("{} data failed validation", R::KIND).into());
    }
    Ok(())
}

fn generate<R: Record>(
    settings: &Settings,
    args: &GenerateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let record: R = load(args.data.as_deref())?;

    let issues = record.validate();
    if !issues.is_empty() {
        output::print_validation(R::KIND, &issues);
        if args.strict {
            return Err(format!("{} data failed validation", R::KIND).into());
        }
    }

    let manager = TemplateManager::discover(&settings.templates_dir)?;
    let template = manager.select(
        args.template.as_deref(),
        settings.config.default_template.as_deref(),
    )?;

    let options = RenderOptions {
        animations: settings.config.animations && !args.no_animations,
    };
    let pages = template.generate_all_pages(&record, &options);

    let writer = OutputWriter::new(&settings.output_dir);
    writer.prepare(settings.config.clean || args.clean)?;
    let report = writer.write_site(template, &pages, &record)?;
    output::print_write_report(&report);
    Ok(())
}
