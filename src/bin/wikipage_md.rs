//! Fetch a wiki page and write it out as Markdown with a frontmatter header.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use wikipage_md::{MissingTranslations, Options, PageConverter, EXIT_FAILURE};

#[derive(Parser)]
#[command(name = "wikipage-md", about = "Convert a wiki page to Markdown")]
struct Cli {
    /// Page to fetch (default: https://wiki.debian.org/News)
    #[arg(short, long)]
    url: Option<String>,

    /// Output file, overwritten on every run (default: debian_news.md)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Origin prepended to root-relative links
    #[arg(long)]
    base_url: Option<String>,

    /// JSON file with options; flags given here take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What to do when the page has no translation block (default: fail)
    #[arg(long, value_enum)]
    missing_translations: Option<MissingTranslations>,
}

impl Cli {
    fn into_options(self) -> wikipage_md::Result<Options> {
        let mut options = match &self.config {
            Some(path) => Options::from_json_file(path)?,
            None => Options::default(),
        };
        if let Some(url) = self.url {
            options.page_url = url;
        }
        if let Some(output) = self.output {
            options.output_path = output;
        }
        if let Some(base_url) = self.base_url {
            options.base_url = base_url;
        }
        if let Some(policy) = self.missing_translations {
            options.missing_translations = policy;
        }
        options.validate()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and exit 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprint!("{err}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let result = cli
        .into_options()
        .and_then(|options| PageConverter::new(options).run());

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = ?err, "{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
