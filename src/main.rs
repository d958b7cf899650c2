use anyhow::Result;
use argh::FromArgs;
use course_catalog::Menu;
use course_catalog::config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Load a course catalog file and browse courses and their prerequisites.
struct Args {
    #[argh(option, short = 'f')]
    /// course file to load before showing the menu. Defaults to $COURSE_CATALOG_FILE.
    file: Option<PathBuf>,

    #[argh(switch, short = 'v')]
    /// log debug details to stderr.
    verbose: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let config = Config::new(args.file, args.verbose);

    // stdout belongs to the menu.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    println!("Welcome to the Course Catalog Manager!");

    let mut menu = Menu::default();
    if let Some(path) = &config.preload {
        menu.preload(path, &mut std::io::stdout())?;
    }
    menu.repl()
}
