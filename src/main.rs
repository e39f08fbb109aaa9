use {
  anyhow::Context,
  clap::Parser,
  dom_query::Document,
  muffle::{FilterConfig, FilterOptions, Muffle, MutationBus, SiteTable},
  std::{fs, path::PathBuf, process, rc::Rc, time::Duration},
};

#[derive(Parser)]
#[command(name = "muffle")]
#[command(about = "Hide news items matching a keyword list", long_about = None)]
struct Arguments {
  /// Path to the rendered HTML file to filter
  #[arg(value_name = "FILE")]
  input: PathBuf,

  /// Hostname the page was served from, selects the site descriptor
  #[arg(long, value_name = "HOST")]
  host: String,

  /// JSON configuration file with keywords and site descriptors
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Keyword to filter on, repeatable, used when no config file is given
  #[arg(long = "keyword", value_name = "WORD")]
  keywords: Vec<String>,

  /// Write the filtered document to stdout
  #[arg(long)]
  print: bool,
}

impl Arguments {
  fn run(self) -> Result {
    let html = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let config = match &self.config {
      Some(path) => {
        let json = fs::read_to_string(path).with_context(|| {
          format!("failed to read config from `{}`", path.display())
        })?;

        FilterConfig::from_json(&json)
          .context("failed to parse configuration")?
      }
      None => FilterConfig::new(self.keywords.clone(), SiteTable::builtin()),
    };

    let document = Rc::new(Document::from(html.as_str()));
    let bus = MutationBus::new();

    let options =
      FilterOptions::builder().startup_delay(Duration::ZERO).build();

    let session = Muffle::new(config, options)
      .attach(Rc::clone(&document), &self.host, &bus)
      .context("failed to start filtering session")?;

    let hidden = session.map_or(0, |session| session.initial_hidden());

    println!("hidden: {hidden}");

    if self.print {
      println!("{}", document.html());
    }

    Ok(())
  }
}

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
