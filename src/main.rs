//! gocomics command-line entry point
//!
//! Fetches strips and their metadata from GoComics.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use gocomics::config::load_config;
use gocomics::list::DEFAULT_LIST_PAGES;
use gocomics::{Category, Comic, ComicList, Config, GoComics, PoliticalCategory, SearchOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// gocomics: browse GoComics strips from the terminal
///
/// Looks up strips by series and day, downloads their images, and runs the
/// site's search, popular, calendar and curated-list queries.
#[derive(Parser, Debug)]
#[command(name = "gocomics")]
#[command(version)]
#[command(about = "Fetch comic strips and their metadata from GoComics", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a strip's metadata
    Info {
        identifier: String,

        /// Day of the strip (latest if omitted)
        #[arg(short, long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,

        /// Also fetch the about page
        #[arg(long)]
        about: bool,
    },

    /// Save a strip's image
    Download {
        identifier: String,

        #[arg(short, long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,

        /// File name (png, jpg or jpeg)
        #[arg(short, long)]
        filename: Option<String>,

        /// Target directory (overrides the configured one)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// List comics from the A-to-Z index
    Search {
        /// Only comics updated today
        #[arg(long)]
        today: bool,

        /// Category slug, repeatable
        #[arg(long = "category", value_name = "SLUG")]
        categories: Vec<Category>,
    },

    /// List political cartoons from the A-to-Z index
    SearchPolitical {
        #[arg(long)]
        today: bool,

        #[arg(long = "category", value_name = "SLUG")]
        categories: Vec<PoliticalCategory>,
    },

    /// List popular comics
    Popular {
        /// Popular political cartoons instead
        #[arg(long)]
        political: bool,
    },

    /// Walk a series day by day
    Stream {
        identifier: String,

        #[arg(long, value_name = "YYYY-MM-DD")]
        start: NaiveDate,

        /// Last day, inclusive (today if omitted)
        #[arg(long, value_name = "YYYY-MM-DD")]
        end: Option<NaiveDate>,

        /// Save every image instead of printing it
        #[arg(long)]
        download: bool,
    },

    /// Show the days a series published in a month
    Calendar {
        identifier: String,
        year: i32,
        month: u32,
    },

    /// Show a curated list and its strips
    List {
        code: u64,

        /// Pages of entries to request
        #[arg(long, default_value_t = DEFAULT_LIST_PAGES)]
        pages: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    let client = GoComics::new(&config).context("Failed to build HTTP client")?;

    if let Err(e) = run(&client, cli.command) {
        tracing::error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gocomics=info,warn"),
            1 => EnvFilter::new("gocomics=debug,info"),
            2 => EnvFilter::new("gocomics=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(client: &GoComics, command: Command) -> Result<()> {
    match command {
        Command::Info {
            identifier,
            date,
            about,
        } => handle_info(client, &identifier, date, about),
        Command::Download {
            identifier,
            date,
            filename,
            dir,
        } => {
            let comic = client
                .comic(&identifier, date)
                .with_context(|| format!("Failed to fetch {}", identifier))?;
            let path = comic
                .download(filename.as_deref(), dir.as_deref())
                .context("Failed to download image")?;
            println!("{}", path.display());
            Ok(())
        }
        Command::Search { today, categories } => {
            let options = categories
                .into_iter()
                .fold(search_options(today), SearchOptions::category);
            print_lines(client.search(&options).context("Search failed")?);
            Ok(())
        }
        Command::SearchPolitical { today, categories } => {
            let options = categories
                .into_iter()
                .fold(search_options(today), SearchOptions::category);
            print_lines(client.search_political(&options).context("Search failed")?);
            Ok(())
        }
        Command::Popular { political } => {
            print_lines(
                client
                    .popular_comics(political)
                    .context("Failed to fetch popular comics")?,
            );
            Ok(())
        }
        Command::Stream {
            identifier,
            start,
            end,
            download,
        } => handle_stream(client, &identifier, start, end, download),
        Command::Calendar {
            identifier,
            year,
            month,
        } => {
            let dates = client
                .published_dates(&identifier, year, month)
                .with_context(|| format!("Failed to fetch calendar of {}", identifier))?;
            print_lines(dates);
            Ok(())
        }
        Command::List { code, pages } => handle_list(client, code, pages),
    }
}

fn search_options<C: gocomics::query::CategorySlug>(today: bool) -> SearchOptions<C> {
    let options = SearchOptions::default();
    if today {
        options.updated_today()
    } else {
        options
    }
}

fn print_lines<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) {
    for item in items {
        println!("{}", item);
    }
}

fn print_field(label: &str, value: Option<&str>) {
    println!("{:<18}{}", format!("{}:", label), value.unwrap_or("-"));
}

fn handle_info(
    client: &GoComics,
    identifier: &str,
    date: Option<NaiveDate>,
    about: bool,
) -> Result<()> {
    let mut comic = client
        .comic(identifier, date)
        .with_context(|| format!("Failed to fetch {}", identifier))?;

    print_field("URL", Some(comic.url()));
    print_field("Name", comic.name());
    print_field("Title", comic.title());
    print_field("Description", comic.description());
    print_field("Author", comic.author());
    print_field("Followers", comic.followers_count());
    print_field("Image", comic.image_url());
    print_field("Share image", comic.share_image_url());
    print_field("Header image", comic.header_feature_url());
    let keywords = comic.keywords().map(|k| k.join(", "));
    print_field("Keywords", keywords.as_deref());

    if !about {
        return Ok(());
    }

    let text = join_segments(comic.about().context("Failed to fetch about page")?);
    print_field("About", Some(&text));
    let feature = comic.about_feature_url()?.map(str::to_string);
    print_field("Feature image", feature.as_deref());
    let author = join_segments(comic.about_author()?);
    print_field("About author", Some(&author));
    let portrait = comic.author_image_url()?.map(str::to_string);
    print_field("Author image", portrait.as_deref());

    println!("Social:");
    print_lines(comic.social_urls()?.iter().map(|url| format!("  {}", url)));
    println!("Characters:");
    print_lines(comic.characters()?.iter().map(|c| format!("  {}", c)));

    Ok(())
}

fn join_segments(segments: &[gocomics::Segment]) -> String {
    segments.iter().map(ToString::to_string).collect()
}

fn handle_stream(
    client: &GoComics,
    identifier: &str,
    start: NaiveDate,
    end: Option<NaiveDate>,
    download: bool,
) -> Result<()> {
    let end = end.unwrap_or_else(|| chrono::Local::now().date_naive());
    let stream = client.stream(identifier, start, end);
    tracing::info!("Streaming {} days of {}", stream.len(), identifier);

    let mut failures = 0usize;
    for result in stream {
        let comic = match result {
            Ok(comic) => comic,
            Err(e) => {
                tracing::warn!("Skipping day: {}", e);
                failures += 1;
                continue;
            }
        };

        if download {
            if let Err(e) = download_dated(&comic) {
                tracing::warn!("Failed to save {}: {}", comic.url(), e);
                failures += 1;
            }
        } else {
            println!("{}\t{}", comic.url(), comic.image_url().unwrap_or("-"));
        }
    }

    if failures > 0 {
        tracing::warn!("{} day(s) failed", failures);
    }
    Ok(())
}

/// Saves a streamed strip as `{identifier}-{YYYY-MM-DD}.png` so days do not overwrite each other
fn download_dated(comic: &Comic) -> gocomics::Result<()> {
    let filename = match comic.date() {
        Some(date) => format!("{}-{}.png", comic.identifier(), date),
        None => format!("{}.png", comic.identifier()),
    };
    let path = comic.download(Some(&filename), None)?;
    println!("{}", path.display());
    Ok(())
}

fn handle_list(client: &GoComics, code: u64, pages: u32) -> Result<()> {
    let mut list = ComicList::with_pages(client, code, pages)
        .with_context(|| format!("Failed to fetch list {}", code))?;

    print_field("URL", Some(list.url()));
    print_field("Title", list.title());
    print_field("Author", list.author());
    print_field("Published", list.formatted_date());
    print_field("Description", list.description());

    println!("Comics:");
    let comics = list.comics().context("Failed to fetch list entries")?;
    print_lines(comics.iter().map(|comic| format!("  {}", comic.url())));

    Ok(())
}
