use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use eduscroll::api::ApiClient;
use eduscroll::config::Config;
use eduscroll::flow::{
    ArticleDetailLoader, ArticleListLoader, DetailState, Flow, LoadState, Screen, SelectedGenres,
};
use eduscroll::util::{paragraphs, strip_control_chars, truncate_to_width};

/// Get the config directory path (~/.config/eduscroll/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("eduscroll"))
}

#[derive(Parser, Debug)]
#[command(name = "eduscroll", about = "Genre-driven article browsing for the EDUScroll API")]
struct Args {
    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the genres the server currently offers
    Genres,
    /// List article summaries for the selected genres, in randomized order
    Browse {
        /// Genre to include (repeatable)
        #[arg(long = "genre", value_name = "GENRE")]
        genres: Vec<String>,
    },
    /// Fetch and print one full article
    Read {
        /// Genre the article belongs to
        #[arg(long, value_name = "GENRE")]
        genre: String,
        /// Exact article title
        #[arg(long, value_name = "TITLE")]
        title: String,
        /// Use the legacy per-genre route instead of the filtered POST
        #[arg(long)]
        legacy: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_dir()?.join("config.toml"),
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?
        .with_env_overrides();

    let client = ApiClient::new(&config).context("Failed to create API client")?;

    match args.command {
        Command::Genres => cmd_genres(&client).await,
        Command::Browse { genres } => cmd_browse(&client, &genres).await,
        Command::Read {
            genre,
            title,
            legacy,
        } => cmd_read(&client, &genre, &title, legacy).await,
    }
}

/// Walk the flow to the Welcome screen and print the genre catalog.
async fn cmd_genres(client: &ApiClient) -> Result<()> {
    let mut flow = Flow::new();
    flow.sign_in(client).await?;

    let catalog = welcome_catalog(&flow)?;
    for genre in catalog {
        println!("{}", strip_control_chars(genre));
    }
    Ok(())
}

/// Walk the flow Welcome → Preview and print the shuffled article list.
async fn cmd_browse(client: &ApiClient, requested: &[String]) -> Result<()> {
    let mut flow = Flow::new();
    flow.sign_in(client).await?;

    let catalog = welcome_catalog(&flow)?.clone();
    for genre in requested {
        if catalog.iter().any(|g| g == genre) {
            flow.toggle_genre(genre)?;
        } else {
            eprintln!("Warning: genre \"{genre}\" is not offered by the server, skipping");
        }
    }

    flow.confirm_genres(client).await?;
    let Screen::Preview(list) = flow.screen() else {
        bail!("Navigation did not reach the Preview screen");
    };
    match list.articles() {
        LoadState::Ready(articles) => {
            if articles.is_empty() {
                println!("No articles for the selected genres.");
                return Ok(());
            }
            for (row, article) in articles.iter().enumerate() {
                println!(
                    "{:>3}. {:<60}  {} · {} · {}",
                    row + 1,
                    truncate_to_width(&strip_control_chars(&article.title), 60),
                    strip_control_chars(&article.author),
                    strip_control_chars(&article.genre),
                    strip_control_chars(&article.publish_date),
                );
                println!(
                    "     {}",
                    truncate_to_width(&strip_control_chars(&article.excerpt), 74)
                );
            }
            Ok(())
        }
        LoadState::Error(message) => bail!("Error: {message}"),
        state => bail!("Article list did not settle: {state:?}"),
    }
}

/// Look the article up in its genre's list, then resolve the full text.
async fn cmd_read(client: &ApiClient, genre: &str, title: &str, legacy: bool) -> Result<()> {
    let genres: SelectedGenres = [genre.to_string()].into_iter().collect();
    let mut list = ArticleListLoader::new();
    list.activate(client, &genres).await;

    let summaries = match list.articles() {
        LoadState::Ready(summaries) => summaries,
        LoadState::Error(message) => bail!("Error: {message}"),
        state => bail!("Article list did not settle: {state:?}"),
    };
    let position = summaries
        .iter()
        .position(|s| s.title == title)
        .with_context(|| format!("No article titled \"{title}\" in genre \"{genre}\""))?;
    let summary = list
        .select(position)
        .context("Article list changed during selection")?;

    let mut detail = ArticleDetailLoader::new(summary);
    if legacy {
        detail.activate_legacy(client).await;
    } else {
        detail.activate(client).await;
    }

    match detail.state() {
        DetailState::Ready(article) => {
            println!("{}", strip_control_chars(&article.title));
            println!(
                "{} · {} · {}",
                strip_control_chars(&article.author),
                strip_control_chars(&article.genre),
                strip_control_chars(&article.publish_date),
            );
            if let Some(image) = &article.image {
                println!("Image: {}", strip_control_chars(image));
            }
            for paragraph in paragraphs(&article.body) {
                println!();
                println!("{}", strip_control_chars(paragraph));
            }
            Ok(())
        }
        DetailState::NotFound => {
            bail!("Article \"{title}\" is no longer available in genre \"{genre}\"")
        }
        DetailState::Error(message) => bail!("Error: {message}"),
        state => bail!("Article detail did not settle: {state:?}"),
    }
}

/// The genre catalog from the Welcome screen, or the error that replaced it.
fn welcome_catalog(flow: &Flow) -> Result<&Vec<String>> {
    let Screen::Welcome(selector) = flow.screen() else {
        bail!("Navigation did not reach the Welcome screen");
    };
    match selector.catalog() {
        LoadState::Ready(genres) => Ok(genres),
        LoadState::Error(message) => bail!("Error: {message}"),
        state => bail!("Genre catalog did not settle: {state:?}"),
    }
}
