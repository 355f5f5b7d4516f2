use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use showcase_client::{
    view, AddOutcome, Controller, HttpBackend, JokeCache, Mode, Terminal,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "[j] jokes  [r] refresh  [p] persons  [n] next  [b] previous  [a] add  [q] quit";

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Showcase jokes and persons client")]
struct Cli {
    /// Base URL of the showcase server
    #[arg(long, env = "SHOWCASE_API_URL", default_value = "http://localhost:3000")]
    api_url: String,
    /// File holding the most recently fetched joke batch
    #[arg(long, env = "SHOWCASE_CACHE_FILE", default_value = ".showcase/jokes.json")]
    cache_file: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current joke batch
    Jokes {
        /// Fetch a new batch instead of using the cached one
        #[arg(long)]
        refresh: bool,
    },
    /// Show one page of persons
    Persons {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Add a person interactively
    Add,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("showcase_client=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let backend = Arc::new(HttpBackend::new(cli.api_url));
    let mut controller = Controller::new(backend, JokeCache::new(cli.cache_file));

    match cli.command {
        Some(Commands::Jokes { refresh }) => {
            if refresh {
                controller.refresh_jokes();
            } else {
                controller.start();
            }
            controller.settle().await;
            finish(&controller)
        }
        Some(Commands::Persons { page }) => {
            controller.show_persons();
            controller.settle().await;
            controller.go_to_page(page.saturating_sub(1));
            finish(&controller)
        }
        Some(Commands::Add) => {
            controller.show_persons();
            controller.settle().await;

            let mut terminal = Terminal::stdio();
            match controller.add_person(&mut terminal).await {
                AddOutcome::Added(id) => {
                    tracing::info!("added person {id}");
                    finish(&controller)
                }
                AddOutcome::Cancelled => Ok(()),
                AddOutcome::Rejected(field) => anyhow::bail!("invalid {field}"),
                AddOutcome::Failed => anyhow::bail!("server rejected the new person"),
            }
        }
        None => interactive(controller).await,
    }
}

/// Print the screen; a fetch failure on screen is also a failed run.
fn finish(controller: &Controller<HttpBackend>) -> anyhow::Result<()> {
    print!("{}", view::render(controller.state()));
    match controller.state().error() {
        Some(error) => anyhow::bail!(error),
        None => Ok(()),
    }
}

async fn interactive(mut controller: Controller<HttpBackend>) -> anyhow::Result<()> {
    let mut terminal = Terminal::stdio();
    controller.start();
    redraw(&mut terminal, &controller).await?;

    loop {
        tokio::select! {
            line = terminal.next_line() => {
                let Some(line) = line else { break };
                match line.trim() {
                    "j" => controller.show_jokes(),
                    "r" if controller.state().mode() == Mode::Jokes => controller.refresh_jokes(),
                    "p" => controller.show_persons(),
                    "n" if in_persons(&controller) => {
                        controller.next_page();
                    }
                    "b" if in_persons(&controller) => {
                        controller.previous_page();
                    }
                    "a" if in_persons(&controller) => {
                        controller.add_person(&mut terminal).await;
                    }
                    "q" => break,
                    other => tracing::debug!("ignoring input {other:?}"),
                }
                redraw(&mut terminal, &controller).await?;
            }
            changed = controller.next_update() => {
                if changed {
                    redraw(&mut terminal, &controller).await?;
                }
            }
        }
    }

    Ok(())
}

/// Paging and adding belong to the persons view only.
fn in_persons(controller: &Controller<HttpBackend>) -> bool {
    controller.state().mode() == Mode::Persons
}

async fn redraw<R, W>(
    terminal: &mut Terminal<R, W>,
    controller: &Controller<HttpBackend>,
) -> std::io::Result<()>
where
    R: tokio::io::AsyncBufRead + Unpin + Send,
    W: tokio::io::AsyncWrite + Unpin + Send,
{
    let screen = view::render(controller.state());
    terminal.write(&format!("\n{screen}\n{HELP}\n> ")).await
}
