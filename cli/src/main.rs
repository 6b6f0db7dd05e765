//! Dashboard CLI - drive the blog API from the command line.
//!
//! Commands:
//! - `dashboard overview` / `dashboard analytics` - instance summaries
//! - `dashboard posts` - list posts
//! - `dashboard post <ID>` - show one post with its content
//! - `dashboard create` / `dashboard update <ID>` - write posts
//! - `dashboard route <PATHNAME>` - initial UI route for a browser path

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dashboard_core::{initial_route, ClientConfig, DashboardClient, NewPost, PostStatus, UpdatePost};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Blog dashboard client
#[derive(Parser)]
#[command(name = "dashboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ApiArgs {
    /// Base URL of the blog API
    #[arg(long, env = "API_URL")]
    api_url: String,

    /// Blog instance to operate on
    #[arg(long, env = "INSTANCE_UUID")]
    instance: Uuid,

    /// Give up on a request after this many seconds (default: never)
    #[arg(long, env = "DASHBOARD_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

impl ApiArgs {
    fn client(&self) -> DashboardClient {
        let mut config = ClientConfig::new(&self.api_url, self.instance);
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        DashboardClient::connect(config)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Draft,
    Published,
}

impl From<StatusArg> for PostStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Draft => PostStatus::Draft,
            StatusArg::Published => PostStatus::Published,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the instance overview
    Overview(ApiArgs),

    /// Show instance analytics
    Analytics(ApiArgs),

    /// List posts
    Posts(ApiArgs),

    /// Show a single post
    Post {
        #[command(flatten)]
        api: ApiArgs,
        id: i64,
    },

    /// Create a draft post
    Create {
        #[command(flatten)]
        api: ApiArgs,
        #[arg(long)]
        title: String,
        /// Post content as a JSON document
        #[arg(long, default_value = "{}")]
        content: String,
    },

    /// Update fields of a post
    Update {
        #[command(flatten)]
        api: ApiArgs,
        id: i64,
        #[arg(long)]
        title: Option<String>,
        /// Post content as a JSON document
        #[arg(long)]
        content: Option<String>,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[arg(long)]
        slug: Option<String>,
    },

    /// Print the initial UI route for a browser pathname
    Route { pathname: String },
}

fn parse_content(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).context("--content must be a JSON document")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Overview(api) => print_json(&api.client().overview()?),
        Commands::Analytics(api) => print_json(&api.client().analytics()?),
        Commands::Posts(api) => print_json(&api.client().list_posts()?),
        Commands::Post { api, id } => print_json(&api.client().get_post(id)?),
        Commands::Create {
            api,
            title,
            content,
        } => {
            let post = NewPost {
                title,
                content: parse_content(&content)?,
            };
            let created = api.client().create_post(&post)?;
            tracing::info!(post_id = created.id, "created post");
            print_json(&created)
        }
        Commands::Update {
            api,
            id,
            title,
            content,
            status,
            slug,
        } => {
            let update = UpdatePost {
                title,
                content: content.as_deref().map(parse_content).transpose()?,
                status: status.map(PostStatus::from),
                slug,
            };
            print_json(&api.client().update_post(id, &update)?)
        }
        Commands::Route { pathname } => {
            println!("{}", initial_route(&pathname));
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let cli = Cli::parse();
    run(cli.command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn update_parses_status_and_content() {
        let cli = Cli::try_parse_from([
            "dashboard",
            "update",
            "--api-url",
            "http://localhost:5940",
            "--instance",
            "00000000-0000-0000-0000-000000000001",
            "4",
            "--status",
            "published",
            "--content",
            r#"{"ops":[]}"#,
        ])
        .unwrap();
        match cli.command {
            Commands::Update {
                api, id, status, content, ..
            } => {
                assert_eq!(api.api_url, "http://localhost:5940");
                assert_eq!(id, 4);
                assert!(matches!(status, Some(StatusArg::Published)));
                assert_eq!(parse_content(content.as_deref().unwrap()).unwrap()["ops"], serde_json::json!([]));
            }
            _ => panic!("expected update command"),
        }
    }

    #[test]
    fn bad_content_is_rejected() {
        assert!(parse_content("not json").is_err());
    }
}
