use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::{de::DeserializeOwned, Serialize};
use webshop_api::{
    client::{ApiClient, ResourceApi},
    config,
    dto::{
        CategoryResponse, GameResponse, Identified, MonitorResponse, ProductResponse,
        PurchaseResponse, UserResponse,
    },
    views::{AdminView, AutoConfirm, Confirm, Outcome},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    config::init_tracing(&cli.log_level, false);

    let api = ApiClient::new(&cli.base_url).context("invalid --base-url")?;
    let prompt = if cli.yes {
        Prompt::Auto(AutoConfirm(true))
    } else {
        Prompt::Stdin
    };

    match cli.command {
        Commands::Category(action) => {
            run(api.categories(), "category", action, prompt, cli.json).await
        }
        Commands::Product(action) => {
            run(api.products(), "product", action, prompt, cli.json).await
        }
        Commands::Game(action) => run(api.games(), "game", action, prompt, cli.json).await,
        Commands::Monitor(action) => {
            run(api.monitors(), "monitor", action, prompt, cli.json).await
        }
        Commands::Purchase(action) => {
            run(api.purchases(), "purchase", action, prompt, cli.json).await
        }
        Commands::User(action) => run(api.users(), "user", action, prompt, cli.json).await,
    }
}

#[derive(Parser)]
#[command(
    name = "webshop-admin",
    about = "Manage the WebShop catalog over its REST API",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "http://localhost:8080/api/",
        help = "Base URL of the WebShop API"
    )]
    base_url: String,
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[arg(
        long,
        short = 'y',
        global = true,
        action = ArgAction::SetTrue,
        help = "Answer yes to every confirmation prompt"
    )]
    yes: bool,
    #[arg(long, global = true, default_value = "warn", help = "Log level")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    Category(Action),
    #[command(subcommand)]
    Product(Action),
    #[command(subcommand)]
    Game(Action),
    #[command(subcommand)]
    Monitor(Action),
    #[command(subcommand)]
    Purchase(Action),
    #[command(subcommand)]
    User(Action),
}

#[derive(Subcommand)]
enum Action {
    /// List every record
    List,
    /// Show one record
    Get(IdArgs),
    /// Create a record from a JSON body
    Create(DataArgs),
    /// Overwrite a record with a JSON body
    Update(UpdateArgs),
    /// Delete a record
    Delete(IdArgs),
}

#[derive(Args)]
struct IdArgs {
    id: i32,
}

#[derive(Args)]
struct DataArgs {
    #[arg(long, help = "Request body as JSON, camelCase field names")]
    data: String,
}

#[derive(Args)]
struct UpdateArgs {
    id: i32,
    #[arg(long, help = "Request body as JSON, camelCase field names")]
    data: String,
}

enum Prompt {
    Auto(AutoConfirm),
    Stdin,
}

impl Confirm for Prompt {
    fn confirm(&self, prompt: &str) -> bool {
        match self {
            Prompt::Auto(auto) => auto.confirm(prompt),
            Prompt::Stdin => {
                eprint!("{prompt} [y/N] ");
                if io::stderr().flush().is_err() {
                    return false;
                }
                let mut answer = String::new();
                match io::stdin().lock().read_line(&mut answer) {
                    Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
                    Err(_) => false,
                }
            }
        }
    }
}

/// One-line rendering for the plain output mode.
trait Summary {
    fn summary(&self) -> String;
}

impl Summary for CategoryResponse {
    fn summary(&self) -> String {
        format!("- Category {} • {} • {}", self.id, self.name, self.description)
    }
}

impl Summary for ProductResponse {
    fn summary(&self) -> String {
        format!(
            "- Product {} • {} • price {} • stock {}",
            self.id, self.name, self.price, self.stock
        )
    }
}

impl Summary for GameResponse {
    fn summary(&self) -> String {
        format!(
            "- Game {} • {} ({}) • {} • {} • product {} • category {}",
            self.id,
            self.publisher,
            self.published_year,
            self.language,
            self.genre,
            self.product_id,
            self.category_id
        )
    }
}

impl Summary for MonitorResponse {
    fn summary(&self) -> String {
        format!(
            "- Monitor {} • {} {}\" ({}) • product {} • category {}",
            self.id, self.brand, self.size, self.release_year, self.product_id, self.category_id
        )
    }
}

impl Summary for PurchaseResponse {
    fn summary(&self) -> String {
        format!(
            "- Purchase {} • {} • user {} • product {}",
            self.id, self.purchase_date, self.user_id, self.product_id
        )
    }
}

impl Summary for UserResponse {
    fn summary(&self) -> String {
        format!(
            "- User {} • {} • {} • {}",
            self.id, self.username, self.email, self.user_type
        )
    }
}

async fn run<A>(
    api: A,
    label: &'static str,
    action: Action,
    prompt: Prompt,
    json: bool,
) -> Result<()>
where
    A: ResourceApi,
    A::Request: DeserializeOwned + Default + Clone + for<'a> From<&'a A::Response>,
    A::Response: Identified + Clone + Serialize + Summary,
{
    match action {
        Action::List => {
            let mut view = AdminView::new(api, prompt, label);
            view.load().await?;
            if json {
                print_json(&view.items())?;
            } else if view.items().is_empty() {
                println!("No {label} records");
            } else {
                for item in view.items() {
                    println!("{}", item.summary());
                }
            }
            Ok(())
        }
        Action::Get(args) => {
            let item = api.get_by_id(args.id).await?;
            render(&item, json)
        }
        Action::Create(args) => {
            let draft = parse_draft::<A::Request>(&args.data)?;
            let mut view = AdminView::new(api, prompt, label);
            view.begin_create();
            *view.draft_mut() = draft;
            finish(view.save().await, json)
        }
        Action::Update(args) => {
            let draft = parse_draft::<A::Request>(&args.data)?;
            let mut view = AdminView::new(api, prompt, label);
            view.load().await?;
            match view.edit(args.id) {
                Outcome::Done(()) => {}
                Outcome::Declined => {
                    println!("Cancelled");
                    return Ok(());
                }
                Outcome::Failed(err) => return Err(anyhow!(err)),
            }
            *view.draft_mut() = draft;
            finish(view.save().await, json)
        }
        Action::Delete(args) => {
            let mut view = AdminView::new(api, prompt, label);
            finish(view.delete(args.id).await, json)
        }
    }
}

fn parse_draft<R: DeserializeOwned>(raw: &str) -> Result<R> {
    serde_json::from_str(raw).context("--data is not a valid request body")
}

fn finish<T: Serialize + Summary>(outcome: Outcome<T>, json: bool) -> Result<()> {
    match outcome {
        Outcome::Done(item) => render(&item, json),
        Outcome::Declined => {
            println!("Cancelled");
            Ok(())
        }
        Outcome::Failed(err) => Err(anyhow!(err)),
    }
}

fn render<T: Serialize + Summary>(item: &T, json: bool) -> Result<()> {
    if json {
        print_json(item)
    } else {
        println!("{}", item.summary());
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
