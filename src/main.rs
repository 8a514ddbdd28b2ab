use chrono::Datelike;
use recipe_tracker::{
    ClientConfig, FileTokenStore, Pending, RecipeTracker, StatusKind, TokenStore, View,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Commands:
  login <email> <password>
  register <username> <email> <password>
  show-login | show-register
  list
  add <name> | <source>
  edit <id>            then: save <name> | <source>
  delete <id>          then: yes | no
  cancel
  logout
  help
  quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the rendered views
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!("Using recipe API at {}", config.api_url);
    tracing::info!("Session token stored at {}", config.token_path.display());

    let store = FileTokenStore::new(&config.token_path);
    let mut tracker = RecipeTracker::new(&config, store);

    tracker.restore().await;
    render(&tracker);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !dispatch(&mut tracker, line.trim()).await {
                    break;
                }
                render(&tracker);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    println!("© {} Recipe Tracker", chrono::Local::now().year());
    Ok(())
}

/// Runs one command. Returns `false` when the user asked to quit.
async fn dispatch<S: TokenStore>(tracker: &mut RecipeTracker<S>, line: &str) -> bool {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let args: Vec<&str> = rest.split_whitespace().collect();

    match (command, args.as_slice()) {
        ("", _) => {}
        ("quit" | "exit", _) => return false,
        ("help", _) => println!("{}", HELP),
        ("login", [email, password]) => tracker.login(email, password).await,
        ("login", [email]) => tracker.login(email, "").await,
        ("login", []) => tracker.login("", "").await,
        ("register", [username, email, password]) => {
            tracker.register(username, email, password).await
        }
        ("register", _) => tracker.register("", "", "").await,
        ("show-login", _) => tracker.show_login(),
        ("show-register", _) => tracker.show_register(),
        ("logout", _) => tracker.logout(),
        ("list", _) => tracker.list().await,
        ("add", _) => {
            let (name, source) = split_fields(rest);
            tracker.create(name, source).await;
        }
        ("edit", [id]) => {
            if !tracker.begin_edit(id) {
                println!("No recipe with id {}", id);
            }
        }
        ("save", _) => {
            let (name, source) = split_fields(rest);
            tracker.submit_edit(name, source).await;
        }
        ("delete", [id]) => {
            if !tracker.request_delete(id) {
                println!("No recipe with id {}", id);
            }
        }
        ("yes", _) => tracker.confirm_delete().await,
        ("no" | "cancel", _) => tracker.cancel(),
        _ => println!("Unrecognised command. Type `help` for the list."),
    }
    true
}

/// Splits `name | source`. A missing `|` leaves the source empty.
fn split_fields(rest: &str) -> (&str, &str) {
    rest.split_once('|').unwrap_or((rest, ""))
}

fn render<S: TokenStore>(tracker: &RecipeTracker<S>) {
    println!();
    match tracker.view() {
        View::Login => println!("== Login ==  (login <email> <password>, show-register)"),
        View::Register => {
            println!("== Register ==  (register <username> <email> <password>, show-login)")
        }
        View::Recipes => {
            println!("== Recipes ==");
            if tracker.recipes().is_empty() {
                println!("  (none)");
            }
            for recipe in tracker.recipes() {
                println!("  [{}] {}", recipe.id, recipe);
            }
            let form = tracker.recipe_form();
            if !form.name.is_empty() || !form.source.is_empty() {
                println!("  add form: {} | {}", form.name, form.source);
            }
        }
    }

    match tracker.pending() {
        Some(Pending::Edit { id, draft }) => {
            println!("Editing {}: {} | {}", id, draft.name, draft.source);
            println!("  save <name> | <source>, or cancel");
        }
        Some(Pending::ConfirmDelete { name, .. }) => {
            println!("Are you sure you want to delete \"{}\"? (yes/no)", name);
        }
        None => {}
    }

    if let Some(status) = tracker.status() {
        let marker = match status.kind {
            StatusKind::Success => "ok",
            StatusKind::Error => "!!",
        };
        println!("[{}] {}", marker, status.text);
    }
}
