use anyhow::Result;
use clap::{Parser, Subcommand};
use quillbox_core::config::Config;
use quillbox_core::core_store::{
    Category, CategoryFilter, ContentDraft, ContentId, ContentItem, QueryFilter, SortOrder,
};
use quillbox_core::logging::{self, LogConfig, LogLevel};
use quillbox_portal::Portal;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "quillbox")]
#[command(author, version, about = "Local-first content management", long_about = None)]
struct Args {
    /// Set the log level (trace, debug, info, warn, error);
    /// overrides the configured level
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable JSON formatted logging
    #[arg(long)]
    json_logs: bool,

    /// Data directory (defaults to QUILLBOX_STORE_DATA_DIR, then ./data)
    #[arg(short, long)]
    data_dir: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new user and log in
    Signup { username: String, password: String },

    /// Log in as an existing user
    Login { username: String, password: String },

    /// Log out
    Logout,

    /// Show the current user
    Whoami,

    /// Create a content item
    Add {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        body: Option<String>,

        /// NEWS, BLOG, TUTORIAL, or MISC
        #[arg(long)]
        category: Option<String>,

        /// Fill missing fields from the saved draft
        #[arg(long)]
        from_draft: bool,
    },

    /// Edit an existing item
    Edit {
        id: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        body: String,

        /// NEWS, BLOG, TUTORIAL, or MISC
        #[arg(long)]
        category: String,
    },

    /// Delete an item
    Delete { id: String },

    /// Comment on an item
    Comment { id: String, text: String },

    /// List items, filtered and sorted
    List {
        /// Case-insensitive search against title or body
        #[arg(long, default_value = "")]
        search: String,

        /// All, NEWS, BLOG, TUTORIAL, or MISC
        #[arg(long, default_value = "All")]
        category: String,

        /// newest, oldest, title-asc, title-desc, or unsorted
        #[arg(long, default_value = "newest")]
        sort: String,

        /// Print raw JSON instead of a rendered list
        #[arg(long)]
        json: bool,
    },

    /// Manage the saved draft
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },

    /// Show store statistics
    Stats,
}

#[derive(Subcommand, Debug)]
enum DraftAction {
    /// Save the in-progress form
    Save {
        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        body: String,

        #[arg(long)]
        category: Option<String>,
    },

    /// Print the saved draft
    Show,

    /// Discard the saved draft
    Clear,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(dir) = &args.data_dir {
        config.store.data_dir = PathBuf::from(shellexpand::tilde(dir).into_owned());
    }

    let mut log_config = LogConfig::try_from(&config.logging)?;
    if let Some(raw) = &args.log_level {
        log_config.level = raw.parse::<LogLevel>().unwrap_or_else(|err| {
            eprintln!("{}, using 'warn'", err);
            LogLevel::Warn
        });
    }
    if args.json_logs {
        log_config.json = true;
    }
    logging::init_with(log_config)?;

    debug!(data_dir = %config.store.data_dir.display(), "starting");

    let portal = Portal::open(&config)?;

    match args.command {
        Command::Signup { username, password } => {
            let session = portal.auth.sign_up(&username, &password)?;
            println!("Signed up and logged in as {}", session.username);
        }

        Command::Login { username, password } => {
            let session = portal.auth.log_in(&username, &password)?;
            println!("Logged in as {}", session.username);
        }

        Command::Logout => {
            portal.auth.log_out()?;
            println!("Logged out");
        }

        Command::Whoami => match portal.auth.current_user()? {
            Some(session) => println!("{}", session.username),
            None => println!("Not logged in"),
        },

        Command::Add {
            title,
            body,
            category,
            from_draft,
        } => {
            let draft = if from_draft {
                portal.content.load_draft()?.unwrap_or_default()
            } else {
                ContentDraft::default()
            };

            let title = title.unwrap_or(draft.title);
            let body = body.unwrap_or(draft.body);
            let category = match category {
                Some(raw) => raw.parse::<Category>()?,
                None => draft.category.unwrap_or_default(),
            };

            let item = portal.content.create(&title, &body, category)?;
            println!("Created [{}] {}", item.id, item.title);
        }

        Command::Edit {
            id,
            title,
            body,
            category,
        } => {
            let id = id.parse::<ContentId>()?;
            let category = category.parse::<Category>()?;
            let item = portal.content.update(id, &title, &body, category)?;
            println!("Updated [{}] {}", item.id, item.title);
        }

        Command::Delete { id } => {
            let id = id.parse::<ContentId>()?;
            portal.content.remove(id)?;
            println!("Deleted [{}]", id);
        }

        Command::Comment { id, text } => {
            let id = id.parse::<ContentId>()?;
            let comment = portal.content.comment(id, &text)?;
            println!("Comment added to [{}] by {}", id, comment.author);
        }

        Command::List {
            search,
            category,
            sort,
            json,
        } => {
            let filter = QueryFilter {
                search,
                category: category.parse::<CategoryFilter>()?,
                sort: sort.parse::<SortOrder>()?,
            };
            let view = portal.content.browse(&filter)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else if view.is_empty() {
                println!("No content available.");
            } else {
                for item in &view {
                    render_item(item);
                }
            }
        }

        Command::Draft { action } => match action {
            DraftAction::Save {
                title,
                body,
                category,
            } => {
                let category = category
                    .map(|raw| raw.parse::<Category>())
                    .transpose()?;
                portal.content.save_draft(&ContentDraft {
                    title,
                    body,
                    category,
                })?;
                println!("Draft saved");
            }
            DraftAction::Show => match portal.content.load_draft()? {
                Some(draft) => {
                    println!("title:    {}", draft.title);
                    println!("body:     {}", draft.body);
                    match draft.category {
                        Some(category) => println!("category: {}", category),
                        None => println!("category: (unset)"),
                    }
                }
                None => println!("No draft saved"),
            },
            DraftAction::Clear => {
                portal.content.clear_draft()?;
                println!("Draft cleared");
            }
        },

        Command::Stats => {
            let stats = portal.content.stats()?;
            println!("items:    {}", stats.items_count);
            println!("comments: {}", stats.comments_count);
        }
    }

    Ok(())
}

fn render_item(item: &ContentItem) {
    println!("[{}] {} ({})", item.id, item.title, item.category);
    println!("    by {} at {}", item.author, item.date.to_rfc3339());
    println!("    {}", item.body);
    if item.comments.is_empty() {
        println!("    no comments");
    } else {
        for comment in &item.comments {
            println!(
                "    > {} ({}): {}",
                comment.author,
                comment.date.to_rfc3339(),
                comment.text
            );
        }
    }
}
