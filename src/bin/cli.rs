//! Command-line front end for zenity-dialogs
//!
//! Every subcommand prints its decoded result as JSON on stdout.
//!
//! # Usage
//!
//! Ask a question:
//! ```bash
//! zenity-dialogs-cli question --text "Apply 15 file changes?"
//! ```
//!
//! Fill a form:
//! ```bash
//! zenity-dialogs-cli forms --text "New user" \
//!   --field entry:Name --field password:Pin --field calendar:Birthday
//! ```
//!
//! Drive a progress bar from a pipeline:
//! ```bash
//! seq 0 10 100 | zenity-dialogs-cli progress --text "Copying"
//! ```
//!
//! Print the argument vector without launching anything:
//! ```bash
//! zenity-dialogs-cli args scale --option min_value=5 --option max_value=50
//! ```

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use zenity_dialogs::{
    CalendarDialog, ColorDialog, DialogBuilder, DialogRequest, EntryDialog, FormField,
    FormsDialog, ListDialog, ListRow, MessageDialog, PasswordDialog, ProgressDialog, ScaleDialog,
    ZenityConfig,
};

#[derive(Parser, Debug)]
#[command(name = "zenity-dialogs-cli")]
#[command(about = "Show zenity dialogs and print their results as JSON")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// zenity binary to launch
    #[arg(long, global = true)]
    binary: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Window title
    #[arg(long, short, global = true)]
    title: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Information message
    Info {
        #[arg(long)]
        text: String,
    },

    /// Warning message
    Warning {
        #[arg(long)]
        text: String,
    },

    /// Yes/No question (exit code 1 on No)
    Question {
        #[arg(long)]
        text: String,
    },

    /// Error message
    Error {
        #[arg(long)]
        text: String,
    },

    /// Text entry
    Entry {
        #[arg(long)]
        text: Option<String>,
        /// Pre-filled value
        #[arg(long)]
        default: Option<String>,
        /// Mask the input
        #[arg(long)]
        hide: bool,
    },

    /// Slider
    Scale {
        #[arg(long)]
        text: Option<String>,
        #[arg(long, default_value = "0")]
        min: i64,
        #[arg(long, default_value = "100")]
        max: i64,
        #[arg(long, default_value = "1")]
        step: i64,
        #[arg(long, default_value = "0")]
        value: i64,
    },

    /// Date picker
    Calendar {
        #[arg(long)]
        text: Option<String>,
        /// strftime format, e.g. %Y-%m-%d
        #[arg(long)]
        format: Option<String>,
    },

    /// Color picker
    Color {
        /// Initial color
        #[arg(long)]
        color: Option<String>,
    },

    /// Password prompt
    Password {
        /// Also ask for a username
        #[arg(long)]
        username: bool,
    },

    /// Multi-field form
    Forms {
        #[arg(long)]
        text: Option<String>,
        /// Field as type:label (type is entry, password or calendar)
        #[arg(long = "field", required = true)]
        fields: Vec<String>,
    },

    /// Selection list
    List {
        #[arg(long)]
        text: Option<String>,
        /// JSON array of row objects: [{"Name":"a","Size":"1"}]
        #[arg(long)]
        rows: String,
        #[arg(long)]
        print_column: Option<String>,
    },

    /// Progress bar fed with numbers read from stdin
    Progress {
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        auto_close: bool,
    },

    /// Print the argument vector for a dialog kind without launching it
    Args {
        /// Dialog kind, e.g. info, file-selection, text-info
        kind: String,
        /// Option as name=value (name without value for a switch)
        #[arg(long = "option")]
        options: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ZenityConfig::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(binary) = &args.binary {
        config.binary = Some(binary.clone());
    }

    let result = run(args.command, args.title, &config)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    if result.get("accepted").and_then(|v| v.as_bool()) == Some(false) {
        std::process::exit(1);
    }

    Ok(())
}

/// Apply the options shared by every subcommand
fn common<B: DialogBuilder>(builder: B, title: &Option<String>, config: &ZenityConfig) -> B {
    let builder = builder.config(config);
    match title {
        Some(title) => builder.title(title.clone()),
        None => builder,
    }
}

fn run(
    command: Commands,
    title: Option<String>,
    config: &ZenityConfig,
) -> anyhow::Result<serde_json::Value> {
    let value = match command {
        Commands::Info { text } => {
            let accepted = common(MessageDialog::info(text), &title, config).confirm()?;
            json!({ "accepted": accepted })
        }
        Commands::Warning { text } => {
            let accepted = common(MessageDialog::warning(text), &title, config).confirm()?;
            json!({ "accepted": accepted })
        }
        Commands::Question { text } => {
            let accepted = common(MessageDialog::question(text), &title, config).confirm()?;
            json!({ "accepted": accepted })
        }
        Commands::Error { text } => {
            let accepted = common(MessageDialog::error(text), &title, config).confirm()?;
            json!({ "accepted": accepted })
        }

        Commands::Entry { text, default, hide } => {
            let mut dialog = common(EntryDialog::new(), &title, config);
            if let Some(text) = text {
                dialog = dialog.text(text);
            }
            if let Some(default) = default {
                dialog = dialog.entry_text(default);
            }
            if hide {
                dialog = dialog.hide_text();
            }
            json!({ "text": dialog.prompt()? })
        }

        Commands::Scale {
            text,
            min,
            max,
            step,
            value,
        } => {
            let mut dialog = common(ScaleDialog::new(), &title, config)
                .min_value(min)
                .max_value(max)
                .step(step)
                .value(value);
            if let Some(text) = text {
                dialog = dialog.text(text);
            }
            json!({ "value": dialog.prompt()? })
        }

        Commands::Calendar { text, format } => {
            let mut dialog = common(CalendarDialog::new(), &title, config);
            if let Some(text) = text {
                dialog = dialog.text(text);
            }
            match format {
                Some(format) => {
                    let date = dialog.date_format(format).prompt_date()?;
                    json!({ "date": date.map(|d| d.to_string()) })
                }
                None => json!({ "date": dialog.prompt()? }),
            }
        }

        Commands::Color { color } => {
            let mut dialog = common(ColorDialog::new(), &title, config);
            if let Some(color) = color {
                dialog = dialog.color(color);
            }
            json!({ "color": dialog.prompt()? })
        }

        Commands::Password { username } => {
            let auth = common(PasswordDialog::new(), &title, config)
                .username(username)
                .prompt()?;
            serde_json::to_value(auth)?
        }

        Commands::Forms { text, fields } => {
            let mut dialog = common(FormsDialog::new(), &title, config);
            if let Some(text) = text {
                dialog = dialog.text(text);
            }
            for field in fields {
                let Some((kind, label)) = field.split_once(':') else {
                    bail!("Field must be type:label, got {:?}", field);
                };
                dialog = dialog.field(FormField::new(kind, label)?);
            }
            serde_json::to_value(dialog.prompt()?)?
        }

        Commands::List {
            text,
            rows,
            print_column,
        } => {
            let rows: Vec<ListRow> =
                serde_json::from_str(&rows).context("--rows must be a JSON array of objects")?;
            let mut dialog = common(ListDialog::new(), &title, config).rows(rows);
            if let Some(text) = text {
                dialog = dialog.text(text);
            }
            if let Some(column) = print_column {
                dialog = dialog.print_column(column);
            }
            json!({ "selection": dialog.prompt()? })
        }

        Commands::Progress { text, auto_close } => {
            let mut dialog = common(ProgressDialog::new(), &title, config);
            if let Some(text) = text {
                dialog = dialog.text(text);
            }
            if auto_close {
                dialog = dialog.auto_close();
            }
            let mut progress = dialog.show()?;

            for line in std::io::stdin().lock().lines() {
                let line = line?;
                match line.trim().parse::<u32>() {
                    Ok(value) => {
                        progress.set_progress(value)?;
                        if !progress.is_running() {
                            break;
                        }
                    }
                    Err(_) => progress.set_text(line.trim())?,
                }
            }
            info!("Progress input finished at {}", progress.progress());
            json!({ "progress": progress.progress() })
        }

        Commands::Args { kind, options } => {
            let mut request = DialogRequest::from_name(&kind)?;
            request.apply_config(config);
            if let Some(title) = title {
                request.options.set("title", title);
            }
            for option in options {
                match option.split_once('=') {
                    Some((name, value)) => {
                        request.options.set(name, value);
                    }
                    None => {
                        request.options.switch(&option);
                    }
                }
            }
            if !binary_exists(&request) {
                warn!("{} not found; launching would fail", request.binary.display());
            }
            json!({ "args": request.args() })
        }
    };

    Ok(value)
}

fn binary_exists(request: &DialogRequest) -> bool {
    request.binary.is_file()
}
