mod commands;
mod core;
mod project;

use clap::{Parser, Subcommand};
use crate::core::error::{CuratorError, print_error};

/// Cut, tag, and merge release branches from the terminal
#[derive(Parser)]
#[command(name = "curator")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show release status (branches, tags, module, current version)
  Status {
    /// Output status in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Cut a release branch: bump the version, update the changelog, push
  Branch {
    /// Version to release (also the branch name)
    release_version: String,
    /// One-line description for the changelog entry and commit message
    #[arg(short, long)]
    description: String,
  },

  /// Merge a release branch back into main
  Merge {
    /// Name of the release branch to merge
    branch_name: String,
    /// Merge commit message (default: "Merge release <branch>")
    #[arg(short, long)]
    message: Option<String>,
  },

  /// Create an annotated release tag on main and push it
  Tag {
    /// Name of the tag to create
    tag_name: String,
    /// Tag annotation message
    #[arg(short, long)]
    message: String,
  },

  /// Delete the git history and re-initialize the repository on main
  Reset {
    /// Force-push the fresh history to origin/main after the reset
    #[arg(long)]
    force_push: bool,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Status { json } => commands::run_status(json),
    Commands::Branch {
      release_version,
      description,
    } => commands::run_branch(release_version, description),
    Commands::Merge { branch_name, message } => commands::run_merge(branch_name, message),
    Commands::Tag { tag_name, message } => commands::run_tag(tag_name, message),
    Commands::Reset { force_push, yes } => commands::run_reset(force_push, yes),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: CuratorError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
