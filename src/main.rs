use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gitfront::artifacts::core::logging::init_logging;
use gitfront::artifacts::core::pager::{PagerWriter, should_page};
use gitfront::{Repository, RunnerConfig};
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "gitfront",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A command-line front-end for git",
    long_about = "gitfront drives the git executable with fixed argument lists and \
    shows its output unchanged. Every subcommand maps to one git invocation \
    (merge maps to two) run in an explicit repository directory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "repo",
        global = true,
        env = "GITFRONT_REPO",
        help = "The repository directory (defaults to the current directory)"
    )]
    repo: Option<PathBuf>,
    #[arg(
        long = "timeout",
        global = true,
        env = "GITFRONT_TIMEOUT",
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Kill git commands that run longer than this"
    )]
    timeout: Option<u64>,
    #[arg(long, global = true, help = "Print history without the pager")]
    no_pager: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command runs 'git init' in the repository directory or at the specified path, \
        creating the directory first when it does not exist."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(name = "add", about = "Stage every change in the repository (git add .)")]
    Add,
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged changes. An empty message is rejected \
        before git is run."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "push",
        about = "Push a branch to origin",
        long_about = "This command pushes the given branch, or the current one, to origin. \
        The push is only forced when --force is given."
    )]
    Push {
        #[arg(index = 1, help = "The branch to push (defaults to the current branch)")]
        branch: Option<String>,
        #[arg(short, long, help = "Overwrite the remote branch")]
        force: bool,
    },
    #[command(name = "pull", about = "Pull from the tracked remote")]
    Pull,
    #[command(name = "fetch", about = "Fetch from the tracked remote")]
    Fetch,
    #[command(name = "status", about = "Show the working tree status")]
    Status,
    #[command(name = "branch", about = "Create, delete, rename or list branches")]
    Branch {
        #[command(subcommand)]
        action: BranchCommands,
    },
    #[command(name = "switch", about = "Switch to an existing branch")]
    Switch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into another",
        long_about = "This command checks out the target branch and then merges the source branch into it. \
        Both must be existing branches. The two steps are not atomic: when the merge fails \
        the repository stays on the target branch."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        source: String,
        #[arg(long, short = 'i', help = "The branch to merge into")]
        into: String,
    },
    #[command(name = "remote", about = "Add or list remotes")]
    Remote {
        #[command(subcommand)]
        action: RemoteCommands,
    },
    #[command(
        name = "log",
        about = "Show the commit graph of all refs (git log --oneline --graph --all)"
    )]
    Log,
    #[command(
        name = "exec",
        about = "Run a free-form git command line",
        long_about = "This command splits the given line on whitespace and runs it. \
        Only lines starting with 'git' are accepted, e.g. gitfront exec \"git log -n 3\"."
    )]
    Exec {
        #[arg(index = 1, allow_hyphen_values = true)]
        line: String,
    },
    #[command(
        name = "shell",
        about = "Read git command lines from stdin and run them one by one",
        long_about = "This command starts an interactive terminal. Each line goes through the same \
        checks as 'exec'; type 'exit' or 'quit' (or send EOF) to leave."
    )]
    Shell,
}

#[derive(Subcommand)]
enum BranchCommands {
    #[command(name = "create", about = "Create a branch and switch to it")]
    Create {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "delete", about = "Delete a fully merged branch")]
    Delete {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rename", about = "Rename a branch")]
    Rename {
        #[arg(index = 1)]
        old: String,
        #[arg(index = 2)]
        new: String,
    },
    #[command(name = "list", about = "List branches, marking the current one")]
    List,
}

#[derive(Subcommand)]
enum RemoteCommands {
    #[command(name = "add", about = "Add a remote")]
    Add {
        #[arg(index = 1)]
        name: String,
        #[arg(index = 2)]
        url: String,
    },
    #[command(name = "list", about = "List remotes")]
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let path = match (&cli.command, &cli.repo) {
        (Commands::Init { path: Some(path) }, _) => path.clone(),
        (_, Some(repo)) => repo.clone(),
        _ => std::env::current_dir().context("Failed to resolve the current directory")?,
    };
    let config = RunnerConfig::new(cli.timeout.map(Duration::from_secs));

    if matches!(cli.command, Commands::Log) && should_page(cli.no_pager) {
        let pager = Pager::new();
        let repository = Repository::new(path, Box::new(PagerWriter::new(pager.clone())), config);

        repository.history().await?;
        minus::page_all(pager).context("Failed to display the pager")?;

        return Ok(());
    }

    let repository = Repository::new(path, Box::new(std::io::stdout()), config);

    match cli.command {
        Commands::Init { .. } => {
            repository.init().await?;
        }
        Commands::Add => {
            repository.add_all().await?;
        }
        Commands::Commit { message } => {
            repository.commit(&message).await?;
        }
        Commands::Push { branch, force } => {
            repository.push(branch.as_deref(), force).await?;
        }
        Commands::Pull => {
            repository.pull().await?;
        }
        Commands::Fetch => {
            repository.fetch().await?;
        }
        Commands::Status => {
            repository.status().await?;
        }
        Commands::Branch { action } => match action {
            BranchCommands::Create { name } => {
                repository.create_branch(&name).await?;
            }
            BranchCommands::Delete { name } => {
                repository.delete_branch(&name).await?;
            }
            BranchCommands::Rename { old, new } => {
                repository.rename_branch(&old, &new).await?;
            }
            BranchCommands::List => {
                repository.list_branches().await?;
            }
        },
        Commands::Switch { name } => {
            repository.switch(&name).await?;
        }
        Commands::Merge { source, into } => {
            repository.merge(&source, &into).await?;
        }
        Commands::Remote { action } => match action {
            RemoteCommands::Add { name, url } => {
                repository.add_remote(&name, &url).await?;
            }
            RemoteCommands::List => {
                repository.list_remotes().await?;
            }
        },
        Commands::Log => {
            repository.history().await?;
        }
        Commands::Exec { line } => {
            repository.exec(&line).await?;
        }
        Commands::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let summary = repository.shell(stdin).await?;

            if summary.failed > 0 {
                anyhow::bail!(
                    "{} of {} commands failed",
                    summary.failed,
                    summary.failed + summary.succeeded
                );
            }
        }
    }

    Ok(())
}
