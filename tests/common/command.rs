use crate::common::SharedBuffer;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use derive_new::new;
use gitfront::{Repository, RunnerConfig};
use rstest::fixture;
use std::path::Path;

pub const DEFAULT_BRANCH: &str = "main";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_gitfront_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    configure_repository(repository_dir.path());

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    run_gitfront_command(repository_dir.path(), &["add"])
        .assert()
        .success();

    run_gitfront_command(repository_dir.path(), &["commit", "-m", "Initial commit"])
        .assert()
        .success();

    repository_dir
}

/// A bare repository usable as `origin`.
#[fixture]
pub fn bare_remote_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    run_git_command(dir.path(), &["init", "--bare"])
        .assert()
        .success();
    dir
}

/// Pins the initial branch name and a throwaway identity so runs do not
/// depend on the global git config.
pub fn configure_repository(dir: &Path) {
    let author = generate_random_author();

    run_git_command(dir, &["symbolic-ref", "HEAD", "refs/heads/main"])
        .assert()
        .success();
    run_git_command(dir, &["config", "user.name", &author.name])
        .assert()
        .success();
    run_git_command(dir, &["config", "user.email", &author.email])
        .assert()
        .success();
    run_git_command(dir, &["config", "commit.gpgsign", "false"])
        .assert()
        .success();
}

/// Commits `content` to `file_name` on a new branch, then returns to `main`.
pub fn commit_on_branch(dir: &Path, branch: &str, file_name: &str, content: &str) {
    run_git_command(dir, &["checkout", "-b", branch])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join(file_name), content.to_string()));
    run_git_command(dir, &["add", "."]).assert().success();
    run_git_command(dir, &["commit", "-m", &format!("Update {}", file_name)])
        .assert()
        .success();
    run_git_command(dir, &["checkout", DEFAULT_BRANCH])
        .assert()
        .success();
}

pub fn run_gitfront_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitfront").expect("Failed to find gitfront binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("GITFRONT_REPO");
    cmd.env_remove("GITFRONT_TIMEOUT");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_git_command(dir, args)
        .output()
        .expect("Failed to run git");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub fn open_repository(dir: &Path) -> (Repository, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let repository = Repository::new(dir, Box::new(buffer.clone()), RunnerConfig::default());
    (repository, buffer)
}

#[derive(Debug, Clone, new)]
struct RandomAuthor {
    name: String,
    email: String,
}

fn generate_random_author() -> RandomAuthor {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    let name = Name().fake::<String>().replace(" ", "_");
    let email = FreeEmail().fake::<String>();
    RandomAuthor::new(name, email)
}
