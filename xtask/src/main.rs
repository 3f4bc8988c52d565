//! Build automation tasks for the word-clock project.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for word-clock project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: host tests, embedded library builds, docs
    CheckAll,
    /// Run unit, integration and doc tests on the host
    Test,
    /// Build the library for an embedded target
    Build {
        #[arg(long, default_value = "thumbv6m")]
        target: Target,
        /// Enable defmt logging
        #[arg(long)]
        defmt: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Target {
    /// Cortex-M0+ (RP2040, Pico 1)
    Thumbv6m,
    /// Cortex-M33 (RP2350, Pico 2)
    Thumbv8m,
    /// Hazard3 (RP2350, Pico 2)
    Riscv,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.triple())
    }
}

impl Target {
    const ALL: [Self; 3] = [Self::Thumbv6m, Self::Thumbv8m, Self::Riscv];

    fn triple(self) -> &'static str {
        match self {
            Self::Thumbv6m => "thumbv6m-none-eabi",
            Self::Thumbv8m => "thumbv8m.main-none-eabihf",
            Self::Riscv => "riscv32imac-unknown-none-elf",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Test => {
            if run_host_tests() {
                println!("{}", "Tests passed! ✨".green());
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Build { target, defmt } => {
            if build_lib(target, defmt) {
                println!("{}", "Build successful! ✨".green());
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn check_all() -> ExitCode {
    println!("{}", "==> Running host tests...".cyan());
    if !run_host_tests() {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> Building library for embedded targets...".cyan());
    for target in Target::ALL {
        for defmt in [false, true] {
            let label = if defmt { "defmt" } else { "no logging" };
            println!("  {}", format!("- {target} ({label})").bright_black());
            if !build_lib(target, defmt) {
                return ExitCode::FAILURE;
            }
        }
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(Command::new("cargo").current_dir(workspace_root()).args([
        "doc",
        "--lib",
        "--no-deps",
        "--target",
        Target::Thumbv6m.triple(),
        "--features",
        "defmt",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed! 🎉".green().bold());
    ExitCode::SUCCESS
}

fn run_host_tests() -> bool {
    let mut test_cmd = Command::new("cargo");
    test_cmd
        .current_dir(workspace_root())
        .args(["test", "--package", "word-clock"]);

    match host_target() {
        Some(target) => {
            println!(
                "  {}",
                format!("Using host target: {target}").bright_black()
            );
            test_cmd.arg("--target").arg(target);
        }
        None => {
            println!(
                "{}",
                "  Unable to detect host target; relying on cargo default.".bright_black()
            );
        }
    }

    run_command(&mut test_cmd)
}

fn build_lib(target: Target, defmt: bool) -> bool {
    let mut build_cmd = Command::new("cargo");
    build_cmd.current_dir(workspace_root()).args([
        "build",
        "--lib",
        "--package",
        "word-clock",
        "--target",
        target.triple(),
    ]);
    if defmt {
        build_cmd.args(["--features", "defmt"]);
    }
    run_command(&mut build_cmd)
}

fn workspace_root() -> std::path::PathBuf {
    // xtask/ sits directly under the workspace root
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map_or_else(|| std::path::PathBuf::from("."), std::path::Path::to_path_buf)
}

fn host_target() -> Option<String> {
    let output = Command::new("rustc").arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("host: "))
        .map(|host| host.trim().to_string())
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
