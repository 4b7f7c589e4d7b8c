//! Build script for origin-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/explain.rs.
fn build_cli() -> Command {
    Command::new("origin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Explain how the shell resolves a command")
        .long_about(
            "Trace how an interactive shell would resolve a command: alias expansion, \
             builtins, functions, then the search path with every symlink followed",
        )
        .override_usage("origin [-v] command")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log every lookup to stderr")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress warnings")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ~/.origin/config.yaml")
                .value_name("FILE")
                .env("ORIGIN_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["human", "terse", "json"])
                .env("ORIGIN_FORMAT"),
        )
        .arg(
            Arg::new("shell")
                .long("shell")
                .help("Shell whose aliases, builtins and functions are consulted")
                .value_name("PATH")
                .env("ORIGIN_SHELL"),
        )
        .arg(
            Arg::new("tables")
                .long("tables")
                .help("Load shell tables from a YAML snapshot instead of running the shell")
                .value_name("FILE")
                .env("ORIGIN_TABLES"),
        )
        .arg(
            Arg::new("no-introspect")
                .long("no-introspect")
                .help("Do not run the shell to read its tables")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .help("Search these directories (PATH syntax) instead of PATH")
                .value_name("DIRS")
                .env("ORIGIN_PATH"),
        )
        .arg(
            Arg::new("command")
                .help("The command to explain, a bare name or a path")
                .required(true),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("origin.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
