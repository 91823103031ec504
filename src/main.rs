use anyhow::Result;
use clap::Parser;
use log::error;

use labstream_setup::cli::Cli;
use labstream_setup::{
    AssumeYes, DryRunRunner, InteractivePrompter, PrivilegedRunner, Prompter, SetupPaths,
    SudoRunner, setup,
};

fn main() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let root = cli.root.clone().unwrap_or_else(SetupPaths::default_root);
    let paths = SetupPaths::system(&root);

    let prompter: Box<dyn Prompter> = if cli.assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(InteractivePrompter)
    };
    let runner: Box<dyn PrivilegedRunner> = if cli.dry_run {
        Box::new(DryRunRunner)
    } else {
        Box::new(SudoRunner::new())
    };

    setup::show_welcome(&paths);
    let report = setup::run(&paths, prompter.as_ref(), runner.as_ref())?;
    setup::show_completion(&paths, &report);

    if !cli.assume_yes && !cli.dry_run {
        setup::wait_for_enter();
    }
    Ok(())
}
