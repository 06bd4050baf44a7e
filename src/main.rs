mod cli;
mod commands;
mod config;
mod listing;
mod site;
mod template;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = cli::Cli::build();
    let outcome = commands::run(app);

    if let Err(problem) = outcome {
        eprintln!("{problem:#}");
        std::process::exit(1);
    }
}
