use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use netspec::cli::Cli;
use netspec::config::Settings;
use netspec::output::{print_summary, to_json};
use netspec::summarize_networks;
use std::error::Error;
use std::path::Path;

fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())?;
    } else {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
            .build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env();
    init_logging(&settings.log_config)?;
    log::info!("#Start main() log_config={}", settings.log_config.display());

    let cli = Cli::parse();
    let networks = cli.networks_or(settings.default_network.as_deref());
    if networks.is_empty() {
        return Err("No network given (pass one or set NETSPEC_DEFAULT_NETWORK)".into());
    }

    let summaries = summarize_networks(&networks, &cli.offsets)?;

    if cli.json {
        println!("{}", to_json(&summaries, cli.pretty)?);
    } else {
        for (i, summary) in summaries.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_summary(summary);
        }
    }

    Ok(())
}
