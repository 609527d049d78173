use std::process::ExitCode;

use clap::Parser;
use songsmith::cli::{Cli, Command};
use songsmith::config::Config;
use songsmith::constant;
use songsmith::form::Form;
use songsmith::view;

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    Config::log()?.init()?;
    tracing::info!(version = constant::APP_VERSION);

    match cli.command.unwrap_or(Command::Home) {
        Command::Home => println!("{}", view::Home),
        Command::Genres => println!("{}", view::Genres),
        Command::Generate(generate) => {
            let client = match &generate.backend {
                Some(url) => song_client::Client::new(url.clone()),
                None => {
                    let backend = Config::backend()?;
                    tracing::debug!("{backend:#?}");
                    backend.client()
                }
            };
            match Form::from(&generate).submit(&client).await {
                Ok(song) if generate.json => println!("{}", serde_json::to_string_pretty(&song)?),
                Ok(song) => println!("{}", view::Song(&song)),
                Err(error) => {
                    eprintln!("{error}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
