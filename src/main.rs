use clap::Parser;
use dialoguer::{Confirm, theme::ColorfulTheme};
use geostamp::{
    app::App,
    cli::{Cli, Command},
    client::build_client,
    frontmatter::file::FileStore,
    geocode::opencage::OpenCage,
    position::network::NetworkPositionSource,
    prelude::*,
    settings::Settings,
};

#[tokio::main]
async fn main() -> Result {
    let cli = Cli::parse();
    let _logging_guard = geostamp::logging::init()?;

    let settings_path = match cli.settings {
        Some(path) => path,
        None => Settings::default_path()?,
    };
    let mut settings = Settings::load(&settings_path)?;
    if let Some(api_key) = cli.api_key {
        settings.api_key = api_key;
    }

    let client = build_client()?;
    let geocoder = (!settings.api_key.is_empty())
        .then(|| OpenCage::builder().client(client.clone()).api_key(settings.api_key.as_str()).build());
    let app = App::builder()
        .settings(settings)
        .store(FileStore)
        .source(NetworkPositionSource(client))
        .maybe_geocoder(geocoder)
        .build();

    match cli.command {
        Command::Add { path, force } => app.add_location(&path, || confirm_overwrite(force)).await,
        Command::AutoAdd { paths } => {
            for path in paths {
                app.auto_add_location(&path).await?;
            }
            Ok(())
        }
        Command::Locate => {
            let location = app.resolve_location().await?;
            println!("lat: {}", location.lat);
            println!("lon: {}", location.lon);
            if let Some(address) = location.address {
                println!("address: {address}");
            }
            Ok(())
        }
    }
}

fn confirm_overwrite(force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("This note already has location data. Overwrite it with your current location?")
        .default(false)
        .interact()
        .context("failed to read the confirmation")
}
