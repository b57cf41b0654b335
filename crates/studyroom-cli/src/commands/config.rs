use clap::Subcommand;
use studyroom_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file if none exists
    Init,
}

pub fn run(action: ConfigAction) -> studyroom_core::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::Init => {
            let path = Config::path()?;
            if path.exists() {
                println!("Configuration already exists at {}", path.display());
            } else {
                Config::default().save()?;
                println!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}
