use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "cityscan-tui", version, about = "City Scan indicator dashboard")]
pub struct CliArgs {
    /// Print indicator stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override processed-tables directory
    #[arg(long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<String>,

    /// Override city name shown in chart subtitles
    #[arg(long, value_name = "NAME")]
    pub city: Option<String>,

    /// Override country name shown in chart subtitles
    #[arg(long, value_name = "NAME")]
    pub country: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(dir) = &self.data_dir {
            std::env::set_var("DATA_DIR", dir);
        }
        if let Some(city) = &self.city {
            std::env::set_var("CITY_NAME", city);
        }
        if let Some(country) = &self.country {
            std::env::set_var("COUNTRY_NAME", country);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
