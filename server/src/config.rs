use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

/// Command line and environment configuration.
#[derive(Parser, Debug, Clone)]
#[command(name = "petstore")]
#[command(about = "Server-rendered pet adoption service")]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "PETSTORE_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// HTTP port
    #[arg(short, long, env = "PETSTORE_PORT", default_value = "5000")]
    pub port: u16,

    /// Directory holding the database file
    #[arg(long, env = "PETSTORE_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Database name; the file is `<data-dir>/<db-name>.duckdb`
    #[arg(long, env = "PETSTORE_DB_NAME", default_value = "PetApp")]
    pub db_name: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Location of the DuckDB file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.duckdb", self.db_name))
    }
}
