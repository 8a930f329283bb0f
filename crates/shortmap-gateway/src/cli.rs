use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "SHORTMAP_LISTEN_ADDR";
pub const DB_DIR_ENV: &str = "SHORTMAP_DB_DIR";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DB_DIR: &str = "./db";

#[derive(Debug, Parser)]
#[command(name = "shortmap")]
pub struct Cli {
    /// Address the HTTP server binds to.
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Directory of the embedded database.
    #[arg(long = "db", env = DB_DIR_ENV, default_value = DEFAULT_DB_DIR)]
    pub db_dir: PathBuf,
}
