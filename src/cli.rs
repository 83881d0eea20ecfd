use std::path::PathBuf;

use clap::{Parser, Subcommand};
use msh_core::import::ImportField;
use msh_entities::{email::EmailAddress, user::Role};

#[derive(Debug, Parser)]
#[command(name = "maroc-sport-hub", about = "Directory and booking service for sports facilities", version)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the database migrations and start the web server
    Serve(ServeArgs),
    /// Import facilities from a CSV file
    Import(ImportArgs),
    /// Assign a role to a registered user
    SetRole {
        email: EmailAddress,
        /// user, admin or super_admin
        role: Role,
    },
}

#[derive(Debug, Default, clap::Args)]
pub struct ServeArgs {
    /// Set the port to listen
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,
}

#[derive(Debug, clap::Args)]
pub struct ImportArgs {
    pub csv: PathBuf,
    /// Bind an import field to a column, e.g. `name=Nom`.
    /// An empty column skips the field.
    #[arg(long = "map", value_name = "FIELD=COLUMN", value_parser = parse_binding)]
    pub bindings: Vec<(ImportField, String)>,
}

fn parse_binding(arg: &str) -> Result<(ImportField, String), String> {
    let (field, column) = arg
        .split_once('=')
        .ok_or_else(|| format!("Invalid binding '{arg}': expected FIELD=COLUMN"))?;
    let field = field.parse::<ImportField>().map_err(|err| err.to_string())?;
    Ok((field, column.trim().to_string()))
}
