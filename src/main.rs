#[cfg(feature = "cli")]
mod cli {
    use clap::{Parser, Subcommand};
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process::ExitCode;

    use jsonschema2avro::converter::{convert_jsons_to_avro, AvroConverter};
    use jsonschema2avro::error::{ConvertFileError, RegistryError};
    use jsonschema2avro::registry::{
        JsonFileStore, SchemaRegistry, SchemaRequest, ValidationRequest,
    };

    #[derive(Parser)]
    #[command(
        name = "jsonschema2avro",
        about = "Store JSON Schemas, validate instances, and convert JSON Schema to Avro Schema"
    )]
    pub struct Cli {
        /// Schema store file
        #[arg(long, global = true, env = "JSONSCHEMA2AVRO_STORE", default_value = "schemas.json")]
        store: PathBuf,

        /// Namespace for generated Avro records
        #[arg(long, global = true, env = "JSONSCHEMA2AVRO_NAMESPACE")]
        namespace: Option<String>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand)]
    enum Command {
        /// Convert a JSON Schema file or URL to an Avro schema
        Convert {
            /// Path or URL to the JSON Schema input
            #[arg(value_name = "JSONSCHEMA")]
            input: String,

            /// Path to the Avro schema output file (stdout if omitted)
            #[arg(value_name = "AVRO")]
            output: Option<PathBuf>,

            /// Root record name, defaults to the input file stem
            #[arg(long)]
            name: Option<String>,
        },
        /// Store a JSON Schema under a type and version
        Register {
            #[arg(long = "type")]
            schema_type: String,
            #[arg(long)]
            version: String,
            /// JSON Schema file
            file: PathBuf,
        },
        /// Validate a JSON instance against a stored schema
        Validate {
            #[arg(long = "type")]
            schema_type: String,
            #[arg(long)]
            version: String,
            /// JSON instance file
            data: PathBuf,
        },
        /// Print the Avro schema derived from a stored schema
        Avro {
            #[arg(long = "type")]
            schema_type: String,
            #[arg(long)]
            version: String,
        },
        /// List stored schemas
        List,
    }

    #[derive(Debug, thiserror::Error)]
    pub enum CliError {
        #[error(transparent)]
        Registry(#[from] RegistryError),
        #[error(transparent)]
        Convert(#[from] ConvertFileError),
        #[error("Failed to read {path:?}: {source}")]
        Read {
            path: PathBuf,
            source: std::io::Error,
        },
        #[error("Failed to render output: {0}")]
        Render(#[from] serde_json::Error),
    }

    fn read(path: &Path) -> Result<String, CliError> {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn open_registry(cli: &Cli) -> Result<SchemaRegistry<JsonFileStore>, CliError> {
        let store = JsonFileStore::open(&cli.store)?;
        let converter = cli
            .namespace
            .as_deref()
            .map(AvroConverter::with_namespace)
            .unwrap_or_default();
        Ok(SchemaRegistry::with_converter(store, converter))
    }

    pub fn run(cli: Cli) -> Result<ExitCode, CliError> {
        match &cli.command {
            Command::Convert {
                input,
                output,
                name,
            } => {
                let avro = convert_jsons_to_avro(
                    input,
                    output.as_deref(),
                    name.as_deref(),
                    cli.namespace.as_deref(),
                )?;
                if output.is_none() {
                    println!("{avro}");
                }
            }
            Command::Register {
                schema_type,
                version,
                file,
            } => {
                let mut registry = open_registry(&cli)?;
                let entry = registry.save_schema(SchemaRequest {
                    schema_type: schema_type.clone(),
                    version: version.clone(),
                    schema_content: read(file)?,
                })?;
                println!("{}", serde_json::to_string_pretty(&entry)?);
            }
            Command::Validate {
                schema_type,
                version,
                data,
            } => {
                let registry = open_registry(&cli)?;
                let report = registry.validate_json(&ValidationRequest {
                    schema_type: schema_type.clone(),
                    version: version.clone(),
                    json_data: read(data)?,
                })?;
                println!("{}", serde_json::to_string_pretty(&report)?);
                if !report.valid {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Command::Avro {
                schema_type,
                version,
            } => {
                let registry = open_registry(&cli)?;
                println!("{}", registry.avro_schema(schema_type, version)?);
            }
            Command::List => {
                let registry = open_registry(&cli)?;
                for entry in registry.list() {
                    println!(
                        "{}\t{}\t{}\t{}",
                        entry.id, entry.schema_type, entry.version, entry.fingerprint
                    );
                }
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(feature = "cli")]
fn main() -> std::process::ExitCode {
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary is only available with the `cli` feature enabled.");
    std::process::exit(1);
}
