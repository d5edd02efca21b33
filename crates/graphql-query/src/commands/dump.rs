use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::read_source;
use crate::output_utils;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum DumpFormat {
    /// Rust `Debug` output of the AST.
    Debug,
    /// Pretty-printed JSON.
    Json,
    /// Canonical GraphQL source re-rendered from the AST.
    Graphql,
}

#[derive(Debug, clap::Args)]
pub(crate) struct DumpCmd {
    #[arg(
        default_value = "debug",
        help="Output format for the parsed AST.",
        long,
        value_enum,
    )]
    format: DumpFormat,

    #[arg(
        help="Path to the GraphQL file to parse.",
        name="FILE",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for DumpCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match read_source(&self.file_path) {
            Ok(source) => source,
            Err(result) => return result,
        };

        let doc = match graphql_query_parser::parse_with_file_path(&source, &self.file_path) {
            Ok(doc) => doc,
            Err(e) => return CommandResult::stderr(format_args!(
                "{}{} Failed to parse {:#?}.",
                e.format_detailed(Some(&source)),
                output_utils::RED_X,
                self.file_path,
            )),
        };
        log::debug!(
            "Parsed {} definitions from {:#?}.",
            doc.definitions.len(),
            self.file_path,
        );

        match self.format {
            DumpFormat::Debug => CommandResult::stdout(format_args!("{doc:#?}")),
            DumpFormat::Graphql => CommandResult::stdout(format_args!("{}", doc.to_source())),
            DumpFormat::Json => match serde_json::to_string_pretty(&doc) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Failed to serialize AST: {e}",
                    output_utils::RED_X,
                )),
            },
        }
    }
}
