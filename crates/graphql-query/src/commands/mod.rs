mod check;
mod dump;
mod tokens;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use dump::DumpCmd;
use tokens::TokensCmd;


#[derive(Debug, clap::Parser)]
#[command(name = "graphql-query")]
pub(crate) enum CommandEnum {
    /// Parse every GraphQL file at or under the given paths and report
    /// syntax errors.
    Check(Box<CheckCmd>),

    /// Parse a single GraphQL file and print its AST.
    Dump(Box<DumpCmd>),

    /// Print the token stream of a single GraphQL file.
    Tokens(Box<TokensCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Dump(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
        }
    }
}

/// Reads `path` to a string, mapping I/O failures to a failed command
/// result.
pub(crate) fn read_source(path: &std::path::Path) -> Result<String, CommandResult> {
    std::fs::read_to_string(path).map_err(|e| {
        CommandResult::stderr(format_args!(
            "{} Failed to read {path:#?}: {e}",
            crate::output_utils::RED_X,
        ))
    })
}
