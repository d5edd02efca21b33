use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::read_source;
use crate::output_utils;
use graphql_query_parser::Lexer;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Path to the GraphQL file to tokenize.",
        name="FILE",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match read_source(&self.file_path) {
            Ok(source) => source,
            Err(result) => return result,
        };

        let mut lines: Vec<String> = vec![];
        for token in Lexer::with_file_path(&source, &self.file_path) {
            match token {
                Ok(token) => {
                    let start = &token.span.start_inclusive;
                    lines.push(format!(
                        "{:>4}:{:<4} {token}",
                        start.line() + 1,
                        start.column() + 1,
                    ));
                },
                Err(e) => return CommandResult::stderr(format_args!(
                    "{}\n{}{} Failed to tokenize {:#?}.",
                    lines.join("\n"),
                    e.format_detailed(Some(&source)),
                    output_utils::RED_X,
                    self.file_path,
                )),
            }
        }
        CommandResult::stdout(format_args!("{}", lines.join("\n")))
    }
}
