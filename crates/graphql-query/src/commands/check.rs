use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::read_source;
use crate::output_utils;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        // Walk and read failures, kept apart from syntax errors.
        let mut io_errors: Vec<String> = vec![];
        let mut parse_errors: Vec<String> = vec![];

        // Extensions are compared without their leading `.`, as
        // `Path::extension()` returns them.
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        let matches_ext = path
                            .extension()
                            .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
                            .unwrap_or(false);
                        if matches_ext {
                            file_paths.push(path.to_path_buf());
                        } else {
                            num_skipped_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        io_errors.push(e.to_string());
                    },
                }
            }
        }

        // A single explicit file argument is checked even if its extension
        // doesn't match `--graphql-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = 0;
            file_paths.push(first_arg_path.clone());
        }

        log::debug!(
            "Found {} GraphQL files to be checked.",
            file_paths.len(),
        );

        let mut num_operations = 0;
        let mut num_fragments = 0;
        for path in &file_paths {
            let source = match read_source(path) {
                Ok(source) => source,
                Err(result) => {
                    io_errors.extend(result.stderr);
                    continue;
                },
            };
            match graphql_query_parser::parse_with_file_path(&source, path) {
                Ok(doc) => {
                    log::debug!("Parsed {path:#?}.");
                    num_operations += doc.operations().count();
                    num_fragments += doc.fragments().count();
                },
                Err(e) => parse_errors.push(e.format_detailed(Some(&source))),
            }
        }

        if !io_errors.is_empty() || !parse_errors.is_empty() {
            let details = io_errors.iter().chain(&parse_errors).cloned().collect::<Vec<_>>();
            return CommandResult::stderr(format_args!(
                "{}\n{} {}",
                details.join("\n"),
                output_utils::RED_X,
                failure_summary(parse_errors.len(), io_errors.len(), file_paths.len()),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Parsed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Found {} operations.\n",
                "  * Found {} fragments.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
            num_operations,
            num_fragments,
        ))
    }
}

/// Summarizes a failed check. A parse stops at its first error, so each
/// parse failure is exactly one failing file.
pub(crate) fn failure_summary(
    num_parse_failures: usize,
    num_io_errors: usize,
    num_files: usize,
) -> String {
    let mut parts = vec![];
    if num_parse_failures > 0 {
        parts.push(format!(
            "{num_parse_failures} of {num_files} GraphQL files failed to parse"
        ));
    }
    if num_io_errors > 0 {
        parts.push(format!("{num_io_errors} paths could not be read"));
    }
    format!("{}.", parts.join("; "))
}
