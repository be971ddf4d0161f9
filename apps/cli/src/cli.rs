//! Command-line arguments.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use md_flashcards_core::{ConvertRequest, DEFAULT_SEPARATOR};

/// Markdown to Flashcards searches the given file for flashcards and converts
/// them into a file that can be imported into Anki.
///
/// Flashcard syntax:
///
///   !--! front ++ back ++ other !--!
#[derive(Parser, Debug)]
#[command(name = "md-flashcards", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner after the command finishes
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create flashcards from <INPUTFILE> and save them to <OUTPUTFILE>
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Markdown file the flashcards are extracted from
    pub inputfile: PathBuf,

    /// File the flashcards are saved to
    pub outputfile: PathBuf,

    /// Field delimiter used in the output file
    #[arg(
        long,
        visible_alias = "separator",
        env = "MD_FLASHCARDS_SEPARATOR",
        default_value = DEFAULT_SEPARATOR,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub seperator: String,

    /// Print every step and every written card
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub verbose: bool,

    /// Overwrite an existing output file without asking
    #[arg(long)]
    pub force: bool,
}

impl From<CreateArgs> for ConvertRequest {
    fn from(args: CreateArgs) -> Self {
        ConvertRequest::new(args.inputfile, args.outputfile)
            .with_delimiter(args.seperator)
            .with_verbose(args.verbose)
            .with_overwrite(args.force)
    }
}
