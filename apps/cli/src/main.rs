use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    md_flashcards::run()
}
