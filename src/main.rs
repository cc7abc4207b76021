//! Loki's main application entry point.
//! Parses the command line and runs either the one-shot or the interactive
//! front end over the shared generation pipeline.

use loki::{
    banner::FigletRenderer,
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    form::run_form,
    generator::{generate, Generated, Request},
    language::Registry,
    logger::init_logger,
    prompt::{ConsoleTerminal, DialoguerPrompter},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Reports the outcome of a pipeline run on the console.
///
/// Write failures are reported here and never change the exit status.
fn report(generated: &Generated, print: bool) {
    match &generated.write {
        Ok(written) => {
            println!("Content written to '{}' successfully.", written.path.display());
            if written.executable {
                println!("File is now executable.");
            } else {
                println!("Error making the file executable.");
            }
        }
        Err(e @ Error::AlreadyExists { .. }) => println!("{}", e),
        Err(e) => println!("Error writing '{}': {}", generated.path.display(), e),
    }
    if print {
        print!("{}", generated.block);
    }
}

fn list_languages(registry: &Registry) {
    for entry in registry.entries() {
        let aliases = if entry.aliases.is_empty() {
            "-".to_string()
        } else {
            entry.aliases.join(",")
        };
        let shebang = if entry.shebang.is_empty() { "-" } else { entry.shebang.as_str() };
        let comment = if entry.comment.is_empty() { "-" } else { entry.comment.as_str() };
        println!(
            "{:<12} {:<10} .{:<6} {:<4} {}",
            entry.name, aliases, entry.extension, comment, shebang
        );
    }
}

/// Main application logic execution.
fn run(args: Args) -> Result<()> {
    let registry = Registry::builtin();
    let renderer = FigletRenderer::new();

    if args.list_languages {
        list_languages(&registry);
        return Ok(());
    }

    if args.interactive {
        let mut terminal = ConsoleTerminal::new();
        let prompter = DialoguerPrompter::new();
        if let Some(submission) = run_form(&registry, &renderer, &mut terminal, &prompter)? {
            report(&submission.generated, submission.print);
        }
        return Ok(());
    }

    let mut request = Request {
        output: args.output.unwrap_or_default(),
        author: args.author.unwrap_or_default(),
        description: args.description,
        language: args.language,
        font: args.font,
        date: None,
    };
    if args.time {
        request = request.with_today();
    }

    let generated = generate(&registry, &renderer, &request)?;
    report(&generated, args.print);
    Ok(())
}
