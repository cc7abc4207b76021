//! Command-line interface implementation for loki.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

const EXAMPLES: &str = r#"Examples:
  loki -a "John Doe" -d "A sample script" -o script.sh
      Generates a header by "John Doe" described as "A sample script" and saves it to "script.sh".

  loki -a "Jane Smith" -d "Python script" -o script -l python -f standard -t
      Generates a header with the current date and saves it to "script.py".

  loki -a "Anonymous" -d "Bash script" -o script -l bash -p
      Generates a header in the default font and also prints it to the console.

  loki -a "Anonymous" -d "Bash script" -o script.sh -f small
      Uses the "small" font, found as small.flf under /usr/share/figlet
      or /usr/local/share/figlet. A path to a .flf file also works.

  loki -i
      Fills in the header fields interactively."#;

/// Command-line arguments structure for loki.
#[derive(Parser, Debug)]
#[command(
    name = "loki",
    version,
    about = "Loki... A Custom Script Header Generator",
    long_about = "Loki... A Custom Script Header Generator\n\
        Creates script headers with FIGlet ASCII art of the script name, author and date.",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Specify the author name
    #[arg(short, long, required_unless_present_any = ["interactive", "list_languages"])]
    pub author: Option<String>,

    /// Specify the output file name, with or without extension
    #[arg(short, long, required_unless_present_any = ["interactive", "list_languages"])]
    pub output: Option<String>,

    /// Specify the header description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Specify the script language
    #[arg(short, long, default_value = "")]
    pub language: String,

    /// Specify the FIGlet font
    #[arg(short, long, default_value = "")]
    pub font: String,

    /// Add the current date to the header
    #[arg(short, long)]
    pub time: bool,

    /// Print the header
    #[arg(short, long)]
    pub print: bool,

    /// Fill in the header fields interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// List the supported languages and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Prints the help text.
pub fn print_help() {
    if let Err(e) = Args::command().help_template(HELP_TEMPLATE).print_help() {
        log::error!("Cannot print help: {}", e);
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
