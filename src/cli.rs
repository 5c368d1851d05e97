use clap::Parser;

pub const USAGE: &str = "\
Usage: globview <glob-pattern>
Example: globview \"**/*.{jpg,jpeg,png,gif,webp}\"
Example: globview \"./photos/**/*.jpg\"";

/// Serve the images matching a glob pattern to a browser-based viewer.
#[derive(Debug, Parser)]
#[command(name = "globview", version, override_usage = "globview <GLOB_PATTERN>")]
pub struct Cli {
    /// Glob pattern resolved against the current directory. Quote it so the
    /// shell does not expand it first.
    #[arg(value_name = "GLOB_PATTERN")]
    pub pattern: String,
}

/// Parses `args`. Help and version requests exit through clap as usual;
/// anything else that fails (most commonly a missing pattern) prints the
/// usage text to stderr and exits with status 1.
pub fn parse_or_exit<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        },
    }
}
