use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use profilepage::config::{self, AppConfig};
use profilepage::generate::{generate, generate_to_string, source_not_found, GenerateRequest};
use profilepage::logging::init_logging;

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let config = match &args.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default()?,
    };
    init_logging(&config.logging)?;
    let request = args.apply(&config);

    if args.stdout {
        return match generate_to_string(&request) {
            Ok(document) => {
                print!("{document}");
                Ok(())
            }
            Err(err) => exit_with(&request, err),
        };
    }

    match generate(&request) {
        Ok(outcome) => {
            println!("{} generated successfully.", outcome.output.display());
            Ok(())
        }
        Err(err) => exit_with(&request, err),
    }
}

fn exit_with(request: &GenerateRequest, err: anyhow::Error) -> Result<()> {
    if source_not_found(&err).is_some() {
        eprintln!("{} not found.", request.input.display());
        std::process::exit(1);
    }
    Err(err)
}

#[derive(Default)]
struct CliArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    script: Option<PathBuf>,
    lang: Option<String>,
    config: Option<PathBuf>,
    stdout: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut args = args.into_iter();
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--input" | "-i" => {
                    let value = args.next().context("Expected a path after --input")?;
                    parsed.input = Some(PathBuf::from(value));
                }
                "--output" | "-o" => {
                    let value = args.next().context("Expected a path after --output")?;
                    parsed.output = Some(PathBuf::from(value));
                }
                "--script" => {
                    let value = args.next().context("Expected a path after --script")?;
                    parsed.script = Some(PathBuf::from(value));
                }
                "--lang" => {
                    let value = args
                        .next()
                        .context("Expected a language code after --lang")?;
                    parsed.lang = Some(value);
                }
                "--config" => {
                    let value = args.next().context("Expected a path after --config")?;
                    parsed.config = Some(PathBuf::from(value));
                }
                "--stdout" => parsed.stdout = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(parsed)
    }

    fn apply(&self, config: &AppConfig) -> GenerateRequest {
        let mut request = GenerateRequest::from(config);
        if let Some(input) = &self.input {
            request.input = input.clone();
        }
        if let Some(output) = &self.output {
            request.output = output.clone();
        }
        if let Some(script) = &self.script {
            request.script = Some(script.clone());
        }
        if let Some(lang) = &self.lang {
            request.lang = lang.clone();
        }
        request
    }
}

fn print_usage() {
    println!("profilepage: render a profile JSON record into a standalone HTML page");
    println!("Usage: cargo run --bin generate_profile -- [options]");
    println!("Options:");
    println!("  -i, --input <path>    Profile JSON to read (default: profile.json)");
    println!("  -o, --output <path>   HTML file to write (default: profile.html)");
    println!("      --script <path>   Inline this script file into the page");
    println!("      --lang <code>     Value of the <html lang> attribute (default: en)");
    println!("      --config <path>   Config file (default: $PROFILEPAGE_CONFIG or OS config dir)");
    println!("      --stdout          Print the page instead of writing it");
}
