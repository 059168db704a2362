use crate::demo::{run_demo, run_render, run_validate, DemoArgs, RenderArgs, ValidateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use franchise_contract::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Franchise Contract",
    about = "Validate, fill and export franchise agreements from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Render a contract record (JSON) and export it as a text artifact
    Render(RenderArgs),
    /// Walk through a scripted form session and export the result
    Demo(DemoArgs),
    /// Check a CPF and print its masked form
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Render(args) => run_render(args),
        Command::Demo(args) => run_demo(args).await,
        Command::Validate(args) => run_validate(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_arguments() {
        let cli = Cli::try_parse_from([
            "franchise-contract",
            "render",
            "--input",
            "record.json",
            "--output-dir",
            "out",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Render(args)) => {
                assert_eq!(args.input.to_str(), Some("record.json"));
                assert_eq!(args.output_dir.as_deref().and_then(|p| p.to_str()), Some("out"));
            }
            other => panic!("expected render command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["franchise-contract"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn validate_takes_positional_cpf() {
        let cli = Cli::try_parse_from(["franchise-contract", "validate", "529.982.247-25"])
            .expect("arguments parse");
        match cli.command {
            Some(Command::Validate(args)) => assert_eq!(args.national_id, "529.982.247-25"),
            other => panic!("expected validate command, got {other:?}"),
        }
    }
}
