mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use cli::{config_to_command, parse_args, print_completion, render, Config, InteractiveSession, ParseOutcome};
use domain::{AdminAction, CosmicCommand};
use adapter::{AssumeYes, ConsoleConfirm};
use ports::inbound::UseCaseRunner;
use ports::outbound::Confirm;
use wiring::{wire_cosmic, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn say_all(&self, lines: Vec<String>) {
        for line in lines {
            self.app.console.say(&line);
        }
    }

    fn run_admin(&self, code: Option<String>, action: AdminAction) -> Result<i32, Error> {
        let code = match code {
            Some(c) => c,
            None => self.app.console.ask("Access code: ")?.unwrap_or_default(),
        };
        let admin = &self.app.admin_use_case;
        let session = admin.authenticate(&code)?;
        match action {
            AdminAction::Overview => self.say_all(render::overview(&admin.overview(&session))),
            AdminAction::Records => self.say_all(render::records(&admin.records(&session))),
            AdminAction::Export { output } => {
                let path = admin.export_csv(&session, output)?;
                self.app.console.say(&format!("Exported to {}", path.display()));
            }
            AdminAction::Purge { assume_yes } => {
                let confirm: Box<dyn Confirm> = if assume_yes {
                    Box::new(AssumeYes)
                } else {
                    Box::new(ConsoleConfirm::new(self.app.console.clone()))
                };
                if admin.purge(&session, confirm.as_ref())? {
                    self.app.console.say("All records deleted.");
                } else {
                    self.app.console.say("Purge cancelled.");
                }
            }
        }
        Ok(0)
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name.as_str()),
        );

        let result = match cmd {
            CosmicCommand::Help => {
                print_help();
                Ok(0)
            }
            CosmicCommand::Play { variant, .. } => {
                let variant = variant.unwrap_or(self.app.default_variant);
                InteractiveSession::new(self.app.console.as_ref(), &self.app.flow_use_case)
                    .run(variant)
            }
            CosmicCommand::Admin { code, action } => self.run_admin(code, action),
        };

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name.as_str())
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn cmd_name_for_log(cmd: &CosmicCommand) -> String {
    match cmd {
        CosmicCommand::Help => "help".to_string(),
        CosmicCommand::Play { .. } => "play".to_string(),
        CosmicCommand::Admin { action, .. } => format!("admin {}", action.name()),
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("cosmic: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
        ParseOutcome::HelpText(text) => {
            println!("{}", text);
            return Ok(0);
        }
    };
    let model = match &config.admin {
        None => config.model.clone(),
        Some(_) => None,
    };
    let app = wire_cosmic(config.verbose, model)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: cosmic [options] | cosmic admin [--code <code>] [overview|records|export|purge]");
}

fn print_help() {
    println!("Usage: cosmic [options]");
    println!("       cosmic admin [--code <code>] [overview|records|export [-o <file>]|purge [--yes]]");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -v, --verbose                 Mirror log records to stderr");
    println!("  --variant <single|trio|six>   How many matches to ask for (default: trio, or config.json)");
    println!("  -m, --model <model>           Specify model name (default: gemini-3-flash-preview)");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Admin:");
    println!("  overview                      Totals and trait / region / gender / status frequencies");
    println!("  records                       Stored sessions, newest first");
    println!("  export [-o <file>]            Write records as CSV (default: ./cosmic_data_YYYY-MM-DD.csv)");
    println!("  purge [--yes]                 Delete all records (asks for confirmation)");
    println!();
    println!("Environment:");
    println!("  GEMINI_API_KEY  API key for Gemini (API_KEY is also accepted).");
    println!("  COSMIC_HOME     Home directory. Config: $COSMIC_HOME/config.json; records: $COSMIC_HOME/data/;");
    println!("                 logs: $COSMIC_HOME/logs/cosmic.jsonl.");
    println!("                 If unset, $XDG_CONFIG_HOME/cosmic-mate (e.g. ~/.config/cosmic-mate) is used.");
}
