use crate::domain::{AdminAction, CosmicCommand, MatchVariant};
use clap::builder::{ArgAction, PossibleValuesParser};
use clap::error::ErrorKind;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::ModelName;
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    /// --variant: 照会の種類（未指定なら config.json、それもなければ trio）
    pub variant: Option<MatchVariant>,
    pub model: Option<ModelName>,
    /// admin サブコマンド
    pub admin: Option<AdminArgs>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminArgs {
    /// --code: 入場コード（未指定なら対話で尋ねる）
    pub code: Option<String>,
    pub action: AdminAction,
}

/// 解析結果: 通常の Config / 補完スクリプト生成 / clap が組み立てたヘルプ
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
    /// サブコマンドの -h / --help（表示して終了）
    HelpText(String),
}

/// ルートで自動の -h を止めているので、サブコマンドには明示的に付ける
fn help_arg() -> clap::Arg {
    clap::Arg::new("help")
        .short('h')
        .long("help")
        .help("Print help")
        .action(ArgAction::Help)
}

fn build_admin_command() -> clap::Command {
    clap::Command::new("admin")
        .about("Local analytics over stored sessions (access code required)")
        .disable_help_subcommand(true)
        .arg(help_arg())
        .arg(
            clap::Arg::new("code")
                .long("code")
                .value_name("code")
                .help("Access code (prompted when omitted)")
                .num_args(1),
        )
        .subcommand(
            clap::Command::new("overview")
                .about("Show totals and trait / region / gender / status frequencies")
                .arg(help_arg()),
        )
        .subcommand(
            clap::Command::new("records")
                .about("List stored session records, newest first")
                .arg(help_arg()),
        )
        .subcommand(
            clap::Command::new("export")
                .about("Export records as CSV")
                .arg(help_arg())
                .arg(
                    clap::Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("file")
                        .help("Output path (default: ./cosmic_data_YYYY-MM-DD.csv)")
                        .value_parser(value_parser!(PathBuf))
                        .num_args(1),
                ),
        )
        .subcommand(
            clap::Command::new("purge")
                .about("Delete all stored records")
                .arg(help_arg())
                .arg(
                    clap::Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Do not ask for confirmation")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("cosmic")
        .about("Find the famous people who share your birthday and your vibe")
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror log records to stderr (for troubleshooting)")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("variant")
                .long("variant")
                .value_name("variant")
                .help("How many matches to ask for: single (1), trio (3) or six (6)")
                .value_parser(PossibleValuesParser::new(["single", "trio", "six"]))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (default: gemini-3-flash-preview)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .subcommand(build_admin_command())
}

fn admin_args(matches: &clap::ArgMatches) -> AdminArgs {
    let code = matches.get_one::<String>("code").cloned();
    let action = match matches.subcommand() {
        Some(("records", _)) => AdminAction::Records,
        Some(("export", m)) => AdminAction::Export {
            output: m.get_one::<PathBuf>("output").cloned(),
        },
        Some(("purge", m)) => AdminAction::Purge {
            assume_yes: m.get_flag("yes"),
        },
        _ => AdminAction::Overview,
    };
    AdminArgs { code, action }
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let admin = matches
        .subcommand_matches("admin")
        .map(admin_args);
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        variant: matches
            .get_one::<String>("variant")
            .and_then(|s| MatchVariant::parse(s)),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
        admin,
    }
}

fn parse_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = match build_clap_command().try_get_matches_from(args) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            return Ok(ParseOutcome::HelpText(e.to_string()))
        }
        Err(e) => return Err(Error::invalid_argument(e.to_string())),
    };

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }
    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_from(std::env::args_os())
}

/// テスト用: 引数スライスから解析する
#[cfg(test)]
pub fn parse_args_from(args: &[&str]) -> Result<ParseOutcome, Error> {
    parse_from(args.iter().copied())
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "cosmic", &mut std::io::stdout());
}

/// Config を CosmicCommand に変換する
pub fn config_to_command(config: Config) -> CosmicCommand {
    if config.help {
        return CosmicCommand::Help;
    }
    if let Some(admin) = config.admin {
        return CosmicCommand::Admin {
            code: admin.code,
            action: admin.action,
        };
    }
    CosmicCommand::Play {
        variant: config.variant,
        model: config.model,
    }
}
