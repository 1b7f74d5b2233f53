mod config;
mod trace;

use clap::Parser;
use env_logger::{Builder, Env};

use flags::FlagValue;
use io::{format_flag, format_value, parse_index, parse_value};

use crate::{
    config::{Command, Config, Operand},
    trace::run_trace,
};

fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = Config::parse();

    for line in run(&config.command)? {
        println!("{line}");
    }

    Ok(())
}

fn operands(operand: &Operand) -> io::Result<(i64, FlagValue)> {
    let index = parse_index(&operand.index)?;
    let value = parse_value(&operand.value)?;
    Ok((index, value))
}

fn run(command: &Command) -> Result<Vec<String>, anyhow::Error> {
    let line = match command {
        Command::Trace => return Ok(run_trace()),
        Command::Set(operand) => {
            let (index, value) = operands(operand)?;
            log::trace!("set {index} on {}", format_value(&value));
            format_value(&value.set_index(index))
        }
        Command::Get(operand) => {
            let (index, value) = operands(operand)?;
            log::trace!("get {index} on {}", format_value(&value));
            format_flag(value.get_index(index))
        }
        Command::Unset(operand) => {
            let (index, value) = operands(operand)?;
            log::trace!("unset {index} on {}", format_value(&value));
            format_value(&value.unset_index(index))
        }
    };

    Ok(vec![line])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::timeout;

    fn operand(index: &str, value: &str) -> Operand {
        Operand {
            index: index.to_string(),
            value: value.to_string(),
        }
    }

    fn parse(args: &[&str]) -> Command {
        Config::try_parse_from(args).unwrap().command
    }

    #[test]
    fn parses_subcommands() {
        assert_eq!(parse(&["bitmath", "trace"]), Command::Trace);
        assert_eq!(
            parse(&["bitmath", "set", "--index", "5", "--value", "0x10"]),
            Command::Set(operand("5", "0x10"))
        );
        assert_eq!(
            parse(&["bitmath", "get", "--index", "-251", "--value", "48"]),
            Command::Get(operand("-251", "48"))
        );
    }

    #[test]
    fn value_defaults_to_zero() {
        assert_eq!(
            parse(&["bitmath", "unset", "--index", "1"]),
            Command::Unset(operand("1", "0x00"))
        );
    }

    #[test]
    #[timeout(1000)]
    fn applies_single_operations() {
        let set = run(&Command::Set(operand("4", "0x20"))).unwrap();
        assert_eq!(set, ["0x30"]);

        let get = run(&Command::Get(operand("261", "0x30"))).unwrap();
        assert_eq!(get, ["true"]);

        let noop = run(&Command::Unset(operand("1", "0x30"))).unwrap();
        assert_eq!(noop, ["0x30"]);

        let unset = run(&Command::Unset(operand("-251", "0x30"))).unwrap();
        assert_eq!(unset, ["0x10"]);
    }

    #[test]
    fn runs_trace_command() {
        let lines = run(&Command::Trace).unwrap();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "0x20");
        assert_eq!(lines[9], "false");
    }

    #[test]
    fn reports_bad_operands() {
        let err = run(&Command::Set(operand("five", "0x00"))).unwrap_err();
        assert!(err.to_string().contains("malformed input"));

        let wide = format!("0x1{}", "0".repeat(64));
        let err = run(&Command::Get(operand("0", &wide))).unwrap_err();
        assert!(err.to_string().contains("does not fit in 256 bits"));
    }
}
