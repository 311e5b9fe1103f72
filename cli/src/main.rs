// Copyright 2018-2021 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

mod actions;
mod error;

use std::env;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use flexi_logger::{DeferredNow, LogSpecBuilder, Logger};
use log::Record;

use crate::error::CliError;

use actions::{check_digit, gcp};

const APP_NAME: &str = "gtin";
const VERSION: &str = env!("CARGO_PKG_VERSION");

const GTIN_GCP_PREFIX_LIST: &str = "GTIN_GCP_PREFIX_LIST";

const AFTER_HELP_PREFIX_LIST: &str = r"ENV:
    GTIN_GCP_PREFIX_LIST   Specifies a default value for --prefix-list";

// log format for cli that will only show the log message
pub fn log_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(w, "{}", record.args(),)
}

fn gtin_arg(help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name("gtin")
        .value_name("GTIN")
        .takes_value(true)
        .required(true)
        .help(help)
}

fn app() -> App<'static, 'static> {
    App::new(APP_NAME)
        .version(VERSION)
        .author("Cargill Incorporated")
        .about("Command line for parsing and validating Global Trade Item Numbers")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .global(true)
                .help("Log verbosely"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .global(true)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
        .subcommand(
            SubCommand::with_name("calculate-check-digit")
                .aliases(&["ccd", "calculate_check_digit"])
                .about("Calculate the check digit of a GTIN")
                .arg(gtin_arg("A GTIN without the check digit")),
        )
        .subcommand(
            SubCommand::with_name("append-check-digit")
                .aliases(&["acd", "append_check_digit"])
                .about("Append the check digit to a GTIN")
                .arg(gtin_arg("A GTIN without the check digit"))
                .arg(
                    Arg::with_name("length")
                        .short("l")
                        .long("length")
                        .takes_value(true)
                        .help("The length of GTIN to return, including the check digit"),
                ),
        )
        .subcommand(
            SubCommand::with_name("validate-check-digit")
                .aliases(&["vcd", "validate_check_digit"])
                .about(
                    "Validate the check digit of a GTIN; exits with a non-zero status if the \
                     check digit is invalid",
                )
                .arg(gtin_arg("A GTIN with the check digit")),
        )
        .subcommand(
            SubCommand::with_name("has-valid-check-digit")
                .aliases(&["hvcd", "has_valid_check_digit"])
                .about("Print \"YES\" if the check digit of a GTIN is valid, \"NO\" otherwise")
                .arg(gtin_arg("A GTIN with the check digit")),
        )
        .subcommand(
            SubCommand::with_name("get-gcp")
                .aliases(&["gcp", "get_gcp"])
                .about("Print the GS1 Company Prefix of a GTIN")
                .arg(gtin_arg("A GTIN with the check digit"))
                .arg(
                    Arg::with_name("prefix_list")
                        .long("prefix-list")
                        .takes_value(true)
                        .value_name("PATH")
                        .help("Path to a GS1 GCP Prefix Format List XML file"),
                )
                .after_help(AFTER_HELP_PREFIX_LIST),
        )
}

fn gtin_value<'a>(matches: &'a ArgMatches) -> Result<&'a str, CliError> {
    matches
        .value_of("gtin")
        .ok_or_else(|| CliError::UserError("a GTIN must be provided".to_string()))
}

fn run() -> Result<(), CliError> {
    let matches = app().get_matches();

    let log_level = if matches.is_present("quiet") {
        log::LevelFilter::Error
    } else {
        match matches.occurrences_of("verbose") {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    let mut log_spec_builder = LogSpecBuilder::new();
    log_spec_builder.default(log_level);

    Logger::with(log_spec_builder.build())
        .format(log_format)
        .start()?;

    match matches.subcommand() {
        ("calculate-check-digit", Some(m)) => check_digit::do_calculate_check_digit(gtin_value(m)?),
        ("append-check-digit", Some(m)) => {
            let length = if m.is_present("length") {
                Some(value_t!(m, "length", usize).map_err(|err| {
                    CliError::UserError(format!("--length must be a positive integer: {}", err))
                })?)
            } else {
                None
            };
            check_digit::do_append_check_digit(gtin_value(m)?, length)
        }
        ("validate-check-digit", Some(m)) => check_digit::do_validate_check_digit(gtin_value(m)?),
        ("has-valid-check-digit", Some(m)) => {
            check_digit::do_has_valid_check_digit(gtin_value(m)?)
        }
        ("get-gcp", Some(m)) => {
            let prefix_list = m
                .value_of("prefix_list")
                .map(String::from)
                .or_else(|| env::var(GTIN_GCP_PREFIX_LIST).ok());
            gcp::do_get_gcp(gtin_value(m)?, prefix_list.as_deref())
        }
        _ => Err(CliError::UserError("Subcommand not recognized".into())),
    }
}

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
