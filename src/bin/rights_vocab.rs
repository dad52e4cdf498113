//! Minimal query tool for the embedded rights statement vocabulary.
//!
//! Prints the full catalog keyed by code, a single entry selected by a
//! positional CODE argument, or the bare code list. Designed for scripts that
//! need label/URI/badge data without linking against the library.

use anyhow::{Result, bail};
use rights_vocab::{StatementFamily, StatementIndex};
use std::collections::BTreeMap;
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let index = StatementIndex::builtin()?;

    if args.codes_only {
        for (code, entry) in index.all() {
            if args.matches_family(entry.family()) {
                println!("{code}");
            }
        }
        return Ok(());
    }

    if let Some(code) = &args.code {
        let entry = index.lookup(code)?;
        println!("{}", args.render(entry)?);
        return Ok(());
    }

    let selected: BTreeMap<_, _> = index
        .all()
        .iter()
        .filter(|(_, entry)| args.matches_family(entry.family()))
        .collect();
    println!("{}", args.render(&selected)?);
    Ok(())
}

#[derive(Debug, Default)]
struct CliArgs {
    code: Option<String>,
    family: Option<StatementFamily>,
    codes_only: bool,
    pretty: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = CliArgs::default();
        let mut rest = env::args().skip(1);
        while let Some(arg) = rest.next() {
            match arg.as_str() {
                "--codes" => args.codes_only = true,
                "--pretty" => args.pretty = true,
                "--family" => {
                    let Some(value) = rest.next() else {
                        bail!("--family requires a value (InC, NoC, or Other)");
                    };
                    let Some(family) = StatementFamily::parse(&value) else {
                        bail!("unknown family '{value}' (expected InC, NoC, or Other)");
                    };
                    args.family = Some(family);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other if other.starts_with('-') => {
                    bail!("unrecognized option '{other}' (try --help)");
                }
                code => {
                    if args.code.is_some() {
                        bail!("at most one CODE argument is accepted");
                    }
                    args.code = Some(code.to_string());
                }
            }
        }
        if args.code.is_some() && args.family.is_some() {
            bail!("--family applies to listings, not to a single CODE");
        }
        Ok(args)
    }

    fn matches_family(&self, family: Option<StatementFamily>) -> bool {
        match self.family {
            Some(wanted) => family == Some(wanted),
            None => true,
        }
    }

    fn render<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}

fn print_usage() {
    println!(
        "usage: rights-vocab [CODE] [--codes] [--family InC|NoC|Other] [--pretty]\n\
         \n\
         With no arguments, prints every rights statement keyed by code.\n\
         CODE prints the single matching entry and fails on unknown codes."
    );
}
