// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::{eyre::WrapErr, Result};
use log::LevelFilter;
use qm_min::{logic_function::LogicFunction, pattern::VariableNames};
use std::io::{self, BufRead, Write};

/// Minimize a Boolean function with the Quine-McCluskey method.
///
/// Without a subcommand, a truth table is read interactively from standard input.
#[derive(Debug, Parser)]
#[clap(name = "qm-min", version)]
pub struct QmApp {
    /// Also print the prime implicants found before cover selection.
    #[clap(long, global = true)]
    primes: bool,

    /// How to print the minimized function.
    #[clap(long, value_enum, default_value_t = OutputFormat::Algebraic, global = true)]
    format: OutputFormat,

    /// Log more details (repeat for more).
    #[clap(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Option<QmCommand>,
}

#[derive(Debug, Subcommand)]
pub enum QmCommand {
    /// Minimize a function given by the indices where it is true.
    Minterms {
        /// Number of input variables.
        #[clap(long, short = 'n')]
        vars: usize,

        /// Minterm indices, each below 2^vars.
        indices: Vec<u64>,
    },
    /// Minimize a function given as a truth table such as 0110.
    TruthTable {
        /// One 0 or 1 per input, in index order; the length must be a power of two.
        table: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sum of products, e.g. ( A'B ) ∨ ( C ).
    Algebraic,
    /// One 01- pattern per line.
    Matrix,
}

const PROMPT: &str = "Enter a truth table (0s and 1s, length a power of two): ";

impl QmApp {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn exec(self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.exec_with(stdin.lock(), &mut stdout.lock())
    }

    /// Runs the command, prompting on `input` if no subcommand was given.
    pub fn exec_with(self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        let function = match self.command {
            Some(command) => command.load()?,
            None => prompt_truth_table(input, out)?,
        };

        // Check the naming budget before doing any work.
        let names = match self.format {
            OutputFormat::Algebraic => Some(VariableNames::letters(function.num_vars())?),
            OutputFormat::Matrix => None,
        };

        if self.primes {
            let primes = function
                .prime_implicants()
                .wrap_err("failed to generate prime implicants")?;
            writeln!(out, "Prime implicants:")?;
            for prime in primes {
                writeln!(out, "  {}", prime)?;
            }
        }

        let cover = function.minimize().wrap_err("minimization failed")?;
        writeln!(out, "Minimized function:")?;
        match &names {
            Some(names) => writeln!(out, "{}", cover.algebraic_display(names)?)?,
            None => write!(out, "{}", cover.matrix_display())?,
        }
        Ok(())
    }
}

impl QmCommand {
    pub fn load(self) -> Result<LogicFunction> {
        match self {
            Self::Minterms { vars, indices } => LogicFunction::from_minterms(vars, indices)
                .wrap_err("invalid minterm list"),
            Self::TruthTable { table } => {
                LogicFunction::from_truth_table(table.trim()).wrap_err("invalid truth table")
            }
        }
    }
}

fn prompt_truth_table(mut input: impl BufRead, out: &mut impl Write) -> Result<LogicFunction> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .wrap_err("failed to read truth table")?;
    LogicFunction::from_truth_table(line.trim()).wrap_err("invalid truth table")
}
