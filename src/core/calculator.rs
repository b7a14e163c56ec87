use crate::utils::error::{ExerciseError, Result};
use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// f64 最多有意義的小數位數
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const MENU: &'static str =
        "Choose operation (1-sum, 2-difference, 3-product, 4-quotient):";

    /// 選單編號 1-4 對應四種運算
    pub fn from_choice(choice: i64) -> Result<Self> {
        match choice {
            1 => Ok(Self::Add),
            2 => Ok(Self::Subtract),
            3 => Ok(Self::Multiply),
            4 => Ok(Self::Divide),
            _ => Err(ExerciseError::InvalidChoice { choice }),
        }
    }

    pub fn sign(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub fn operand_names(self) -> (&'static str, &'static str) {
        match self {
            Self::Add => ("summand", "summand"),
            Self::Subtract => ("minuend", "subtrahend"),
            Self::Multiply => ("factor", "factor"),
            Self::Divide => ("dividend", "divisor"),
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

/// Converts the raw precision answer into a decimal-place count.
pub fn parse_precision(precision: i64) -> Result<usize> {
    usize::try_from(precision).map_err(|_| ExerciseError::NegativePrecision { precision })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    operation: Operation,
    lhs: f64,
    rhs: f64,
    precision: usize,
}

impl Calculation {
    /// `precision` is clamped to [`MAX_PRECISION`].
    pub fn new(operation: Operation, lhs: f64, rhs: f64, precision: usize) -> Result<Self> {
        check_divisor(operation, rhs)?;
        Ok(Self {
            operation,
            lhs,
            rhs,
            precision: precision.min(MAX_PRECISION),
        })
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn result(&self) -> f64 {
        self.operation.apply(self.lhs, self.rhs)
    }

    pub fn render(&self) -> String {
        let p = self.precision;
        format!(
            "{:.p$} {} {:.p$} = {:.p$}",
            self.lhs,
            self.operation.sign(),
            self.rhs,
            self.result(),
            p = p
        )
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn check_divisor(operation: Operation, rhs: f64) -> Result<()> {
    if operation == Operation::Divide && rhs == 0.0 {
        return Err(ExerciseError::DivisionByZero);
    }
    Ok(())
}

/// 以空白切分的輸入讀取器，可跨行讀取
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self, expected: &str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ExerciseError::UnexpectedEof {
                    expected: expected.to_string(),
                });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn next<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| ExerciseError::InvalidInput {
            expected: expected.to_string(),
            token,
        })
    }
}

/// Prompt-driven calculator over any reader/writer pair.
pub struct CalculatorSession<R, W> {
    input: Tokens<R>,
    output: W,
    max_precision: usize,
}

impl<R: BufRead, W: Write> CalculatorSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Tokens::new(input),
            output,
            max_precision: MAX_PRECISION,
        }
    }

    pub fn with_max_precision(mut self, max_precision: usize) -> Self {
        self.max_precision = max_precision.min(MAX_PRECISION);
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs one prompt round. Validation errors are written to the output
    /// before being returned.
    pub fn run(&mut self) -> Result<Calculation> {
        match self.prompt() {
            Ok(calculation) => {
                writeln!(self.output, "{}", calculation)?;
                Ok(calculation)
            }
            Err(e) => {
                if !matches!(e, ExerciseError::IoError(_)) {
                    writeln!(self.output, "{}", e)?;
                }
                Err(e)
            }
        }
    }

    fn prompt(&mut self) -> Result<Calculation> {
        writeln!(self.output, "{}", Operation::MENU)?;
        let choice: i64 = self.input.next("operation")?;
        let operation = Operation::from_choice(choice)?;
        tracing::debug!("Selected operation {:?}", operation);

        let (first, second) = operation.operand_names();

        writeln!(self.output, "Enter {}: ", first)?;
        let lhs: f64 = self.input.next(first)?;

        writeln!(self.output, "Enter {}: ", second)?;
        let rhs: f64 = self.input.next(second)?;
        check_divisor(operation, rhs)?;

        writeln!(self.output, "Enter number of decimal places: ")?;
        let raw: i64 = self.input.next("number of decimal places")?;
        let mut precision = parse_precision(raw)?;
        if precision > self.max_precision {
            tracing::warn!("Precision {} capped to {}", precision, self.max_precision);
            precision = self.max_precision;
        }

        Calculation::new(operation, lhs, rhs, precision)
    }
}
