use std::{
    io::{self, BufRead, Lines, StdinLock, Write},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use fractic_server_error::ServerError;
use log::warn;
use remito_scanner::{
    entities::ExportFormat, errors::ReadError, messages::StatusMessage, util::RemitoScannerUtil,
};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Xlsx,
    Csv,
}

impl From<Fmt> for ExportFormat {
    fn from(fmt: Fmt) -> Self {
        match fmt {
            Fmt::Xlsx => ExportFormat::Xlsx,
            Fmt::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "remito-scanner", version, about = "Lectura de códigos de barras de remitos")]
struct Cli {
    /// Directorio donde se guardan los archivos exportados
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Formato de exportación
    #[arg(long = "format", value_enum, default_value = "xlsx")]
    format: Fmt,

    /// No pedir confirmación al limpiar o salir
    #[arg(short = 'y', long = "yes")]
    yes: bool,
}

const HELP: &str = "\
Escanee un código de barras y presione Enter para agregarlo.
Comandos:
  :list      mostrar la tabla
  :del N     eliminar el registro N
  :export    exportar los registros
  :clear     eliminar todos los registros
  :quit      salir
  :help      mostrar esta ayuda";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Scan(&'a str),
    List,
    Delete(Option<usize>),
    Export,
    Clear,
    Quit,
    Help,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let Some(command) = line.strip_prefix(':') else {
        return Some(Command::Scan(line));
    };
    let mut words = command.split_whitespace();
    Some(match words.next().unwrap_or_default() {
        "list" | "l" => Command::List,
        "del" | "d" => Command::Delete(words.next().and_then(|n| n.parse().ok())),
        "export" | "e" => Command::Export,
        "clear" | "c" => Command::Clear,
        "quit" | "q" => Command::Quit,
        "help" | "h" | "?" => Command::Help,
        _ => Command::Unknown(line),
    })
}

struct Session {
    util: RemitoScannerUtil,
    input: Lines<StdinLock<'static>>,
    output_dir: PathBuf,
    format: ExportFormat,
    assume_yes: bool,
}

impl Session {
    fn status(&self, message: StatusMessage) {
        if message.is_error() {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    }

    fn render(&self) {
        print!("{}", self.util.table());
    }

    fn confirm(&mut self, message: StatusMessage) -> Result<bool, ServerError> {
        if self.assume_yes {
            return Ok(true);
        }
        print!("{} [s/N] ", message);
        io::stdout().flush().map_err(|e| ReadError::with_debug(&e))?;
        match self.input.next() {
            Some(line) => {
                let answer = line.map_err(|e| ReadError::with_debug(&e))?;
                Ok(matches!(
                    answer.trim().to_lowercase().as_str(),
                    "s" | "si" | "sí" | "y" | "yes"
                ))
            }
            None => Ok(false),
        }
    }

    /// Returns `false` once the session should end.
    fn handle(&mut self, command: Command<'_>) -> Result<bool, ServerError> {
        match command {
            Command::Scan(raw) => match self.util.scan(raw) {
                Ok(_) => {
                    self.render();
                    self.status(StatusMessage::RecordAdded);
                }
                Err(_) => self.status(StatusMessage::InvalidBarcode),
            },
            Command::List => self.render(),
            Command::Delete(None) => self.status(StatusMessage::DeleteUsage),
            Command::Delete(Some(position)) => {
                let deleted = position
                    .checked_sub(1)
                    .map(|index| self.util.delete(index));
                match deleted {
                    Some(Ok(_)) => {
                        self.render();
                        self.status(StatusMessage::RecordDeleted);
                    }
                    _ => self.status(StatusMessage::NoSuchRecord { position }),
                }
            }
            Command::Export => {
                if self.util.is_empty() {
                    self.status(StatusMessage::NothingToExport);
                    return Ok(true);
                }
                match self.util.export(&self.output_dir, self.format) {
                    Ok(path) => self.status(StatusMessage::Exported {
                        file_name: path.display().to_string(),
                    }),
                    Err(e) => {
                        warn!("export failed: {:?}", e);
                        self.status(StatusMessage::ExportFailed {
                            reason: e.to_string(),
                        })
                    }
                }
            }
            Command::Clear => {
                if self.util.is_empty() {
                    self.status(StatusMessage::NothingToClear);
                    return Ok(true);
                }
                let count = self.util.len();
                if self.confirm(StatusMessage::ConfirmClear { count })? {
                    self.util.clear()?;
                    self.render();
                    self.status(StatusMessage::Cleared);
                }
            }
            Command::Quit => {
                if self.confirm(StatusMessage::ConfirmClose)? {
                    return Ok(false);
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Unknown(line) => {
                println!("Comando desconocido: {}", line);
                println!("{}", HELP);
            }
        }
        Ok(true)
    }
}

fn main() -> Result<(), ServerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut session = Session {
        util: RemitoScannerUtil::new(),
        input: io::stdin().lock().lines(),
        output_dir: cli.output_dir,
        format: cli.format.into(),
        assume_yes: cli.yes,
    };

    println!("{}", HELP);
    session.render();

    while let Some(line) = session.input.next() {
        let line = line.map_err(|e| ReadError::with_debug(&e))?;
        if let Some(command) = parse_command(&line) {
            if !session.handle(command)? {
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_barcodes() {
        assert_eq!(parse_command("  ABCD0001  "), Some(Command::Scan("ABCD0001")));
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn commands() {
        assert_eq!(parse_command(":list"), Some(Command::List));
        assert_eq!(parse_command(":del 3"), Some(Command::Delete(Some(3))));
        assert_eq!(parse_command(":del x"), Some(Command::Delete(None)));
        assert_eq!(parse_command(":del"), Some(Command::Delete(None)));
        assert_eq!(parse_command(":export"), Some(Command::Export));
        assert_eq!(parse_command(":clear"), Some(Command::Clear));
        assert_eq!(parse_command(":q"), Some(Command::Quit));
        assert_eq!(parse_command(":nope"), Some(Command::Unknown(":nope")));
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["remito-scanner"]);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(matches!(cli.format, Fmt::Xlsx));
        assert!(!cli.yes);
    }
}
