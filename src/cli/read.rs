use std::{
    io::BufReader,
    path::{Path, PathBuf},
};

use tern_sat::{builder::ParserInfo, context::Context, types::err::ErrorKind};

pub(super) enum ReadError {
    FailedToOpen(PathBuf),
    ParseError(ErrorKind),
    #[cfg(not(feature = "xz"))]
    XzUnsupported,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen(path) => write!(f, "Failed to open CNF file {path:?}."),
            Self::ParseError(ErrorKind::Parse(err)) => write!(f, "Parse error: {err}."),
            Self::ParseError(err) => write!(f, "Parse error: '{err:?}'."),
            #[cfg(not(feature = "xz"))]
            Self::XzUnsupported => write!(f, "Reading xz compressed files requires the xz feature."),
        }
    }
}

/// Reads a DIMACS formula to `context` from the file at `path`, or from stdin if no path is given, and writes a report.
pub(super) fn read_dimacs(path: Option<&Path>, context: &mut Context) -> Result<ParserInfo, ReadError> {
    let parse_report = match path {
        None => {
            println!("c Reading DIMACS formula from stdin");
            context.read_dimacs(std::io::stdin().lock())
        }

        Some(path) => {
            println!("c Reading DIMACS file from {path:?}");

            let file = match std::fs::File::open(path) {
                Ok(file) => file,
                Err(_) => return Err(ReadError::FailedToOpen(path.to_owned())),
            };

            match path.extension() {
                #[cfg(feature = "xz")]
                Some(extension) if extension == "xz" => {
                    context.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
                }

                #[cfg(not(feature = "xz"))]
                Some(extension) if extension == "xz" => return Err(ReadError::XzUnsupported),

                _ => context.read_dimacs(BufReader::new(&file)),
            }
        }
    };

    match parse_report {
        Ok(info) => {
            match info.expected_atoms {
                Some(count) => println!("c Expected atoms:   {count}"),
                None => println!("c No preamble was found."),
            }

            println!("c Atom count:       {}", info.added_atoms);

            if let Some(count) = info.expected_clauses {
                println!("c Expected clauses: {count}")
            }

            println!("c Clause count:     {}", info.added_clauses);

            Ok(info)
        }

        Err(e) => Err(ReadError::ParseError(e)),
    }
}
