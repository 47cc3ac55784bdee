//! Reading and parsing of resolved configuration files.
//!
//! Responsibilities:
//! - Read each resolved path, or standard input for `-`, into bytes.
//! - Hand the bytes to a `DocumentParser` and tag the result with its filename.
//!
//! Does NOT handle:
//! - Choosing which paths to read (see paths.rs).
//!
//! Invariants:
//! - Fails fast on the first read or parse error; no partial results.
//! - Parse failures stay distinct from read failures (`DocumentParse`).
//! - Output order matches input order.

use std::io::Read;

use super::error::ConfigError;
use crate::boundary::DocumentParser;
use crate::types::{ConfigFile, ConfigPath};

/// Read and parse every path in order.
///
/// `stdin` is consumed for each `-` entry; a second `-` sees end of input.
pub fn read_config_files(
    paths: &[ConfigPath],
    stdin: &mut dyn Read,
    parser: &dyn DocumentParser,
) -> Result<Vec<ConfigFile>, ConfigError> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = match path {
            ConfigPath::Stdin => {
                let mut buf = Vec::new();
                stdin
                    .read_to_end(&mut buf)
                    .map_err(ConfigError::StdinRead)?;
                buf
            }
            ConfigPath::File(file) => {
                std::fs::read(file).map_err(|e| ConfigError::ConfigFileRead {
                    path: file.clone(),
                    source: e,
                })?
            }
        };

        let filename = path.to_string();
        let document = parser
            .parse(&bytes)
            .map_err(|source| ConfigError::DocumentParse {
                filename: filename.clone(),
                source,
            })?;
        tracing::debug!(filename = %filename, "Parsed config file");
        files.push(ConfigFile { filename, document });
    }
    Ok(files)
}
