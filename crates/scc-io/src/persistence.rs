// ─────────────────────────────────────────────────────────────────────
// SCC Modeller — Scenario Persistence
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-layout plain-text scenario files.
//!
//! One value per line, sixteen lines: the name, then every numeric field
//! in [`Field::ALL`] order. Lengths are stored in millimetres and times in
//! years; the model sees SI units only after reading.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use scc_types::error::SccResult;
use scc_types::params::{Field, ParameterSet};
use tracing::{info, warn};

use crate::number::{parse_decimal, NumberFormat, ParsedNumber};

/// Lines in a complete scenario record.
pub const RECORD_LINES: usize = 1 + Field::ALL.len();

/// A scenario read from text plus the number of tokens that failed to parse.
#[derive(Debug, Clone)]
pub struct LoadedScenario {
    pub params: ParameterSet,
    pub parse_errors: usize,
}

/// Reader/writer for the scenario text record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioCodec {
    format: NumberFormat,
}

impl ScenarioCodec {
    /// Codec writing numbers with `format`. Files on disk use the default
    /// (decimal point); reading accepts either separator regardless.
    pub fn new(format: NumberFormat) -> Self {
        ScenarioCodec { format }
    }

    /// Read one record. With fewer than [`RECORD_LINES`] lines the result
    /// is a default scenario and no error is counted. A token that is not
    /// a number is counted and leaves its field missing. Bytes that are not
    /// UTF-8 (a name saved in a legacy code page) are replaced, not rejected.
    pub fn read<R: BufRead>(&self, reader: R) -> SccResult<LoadedScenario> {
        let lines = reader
            .split(b'\n')
            .map(|line| line.map(|bytes| decode_line(&bytes)))
            .collect::<Result<Vec<_>, _>>()?;
        let mut params = ParameterSet::default();
        let mut parse_errors = 0;

        if lines.len() >= RECORD_LINES {
            params.name = lines[0].trim().to_string();
            for (field, line) in Field::ALL.into_iter().zip(&lines[1..]) {
                let value = match parse_decimal(line) {
                    ParsedNumber::Value(v) => Some(v),
                    ParsedNumber::Empty => None,
                    ParsedNumber::Invalid => {
                        parse_errors += 1;
                        None
                    }
                };
                params.set_display_value(field, value);
            }
        }

        Ok(LoadedScenario {
            params,
            parse_errors,
        })
    }

    /// Write one record, numbers rounded to each field's precision. Line
    /// breaks inside the name become spaces so the record keeps its layout.
    pub fn write<W: Write>(&self, params: &ParameterSet, mut writer: W) -> SccResult<()> {
        writeln!(writer, "{}", params.name.replace(['\r', '\n'], " "))?;
        for field in Field::ALL {
            let text = self
                .format
                .format_optional(params.display_value(field), field.precision());
            writeln!(writer, "{text}")?;
        }
        Ok(())
    }
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Load a scenario file. `source_file` is set to the absolute path even
/// when the file is too short to carry a record.
pub fn load_from_file(path: impl AsRef<Path>) -> SccResult<LoadedScenario> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut loaded = ScenarioCodec::default().read(reader)?;
    loaded.params.source_file = std::path::absolute(path)?.to_string_lossy().into_owned();

    info!(path = %path.display(), name = %loaded.params.name, "scenario loaded");
    if loaded.parse_errors > 0 {
        warn!(
            path = %path.display(),
            parse_errors = loaded.parse_errors,
            "scenario file contains unparsable numbers"
        );
    }
    Ok(loaded)
}

/// Save a scenario file and remember where it went.
pub fn save_to_file(params: &mut ParameterSet, path: impl AsRef<Path>) -> SccResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    ScenarioCodec::default().write(params, &mut writer)?;
    writer.flush()?;
    params.source_file = std::path::absolute(path)?.to_string_lossy().into_owned();

    info!(path = %path.display(), name = %params.name, "scenario saved");
    Ok(())
}
