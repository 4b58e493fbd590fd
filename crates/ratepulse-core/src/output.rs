//! Output emission: the JSON dataset and its JavaScript mirror.
//!
//! Both files are fully overwritten on every run: no merge, no diffing, no
//! backup. The JS file embeds the same array as a module-scope constant so a
//! script-based consumer can source it directly.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::RateRecord;

pub const JSON_FILE: &str = "rates_data.json";
pub const JS_FILE: &str = "data.js";

const JS_HEADER: &str = "\
// 세계 각국의 기준금리 데이터 (최신 업데이트)
// 출처: 각국 중앙은행 공식 API 및 발표
// 자동 업데이트: ratepulse 실행

";

/// Output failures carry the specific file involved; they are the one error
/// class this pipeline does not degrade around.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Paths written by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub js: PathBuf,
}

pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writes `rates_data.json` (2-space indent) and `data.js` (4-space
    /// indent inside the constant initializer). Non-ASCII stays literal in
    /// both; the downstream display reads the Korean names and flag glyphs
    /// as-is.
    pub fn write(&self, records: &[RateRecord]) -> Result<OutputPaths, OutputError> {
        let json_path = self.dir.join(JSON_FILE);
        let payload = serde_json::to_string_pretty(records)?;
        write_file(&json_path, &payload)?;

        let js_path = self.dir.join(JS_FILE);
        let script = render_js(records)?;
        write_file(&js_path, &script)?;

        Ok(OutputPaths {
            json: json_path,
            js: js_path,
        })
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), OutputError> {
    std::fs::write(path, contents).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn render_js(records: &[RateRecord]) -> Result<String, OutputError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    let literal = String::from_utf8(buf).expect("serde_json output is valid UTF-8");

    Ok(format!("{JS_HEADER}const baseRates = {literal};\n"))
}
