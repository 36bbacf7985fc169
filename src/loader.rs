//! Leitura do arquivo de aulas (`aulas.txt`).
//!
//! Cada linha significativa tem a forma `<aula> - <Prof. Nome> <duração>`.
//! Linhas inválidas são devolvidas em [`LoadReport::rejected`] com o número
//! da linha (começando em 1), para que o chamador as reporte.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CronogramaError, LineError};
use crate::schedule::ClassRecord;

// Primeiro inteiro (possivelmente negativo) da frase do professor.
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+").expect("valid duration regex"));

/// Uma linha descartada pelo carregador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// Número da linha no arquivo, começando em 1.
    pub line_number: usize,
    /// Conteúdo da linha já sem espaços nas pontas.
    pub content: String,
    pub reason: LineError,
}

/// Resultado da leitura: aulas válidas na ordem do arquivo e linhas rejeitadas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub classes: Vec<ClassRecord>,
    pub rejected: Vec<RejectedLine>,
}

/// Carregador de aulas a partir de texto.
pub struct ClassLoader;

impl ClassLoader {
    /// Lê e interpreta o arquivo em `path`.
    ///
    /// Falha apenas se o arquivo não puder ser lido; linhas inválidas não
    /// interrompem a leitura.
    pub fn load(path: impl AsRef<Path>) -> Result<LoadReport, CronogramaError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| CronogramaError::InputUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::load_from_str(&contents))
    }

    /// Interpreta o conteúdo já lido, linha a linha.
    pub fn load_from_str(contents: &str) -> LoadReport {
        let mut report = LoadReport::default();

        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok(class) => report.classes.push(class),
                Err(reason) => report.rejected.push(RejectedLine {
                    line_number: index + 1,
                    content: line.to_string(),
                    reason,
                }),
            }
        }

        report
    }
}

/// Interpreta uma única linha não vazia.
///
/// O nome do professor é a segunda palavra após o separador (a primeira
/// costuma ser um título como `Prof.`); com uma só palavra, ela é o nome.
/// Assim, `Prof. Ana Paula Souza` vira `Ana`.
pub fn parse_line(line: &str) -> Result<ClassRecord, LineError> {
    let (subject, phrase) = line.split_once('-').ok_or(LineError::MissingSeparator)?;
    let subject = subject.trim();
    let phrase = phrase.trim();

    if phrase.is_empty() {
        return Err(LineError::MissingInstructor);
    }

    let words: Vec<&str> = phrase.split_whitespace().collect();
    let instructor = if words.len() >= 2 { words[1] } else { words[0] };

    let duration = DURATION_RE
        .find(phrase)
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .filter(|d| *d > 0)
        .and_then(|d| u32::try_from(d).ok())
        .ok_or(LineError::InvalidDuration)?;

    ClassRecord::new(subject, instructor, duration).ok_or(LineError::InvalidDuration)
}
