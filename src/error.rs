use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CronogramaError {
    #[error("Erro ao ler o arquivo {}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Erro ao interpretar TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Reason a line of the input file was rejected by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line has no `-` between subject and instructor.
    #[error("não contém separador '-'")]
    MissingSeparator,

    /// Nothing follows the separator.
    #[error("nome do professor ausente")]
    MissingInstructor,

    /// No integer in the instructor phrase, or it is zero, negative or above `i32::MAX`.
    #[error("duração inválida ou não positiva")]
    InvalidDuration,
}
