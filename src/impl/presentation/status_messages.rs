use std::fmt;

/// User-facing status line shown after each action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    RecordAdded,
    InvalidBarcode,
    RecordDeleted,
    NoSuchRecord { position: usize },
    DeleteUsage,
    NothingToExport,
    Exported { file_name: String },
    ExportFailed { reason: String },
    NothingToClear,
    ConfirmClear { count: usize },
    Cleared,
    ConfirmClose,
}

impl StatusMessage {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            StatusMessage::InvalidBarcode
                | StatusMessage::NoSuchRecord { .. }
                | StatusMessage::DeleteUsage
                | StatusMessage::NothingToExport
                | StatusMessage::ExportFailed { .. }
                | StatusMessage::NothingToClear
        )
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::RecordAdded => write!(f, "✓ Registro agregado exitosamente"),
            StatusMessage::InvalidBarcode => {
                write!(f, "✖ Código de barras inválido. Verifique el formato.")
            }
            StatusMessage::RecordDeleted => write!(f, "Registro eliminado"),
            StatusMessage::NoSuchRecord { position } => {
                write!(f, "✖ No existe el registro {}", position)
            }
            StatusMessage::DeleteUsage => write!(f, "✖ Uso: :del N"),
            StatusMessage::NothingToExport => write!(f, "✖ No hay registros para exportar"),
            StatusMessage::Exported { file_name } => {
                write!(f, "✓ Archivo exportado: {}", file_name)
            }
            StatusMessage::ExportFailed { reason } => {
                write!(f, "✖ Error al exportar: {}", reason)
            }
            StatusMessage::NothingToClear => write!(f, "No hay registros para limpiar"),
            StatusMessage::ConfirmClear { count } => write!(
                f,
                "¿Está seguro de que desea eliminar todos los {} registros?",
                count
            ),
            StatusMessage::Cleared => write!(f, "Todos los registros han sido eliminados"),
            StatusMessage::ConfirmClose => write!(f, "¿Desea cerrar la aplicación?"),
        }
    }
}
