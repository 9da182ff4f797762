//! Hard-coded limits, element ids, and UI copy shared by both controllers.

// ── Limits ──────────────────────────────────────────────────────

/// Largest upload accepted client-side, in bytes (5 MiB, inclusive).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Only dropped files with this suffix are accepted (compared case-insensitively).
pub const ACCEPTED_DROP_EXTENSION: &str = ".txt";

/// Delay before the copy control reverts from its "copied" state.
pub const COPY_REVERT_DELAY_MS: u32 = 2000;

// ── Default element ids (server template contract) ──────────────

pub const FILE_INPUT_ID: &str = "arquivo";
pub const DROP_AREA_ID: &str = "fileUploadArea";
pub const FILE_INFO_ID: &str = "fileInfo";
pub const SUBMIT_BUTTON_ID: &str = "submitBtn";
pub const UPLOAD_FORM_ID: &str = "uploadForm";
pub const FILE_NAME_ID: &str = "fileName";
pub const FILE_SIZE_ID: &str = "fileSize";

pub const COPY_BUTTON_ID: &str = "copiarFaltantes";
pub const MISSING_LIST_ID: &str = "listaFaltantes";
pub const TOAST_ID: &str = "toastCopia";
pub const TOOLTIP_SELECTOR: &str = "[data-bs-toggle=\"tooltip\"]";
pub const PAYLOAD_ATTRIBUTE: &str = "data-lista";

/// `window` property the upload template's inline `onclick` calls.
pub const PICKER_GLOBAL: &str = "selecionarArquivo";

/// Set on a control once a controller has bound its listeners.
pub const MOUNTED_ATTRIBUTE: &str = "data-analyzer-mounted";

// ── Drop zone styles ────────────────────────────────────────────

pub const DROP_ACTIVE_BORDER: &str = "#28a745";
pub const DROP_ACTIVE_BACKGROUND: &str = "rgba(40, 167, 69, 0.1)";
pub const DROP_IDLE_BORDER: &str = "#007bff";
pub const DROP_IDLE_BACKGROUND: &str = "rgba(0, 123, 255, 0.05)";

// ── Panel and button classes ────────────────────────────────────

pub const PANEL_INFO_CLASS: &str = "alert alert-info";
pub const PANEL_ERROR_CLASS: &str = "alert alert-danger";
pub const COPY_IDLE_CLASS: &str = "btn-light";
pub const COPY_DONE_CLASS: &str = "btn-success";

// ── User-facing copy (pt-BR, matches the server templates) ──────

pub const OVERSIZE_HTML: &str =
    r#"<i class="bi bi-exclamation-triangle"></i> <strong>Erro:</strong> Arquivo muito grande (máximo 5MB)"#;
pub const PROCESSING_HTML: &str = r#"<i class="bi bi-hourglass-split"></i> Processando..."#;
pub const SIZE_LABEL_PREFIX: &str = "Tamanho:";
pub const SELECTED_FILE_LABEL: &str = "Arquivo selecionado:";
pub const COPIED_HTML: &str = r#"<i class="bi bi-check"></i> Copiado!"#;

pub const WRONG_TYPE_ALERT: &str = "Por favor, selecione apenas arquivos .txt";
pub const NO_FILE_ALERT: &str = "Por favor, selecione um arquivo antes de continuar.";
pub const COPY_FAILED_ALERT: &str = "Erro ao copiar. Tente selecionar e copiar manualmente.";
