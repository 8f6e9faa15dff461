use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Result of one copyright-enforcement run over the source tree.
#[derive(Debug, Serialize)]
pub struct CopyrightReport {
    pub root: String,
    /// Paths rewritten (or, in check mode, found non-compliant), walk order.
    pub updated: Vec<String>,
    pub count: usize,
    pub check_only: bool,
}

#[derive(Debug, Serialize)]
pub struct PackageReport {
    pub archive: String,
    /// Archive entry names, `/`-separated, relative to the staged directory.
    pub files: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ModuleReport {
    pub module: String,
    /// Files written under `source/<module>/`.
    pub created: Vec<String>,
    pub project_file: String,
}
