use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Once,
};

use crate::errors::Result;

const TMP_SUFFIX: &str = "tmp";
const DEFAULT_DIRECTIVE: &str = "hustlehub=info";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }

        let _ = fmt().with_env_filter(filter).try_init();
    });
}

/// Sibling path used while a file is being rewritten, e.g. `value.json.tmp`.
pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` next to `path` and renames it into place, so readers never see a partial file.
pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
