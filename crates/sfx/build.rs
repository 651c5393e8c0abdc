//! Embeds the payload directory into the installer.
//!
//! Every entry of `SFX_PAYLOAD_DIR` (default: `payload/` next to this file),
//! except dotfiles, becomes one `sfx_archive::Resource` in a generated
//! `RESOURCES` table, sorted by name.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::PathBuf;

const PAYLOAD_DIR_ENV: &str = "SFX_PAYLOAD_DIR";
const DEFAULT_CONSOLE_ENV: &str = "SFX_DEFAULT_CONSOLE";

struct Entry {
    name: String,
    is_dir: bool,
    path: PathBuf,
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-env-changed={PAYLOAD_DIR_ENV}");
    println!("cargo:rerun-if-env-changed={DEFAULT_CONSOLE_ENV}");

    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR"));
    let payload_dir = env::var_os(PAYLOAD_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| manifest_dir.join("payload"));
    println!("cargo:rerun-if-changed={}", payload_dir.display());

    let mut entries = Vec::new();
    if let Ok(read_dir) = fs::read_dir(&payload_dir) {
        for entry in read_dir {
            let entry = entry?;
            let Ok(name) = entry.file_name().into_string() else {
                println!("cargo:warning=skipping non UTF-8 payload entry {:?}", entry.path());
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            entries.push(Entry {
                name,
                is_dir: entry.file_type()?.is_dir(),
                path: fs::canonicalize(entry.path())?,
            });
        }
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let mut code = String::from("pub static RESOURCES: &[sfx_archive::Resource<'static>] = &[\n");
    for entry in &entries {
        if entry.is_dir {
            let _ = writeln!(code, "    sfx_archive::Resource::dir({:?}),", entry.name);
        } else {
            let _ = writeln!(
                code,
                "    sfx_archive::Resource::file({:?}, include_bytes!({:?})),",
                entry.name,
                entry.path.display().to_string()
            );
        }
    }
    code.push_str("];\n");

    fs::write(out_dir.join("payload.rs"), code)
}
