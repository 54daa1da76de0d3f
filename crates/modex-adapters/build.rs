//! Packs `assets/starter/` into a zip that gets embedded in the binary.
//!
//! Entries are added in sorted order so the archive bytes are reproducible.

use std::env;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use walkdir::WalkDir;
use zip::{CompressionMethod, ZipWriter, write::FileOptions};

fn main() {
    println!("cargo:rerun-if-changed=assets/starter");

    let starter_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/starter");
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let target = Path::new(&out_dir).join("starter.zip");

    let file = File::create(&target).expect("create starter.zip");
    let mut writer = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(&starter_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        let rel = path
            .strip_prefix(&starter_dir)
            .expect("entry under starter dir");
        if rel.as_os_str().is_empty() {
            continue;
        }
        let name = rel.to_string_lossy().replace('\\', "/");

        if entry.file_type().is_dir() {
            writer.add_directory(name, options).expect("add directory");
        } else {
            writer.start_file(name, options).expect("start file");
            let mut content = Vec::new();
            File::open(path)
                .expect("open starter file")
                .read_to_end(&mut content)
                .expect("read starter file");
            writer.write_all(&content).expect("write starter entry");
        }
    }

    writer.finish().expect("finish starter.zip");
}
