use vfiles::{Position, VFile, VFiles};

fn main() -> vfiles::Result<()> {
    env_logger::init();

    let mut files = VFiles::new();

    // inserts `web/` and `web/js/` on the way
    files.set_vfile(VFile::file("web/js/app.js", "console.log('hi')"), Position::Append)?;

    // puts the manifest on top
    files.set_vfile(VFile::file("package.json", "{}"), Position::Prepend)?;

    // swaps the script for a typed one, in the same slot
    let index = files.position("web/js/app.js").unwrap_or_default();
    files.set_vfile(VFile::file("web/js/app.ts", "console.log('hi')"), Position::Replace(index))?;

    for file in &files {
        let kind = if file.is_directory() { "dir " } else { "file" };
        println!("{kind} {:<20} ext={:?}", file.path(), file.extname());
    }

    files.remove_tree("web");
    println!("{} entr(ies) left, revision {}", files.len(), files.revision());
    Ok(())
}
